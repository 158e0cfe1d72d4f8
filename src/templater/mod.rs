//! Pluggable rendering engines.
//!
//! The module is structured as:
//! - `minijinja`: full templating language with strict undefined handling
//! - `substitution`: minimal `${name}` substitution that never fails on unknown names
//! - `filters`: extra filters registered with the full engine

pub mod filters;
pub mod minijinja;
pub mod substitution;

use crate::error::{Error, Result};

pub use self::minijinja::MiniJinjaTemplater;
pub use self::substitution::SubstitutionTemplater;

/// Trait for template rendering engines.
///
/// Rendering is a pure function of the template text and the context.
pub trait Templater {
    /// Registry name of the engine.
    fn name(&self) -> &str;

    /// Template-file suffix stripped from output file names, if any.
    fn suffix(&self) -> Option<&str>;

    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - JSON object of variables
    /// * `filename` - Target file name, when rendering document content
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        filename: Option<&str>,
    ) -> Result<String>;

    /// Removes the configured suffix from a rendered file name.
    ///
    /// Returns `None` when no suffix is configured, the name does not end with
    /// it, or stripping would leave an empty name.
    fn strip_suffix<'a>(&self, filename: &'a str) -> Option<&'a str> {
        let suffix = self.suffix().filter(|s| !s.is_empty())?;
        filename.strip_suffix(suffix).filter(|stem| !stem.is_empty())
    }
}

const TEMPLATERS: &[(&str, &str)] = &[
    ("jinja2", "jinja2"),
    ("jinja", "jinja2"),
    ("minijinja", "jinja2"),
    ("pystring", "pystring"),
    ("string", "pystring"),
];

/// Names accepted by [`get_templater`].
pub fn available_templaters() -> Vec<&'static str> {
    TEMPLATERS.iter().map(|(name, _)| *name).collect()
}

/// Looks up a templater by name.
///
/// # Arguments
/// * `name` - Engine name or alias
/// * `suffix` - Overrides the engine's default template-file suffix when set
///
/// # Errors
/// * `Error::UnknownTemplater` if no engine is registered under `name`
pub fn get_templater(name: &str, suffix: Option<&str>) -> Result<Box<dyn Templater>> {
    let canonical = TEMPLATERS
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .ok_or_else(|| Error::UnknownTemplater {
            name: name.to_string(),
            available: available_templaters().join(", "),
        })?;

    let templater: Box<dyn Templater> = match (canonical, suffix) {
        ("jinja2", None) => Box::new(MiniJinjaTemplater::new()),
        ("jinja2", Some(suffix)) => {
            Box::new(MiniJinjaTemplater::new().with_suffix(Some(suffix.to_string())))
        }
        (_, suffix) => {
            Box::new(SubstitutionTemplater::new().with_suffix(suffix.map(str::to_string)))
        }
    };
    Ok(templater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_templater_by_alias() {
        assert_eq!(get_templater("jinja", None).unwrap().name(), "jinja2");
        assert_eq!(get_templater("string", None).unwrap().name(), "pystring");
    }

    #[test]
    fn test_unknown_templater() {
        match get_templater("mustache", None) {
            Err(Error::UnknownTemplater { name, available }) => {
                assert_eq!(name, "mustache");
                assert!(available.contains("pystring"));
            }
            _ => panic!("Expected UnknownTemplater"),
        }
    }

    #[test]
    fn test_suffix_override() {
        let templater = get_templater("pystring", Some(".tpl")).unwrap();
        assert_eq!(templater.strip_suffix("app.py.tpl"), Some("app.py"));
        assert_eq!(templater.strip_suffix("app.py"), None);
        assert_eq!(templater.strip_suffix(".tpl"), None);
    }
}
