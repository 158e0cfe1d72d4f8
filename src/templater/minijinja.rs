//! MiniJinja-based template rendering engine.

use super::{filters, Templater};
use crate::error::{Error, Result};
use ::minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use log::debug;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Suffix marking template files for the full engine, e.g. `app.py.template`.
pub const DEFAULT_SUFFIX: &str = ".template";

const INLINE_TEMPLATE_NAME: &str = "inline";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").unwrap());

/// Full templating engine with a strict undefined policy.
///
/// Referencing a variable that is not in the context is an error rather than
/// an empty string. Output is never auto-escaped, whatever the file name.
pub struct MiniJinjaTemplater {
    env: Environment<'static>,
    suffix: Option<String>,
}

impl MiniJinjaTemplater {
    /// Creates a new templater with the default `.template` suffix.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        filters::register_filters(&mut env);
        Self { env, suffix: Some(DEFAULT_SUFFIX.to_string()) }
    }

    /// Replaces the template-file suffix; `None` disables suffix stripping.
    pub fn with_suffix(mut self, suffix: Option<String>) -> Self {
        self.suffix = suffix;
        self
    }

    /// Names the variable behind an undefined-value error.
    ///
    /// Candidates are the template's undeclared names that are neither bound in
    /// `context` nor engine globals. The expression the error points at picks
    /// among them; without a span, a lone candidate or the first candidate in
    /// source order is used.
    fn missing_variable(
        &self,
        err: &::minijinja::Error,
        name: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Option<String> {
        let env = Environment::new();
        let tmpl = env.template_from_named_str(name, template).ok()?;
        let candidates: HashSet<String> = tmpl
            .undeclared_variables(false)
            .into_iter()
            .filter(|var| context.get(var).is_none() && !self.env.globals().any(|(name, _)| name == var.as_str()))
            .collect();

        let first_candidate = |text: &str| {
            IDENTIFIER
                .find_iter(text)
                .map(|m| m.as_str())
                .find(|ident| candidates.contains(*ident))
                .map(str::to_string)
        };

        if let Some(expr) = err.range().and_then(|range| template.get(range)) {
            if let Some(found) = first_candidate(expr) {
                return Some(found);
            }
        }
        if candidates.len() == 1 {
            return candidates.iter().next().cloned();
        }
        first_candidate(template)
    }
}

impl Default for MiniJinjaTemplater {
    fn default() -> Self {
        MiniJinjaTemplater::new()
    }
}

impl Templater for MiniJinjaTemplater {
    fn name(&self) -> &str {
        "jinja2"
    }

    fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MissingVariable` if the template references an unbound name
    /// * `Error::RenderError` for syntax and other engine errors
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        filename: Option<&str>,
    ) -> Result<String> {
        let name = filename.unwrap_or(INLINE_TEMPLATE_NAME);
        let result = self.env.render_named_str(name, template, context);

        result.map_err(|err| {
            if err.kind() != ErrorKind::UndefinedError {
                return Error::RenderError(err);
            }
            debug!("Undefined value while rendering '{name}': {err}");
            match self.missing_variable(&err, name, template, context) {
                Some(variable) => Error::MissingVariable { name: variable },
                None => Error::RenderError(err),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_with_control_flow() {
        let templater = MiniJinjaTemplater::new();
        let context = json!({"deps": ["serde", "log"], "name": "demo"});
        let result = templater
            .render("{% for d in deps %}{{ d }};{% endfor %}{{ name }}", &context, None)
            .unwrap();
        assert_eq!(result, "serde;log;demo");
    }

    #[test]
    fn test_no_html_escaping() {
        let templater = MiniJinjaTemplater::new();
        let context = json!({"tag": "<b>"});
        let result = templater.render("{{ tag }}", &context, Some("index.html")).unwrap();
        assert_eq!(result, "<b>");
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        let templater = MiniJinjaTemplater::new();
        let result = templater.render("x\n", &json!({}), None).unwrap();
        assert_eq!(result, "x\n");
    }

    #[test]
    fn test_missing_variable_skips_globals() {
        let templater = MiniJinjaTemplater::new();
        let result = templater.render("{{ range(2) | join }}{{ zzz }}", &json!({}), None);
        assert!(matches!(result, Err(Error::MissingVariable { name }) if name == "zzz"));
    }

    #[test]
    fn test_missing_variable_ignores_skipped_branches() {
        let templater = MiniJinjaTemplater::new();
        let result = templater.render(
            "{% if flag is defined %}{{ aaa }}{% endif %}{{ zzz }}",
            &json!({}),
            Some("README.md"),
        );
        assert!(matches!(result, Err(Error::MissingVariable { name }) if name == "zzz"));
    }

    #[test]
    fn test_syntax_error_is_render_error() {
        let templater = MiniJinjaTemplater::new();
        let result = templater.render("{% if %}", &json!({}), None);
        assert!(matches!(result, Err(Error::RenderError(_))));
    }
}
