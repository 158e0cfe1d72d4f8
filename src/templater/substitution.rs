//! Minimal `${name}` substitution engine.

use super::Templater;
use crate::error::Result;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\})")
        .unwrap()
});

/// Substitutes `$name` and `${name}` placeholders; `$$` yields a literal `$`.
///
/// Substitution is lenient: a placeholder naming an unknown variable, or one
/// that is malformed, is left in the output untouched.
#[derive(Debug, Default, Clone)]
pub struct SubstitutionTemplater {
    suffix: Option<String>,
}

impl SubstitutionTemplater {
    pub fn new() -> Self {
        Self { suffix: None }
    }

    pub fn with_suffix(mut self, suffix: Option<String>) -> Self {
        self.suffix = suffix;
        self
    }
}

/// Text form of a variable value inside substituted output.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Templater for SubstitutionTemplater {
    fn name(&self) -> &str {
        "pystring"
    }

    fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        _filename: Option<&str>,
    ) -> Result<String> {
        let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
            if caps.name("escaped").is_some() {
                return "$".to_string();
            }
            let name = caps.name("named").or_else(|| caps.name("braced")).map(|m| m.as_str());
            match name.and_then(|name| context.get(name)) {
                Some(value) => display_value(value),
                None => caps[0].to_string(),
            }
        });
        Ok(rendered.into_owned())
    }
}
