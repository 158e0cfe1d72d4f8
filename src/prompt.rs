//! User input and interaction handling.
//! Collecting variable values blocks on the terminal, so the prompt sits
//! behind a trait that tests and non-interactive callers can replace.

use crate::config::CustomVariable;
use crate::error::Result;
use dialoguer::Input;

/// Source of raw answers for custom variables.
pub trait Prompter {
    /// Asks for the raw text value of `variable`.
    ///
    /// # Arguments
    /// * `variable` - The variable being collected
    /// * `default` - Text to pre-fill, if the template declares a default
    fn ask(&self, variable: &CustomVariable, default: Option<String>) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

/// Text shown for a variable: its description, or a generic request.
pub fn prompt_text(variable: &CustomVariable) -> String {
    match &variable.description {
        Some(description) => format!("{description} ({}, {})", variable.name, variable.kind),
        None => format!("Enter value for {} ({})", variable.name, variable.kind),
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, variable: &CustomVariable, default: Option<String>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt_text(variable)).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default);
        }
        Ok(input.interact_text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::VariableType;

    #[test]
    fn test_prompt_text() {
        let mut variable = CustomVariable::new("version", VariableType::Int);
        assert_eq!(prompt_text(&variable), "Enter value for version (int)");

        variable.description = Some("Initial version".to_string());
        assert_eq!(prompt_text(&variable), "Initial version (version, int)");
    }
}
