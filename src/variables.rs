//! Variable collection for templates.
//! Turns the custom variables declared in template properties into the final,
//! type-coerced variable mapping used for rendering.

use crate::config::{CustomVariable, TemplateProperties};
use crate::constants::PROJECT_NAME_VARIABLE;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

/// Final variable mapping handed to the templater.
pub type Variables = IndexMap<String, Value>;

/// Declared type of a custom variable, selecting its caster.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    #[default]
    Str,
    Int,
    Float,
    Bool,
    List,
    Dict,
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VariableType::Str => "str",
            VariableType::Int => "int",
            VariableType::Float => "float",
            VariableType::Bool => "bool",
            VariableType::List => "list",
            VariableType::Dict => "dict",
        };
        f.write_str(name)
    }
}

fn parse_bool(raw: &str) -> std::result::Result<bool, String> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "no" | "n" | "off" | "0" => Ok(false),
        other => Err(format!("'{other}' is not a boolean")),
    }
}

fn split_items(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        Vec::new()
    } else {
        raw.split(',').map(str::trim).collect()
    }
}

impl VariableType {
    /// Casts raw text (interactive input or a string default) to this type.
    ///
    /// `list` splits on commas and trims each item; `dict` additionally splits
    /// every item on `=` into a key and a value.
    pub fn cast_str(&self, raw: &str) -> std::result::Result<Value, String> {
        match self {
            VariableType::Str => Ok(Value::String(raw.to_string())),
            VariableType::Int => raw
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|e| e.to_string()),
            VariableType::Float => {
                let parsed = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
                serde_json::Number::from_f64(parsed)
                    .map(Value::Number)
                    .ok_or_else(|| format!("{parsed} is not a finite number"))
            }
            VariableType::Bool => parse_bool(raw).map(Value::Bool),
            VariableType::List => Ok(Value::Array(
                split_items(raw).into_iter().map(|item| Value::String(item.to_string())).collect(),
            )),
            VariableType::Dict => {
                let mut map = serde_json::Map::new();
                for item in split_items(raw) {
                    let mut parts = item.split('=');
                    match (parts.next(), parts.next(), parts.next()) {
                        (Some(key), Some(value), None) => {
                            map.insert(key.trim().to_string(), Value::String(value.trim().to_string()));
                        }
                        _ => return Err(format!("'{item}' is not a key=value pair")),
                    }
                }
                Ok(Value::Object(map))
            }
        }
    }

    /// Casts an already-parsed default value from the properties file.
    pub fn cast_value(&self, value: &Value) -> std::result::Result<Value, String> {
        match (self, value) {
            (_, Value::String(raw)) => self.cast_str(raw),
            (VariableType::Str, Value::Number(n)) => Ok(Value::String(n.to_string())),
            (VariableType::Str, Value::Bool(b)) => Ok(Value::String(b.to_string())),
            (VariableType::Int, Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(value.clone()),
            (VariableType::Float, Value::Number(n)) => n
                .as_f64()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| format!("{n} is not a finite number")),
            (VariableType::Bool, Value::Bool(_)) => Ok(value.clone()),
            (VariableType::List, Value::Array(_)) => Ok(value.clone()),
            (VariableType::Dict, Value::Object(_)) => Ok(value.clone()),
            _ => Err(format!("expected {self}, found {value}")),
        }
    }
}

fn default_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            items.iter().map(default_as_text).collect::<Vec<_>>().join(", ")
        }
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{k}={}", default_as_text(v)))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn cast_default(variable: &CustomVariable, value: &Value) -> Result<Value> {
    variable.kind.cast_value(value).map_err(|reason| Error::InvalidDefault {
        variable: variable.name.clone(),
        value: value.to_string(),
        kind: variable.kind.to_string(),
        reason,
    })
}

fn ask(prompter: &dyn Prompter, variable: &CustomVariable, default: Option<String>) -> Result<Value> {
    let raw = prompter.ask(variable, default)?;
    variable.kind.cast_str(&raw).map_err(|reason| Error::InvalidUserInput {
        variable: variable.name.clone(),
        value: raw,
        kind: variable.kind.to_string(),
        reason,
    })
}

/// Collects the value of every declared custom variable.
///
/// Variables are processed in declaration order. A declared default is cast
/// and used directly when `auto_use_defaults` is set; otherwise the user is
/// prompted, with the default pre-filled when there is one. Entries of the
/// legacy `defaults` map that match no declared variable are bound as is.
/// Finally `project_name` is bound to the sanitized name and always wins over
/// a declared variable of the same name.
///
/// # Errors
/// * `Error::InvalidDefault` if a declared default does not fit its type
/// * `Error::InvalidUserInput` if an entered value does not fit its type
pub fn collect_variables(
    properties: &TemplateProperties,
    project_name: &str,
    prompter: &dyn Prompter,
    auto_use_defaults: bool,
) -> Result<Variables> {
    let mut variables = Variables::new();

    for variable in &properties.custom_variables {
        let value = match properties.default_for(variable) {
            Some(default) => {
                let default = cast_default(variable, default)?;
                if auto_use_defaults {
                    default
                } else {
                    ask(prompter, variable, Some(default_as_text(&default)))?
                }
            }
            None => ask(prompter, variable, None)?,
        };
        debug!("Variable '{}' = {}", variable.name, value);
        variables.insert(variable.name.clone(), value);
    }

    for (name, value) in &properties.defaults {
        if !variables.contains_key(name) {
            variables.insert(name.clone(), value.clone());
        }
    }

    if variables.contains_key(PROJECT_NAME_VARIABLE) {
        warn!(
            "Template declares '{PROJECT_NAME_VARIABLE}'; it is overridden by the sanitized project name '{project_name}'"
        );
    }
    variables.insert(PROJECT_NAME_VARIABLE.to_string(), Value::String(project_name.to_string()));

    Ok(variables)
}

/// Builds the rendering context from collected variables.
pub fn to_context(variables: &Variables) -> Value {
    Value::Object(variables.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
}
