//! Configuration handling for skaf.
//! This module loads the `template_properties.yaml` file that accompanies every
//! template and holds the run-wide settings threaded into the scaffold engine.

use crate::constants::{DEFAULT_TEMPLATER, DEFAULT_TEMPLATE_DIR, TEMPLATE_PROPERTIES_FILE};
use crate::error::{Error, Result};
use crate::variables::VariableType;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Settings for one scaffold engine, resolved once by the caller.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Root of the filesystem template library.
    pub template_dir: PathBuf,
    /// Templater used when a template does not declare one.
    pub default_templater: String,
    /// Overrides the template's `auto_use_defaults` when set.
    pub auto_use_defaults: Option<bool>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            default_templater: DEFAULT_TEMPLATER.to_string(),
            auto_use_defaults: None,
        }
    }
}

/// A named, typed input declared by a template.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CustomVariable {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: VariableType,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CustomVariable {
    pub fn new<S: Into<String>>(name: S, kind: VariableType) -> Self {
        Self { name: name.into(), kind, default: None, description: None }
    }
}

fn default_auto_use_defaults() -> bool {
    true
}

/// Declarative description of a template, read from its properties file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TemplateProperties {
    /// Engine name; falls back to [`ScaffoldConfig::default_templater`].
    #[serde(default)]
    pub templater: Option<String>,
    /// Overrides the templater's own template-file suffix.
    #[serde(default)]
    pub template_suffix: Option<String>,
    /// Use declared defaults without asking.
    #[serde(default = "default_auto_use_defaults")]
    pub auto_use_defaults: bool,
    #[serde(default)]
    pub custom_variables: Vec<CustomVariable>,
    /// Legacy location for default values, keyed by variable name.
    #[serde(default)]
    pub defaults: IndexMap<String, serde_json::Value>,
}

impl Default for TemplateProperties {
    fn default() -> Self {
        Self {
            templater: None,
            template_suffix: None,
            auto_use_defaults: true,
            custom_variables: Vec::new(),
            defaults: IndexMap::new(),
        }
    }
}

impl TemplateProperties {
    /// Parses properties from YAML text.
    ///
    /// An empty document yields the default properties.
    ///
    /// # Errors
    /// * `Error::PropertiesError` if the YAML is malformed or has the wrong shape
    /// * `Error::DuplicateVariable` if two custom variables share a name
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let properties: Option<TemplateProperties> = serde_yaml::from_str(content)?;
        let properties = properties.unwrap_or_default();
        properties.validate()?;
        Ok(properties)
    }

    /// Reads `template_properties.yaml` from a template root.
    pub fn load<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let path = template_root.as_ref().join(TEMPLATE_PROPERTIES_FILE);
        debug!("Loading template properties from {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for variable in &self.custom_variables {
            if !seen.insert(variable.name.as_str()) {
                return Err(Error::DuplicateVariable { name: variable.name.clone() });
            }
        }
        Ok(())
    }

    /// Default for a declared variable: its own `default`, then the `defaults` map.
    pub fn default_for<'a>(&'a self, variable: &'a CustomVariable) -> Option<&'a serde_json::Value> {
        variable
            .default
            .as_ref()
            .or_else(|| self.defaults.get(&variable.name))
            .filter(|value| !value.is_null())
    }
}
