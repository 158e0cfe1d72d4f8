//! Templates stored as directories on disk.

use super::{Document, Documents, Template};
use crate::config::TemplateProperties;
use crate::constants::{TEMPLATE_CONTENT_DIR, TEMPLATE_PROPERTIES_FILE};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// A template directory holding `template_properties.yaml` and a `template/` tree.
#[derive(Debug)]
pub struct FilesystemTemplate {
    name: String,
    root: PathBuf,
    properties: TemplateProperties,
}

impl FilesystemTemplate {
    /// Loads the template rooted at `root`.
    ///
    /// # Errors
    /// * `Error::InvalidTemplate` if the properties file or the content directory is missing
    /// * `Error::PropertiesError` if the properties file cannot be parsed
    pub fn load<S: Into<String>, P: Into<PathBuf>>(name: S, root: P) -> Result<Self> {
        let name = name.into();
        let root = root.into();

        if !root.join(TEMPLATE_PROPERTIES_FILE).is_file() {
            return Err(Error::InvalidTemplate {
                name,
                reason: format!("missing {TEMPLATE_PROPERTIES_FILE}"),
            });
        }
        if !root.join(TEMPLATE_CONTENT_DIR).is_dir() {
            return Err(Error::InvalidTemplate {
                name,
                reason: format!("missing '{TEMPLATE_CONTENT_DIR}' directory"),
            });
        }

        let properties = TemplateProperties::load(&root)?;
        debug!("Loaded template '{}' from {}", name, root.display());
        Ok(Self { name, root, properties })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn content_root(&self) -> PathBuf {
        self.root.join(TEMPLATE_CONTENT_DIR)
    }
}

/// Joins the components of a relative path with `/`.
fn to_template_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

impl Template for FilesystemTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn properties(&self) -> &TemplateProperties {
        &self.properties
    }

    fn documents(&self) -> Documents<'_> {
        let content_root = self.content_root();
        let walker = WalkDir::new(&content_root).sort_by_file_name().into_iter();

        Box::new(walker.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(Error::WalkError(e))),
            };
            if !entry.file_type().is_file() {
                return None;
            }
            let relative = entry.path().strip_prefix(&content_root).ok()?;
            let path = to_template_path(relative);
            debug!("Reading template document: {path}");
            Some(
                std::fs::read_to_string(entry.path())
                    .map(|content| Document { path, content })
                    .map_err(Error::IoError),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_template_path() {
        let path: PathBuf = ["src", "{{ project_name }}", "main.py"].iter().collect();
        assert_eq!(to_template_path(&path), "src/{{ project_name }}/main.py");
    }
}
