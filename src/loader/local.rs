use crate::constants::TEMPLATE_PROPERTIES_FILE;
use crate::error::{Error, Result};
use crate::loader::{TemplateRegistry, TemplateSource};
use crate::template::{FilesystemTemplate, Template};
use log::debug;
use std::path::{Path, PathBuf};

/// Registry over a template library directory: every subdirectory holding a
/// properties file is a template named after the subdirectory.
#[derive(Debug, Clone)]
pub struct FilesystemRegistry {
    root: PathBuf,
}

impl FilesystemRegistry {
    /// Creates a new FilesystemRegistry instance.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_plain_name(name: &str) -> bool {
        !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
    }
}

impl TemplateRegistry for FilesystemRegistry {
    fn source(&self) -> TemplateSource {
        TemplateSource::FileSystem(self.root.clone())
    }

    fn resolve(&self, name: &str) -> Result<Box<dyn Template>> {
        let template_root = self.root.join(name);
        if !Self::is_plain_name(name) || !template_root.is_dir() {
            return Err(Error::TemplateNotFound {
                name: name.to_string(),
                root: self.root.display().to_string(),
            });
        }

        debug!("Resolving template '{}' from {}", name, template_root.display());
        Ok(Box::new(FilesystemTemplate::load(name, template_root)?))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().join(TEMPLATE_PROPERTIES_FILE).is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
