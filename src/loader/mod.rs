//! Template registries resolving a template name to a [`Template`].

pub mod local;
pub mod memory;

use crate::error::Result;
use crate::template::Template;
use std::path::PathBuf;

pub use local::FilesystemRegistry;
pub use memory::InMemoryRegistry;

/// Where a registry takes its templates from.
#[derive(Debug)]
pub enum TemplateSource {
    /// Template library directory on the local filesystem
    FileSystem(PathBuf),
    /// Templates registered programmatically
    Memory,
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Memory => write!(f, "in-memory registry"),
        }
    }
}

/// Trait for resolving templates from different sources.
pub trait TemplateRegistry {
    fn source(&self) -> TemplateSource;

    /// Resolves a template by name.
    ///
    /// Loading is read-only and may be repeated; every call builds a fresh
    /// template.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if no template has that name
    fn resolve(&self, name: &str) -> Result<Box<dyn Template>>;

    /// Names of all templates this registry can resolve, sorted.
    fn list(&self) -> Result<Vec<String>>;
}
