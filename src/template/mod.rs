//! Templates: named sources of raw documents plus declared properties.

pub mod filesystem;
pub mod memory;

use crate::config::TemplateProperties;
use crate::error::Result;

pub use filesystem::FilesystemTemplate;
pub use memory::InMemoryTemplate;

/// One unrendered unit of a template.
///
/// Both the relative path and the content may contain placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the template content root, `/`-separated.
    pub path: String,
    pub content: String,
}

impl Document {
    pub fn new<P: Into<String>, C: Into<String>>(path: P, content: C) -> Self {
        Self { path: path.into(), content: content.into() }
    }
}

/// Iterator over the documents of a template.
pub type Documents<'a> = Box<dyn Iterator<Item = Result<Document>> + 'a>;

/// A named template, regardless of where its documents come from.
pub trait Template {
    fn name(&self) -> &str;

    fn properties(&self) -> &TemplateProperties;

    /// Lazily yields every document.
    ///
    /// Each call starts a fresh pass and yields the same sequence, so callers
    /// may enumerate documents more than once. Empty directories are not
    /// represented.
    fn documents(&self) -> Documents<'_>;
}
