//! Templates held entirely in memory.

use super::{Document, Documents, Template};
use crate::config::TemplateProperties;

/// A template built from (path, content) pairs, for sources that are not
/// directories on disk.
#[derive(Debug, Clone)]
pub struct InMemoryTemplate {
    name: String,
    properties: TemplateProperties,
    documents: Vec<Document>,
}

impl InMemoryTemplate {
    pub fn new<S: Into<String>>(name: S, properties: TemplateProperties) -> Self {
        Self { name: name.into(), properties, documents: Vec::new() }
    }

    /// Adds a document; documents are yielded in insertion order.
    pub fn with_document<P: Into<String>, C: Into<String>>(mut self, path: P, content: C) -> Self {
        self.documents.push(Document::new(path, content));
        self
    }
}

impl Template for InMemoryTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn properties(&self) -> &TemplateProperties {
        &self.properties
    }

    fn documents(&self) -> Documents<'_> {
        Box::new(self.documents.iter().cloned().map(Ok))
    }
}
