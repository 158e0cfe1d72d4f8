use crate::error::{Error, Result};
use crate::loader::{TemplateRegistry, TemplateSource};
use crate::template::{InMemoryTemplate, Template};
use indexmap::IndexMap;

/// Registry holding [`InMemoryTemplate`]s keyed by name.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistry {
    templates: IndexMap<String, InMemoryTemplate>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template under its own name, replacing any previous one.
    pub fn register(&mut self, template: InMemoryTemplate) {
        self.templates.insert(template.name().to_string(), template);
    }
}

impl TemplateRegistry for InMemoryRegistry {
    fn source(&self) -> TemplateSource {
        TemplateSource::Memory
    }

    fn resolve(&self, name: &str) -> Result<Box<dyn Template>> {
        self.templates
            .get(name)
            .map(|template| Box::new(template.clone()) as Box<dyn Template>)
            .ok_or_else(|| Error::TemplateNotFound {
                name: name.to_string(),
                root: self.source().to_string(),
            })
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.templates.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
