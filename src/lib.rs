//! skaf scaffolds new projects from reusable templates.
//! A template is a tree of documents plus declared variables; skaf collects
//! the variables, renders every path and file through a pluggable templater,
//! and writes the resulting project tree.

/// Command-line interface module for the skaf application
pub mod cli;

/// Template properties and engine configuration
/// Reads template_properties.yaml
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the skaf application
pub mod error;

/// Template registries
pub mod loader;

/// Logger initialisation for the binary
pub mod logger;

/// Core scaffolding orchestration
/// Combines all components to generate the final output
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Project name normalisation
pub mod sanitize;

/// Template sources and documents
pub mod template;

/// Pluggable rendering engines
pub mod templater;

/// Variable casting and collection
pub mod variables;
