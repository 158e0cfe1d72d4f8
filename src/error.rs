//! Error handling for skaf.
//! Defines the error taxonomy and result alias used throughout the scaffolding pipeline.

use thiserror::Error;

/// All failures the scaffolding pipeline can report.
///
/// Every variant is fatal for the current invocation: nothing in the pipeline
/// retries or recovers silently.
#[derive(Error, Debug)]
pub enum Error {
    /// No template with the requested name exists in the registry.
    #[error("Template '{name}' does not exist in '{root}'.")]
    TemplateNotFound { name: String, root: String },

    /// The template directory exists but is not laid out as a template.
    #[error("Template '{name}' is invalid: {reason}.")]
    InvalidTemplate { name: String, reason: String },

    /// The properties file could not be parsed.
    #[error("Failed to parse template properties: {0}.")]
    PropertiesError(#[from] serde_yaml::Error),

    /// The template asks for a rendering engine that is not registered.
    #[error("Unknown templater '{name}' (available: {available}).")]
    UnknownTemplater { name: String, available: String },

    /// A template-declared default cannot be coerced to its declared type.
    #[error("Default value {value} for '{variable}' cannot be used as {kind}: {reason}.")]
    InvalidDefault { variable: String, value: String, kind: String, reason: String },

    /// An interactively entered value cannot be coerced to its declared type.
    #[error("Invalid value '{value}' for '{variable}' with type {kind}: {reason}.")]
    InvalidUserInput { variable: String, value: String, kind: String, reason: String },

    /// Two custom variables in one template share a name.
    #[error("Custom variable '{name}' is declared more than once.")]
    DuplicateVariable { name: String },

    /// A strict templater referenced a variable that was never bound.
    #[error("Missing variable for templating: '{name}'.")]
    MissingVariable { name: String },

    /// Any other failure reported by the template engine.
    #[error("Template rendering failed: {0}.")]
    RenderError(#[from] minijinja::Error),

    /// A rendered document path points outside the project directory.
    #[error("Rendered path '{path}' escapes the project directory.")]
    UnsafePath { path: String },

    /// The project directory already exists and is not empty.
    #[error("Project directory '{project_path}' already exists. Set --force to overwrite.")]
    DirectoryCollision { project_path: String },

    /// The interactive prompt failed (closed terminal, interrupted input).
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents errors that occur during file system operations.
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Walking the template tree failed.
    #[error("Failed to walk template directory: {0}.")]
    WalkError(#[from] walkdir::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
