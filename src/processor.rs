//! Core scaffolding orchestration.
//! Resolves the template and templater, collects variables, renders every
//! document path and content, and writes the resulting project tree.

use crate::config::ScaffoldConfig;
use crate::error::{Error, Result};
use crate::loader::TemplateRegistry;
use crate::prompt::Prompter;
use crate::sanitize::sanitize_project_name;
use crate::template::Template;
use crate::templater::{get_templater, Templater};
use crate::variables::{collect_variables, to_context, Variables};
use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// What the caller asks to scaffold.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub template_name: String,
    pub output_dir: PathBuf,
    pub force: bool,
}

impl ScaffoldRequest {
    pub fn new<N, T, P>(project_name: N, template_name: T, output_dir: P) -> Self
    where
        N: Into<String>,
        T: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            project_name: project_name.into(),
            template_name: template_name.into(),
            output_dir: output_dir.into(),
            force: false,
        }
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Everything resolved for a single scaffold invocation.
pub struct ScaffoldContext {
    /// Project name as given by the user.
    pub raw_project_name: String,
    pub project_name: String,
    pub template_name: String,
    pub output_dir: PathBuf,
    pub force: bool,
    pub template: Box<dyn Template>,
    pub templater: Box<dyn Templater>,
    /// `output_dir` joined with the sanitized project name.
    pub project_path: PathBuf,
}

/// Outcome of a successful scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_path: PathBuf,
    /// Written files, in write order.
    pub files: Vec<PathBuf>,
}

/// A document whose path has been rendered but whose content has not.
struct PlannedDocument {
    target: PathBuf,
    content: String,
}

/// Fails when `project_path` is a non-empty directory and `force` is not set.
///
/// # Errors
/// * `Error::DirectoryCollision` if the directory exists and has entries
pub fn check_project_dir<P: AsRef<Path>>(project_path: P, force: bool) -> Result<()> {
    let project_path = project_path.as_ref();
    if force || !project_path.is_dir() {
        return Ok(());
    }
    if fs::read_dir(project_path)?.next().is_some() {
        return Err(Error::DirectoryCollision { project_path: project_path.display().to_string() });
    }
    Ok(())
}

/// Turns a rendered relative path into a target path under the project.
///
/// Every segment is trimmed of surrounding whitespace. Returns `Ok(None)`
/// when the path rendered to nothing, or one of its segments did, which lets
/// templates drop files conditionally.
///
/// # Errors
/// * `Error::UnsafePath` for absolute paths and paths containing `..`
pub fn rendered_target(rendered: &str) -> Result<Option<PathBuf>> {
    if rendered.trim().is_empty() {
        return Ok(None);
    }
    if rendered.starts_with('/') || Path::new(rendered).is_absolute() {
        return Err(Error::UnsafePath { path: rendered.to_string() });
    }

    let mut target = PathBuf::new();
    for segment in rendered.split('/').map(str::trim) {
        match segment {
            "" => return Ok(None),
            "." => continue,
            ".." => return Err(Error::UnsafePath { path: rendered.to_string() }),
            _ => target.push(segment),
        }
    }
    Ok(Some(target))
}

/// Final relative path of a document, with the templater suffix stripped
/// from its file name.
pub fn resolve_target_path(target: &Path, templater: &dyn Templater) -> PathBuf {
    let stripped = target
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| templater.strip_suffix(name));
    match stripped {
        Some(name) => target.with_file_name(name),
        None => target.to_path_buf(),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// The scaffold engine.
pub struct Scaffolder<'a> {
    registry: &'a dyn TemplateRegistry,
    prompter: &'a dyn Prompter,
    config: &'a ScaffoldConfig,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        registry: &'a dyn TemplateRegistry,
        prompter: &'a dyn Prompter,
        config: &'a ScaffoldConfig,
    ) -> Self {
        Self { registry, prompter, config }
    }

    /// Resolves the template and templater for `request`.
    ///
    /// Nothing is written to disk here.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the registry has no such template
    /// * `Error::UnknownTemplater` if the template names an unregistered engine
    pub fn context(&self, request: &ScaffoldRequest) -> Result<ScaffoldContext> {
        let project_name = sanitize_project_name(&request.project_name);
        let template = self.registry.resolve(&request.template_name)?;

        let properties = template.properties();
        let templater_name =
            properties.templater.as_deref().unwrap_or(&self.config.default_templater);
        let templater = get_templater(templater_name, properties.template_suffix.as_deref())?;
        debug!(
            "Template '{}' uses templater '{}' (suffix: {:?})",
            request.template_name,
            templater.name(),
            templater.suffix()
        );

        if project_name.is_empty() {
            warn!(
                "Project name '{}' sanitizes to an empty name; writing directly into {}",
                request.project_name,
                request.output_dir.display()
            );
        }
        let project_path = request.output_dir.join(&project_name);
        Ok(ScaffoldContext {
            raw_project_name: request.project_name.clone(),
            project_name,
            template_name: request.template_name.clone(),
            output_dir: request.output_dir.clone(),
            force: request.force,
            template,
            templater,
            project_path,
        })
    }

    /// Collects the variables for a resolved context.
    pub fn variables(&self, context: &ScaffoldContext) -> Result<Variables> {
        let properties = context.template.properties();
        let auto_use_defaults =
            self.config.auto_use_defaults.unwrap_or(properties.auto_use_defaults);
        collect_variables(properties, &context.project_name, self.prompter, auto_use_defaults)
    }

    /// Renders every document path; no file is read for writing yet.
    fn plan(&self, context: &ScaffoldContext, vars: &serde_json::Value) -> Result<Vec<PlannedDocument>> {
        let mut planned = Vec::new();
        for document in context.template.documents() {
            let document = document?;
            let rendered = context.templater.render(&document.path, vars, None)?;
            match rendered_target(&rendered)? {
                Some(target) => {
                    debug!("Mapped '{}' to '{}'", document.path, target.display());
                    planned.push(PlannedDocument { target, content: document.content });
                }
                None => debug!("Skipping '{}': rendered path is empty", document.path),
            }
        }
        Ok(planned)
    }

    /// Scaffolds a project and returns where it was written.
    ///
    /// # Flow
    /// 1. Resolves template and templater
    /// 2. Collects variables
    /// 3. Renders every document path
    /// 4. Checks the project directory for a collision
    /// 5. Renders every document content and writes it
    ///
    /// A failure in step 5 leaves files written so far in place.
    pub fn scaffold(&self, request: &ScaffoldRequest) -> Result<ScaffoldReport> {
        let context = self.context(request)?;
        debug!(
            "Scaffolding '{}' as '{}' from template '{}' into {}",
            context.raw_project_name,
            context.project_name,
            context.template_name,
            context.output_dir.display()
        );
        let variables = self.variables(&context)?;
        let vars = to_context(&variables);

        let planned = self.plan(&context, &vars)?;

        check_project_dir(&context.project_path, context.force)?;
        fs::create_dir_all(&context.project_path)?;

        let mut written = HashSet::new();
        let mut files = Vec::with_capacity(planned.len());
        for document in planned {
            let filename = document
                .target
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            let content =
                context.templater.render(&document.content, &vars, filename.as_deref())?;

            let target = resolve_target_path(&document.target, context.templater.as_ref());
            let write_path = context.project_path.join(&target);
            if !written.insert(write_path.clone()) {
                debug!("'{}' is produced by more than one document; the later one wins", target.display());
            }
            debug!("Writing file: {}", write_path.display());
            write_file(&write_path, &content)?;
            files.push(write_path);
        }

        Ok(ScaffoldReport { project_path: context.project_path, files })
    }
}
