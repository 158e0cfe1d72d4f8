//! Common constants used throughout skaf.

/// Name of the properties file at the root of every template.
pub const TEMPLATE_PROPERTIES_FILE: &str = "template_properties.yaml";

/// Subdirectory of a template holding the raw document tree.
pub const TEMPLATE_CONTENT_DIR: &str = "template";

/// Templater used when neither the template nor the caller picks one.
pub const DEFAULT_TEMPLATER: &str = "jinja2";

/// Template used by `skaf init` when `--template` is omitted.
pub const DEFAULT_TEMPLATE: &str = "setuptools";

/// Default template library root, relative to the working directory.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Environment variable selecting the default templater.
pub const TEMPLATER_ENV: &str = "SKAF_TEMPLATER";

/// Environment variable selecting the template library root.
pub const TEMPLATE_DIR_ENV: &str = "SKAF_TEMPLATE_DIR";

/// Variable always bound to the sanitized project name.
pub const PROJECT_NAME_VARIABLE: &str = "project_name";
