//! Project name normalisation.

use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_]+").unwrap());

/// Converts a user supplied project name into a safe identifier.
///
/// The name is lowercased, every run of characters other than ASCII letters,
/// digits and underscores collapses into a single underscore, and a leading
/// digit gets an underscore prepended.
///
/// # Example
/// ```
/// use skaf::sanitize::sanitize_project_name;
///
/// assert_eq!(sanitize_project_name("My-App 2"), "my_app_2");
/// assert_eq!(sanitize_project_name("3cool"), "_3cool");
/// ```
pub fn sanitize_project_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let sanitized = NON_WORD.replace_all(&lowered, "_");
    match sanitized.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("_{sanitized}"),
        _ => sanitized.into_owned(),
    }
}
