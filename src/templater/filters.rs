//! Case-conversion filters for the full templating engine.

use crate::sanitize::sanitize_project_name;
use ::minijinja::Environment;
use cruet::Inflector;

/// Registers every skaf filter with `env`.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("snake_case", |value: String| value.to_snake_case());
    env.add_filter("kebab_case", |value: String| value.to_kebab_case());
    env.add_filter("camel_case", |value: String| value.to_camel_case());
    env.add_filter("pascal_case", |value: String| value.to_pascal_case());
    env.add_filter("screaming_snake_case", |value: String| value.to_screaming_snake_case());
    env.add_filter("sanitize", |value: String| sanitize_project_name(&value));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str) -> String {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.render_str(source, ()).unwrap()
    }

    #[test]
    fn test_case_filters() {
        assert_eq!(render("{{ 'my_app' | pascal_case }}"), "MyApp");
        assert_eq!(render("{{ 'my_app' | kebab_case }}"), "my-app");
        assert_eq!(render("{{ 'MyApp' | snake_case }}"), "my_app");
        assert_eq!(render("{{ 'my_app' | screaming_snake_case }}"), "MY_APP");
    }

    #[test]
    fn test_sanitize_filter() {
        assert_eq!(render("{{ 'My App' | sanitize }}"), "my_app");
    }
}
