mod common;

use common::ScriptedPrompter;
use serde_json::json;
use skaf::config::TemplateProperties;
use skaf::error::Error;
use skaf::variables::collect_variables;

fn properties(yaml: &str) -> TemplateProperties {
    TemplateProperties::from_yaml(yaml).unwrap()
}

#[test]
fn test_default_is_coerced() {
    let props = properties("custom_variables:\n  - name: version\n    type: int\n    default: \"3\"\n");
    let prompter = ScriptedPrompter::new(&[]);

    let variables = collect_variables(&props, "demo", &prompter, true).unwrap();
    assert_eq!(variables["version"], json!(3));
    assert_eq!(variables["project_name"], json!("demo"));
    assert!(prompter.asked.borrow().is_empty());
}

#[test]
fn test_prompted_values_in_declaration_order() {
    let props = properties(
        r#"
custom_variables:
  - name: tags
    type: list
  - name: ratio
    type: float
  - name: extras
    type: dict
  - name: enabled
    type: bool
"#,
    );
    let prompter = ScriptedPrompter::new(&["web, cli", "0.5", "a=1,b=2", "yes"]);

    let variables = collect_variables(&props, "demo", &prompter, true).unwrap();
    let keys: Vec<&str> = variables.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["tags", "ratio", "extras", "enabled", "project_name"]);
    assert_eq!(variables["tags"], json!(["web", "cli"]));
    assert_eq!(variables["ratio"], json!(0.5));
    assert_eq!(variables["extras"], json!({"a": "1", "b": "2"}));
    assert_eq!(variables["enabled"], json!(true));
}

#[test]
fn test_invalid_default_is_configuration_error() {
    let props = properties("custom_variables:\n  - name: port\n    type: int\n    default: eighty\n");
    let prompter = ScriptedPrompter::new(&[]);

    match collect_variables(&props, "demo", &prompter, true) {
        Err(Error::InvalidDefault { variable, kind, .. }) => {
            assert_eq!(variable, "port");
            assert_eq!(kind, "int");
        }
        _ => panic!("Expected InvalidDefault"),
    }
}

#[test]
fn test_invalid_user_input() {
    let props = properties("custom_variables:\n  - name: port\n    type: int\n");
    let prompter = ScriptedPrompter::new(&["eighty"]);

    match collect_variables(&props, "demo", &prompter, true) {
        Err(Error::InvalidUserInput { variable, value, .. }) => {
            assert_eq!(variable, "port");
            assert_eq!(value, "eighty");
        }
        _ => panic!("Expected InvalidUserInput"),
    }
}

#[test]
fn test_project_name_always_wins() {
    let props = properties("custom_variables:\n  - name: project_name\n    default: custom\n");
    let prompter = ScriptedPrompter::new(&[]);

    let variables = collect_variables(&props, "demo", &prompter, true).unwrap();
    assert_eq!(variables["project_name"], json!("demo"));
    assert_eq!(variables.len(), 1);
}

#[test]
fn test_legacy_defaults() {
    let props = properties(
        r#"
custom_variables:
  - name: license
defaults:
  license: MIT
  python: "3.12"
"#,
    );
    let prompter = ScriptedPrompter::new(&[]);

    let variables = collect_variables(&props, "demo", &prompter, true).unwrap();
    assert_eq!(variables["license"], json!("MIT"));
    assert_eq!(variables["python"], json!("3.12"));
}

#[test]
fn test_prompt_with_prefilled_default() {
    let props = properties("custom_variables:\n  - name: tags\n    type: list\n    default: [a, b]\n");
    let prompter = ScriptedPrompter::new(&["c"]);

    let variables = collect_variables(&props, "demo", &prompter, false).unwrap();
    assert_eq!(variables["tags"], json!(["c"]));
    assert_eq!(
        prompter.asked.borrow().as_slice(),
        &[("tags".to_string(), Some("a, b".to_string()))]
    );
}

#[test]
fn test_duplicate_variable_names() {
    let result = TemplateProperties::from_yaml(
        "custom_variables:\n  - name: author\n  - name: author\n",
    );
    assert!(matches!(result, Err(Error::DuplicateVariable { name }) if name == "author"));
}
