use std::io;

use skaf::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let skaf_err: Error = io_err.into();

    match skaf_err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::TemplateNotFound { name: "rust".to_string(), root: "templates".to_string() };
    assert_eq!(err.to_string(), "Template 'rust' does not exist in 'templates'.");

    let err = Error::MissingVariable { name: "author".to_string() };
    assert_eq!(err.to_string(), "Missing variable for templating: 'author'.");

    let err = Error::DirectoryCollision { project_path: "out/demo".to_string() };
    assert_eq!(
        err.to_string(),
        "Project directory 'out/demo' already exists. Set --force to overwrite."
    );
}

#[test]
fn test_properties_error_conversion() {
    let yaml_err = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
    let err: Error = yaml_err.into();
    assert!(matches!(err, Error::PropertiesError(_)));
}
