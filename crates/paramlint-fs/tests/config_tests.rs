use paramlint_fs::{ConfigStore, Error};
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct TestSettings {
    item_types: Vec<String>,
    #[serde(default)]
    exclude: Vec<String>,
}

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("paramlint.toml");
    fs::write(&file_path, "item_types = [\"Notebook\"]\nexclude = [\"legacy\"]").unwrap();

    let settings: TestSettings = ConfigStore::new().load(&file_path).unwrap();

    assert_eq!(settings.item_types, vec!["Notebook"]);
    assert_eq!(settings.exclude, vec!["legacy"]);
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("paramlint.json");
    fs::write(&file_path, r#"{"item_types": ["Report"]}"#).unwrap();

    let settings: TestSettings = ConfigStore::new().load(&file_path).unwrap();

    assert_eq!(settings.item_types, vec!["Report"]);
    assert!(settings.exclude.is_empty());
}

#[test]
fn test_load_yaml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("paramlint.yml");
    fs::write(&file_path, "item_types:\n  - Notebook\n  - Report\n").unwrap();

    let settings: TestSettings = ConfigStore::new().load(&file_path).unwrap();

    assert_eq!(settings.item_types, vec!["Notebook", "Report"]);
}

#[test]
fn test_extension_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("paramlint.YML");
    fs::write(&file_path, "item_types: [Report]\n").unwrap();

    let settings: TestSettings = ConfigStore::new().load(&file_path).unwrap();

    assert_eq!(settings.item_types, vec!["Report"]);
}

#[test]
fn test_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("paramlint.ini");
    fs::write(&file_path, "data").unwrap();

    let result: paramlint_fs::Result<TestSettings> = ConfigStore::new().load(&file_path);

    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_parse_error_names_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("paramlint.toml");
    fs::write(&file_path, "item_types = [").unwrap();

    let result: paramlint_fs::Result<TestSettings> = ConfigStore::new().load(&file_path);

    match result {
        Err(Error::ConfigParse { format, .. }) => assert_eq!(format, "TOML"),
        other => panic!("expected ConfigParse, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let result: paramlint_fs::Result<TestSettings> =
        ConfigStore::new().load(&temp.path().join("absent.toml"));

    assert!(result.unwrap_err().is_not_found());
}
