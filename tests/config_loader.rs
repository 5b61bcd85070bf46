use animal_votes::config::{Config, ConfigError, RemoteConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn full_file_is_parsed() {
    let (_dir, path) = write_config(
        r#"[remote]
base_url = "https://zoo.example.com/api"
resource = "animals"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.remote,
        RemoteConfig {
            base_url: "https://zoo.example.com/api".to_string(),
            resource: "animals".to_string(),
        }
    );
}

#[test]
fn partial_section_falls_back_to_defaults() {
    let (_dir, path) = write_config("[remote]\nresource = \"pets\"\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.remote.base_url, "http://localhost:3000");
    assert_eq!(config.remote.resource, "pets");
}

#[test]
fn empty_file_is_default() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[remote\nbase_url = ");

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn invalid_base_url_is_validation_error() {
    let (_dir, path) = write_config("[remote]\nbase_url = \"localhost\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn directory_path_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(dir.path()).unwrap_err();
    assert_eq!(err.error_type(), "config_read_error");
}

#[test]
fn padded_resource_is_validation_error() {
    let (_dir, path) = write_config("[remote]\nresource = \" characters \"\n");

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("surrounding whitespace"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}
