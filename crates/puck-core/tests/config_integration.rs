//! Integration tests for configuration and metadata files on disk

use camino::Utf8PathBuf;
use puck_core::paths::CONFIG_ENV;
use puck_core::{Config, ProjectMetadata};
use serial_test::serial;
use tempfile::TempDir;

fn temp_dir() -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    (temp, path)
}

#[test]
#[serial]
fn test_load_reads_file_named_by_env() {
    let (_temp, dir) = temp_dir();
    let path = dir.join("config");
    std::fs::write(
        &path,
        "# mine\ndelete_force: true\nuse_docker_run: TRUE\ncommand_timeout: 30\nauthor: Grace Hopper\n",
    )
    .unwrap();

    std::env::set_var(CONFIG_ENV, path.as_str());
    let config = Config::load();
    std::env::remove_var(CONFIG_ENV);

    assert!(config.delete_force);
    assert!(config.use_docker_run);
    assert_eq!(config.command_timeout, Some(std::time::Duration::from_secs(30)));
    assert_eq!(config.author.as_deref(), Some("Grace Hopper"));
    assert!(config.copy_cheatsheet);
}

#[test]
fn test_written_defaults_load_back_as_defaults() {
    let (_temp, dir) = temp_dir();
    let path = dir.join("nested").join("config");

    Config::write_default(&path).unwrap();
    assert_eq!(Config::load_from(&path, None), Config::default());
    assert!(Config::write_default(&path).is_err());
}

#[test]
fn test_metadata_without_dependencies_field() {
    let (_temp, dir) = temp_dir();
    std::fs::write(
        dir.join("puck.json"),
        r#"{"name":"demo","language":"lua","author":"Ada","created_at":"2024-01-02T03:04:05Z"}"#,
    )
    .unwrap();

    let metadata = ProjectMetadata::read(&dir).unwrap();
    assert_eq!(metadata.language, "lua");
    assert!(metadata.dependencies.is_empty());
}

#[test]
fn test_metadata_file_is_pretty_json() {
    let (_temp, dir) = temp_dir();
    let metadata = ProjectMetadata::new("demo", "go", "Ada");
    metadata.write(&dir).unwrap();

    let content = std::fs::read_to_string(dir.join("puck.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["name"], "demo");
    assert_eq!(value["language"], "go");
    assert_eq!(value["dependencies"], serde_json::json!([]));
    assert!(content.ends_with("}\n"));
}
