use assert_cmd::Command;
use barkit_lib::config::Config;
use barkit_lib::init::create_default_config;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_create_default_config_new_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(".barkit.toml");
    let config_path_str = config_path.to_str().unwrap();

    let result = create_default_config(config_path_str, false);
    assert!(result.unwrap());

    assert!(Path::new(config_path_str).exists());
    let content = fs::read_to_string(config_path_str).unwrap();
    assert!(content.contains("[shell]"));
    assert!(content.contains("notification-timeout-ms = 5000"));
    assert_eq!(Config::from_file(&config_path).unwrap(), Config::default());
}

#[test]
fn test_create_default_config_existing_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(".barkit.toml");
    let config_path_str = config_path.to_str().unwrap();

    fs::write(config_path_str, "dummy content").unwrap();

    // Existing files are left alone unless forced
    assert!(!create_default_config(config_path_str, false).unwrap());
    assert_eq!(fs::read_to_string(config_path_str).unwrap(), "dummy content");

    assert!(create_default_config(config_path_str, true).unwrap());
    assert!(fs::read_to_string(config_path_str).unwrap().contains("[palette]"));
}

#[test]
fn test_create_default_config_missing_directory() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("missing").join(".barkit.toml");

    let err = create_default_config(config_path.to_str().unwrap(), false).unwrap_err();
    assert!(err.to_string().contains("Failed to access file"));
}

#[test]
fn test_init_command() {
    let temp_dir = tempdir().unwrap();

    Command::cargo_bin("barkit")
        .unwrap()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration file: .barkit.toml"));
    assert!(temp_dir.path().join(".barkit.toml").exists());

    Command::cargo_bin("barkit")
        .unwrap()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_version_command() {
    Command::cargo_bin("barkit")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(format!("barkit {}\n", env!("CARGO_PKG_VERSION")));
}
