use std::fs;
use std::io::Write;

use tempfile::TempDir;

use super::*;

#[test]
fn test_config_path_points_to_config_dir() {
    let path = config_path();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().contains(".config/toast-provider"));
    assert!(path.to_string_lossy().ends_with("config.toml"));
}

#[test]
fn test_missing_file_uses_defaults_silently() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_from_path(&temp_dir.path().join("absent.toml"));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "[toast]\nposition = \"center\"\nwidth = 33").unwrap();

    let result = load_config_from_path(&path);

    assert_eq!(result.config.toast.position, ToastPosition::Center);
    assert_eq!(result.config.toast.width, 33);
    assert!(result.warning.is_none());
}

#[test]
fn test_invalid_file_falls_back_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[toast\nwidth = ").unwrap();

    let result = load_config_from_path(&path);

    assert_eq!(result.config, Config::default());
    let warning = result.warning.unwrap();
    assert!(warning.contains("Invalid toast configuration"));
}

#[test]
fn test_unknown_close_key_warns_but_keeps_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[toast]\nwidth = 20\n[keys]\nclose = \"hyper\"\n").unwrap();

    let result = load_config_from_path(&path);

    assert_eq!(result.config.toast.width, 20);
    assert!(result.warning.unwrap().contains("hyper"));
}

#[test]
fn test_parse_config_error_variant() {
    let err = parse_config("width = [").unwrap_err();
    assert!(matches!(err, ToastError::InvalidConfig(_)));
}

#[test]
fn test_parse_config_empty_is_default() {
    assert_eq!(parse_config("").unwrap(), Config::default());
}

#[test]
fn test_unreadable_path_warns_with_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_from_path(temp_dir.path());

    assert_eq!(result.config, Config::default());
    let warning = result.warning.unwrap();
    assert!(warning.contains("Could not read"));
    assert!(warning.contains("IO error"));
}

#[test]
fn test_read_config_file_missing_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = read_config_file(&temp_dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ToastError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}
