//! Config file loading and persistence.

use fdc_search::FdcConfig;
use nutrition_profile::{AppConfig, AppError};

#[test]
fn save_then_load_preserves_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nutrition-profile").join("config.toml");

    let config = AppConfig {
        fdc: FdcConfig {
            timeout_seconds: 30,
            page_size: Some(50),
            ..FdcConfig::default().with_api_key("file-key")
        },
    };
    config.save_to_file(&path).expect("save");

    let loaded = AppConfig::load(Some(&path)).expect("load");
    assert_eq!(loaded.fdc.api_key.as_deref(), Some("file-key"));
    assert_eq!(loaded.fdc.timeout_seconds, 30);
    assert_eq!(loaded.fdc.page_size, Some(50));
}

#[test]
fn explicit_missing_path_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn invalid_toml_is_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "this is not valid toml {{{").expect("write");
    assert!(matches!(AppConfig::from_file(&path), Err(AppError::Config(_))));
}

#[test]
fn invalid_settings_rejected_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[fdc]\nbase_url = \"ftp://example.com\"\n").expect("write");
    let err = AppConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}
