//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use poly4d::config::AppConfig;
use poly4d_core::{RotationMode, RotationPlane};
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("P4D_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("P4D_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_override_enums() {
    std::env::set_var("P4D_ANIMATION__INITIAL_AXIS", "YZ");
    std::env::set_var("P4D_ANIMATION__INITIAL_MODE", "all_axes");
    let config = AppConfig::load();
    std::env::remove_var("P4D_ANIMATION__INITIAL_AXIS");
    std::env::remove_var("P4D_ANIMATION__INITIAL_MODE");

    let config = config.unwrap();
    assert_eq!(config.animation.initial_axis, RotationPlane::YZ);
    assert_eq!(config.animation.initial_mode, RotationMode::AllAxes);
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    std::env::remove_var("P4D_WINDOW__TITLE");

    let config = AppConfig::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config")).unwrap();
    let defaults = AppConfig::default();

    assert_eq!(config.camera.position, defaults.camera.position);
    assert_eq!(config.camera.fovy, defaults.camera.fovy);
    assert_eq!(config.animation.to_settings(), defaults.animation.to_settings());
    assert_eq!(config.projection.to_projector(), defaults.projection.to_projector());
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 1920);
    assert_eq!(config.rendering.start_scene, 0);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = std::env::temp_dir().join(format!("poly4d_config_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[camera]\nzoom_speed = 3.0\nfovy = 50.0\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[camera]\nfovy = 70.0\n").unwrap();

    let config = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).unwrap();

    let config = config.unwrap();
    assert_eq!(config.camera.fovy, 70.0);
    assert_eq!(config.camera.zoom_speed, 3.0);
}
