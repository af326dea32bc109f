//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use fxaa_demo::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("FXAA_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("FXAA_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_number() {
    std::env::set_var("FXAA_FXAA__EDGE_THRESHOLD", "0.25");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.fxaa.edge_threshold, 0.25);
    std::env::remove_var("FXAA_FXAA__EDGE_THRESHOLD");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("FXAA_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load_from(cwd.join("config")).unwrap();
    assert_eq!(config.window.title, "FXAA");
    assert_eq!(config.camera.fov, 40.0);
    assert_eq!(config.camera.target, [1.0, 50.0, 0.0]);
    assert_eq!(config.pistons.grid_size, 11);
    assert_eq!(config.rendering.arrow_path, "assets/arrow.png");
}

#[test]
#[serial]
fn test_bundled_arrow_exists() {
    let config = AppConfig::default();
    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join(&config.rendering.arrow_path).exists());
}

#[test]
#[serial]
fn test_env_override_without_default_file() {
    std::env::set_var("FXAA_WINDOW__TITLE", "Env Only");
    let config = AppConfig::load_from("does/not/exist");
    std::env::remove_var("FXAA_WINDOW__TITLE");

    let config = config.unwrap();
    assert_eq!(config.window.title, "Env Only");
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.window.height, 720);
}
