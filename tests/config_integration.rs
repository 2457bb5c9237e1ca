//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use spintri::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("TRI_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("TRI_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("TRI_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "DirectX 11 Triangle");
    assert!(config.window.fullscreen);
}

#[test]
#[serial]
fn test_user_config_overrides_default() {
    std::env::remove_var("TRI_WINDOW__TITLE");

    let dir = std::env::temp_dir().join(format!("spintri-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[window]\n\
         title = \"Default Title\"\n\
         width = 640\n\
         height = 480\n\
         fullscreen = false\n\
         vsync = true\n",
    )
    .unwrap();
    std::fs::write(dir.join("user.toml"), "[window]\ntitle = \"User Title\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    // user.toml wins where it sets a key; default.toml fills the rest
    assert_eq!(config.window.title, "User Title");
    assert_eq!(config.window.width, 640);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_env_spin_speed_override() {
    std::env::set_var("TRI_RENDERING__SPIN_SPEED", "0.05");
    let config = AppConfig::load().unwrap();
    assert!((config.rendering.spin_speed - 0.05).abs() < 1e-6);
    std::env::remove_var("TRI_RENDERING__SPIN_SPEED");
}
