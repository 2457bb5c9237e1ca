//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TRI_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TRI_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // TRI_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("TRI_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels (used when not fullscreen)
    pub width: u32,
    /// Window height in pixels (used when not fullscreen)
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "DirectX 11 Triangle".to_string(),
            width: 1280,
            height: 720,
            fullscreen: true,
            vsync: true,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub clear_color: [f32; 4],
    /// Rotation advance per rendered frame, in radians
    pub spin_speed: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.2, 0.4, 1.0],
            spin_speed: 0.01,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "DirectX 11 Triangle");
        assert!(config.window.fullscreen);
        assert_eq!(config.rendering.spin_speed, 0.01);
    }

    #[test]
    fn test_default_clear_color() {
        let config = RenderingConfig::default();
        assert_eq!(config.clear_color, [0.0, 0.2, 0.4, 1.0]);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("spin_speed"));

        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.window.title, config.window.title);
        assert_eq!(parsed.window.fullscreen, config.window.fullscreen);
        assert_eq!(parsed.rendering.clear_color, config.rendering.clear_color);
        assert_eq!(parsed.rendering.spin_speed, config.rendering.spin_speed);
    }

    #[test]
    fn test_missing_config_dir_uses_defaults() {
        let config = AppConfig::load_from("nonexistent-config-dir").unwrap();
        assert_eq!(config.window.width, 1280);
    }
}
