//! Configuration system
//!
//! TOML-backed configuration for the bridge as a whole plus the
//! per-entity adapter defaults the plugin installs. Values are validated
//! after load; a configuration that passes [`BridgeConfig::validate`]
//! needs no further checking downstream.

use serde::{Deserialize, Serialize};

/// Configuration trait for TOML-serializable settings types
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    ///
    /// # Errors
    /// I/O failures, parse failures, and non-TOML paths.
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// I/O failures, serialization failures, and non-TOML paths.
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A loaded value failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Output resolution settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Per-entity adapter defaults installed by the plugin
///
/// Attached to entities at construction; the motion-blur fields seed the
/// entity's editable properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderAdapterConfig {
    /// Motion blur enabled by default
    pub motion_blur: bool,

    /// Default motion blur scale
    pub motion_blur_scale: f32,

    /// Default motion blur exposure
    pub motion_blur_exposure: f32,
}

impl Default for RenderAdapterConfig {
    fn default() -> Self {
        Self {
            motion_blur: true,
            motion_blur_scale: 1.0,
            motion_blur_exposure: 1.0,
        }
    }
}

/// Top-level bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Log filter string, `env_logger` syntax
    pub log_filter: String,

    /// Output resolution
    pub output: OutputConfig,

    /// Adapter defaults for new entities
    pub adapter: RenderAdapterConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_owned(),
            output: OutputConfig::default(),
            adapter: RenderAdapterConfig::default(),
        }
    }
}

impl Config for BridgeConfig {}

impl BridgeConfig {
    /// Check value constraints after load
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.width == 0 || self.output.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "output resolution must be non-zero, got {}x{}",
                self.output.width, self.output.height
            )));
        }
        if self.adapter.motion_blur_scale < 0.0 {
            return Err(ConfigError::Invalid(
                "motion blur scale must be non-negative".to_owned(),
            ));
        }
        if self.adapter.motion_blur_exposure < 0.0 {
            return Err(ConfigError::Invalid(
                "motion blur exposure must be non-negative".to_owned(),
            ));
        }
        Ok(())
    }
}
