//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SerialpointError, SerialpointResult};

/// Description hints for common USB-serial bridges and ESP boards.
pub const DEFAULT_PORT_HINTS: [&str; 6] = ["cp210", "ch340", "ch910", "usb", "uart", "esp"];

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Serial link settings.
    pub serial: SerialConfig,

    /// Cursor motion settings.
    pub motion: MotionConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Serial link parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SerialConfig {
    /// Explicit device path. `None` means auto-detect.
    pub port: Option<String>,

    /// Baud rate.
    pub baud_rate: u32,

    /// Read timeout in milliseconds.
    pub timeout_ms: u64,

    /// Case-insensitive substrings matched against port descriptions.
    pub port_hints: Vec<String>,
}

/// Cursor motion parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// Smoothing factor in (0, 1]. Larger reacts faster.
    pub alpha: f64,

    /// Minimum distance in pixels kept from every screen edge.
    pub safe_margin: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "serialpoint=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: None,
            baud_rate: 115_200,
            timeout_ms: 1000,
            port_hints: DEFAULT_PORT_HINTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            alpha: 0.25,
            safe_margin: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location.
    ///
    /// A missing file gives defaults. A file that cannot be read or parsed is
    /// an error so the caller can report it before falling back.
    pub fn load() -> SerialpointResult<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load config from `path`. See [`AppConfig::load`].
    pub fn load_from(path: &Path) -> SerialpointResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            SerialpointError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            SerialpointError::config(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    /// Save config to the standard location.
    pub fn save(&self) -> SerialpointResult<PathBuf> {
        let path = config_file_path();
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories.
    ///
    /// An existing file that does not load is left untouched.
    pub fn save_to(&self, path: &Path) -> SerialpointResult<()> {
        if let Err(SerialpointError::Config { message }) = Self::load_from(path) {
            return Err(SerialpointError::config(format!(
                "{message}; refusing to overwrite it"
            )));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the motion and serial layers cannot work with.
    pub fn validate(&self) -> SerialpointResult<()> {
        let alpha = self.motion.alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(SerialpointError::config(format!(
                "motion.alpha must be in (0, 1], got {alpha}"
            )));
        }
        if self.serial.baud_rate == 0 {
            return Err(SerialpointError::config("serial.baud_rate must be non-zero"));
        }
        if self.serial.timeout_ms == 0 {
            return Err(SerialpointError::config("serial.timeout_ms must be non-zero"));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("serialpoint").join("config.json")
}
