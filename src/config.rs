//! Configuration - TOML file with per-field defaults.
//!
//! Every table and key is optional. A missing file section falls back to the
//! defaults below, and CLI flags override whatever the file sets.
//!
//! ```toml
//! [carousel]
//! interval_ms = 5000
//!
//! [visibility]
//! threshold = 0.1
//!
//! [media]
//! asset_root = "public"
//!
//! [display]
//! max_width = 96
//! color = true
//!
//! [log]
//! level = "info"
//! file = "folio.log"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::media::{ACHIEVEMENT_PLACEHOLDER, PROJECT_PLACEHOLDER};

/// Carousel rotation period.
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 5000;

/// Fraction of a section that must be on screen before it counts as visible.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.1;

/// Content column width cap.
pub const DEFAULT_MAX_WIDTH: u16 = 96;

/// Narrowest content column we lay out for.
pub const MIN_MAX_WIDTH: u16 = 40;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub carousel: CarouselConfig,
    pub visibility: VisibilityConfig,
    pub media: MediaConfig,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_ROTATION_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub threshold: f32,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Directory that site-absolute image paths (`/images/...`) resolve against.
    pub asset_root: PathBuf,
    pub project_placeholder: String,
    pub achievement_placeholder: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("public"),
            project_placeholder: PROJECT_PLACEHOLDER.to_string(),
            achievement_placeholder: ACHIEVEMENT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_width: u16,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Log destination while the terminal UI owns the screen. Unset = no logs.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.carousel.interval_ms == 0 {
            return Err(FolioError::invalid_config(
                "carousel.interval_ms must be greater than 0",
            ));
        }
        let threshold = self.visibility.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(FolioError::invalid_config(format!(
                "visibility.threshold must be within 0.0..=1.0, got {threshold}"
            )));
        }
        if self.display.max_width < MIN_MAX_WIDTH {
            return Err(FolioError::invalid_config(format!(
                "display.max_width must be at least {MIN_MAX_WIDTH}, got {}",
                self.display.max_width
            )));
        }
        Ok(())
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.carousel.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.rotation_interval(), Duration::from_millis(5000));
        assert_eq!(config.visibility.threshold, 0.1);
        assert_eq!(config.media.asset_root, PathBuf::from("public"));
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_partial_tables_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [carousel]
            interval_ms = 1500

            [display]
            color = false
            "#,
        )
        .unwrap();

        assert_eq!(config.carousel.interval_ms, 1500);
        assert!(!config.display.color);
        assert_eq!(config.display.max_width, DEFAULT_MAX_WIDTH);
        assert_eq!(config.media.project_placeholder, PROJECT_PLACEHOLDER);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = Config::from_toml_str("[carousel]\ninterval_ms = 0\n").unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig { .. }));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let err = Config::from_toml_str("[visibility]\nthreshold = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("visibility.threshold"));
    }

    #[test]
    fn test_narrow_width_rejected() {
        let err = Config::from_toml_str("[display]\nmax_width = 10\n").unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig { .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = Config::from_toml_str("[carousel\ninterval_ms = ").unwrap_err();
        assert!(matches!(err, FolioError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\nlevel = \"debug\"\nfile = \"folio.log\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(PathBuf::from("folio.log")));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
