//! Game configuration loaded from TOML.
//!
//! Every field has a default, so a missing file or a partial file is fine:
//!
//! ```toml
//! [surface]
//! size = 300.0
//!
//! [animation]
//! step = 0.05
//! frame_interval_ms = 16
//!
//! [theme]
//! grid = "white"
//! x = "blue"
//! o = "red"
//! winning_line = "#cfe4ef"
//! cursor = "yellow"
//! ```

use crate::renderer::{DEFAULT_STEP, Surface, Theme};
use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Drawing surface geometry.
    surface: SurfaceConfig,
    /// Winning-line animation timing.
    animation: AnimationConfig,
    /// Board colors.
    theme: ThemeConfig,
}

/// Drawing surface settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Logical side length of the square surface.
    size: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { size: 300.0 }
    }
}

/// Animation settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Progress added to the winning line each frame, in `(0, 1]`.
    step: f64,
    /// Time between frames in milliseconds.
    frame_interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            frame_interval_ms: 16,
        }
    }
}

/// Color names or `#rrggbb` hex strings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Grid line color.
    grid: String,
    /// X mark color.
    x: String,
    /// O mark color.
    o: String,
    /// Winning line color.
    winning_line: String,
    /// Keyboard cursor color.
    cursor: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            grid: "white".to_string(),
            x: "blue".to_string(),
            o: "red".to_string(),
            winning_line: "#cfe4ef".to_string(),
            cursor: "yellow".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Renders the configuration back to TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Checks value ranges and color names.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.surface.size;
        if !(size.is_finite() && size > 0.0) {
            return Err(ConfigError::new(format!(
                "surface.size must be positive, got {}",
                size
            )));
        }
        let step = self.animation.step;
        if !(step > 0.0 && step <= 1.0) {
            return Err(ConfigError::new(format!(
                "animation.step must be in (0, 1], got {}",
                step
            )));
        }
        if self.animation.frame_interval_ms == 0 {
            return Err(ConfigError::new(
                "animation.frame_interval_ms must be at least 1".to_string(),
            ));
        }
        self.build_theme()?;
        Ok(())
    }

    /// The drawing surface described by this configuration.
    pub fn build_surface(&self) -> Surface {
        Surface::new(self.surface.size)
    }

    /// Time between animation frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.animation.frame_interval_ms)
    }

    /// Parses the theme colors.
    #[instrument(skip(self))]
    pub fn build_theme(&self) -> Result<Theme, ConfigError> {
        let theme = &self.theme;
        Ok(Theme {
            grid: parse_color("theme.grid", &theme.grid)?,
            x: parse_color("theme.x", &theme.x)?,
            o: parse_color("theme.o", &theme.o)?,
            winning_line: parse_color("theme.winning_line", &theme.winning_line)?,
            cursor: parse_color("theme.cursor", &theme.cursor)?,
        })
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("{} is not a color: {:?}", field, value)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(*config.surface().size(), 300.0);
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.build_theme().unwrap(), Theme::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::from_toml("[animation]\nstep = 0.1\n").unwrap();
        assert_eq!(*config.animation().step(), 0.1);
        assert_eq!(*config.animation().frame_interval_ms(), 16);
        assert_eq!(config.build_theme().unwrap().o, Color::Red);
    }

    #[test]
    fn test_rejects_bad_step() {
        let err = GameConfig::from_toml("[animation]\nstep = 1.5\n").unwrap_err();
        assert!(err.message.contains("animation.step"));
    }

    #[test]
    fn test_rejects_bad_size() {
        let err = GameConfig::from_toml("[surface]\nsize = 0.0\n").unwrap_err();
        assert!(err.message.contains("surface.size"));
    }

    #[test]
    fn test_rejects_unknown_color() {
        let err = GameConfig::from_toml("[theme]\nx = \"not-a-color\"\n").unwrap_err();
        assert!(err.message.contains("theme.x"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[surface]\nsize = 600.0\n\n[theme]\ngrid = \"#404040\"").unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.build_surface().cell_size(), 200.0);
        assert_eq!(config.build_theme().unwrap().grid, Color::Rgb(0x40, 0x40, 0x40));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.contains("Failed to read"));
    }

    #[test]
    fn test_load_none_gives_defaults() {
        assert_eq!(GameConfig::load(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = GameConfig::default().to_toml().unwrap();
        assert_eq!(GameConfig::from_toml(&text).unwrap(), GameConfig::default());
    }
}
