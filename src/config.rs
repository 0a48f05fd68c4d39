//! Configuration Management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Kinetics form window
    #[serde(default)]
    pub form: FormConfig,
    /// Sprite demo window
    #[serde(default)]
    pub sprite: SpriteConfig,
}

/// Kinetics form settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    /// Window title
    pub title: String,
    /// Draw the concentration chart under the table
    pub plot_enabled: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "Chemical Process Simulator".to_string(),
            plot_enabled: true,
            window_width: 720.0,
            window_height: 640.0,
        }
    }
}

/// Sprite demo settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpriteConfig {
    /// Window title
    pub title: String,
    /// Bitmap to drag (PNG or JPEG). A generated disc is used when unset.
    pub image_path: Option<PathBuf>,
    /// Initial top-left corner on the canvas
    pub start_x: f32,
    pub start_y: f32,
    /// Edge length of the generated bitmap (px)
    pub placeholder_size: usize,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            title: "Draggable Sprite".to_string(),
            image_path: None,
            start_x: 100.0,
            start_y: 100.0,
            placeholder_size: 64,
        }
    }
}

impl Config {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.form.title.trim().is_empty() {
            return Err(crate::Error::Config("form.title must not be empty".to_string()));
        }
        if self.sprite.title.trim().is_empty() {
            return Err(crate::Error::Config("sprite.title must not be empty".to_string()));
        }
        if !(self.form.window_width > 0.0 && self.form.window_height > 0.0) {
            return Err(crate::Error::Config(format!(
                "window size must be positive, got {}x{}", self.form.window_width, self.form.window_height
            )));
        }
        if !self.sprite.start_x.is_finite() || !self.sprite.start_y.is_finite() {
            return Err(crate::Error::Config(format!(
                "sprite start must be finite, got ({}, {})", self.sprite.start_x, self.sprite.start_y
            )));
        }
        if self.sprite.placeholder_size == 0 {
            return Err(crate::Error::Config("placeholder_size must be > 0".to_string()));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Explicit path if given, otherwise the default location
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, crate::Error> {
        match path {
            Some(p) => Self::load(p),
            None => Self::load_default(),
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<(), crate::Error> {
        let content = self.to_toml()?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".kinetics_sim").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
