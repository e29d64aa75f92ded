//=========================================================================
// Window Settings
//=========================================================================
//
// Plain configuration for the OS window (title and size).
//
// Settings are serde-derived and can be loaded from a RON file; when no
// file exists the defaults apply.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

//=== WindowSettings ======================================================

/// Window title and drawable size, owned by the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window title.
    pub title: String,

    /// Drawable width in pixels.
    pub width: u32,

    /// Drawable height in pixels.
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Ember2D".to_string(),
            width: 800,
            height: 600,
        }
    }
}

impl WindowSettings {
    /// Loads settings from a RON file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(SettingsError::Io)?;
        let settings: Self =
            ron::from_str(&contents).map_err(|e| SettingsError::Parse(e.to_string()))?;

        debug!(
            "Loaded window settings from {}: \"{}\" {}x{}",
            path.display(),
            settings.title,
            settings.width,
            settings.height
        );
        Ok(settings)
    }

    /// Loads settings from `path` if the file exists, otherwise defaults.
    ///
    /// A present-but-invalid file is still an error; silently falling back
    /// would hide typos in the config.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No settings file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

//=== SettingsError =======================================================

/// Errors produced while loading window settings.
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read.
    Io(std::io::Error),

    /// Settings file is not valid RON.
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read settings file: {}", e),
            Self::Parse(e) => write!(f, "Failed to parse settings file: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

//=========================================================================
// Unit Tests
//=========================================================================
