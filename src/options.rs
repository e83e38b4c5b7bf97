//! Viewer options with TOML file support.
//!
//! All sub-structs use `#[serde(default)]` so partial TOML files (e.g. only
//! overriding `[colors]`) work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpinviewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Scene color options.
    pub colors: ColorOptions,
}

/// Camera projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Eye distance from the object along +Z.
    pub distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            distance: 5.0,
        }
    }
}

/// Scene color options, as sRGB triples in `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Viewport clear color.
    pub background: [f32; 3],
    /// Object base color.
    pub object: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [0.941, 0.941, 0.941],
            object: [0.0, 0.467, 1.0],
        }
    }
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SpinviewError::Io`] if the file cannot be read and
    /// [`SpinviewError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, SpinviewError> {
        let content = std::fs::read_to_string(path).map_err(SpinviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SpinviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SpinviewError::OptionsParse`] if serialization fails and
    /// [`SpinviewError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SpinviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SpinviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SpinviewError::Io)?;
        }
        std::fs::write(path, content).map_err(SpinviewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let options = Options::default();
        let toml_str = toml::to_string_pretty(&options).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: Options = toml::from_str(
            "[camera]\nfovy = 60.0\n",
        )
        .unwrap();
        assert_eq!(parsed.camera.fovy, 60.0);
        assert_eq!(parsed.camera.distance, CameraOptions::default().distance);
        assert_eq!(parsed.colors, ColorOptions::default());
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let parsed: Options = toml::from_str("").unwrap();
        assert_eq!(parsed, Options::default());
    }
}
