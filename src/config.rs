use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub icons: IconConfig,
    pub tree: TreeConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Directory holding `<icon-name>.png` images (unset = no images)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,
    /// Show text tags for icons
    pub glyphs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Maximum depth expanded by the `tree` command
    pub max_depth: usize,
    /// Prefix rows with icon tags
    pub show_icons: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Color scheme: auto, dark, light, none
    pub color_scheme: String,
    /// Expand the trailer on startup
    pub expand_root: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            glyphs: true,
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            show_icons: true,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            color_scheme: "auto".to_string(),
            expand_root: true,
        }
    }
}

const COLOR_SCHEMES: &[&str] = &["auto", "dark", "light", "none"];

impl Config {
    /// Load configuration from `path`, or from the default location when
    /// no path is given. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;

        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded config file");

        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/cos-explorer/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cos-explorer").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tree.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "tree.max_depth must be at least 1".into(),
            ));
        }
        if !COLOR_SCHEMES.contains(&self.tui.color_scheme.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "tui.color_scheme must be one of {}, got '{}'",
                COLOR_SCHEMES.join(", "),
                self.tui.color_scheme
            )));
        }
        Ok(())
    }
}
