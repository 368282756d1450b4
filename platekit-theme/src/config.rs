//! # Style Configuration
//!
//! Where the stylesheet finds its resources. Paths are relative to the
//! working directory unless absolute.
//!
//! ## Environment Variables
//!
//! - `PLATEKIT_STYLE_CONFIG`: Path to a TOML configuration file
//! - `PLATEKIT_FONT`: Display font file, overrides the file setting
//! - `PLATEKIT_ICON`: Sample icon file, overrides the file setting
//!
//! ## Configuration File Format
//!
//! ```toml
//! [resources]
//! font = "res/fonts/FE-FONT.TTF"
//! icon = "res/icons/icon.png"
//! ```
//!
//! Missing keys keep their defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{StyleError, StyleResult};

/// Default location of the display font.
pub const DEFAULT_FONT_PATH: &str = "res/fonts/FE-FONT.TTF";
/// Default location of the sample icon.
pub const DEFAULT_ICON_PATH: &str = "res/icons/icon.png";

const ENV_CONFIG: &str = "PLATEKIT_STYLE_CONFIG";
const ENV_FONT: &str = "PLATEKIT_FONT";
const ENV_ICON: &str = "PLATEKIT_ICON";

/// Resource locations used by the style provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// The display font file.
    pub font_path: PathBuf,
    /// The sample icon file.
    pub icon_path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    resources: ResourcesSection,
}

#[derive(Debug, Default, Deserialize)]
struct ResourcesSection {
    font: Option<PathBuf>,
    icon: Option<PathBuf>,
}

impl StyleConfig {
    /// The default resource locations.
    pub fn new() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            icon_path: PathBuf::from(DEFAULT_ICON_PATH),
        }
    }

    /// Use another display font file.
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }

    /// Use another sample icon file.
    pub fn with_icon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon_path = path.into();
        self
    }

    /// Load a configuration file. Keys missing from the file keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> StyleResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|err| StyleError::config_parse(path, err))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(Self::new().merge(file.resources))
    }

    /// Configuration from the environment, falling back to defaults.
    ///
    /// An unreadable config file is logged and ignored.
    pub fn from_env_or_default() -> Self {
        let mut config = match env::var_os(ENV_CONFIG) {
            Some(path) => Self::from_file(&path).unwrap_or_else(|err| {
                log::warn!("Ignoring style config: {}", err);
                Self::new()
            }),
            None => Self::new(),
        };

        if let Some(font) = env::var_os(ENV_FONT) {
            config.font_path = PathBuf::from(font);
        }
        if let Some(icon) = env::var_os(ENV_ICON) {
            config.icon_path = PathBuf::from(icon);
        }

        config
    }

    fn merge(mut self, resources: ResourcesSection) -> Self {
        if let Some(font) = resources.font {
            self.font_path = font;
        }
        if let Some(icon) = resources.icon {
            self.icon_path = icon;
        }
        self
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new()
    }
}
