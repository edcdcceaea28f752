//! Configuration file structure for .texwc.toml
//!
//! Configuration files can be placed in:
//! - User home directory: ~/.texwc.toml (user defaults)
//! - Project directory: ./.texwc.toml (project defaults)
//! - Custom location via --config flag (replaces both)
//!
//! Precedence order (highest to lowest):
//! 1. Command-line arguments (--format, --mode, --compact)
//! 2. Project config (./.texwc.toml)
//! 3. User config (~/.texwc.toml)
//! 4. Built-in defaults
//!
//! ```toml
//! [count]
//! format = "json"   # text or json
//! mode = "auto"     # auto, latex or plain
//! compact = false
//! ```

use crate::render::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use texwc_core::{ModeOverride, TexwcError};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = ".texwc.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Defaults for counting and output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<CountConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ModeOverride>,

    /// Compact JSON output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact: Option<bool>,
}

/// Settings after layering CLI flags over config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub format: OutputFormat,
    pub mode: ModeOverride,
    pub compact: bool,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let config = toml::from_str(content)
            .map_err(|e| TexwcError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load the explicit config, or discover user and project configs.
    ///
    /// An explicit path must load; discovered files that fail are skipped with
    /// a warning.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let user = dirs::home_dir()
                    .and_then(|home| Self::load_optional(&home.join(CONFIG_FILE_NAME)));
                let project = Self::load_optional(&PathBuf::from(CONFIG_FILE_NAME));
                Ok(Self::merge(user, project))
            }
        }
    }

    fn load_optional(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                None
            }
        }
    }

    /// Merge configs field by field; project values win over user values.
    #[must_use]
    pub fn merge(user: Option<Self>, project: Option<Self>) -> Self {
        let user = user.and_then(|c| c.count).unwrap_or_default();
        let project = project.and_then(|c| c.count).unwrap_or_default();

        let merged = CountConfig {
            format: project.format.or(user.format),
            mode: project.mode.or(user.mode),
            compact: project.compact.or(user.compact),
        };

        Self {
            count: (merged != CountConfig::default()).then_some(merged),
        }
    }

    /// Apply CLI flags on top of this config.
    #[must_use]
    pub fn settings(
        &self,
        format: Option<OutputFormat>,
        mode: Option<ModeOverride>,
        compact: bool,
    ) -> Settings {
        let count = self.count.unwrap_or_default();
        Settings {
            format: format.or(count.format).unwrap_or_default(),
            mode: mode.or(count.mode).unwrap_or_default(),
            compact: compact || count.compact.unwrap_or(false),
        }
    }
}
