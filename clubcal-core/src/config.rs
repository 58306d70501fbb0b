//! Global clubcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ClubcalError, ClubcalResult};
use crate::grid::FillerPolicy;
use crate::icons::{DEFAULT_ICONS_PATH, IconSet};
use crate::source::Source;

static DEFAULT_EVENTS_SOURCE: &str = "assets/events.txt";

fn default_events_source() -> String {
    DEFAULT_EVENTS_SOURCE.to_string()
}

fn default_icons_path() -> String {
    DEFAULT_ICONS_PATH.to_string()
}

/// Configuration at ~/.config/clubcal/config.toml
///
/// Every key can also be set through a `CLUBCAL_<KEY>` environment variable,
/// which wins over the file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClubcalConfig {
    /// URL or path of the events file
    #[serde(default = "default_events_source")]
    pub events_source: String,

    /// Prefix prepended to icon file names
    #[serde(default = "default_icons_path")]
    pub icons_path: String,

    #[serde(default)]
    pub filler: FillerPolicy,

    /// Page template for HTML output
    #[serde(default)]
    pub html_template: Option<PathBuf>,
}

impl Default for ClubcalConfig {
    fn default() -> Self {
        ClubcalConfig {
            events_source: default_events_source(),
            icons_path: default_icons_path(),
            filler: FillerPolicy::default(),
            html_template: None,
        }
    }
}

impl ClubcalConfig {
    pub fn config_path() -> ClubcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ClubcalError::Config("Could not determine config directory".into()))?
            .join("clubcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file first if
    /// there is none yet.
    pub fn load() -> ClubcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit file (which may be missing) plus the environment.
    pub fn load_from(path: &Path) -> ClubcalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("CLUBCAL"))
            .build()
            .map_err(|e| ClubcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ClubcalError::Config(e.to_string()))
    }

    pub fn source(&self) -> ClubcalResult<Source> {
        Source::from_location(&self.events_source)
    }

    pub fn icons(&self) -> IconSet {
        IconSet::new(self.icons_path.clone())
    }

    /// Template path with `~` expanded.
    pub fn html_template_path(&self) -> Option<PathBuf> {
        self.html_template.as_ref().map(|path| {
            PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ClubcalResult<()> {
        let contents = format!(
            "\
# clubcal configuration

# URL or path of the events file:
# events_source = \"{}\"

# Prefix for category icons (icon-<category>-small.png):
# icons_path = \"{}\"

# Cells outside the month: \"empty\" or \"adjacent\":
# filler = \"empty\"

# HTML page template with {{{{currentMonth}}}} and {{{{calendarBody}}}} placeholders:
# html_template = \"~/calendar/template.html\"
",
            DEFAULT_EVENTS_SOURCE, DEFAULT_ICONS_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClubcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ClubcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
