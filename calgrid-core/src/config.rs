//! calgrid configuration.
//!
//! Read from `~/.config/calgrid/config.toml`, with `CALGRID_*` environment
//! variables taking precedence over the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, Environment, File};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::clock::SystemClock;
use crate::error::{CalGridError, CalGridResult};

static DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const ENV_PREFIX: &str = "CALGRID";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CalgridConfig {
    /// Base URL of the calendar API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// IANA timezone used to decide what "today" is; local time when unset
    #[serde(default)]
    pub timezone: Option<String>,

    /// Reject events whose date is not a valid YYYY-MM-DD day
    #[serde(default)]
    pub strict_dates: bool,
}

impl Default for CalgridConfig {
    fn default() -> Self {
        CalgridConfig {
            api_base_url: default_api_base_url(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            timezone: None,
            strict_dates: false,
        }
    }
}

impl CalgridConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented default file
    /// on first run.
    pub fn load() -> CalGridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CalGridResult<Self> {
        Self::build(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn build(path: &Path, env: Environment) -> CalGridResult<Self> {
        let config: CalgridConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env.try_parsing(true))
            .build()
            .map_err(|e| CalGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalGridError::Config(e.to_string()))?;

        config.tz()?;
        Ok(config)
    }

    /// Configured timezone, if any.
    pub fn tz(&self) -> CalGridResult<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| CalGridError::UnknownTimezone(name.to_string()))
            })
            .transpose()
    }

    pub fn clock(&self) -> CalGridResult<SystemClock> {
        Ok(SystemClock::new(self.tz()?))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalGridResult<()> {
        let contents = format!(
            "\
# calgrid configuration

# Calendar API the client talks to:
# api_base_url = \"{}\"

# Seconds before a request is abandoned:
# request_timeout_secs = {}

# Timezone that decides which day is today (defaults to local time):
# timezone = \"Europe/Amsterdam\"

# Refuse events whose date is not a real YYYY-MM-DD day:
# strict_dates = false
",
            DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
