//! # compscan-config
//!
//! Layered configuration loading for compscan using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COMPSCAN_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.compscan/config.toml`
//! 4. User-level `~/.config/compscan/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `COMPSCAN_SCAN__SKIP_TESTS` -> `scan.skip_tests`,
//! `COMPSCAN_EXTRACT__MAX_CONDITION_LEN` -> `extract.max_condition_len`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use compscan_config::CompscanConfig;
//!
//! let config = CompscanConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("scanning {:?}", config.scan.extensions);
//! ```

mod error;
mod extract;
mod output;
mod scan;

pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use output::OutputConfig;
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompscanConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl CompscanConfig {
    /// Load configuration from the default TOML locations and the
    /// environment.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `explicit` above the project file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `explicit` does not exist,
    /// and [`ConfigError::Figment`] on parse or type errors.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.exists()
        {
            return Err(ConfigError::invalid(
                "config",
                format!("file not found: {}", path.display()),
            ));
        }
        Self::figment_with(explicit)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain without an explicit file.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".compscan/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: --config
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("COMPSCAN_").split("__"))
    }

    /// Reject values the scanner cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "scan.extensions",
                "at least one extension is required",
            ));
        }
        if self.extract.max_condition_len == 0 {
            return Err(ConfigError::invalid(
                "extract.max_condition_len",
                "must be greater than zero",
            ));
        }
        if self.extract.min_text_len > self.extract.max_text_len {
            return Err(ConfigError::invalid(
                "extract.min_text_len",
                format!(
                    "{} exceeds extract.max_text_len ({})",
                    self.extract.min_text_len, self.extract.max_text_len
                ),
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("compscan").join("config.toml"))
    }

    /// Load `.env` from the current directory. Silently does nothing if
    /// there is none.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
