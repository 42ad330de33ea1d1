//! Runtime configuration for the search layer.
//!
//! Layered the usual way: compiled defaults, then an optional TOML file,
//! then `ECHO_SEARCH_*` environment variables. The page limit is threaded
//! explicitly into the executor rather than read as ambient state.

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::page::PAGE_LIMIT;

/// Configuration for search execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fixed page size used for skip/limit arithmetic.
    #[serde(default = "default_page_limit")]
    pub page_limit: u64,
}

fn default_page_limit() -> u64 {
    PAGE_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_limit: default_page_limit(),
        }
    }
}

impl SearchConfig {
    /// Load configuration from environment variables only.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config: Self = Self::builder(None).build()?.try_deserialize()?;
        config.validate().map_err(config::ConfigError::Message)?;
        Ok(config)
    }

    /// Load configuration from an optional TOML file, then environment
    /// variables. A missing file falls back to defaults.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let config: Self = Self::builder(Some(path)).build()?.try_deserialize()?;
        config.validate().map_err(config::ConfigError::Message)?;
        Ok(config)
    }

    fn builder(path: Option<&Path>) -> config::builder::ConfigBuilder<config::builder::DefaultState> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder.add_source(Environment::with_prefix("ECHO_SEARCH").try_parsing(true))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.page_limit == 0 {
            return Err("page_limit must be >= 1".to_string());
        }
        Ok(())
    }
}
