//! Runtime configuration for folio core.
//!
//! # Responsibility
//! - Collect storage, logging and text-generation settings in one value.
//! - Read the text-generation credential from `API_KEY`.
//!
//! # Invariants
//! - `API_KEY` is the only environment variable consulted.
//! - Blank credentials are treated as absent.

use crate::logging::default_log_level;
use crate::repo::portfolio_repo::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the text-generation credential.
pub const API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_TEXT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Top-level configuration consumed by `FolioApp::open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Key under which the document blob is stored.
    pub storage_key: String,
    /// SQLite file for the key-value store; `None` keeps data in memory.
    pub database_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` skips file logging.
    pub log_dir: Option<PathBuf>,
    pub text_generation: TextGenerationConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            database_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            text_generation: TextGenerationConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Defaults plus the credential from the process environment.
    pub fn from_env() -> Self {
        Self {
            text_generation: TextGenerationConfig::from_env(),
            ..Self::default()
        }
    }
}

/// Text-generation client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGenerationConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Client-level timeout. `None` (the default) waits for the service.
    pub request_timeout: Option<Duration>,
}

impl Default for TextGenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TEXT_ENDPOINT.to_string(),
            model: DEFAULT_TEXT_MODEL.to_string(),
            api_key: None,
            request_timeout: None,
        }
    }
}

impl TextGenerationConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
