//! Configuration data model.
//!
//! All structs derive `Deserialize` for loading from TOML.
//! Every field has a sensible default so the application works out of the box.

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Campaign API endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the listing endpoint, relative to `base_url`.
    #[serde(default = "default_listing_path")]
    pub listing_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listing_path: default_listing_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// UI appearance and wording.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_retry_message")]
    pub retry_message: String,
    #[serde(default = "default_retry_label")]
    pub retry_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            retry_message: default_retry_message(),
            retry_label: default_retry_label(),
        }
    }
}

/// Diagnostic log settings. Logs go to a file, never to the terminal.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_listing_path() -> String {
    "campaigns".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_user_agent() -> String {
    format!("campaign-browser/{}", env!("CARGO_PKG_VERSION"))
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_retry_message() -> String {
    "There was an error. Please check your internet connection and try again.".to_string()
}
fn default_retry_label() -> String {
    "retry".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/campaign-browser/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
