use chrono_tz::Tz;
use eyre::{eyre, Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for talking to the hangout API.
///
/// ## Environment Variables
///
/// - `HANGOUT_API_URL`: Base URL of the API (default: "http://localhost:3000")
/// - `HANGOUT_TIMEZONE`: IANA timezone slots are entered in (default: "UTC")
/// - `HANGOUT_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
/// - `LOG_LEVEL`: Logging level (default: "info")
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash
    pub api_base_url: String,
    /// Timezone local slot times are interpreted in
    pub timezone: Tz,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Log level for the application
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            timezone: Tz::UTC,
            request_timeout: 30,
            log_level: Level::INFO,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("HANGOUT_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);
        if api_base_url.is_empty() {
            return Err(eyre!("HANGOUT_API_URL must not be empty"));
        }

        let timezone = match lookup("HANGOUT_TIMEZONE") {
            Some(name) => hangout_core::timezone::parse_timezone(&name)
                .wrap_err("Invalid HANGOUT_TIMEZONE value")?,
            None => defaults.timezone,
        };

        let request_timeout = match lookup("HANGOUT_REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .wrap_err("Invalid HANGOUT_REQUEST_TIMEOUT_SECONDS value")?,
            None => defaults.request_timeout,
        };

        let log_level = lookup("LOG_LEVEL")
            .map(|raw| parse_log_level(&raw))
            .unwrap_or(defaults.log_level);

        Ok(Self {
            api_base_url,
            timezone,
            request_timeout,
            log_level,
        })
    }

    /// Full URL of an API path such as `/calendars`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level, falling back to `INFO`.
pub fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
