use crate::error::{config_error, env_error, AppResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default request timeout for availability API calls, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the admin console backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the booking-platform REST API
    pub api_base_url: String,
    /// Optional bearer token attached to availability API requests
    pub api_token: Option<String>,
    /// Timezone the account's wall-clock times are interpreted in
    pub timezone: String,
    /// Request timeout for API calls in seconds
    pub request_timeout_secs: u64,
}

/// Optional TOML overrides read from `config/fieldbook.toml`
#[derive(Debug, Default, Deserialize)]
struct FileOverrides {
    api_base_url: Option<String>,
    api_token: Option<String>,
    timezone: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut api_base_url =
            env::var("FIELDBOOK_API_URL").map_err(|_| env_error("FIELDBOOK_API_URL"))?;
        let mut api_token = env::var("FIELDBOOK_API_TOKEN").ok();
        let mut timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from("UTC"));
        let mut request_timeout_secs = DEFAULT_REQUEST_TIMEOUT_SECS;

        // Merge file overrides if the file exists
        if let Ok(content) = fs::read_to_string("config/fieldbook.toml") {
            let overrides: FileOverrides = toml::from_str(&content)?;
            if let Some(value) = overrides.api_base_url {
                api_base_url = value;
            }
            if let Some(value) = overrides.api_token {
                api_token = Some(value);
            }
            if let Some(value) = overrides.timezone {
                timezone = value;
            }
            if let Some(value) = overrides.request_timeout_secs {
                request_timeout_secs = value;
            }
        }

        // The timezone must be a real IANA zone name
        timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", timezone)))?;

        if url::Url::parse(&api_base_url).is_err() {
            return Err(config_error(&format!(
                "Invalid FIELDBOOK_API_URL: {}",
                api_base_url
            )));
        }

        Ok(Config {
            api_base_url,
            api_token,
            timezone,
            request_timeout_secs,
        })
    }
}
