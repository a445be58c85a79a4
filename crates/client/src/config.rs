//! Client configuration, read once from the environment.
//!
//! | variable | default |
//! |----------|---------|
//! | `INVENTIX_API_URL` | `http://localhost:5001/inventix` |
//! | `INVENTIX_HTTP_TIMEOUT_SECS` | `30` |
//! | `INVENTIX_REPORT_DIR` | `.` |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:5001/inventix";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_url: String,
    pub timeout: Duration,
    /// Directory the report binary writes into.
    pub report_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            report_dir: PathBuf::from("."),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_url(&api_url.into()),
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let mut config = Self::default();

        if let Some(url) = lookup("INVENTIX_API_URL") {
            let url = normalize_url(&url);
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ClientError::Config(format!(
                    "INVENTIX_API_URL must be an http(s) URL, got {url:?}"
                )));
            }
            config.api_url = url;
        } else {
            tracing::warn!(default = DEFAULT_API_URL, "INVENTIX_API_URL not set; using default");
        }

        if let Some(raw) = lookup("INVENTIX_HTTP_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClientError::Config(format!("INVENTIX_HTTP_TIMEOUT_SECS must be a whole number, got {raw:?}"))
            })?;
            if secs == 0 {
                return Err(ClientError::Config("INVENTIX_HTTP_TIMEOUT_SECS must be positive".into()));
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(dir) = lookup("INVENTIX_REPORT_DIR") {
            if !dir.trim().is_empty() {
                config.report_dir = PathBuf::from(dir);
            }
        }

        Ok(config)
    }
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
