//! Service endpoints

use crate::{VerdraError, VerdraResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Where the scan and signup services live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the scan API; requests go to `{scan_api_url}/scan`
    pub scan_api_url: String,
    /// Full URL of the beta-signup endpoint
    pub signup_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scan_api_url: std::env::var("VERDRA_SCAN_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            signup_url: std::env::var("VERDRA_SIGNUP_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000/api/beta-signup".to_string()),
            user_agent: std::env::var("VERDRA_USER_AGENT")
                .unwrap_or_else(|_| format!("verdra-site/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl ClientConfig {
    /// Read from the environment and validate
    pub fn from_env() -> VerdraResult<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> VerdraResult<()> {
        check_http_url("VERDRA_SCAN_API_URL", &self.scan_api_url)?;
        check_http_url("VERDRA_SIGNUP_URL", &self.signup_url)?;
        if self.user_agent.trim().is_empty() {
            return Err(VerdraError::Config("user agent must not be empty".to_string()));
        }
        Ok(())
    }

    /// `{scan_api_url}/scan`, tolerant of a trailing slash on the base
    pub fn scan_endpoint(&self) -> String {
        format!("{}/scan", self.scan_api_url.trim_end_matches('/'))
    }
}

fn check_http_url(name: &str, value: &str) -> VerdraResult<()> {
    let invalid = || {
        VerdraError::Config(format!(
            "{} must be an http(s) URL, got {:?}",
            name, value
        ))
    };

    let url = Url::parse(value).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some_and(|host| !host.is_empty()) => Ok(()),
        _ => Err(invalid()),
    }
}
