//! Shared HTTP client construction for FoodData Central requests.

use crate::config::FdcConfig;
use crate::error::SearchError;
use std::time::Duration;

/// User-Agent sent when the configuration does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("fdc-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for FoodData Central.
///
/// The client has:
/// - Timeout from config
/// - Configured or default User-Agent
/// - gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &FdcConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_agent_names_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("fdc-search/"));
    }

    #[test]
    fn build_client_with_default_config() {
        assert!(build_client(&FdcConfig::default()).is_ok());
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = FdcConfig {
            user_agent: Some("PantryBot/1.0".into()),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }
}
