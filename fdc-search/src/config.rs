//! FoodData Central client configuration.
//!
//! [`FdcConfig`] controls the endpoint, credential, timeout and page size
//! of upstream searches. It deserializes from a TOML/JSON table with every
//! field optional.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Default FoodData Central API root.
pub const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Largest page size FoodData Central accepts on `/foods/search`.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Configuration for the FoodData Central search client.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FdcConfig {
    /// API root, without the trailing `/foods/search`.
    pub base_url: String,
    /// Data.gov API key. A per-call credential takes precedence.
    pub api_key: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Results per upstream search. `None` leaves the upstream default.
    pub page_size: Option<u32>,
    /// Custom User-Agent string. Defaults to `fdc-search/<version>`.
    pub user_agent: Option<String>,
}

impl Default for FdcConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            timeout_seconds: 10,
            page_size: None,
            user_agent: None,
        }
    }
}

// Hand-written so the API key never reaches logs.
impl fmt::Debug for FdcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FdcConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .field("page_size", &self.page_size)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl FdcConfig {
    /// Set the API root.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` parses as an absolute `http`/`https` URL
    /// - `timeout_seconds` must be greater than 0
    /// - `page_size`, when set, must be within `1..=200`
    pub fn validate(&self) -> Result<(), SearchError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| SearchError::Config(format!("base_url is not a valid URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SearchError::Config(
                "base_url must use http or https".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if let Some(size) = self.page_size {
            if size == 0 || size > MAX_PAGE_SIZE {
                return Err(SearchError::Config(format!(
                    "page_size must be between 1 and {MAX_PAGE_SIZE}"
                )));
            }
        }
        Ok(())
    }

    /// The full `/foods/search` endpoint for this configuration.
    pub fn search_endpoint(&self) -> String {
        format!("{}/foods/search", self.base_url.trim_end_matches('/'))
    }
}
