//! USDA FoodData Central `/foods/search` client.
//!
//! Issues a single `GET` per call with the query, optional `dataType`
//! filter, optional page size and API key as query parameters. No caching
//! and no retries: a failed request surfaces immediately.

use crate::backend::FoodSearchBackend;
use crate::config::FdcConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::SearchResponse;

/// Longest upstream error body kept in [`SearchError::Status`].
const MAX_ERROR_BODY_BYTES: usize = 512;

/// FoodData Central search client.
#[derive(Debug, Clone)]
pub struct FdcClient {
    config: FdcConfig,
    client: reqwest::Client,
}

impl FdcClient {
    /// Create a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: FdcConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self { config, client })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &FdcConfig {
        &self.config
    }

    fn query_params(
        &self,
        query: &str,
        data_type: Option<&str>,
        credential: Option<&str>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![("query", query.to_owned())];
        if let Some(data_type) = data_type {
            params.push(("dataType", data_type.to_owned()));
        }
        if let Some(size) = self.config.page_size {
            params.push(("pageSize", size.to_string()));
        }
        if let Some(key) = credential.or(self.config.api_key.as_deref()) {
            params.push(("api_key", key.to_owned()));
        }
        params
    }
}

impl FoodSearchBackend for FdcClient {
    async fn search(
        &self,
        query: &str,
        data_type: Option<&str>,
        credential: Option<&str>,
    ) -> Result<SearchResponse, SearchError> {
        tracing::trace!(query, data_type, "FoodData Central search");

        let response = self
            .client
            .get(self.config.search_endpoint())
            .header("Accept", "application/json")
            .query(&self.query_params(query, data_type, credential))
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("FoodData Central request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: truncate_body(body.trim()),
            });
        }

        let body = response.text().await.map_err(|e| {
            SearchError::Http(format!(
                "FoodData Central response read failed: {}",
                e.without_url()
            ))
        })?;

        tracing::trace!(bytes = body.len(), "FoodData Central response received");

        parse_search_response(&body)
    }
}

/// Parse a `/foods/search` response body.
///
/// Extracted as a separate function for testability with canned JSON.
pub(crate) fn parse_search_response(body: &str) -> Result<SearchResponse, SearchError> {
    serde_json::from_str(body)
        .map_err(|e| SearchError::Decode(format!("invalid FoodData Central response: {e}")))
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_BYTES {
        return body.to_owned();
    }
    let mut end = MAX_ERROR_BODY_BYTES;
    while end > 0 && !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
