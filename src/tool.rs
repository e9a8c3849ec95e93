//! Nutrition lookup tool: resolves an ingredient to a nutrition profile.
//!
//! Hosts call [`NutritionTool::execute`] with JSON arguments and get back a
//! [`ToolOutcome`] that serializes either to the profile itself or to an
//! `{ "error", "message", "query" }` object. Failures never escape as Rust
//! errors, so every request gets exactly one JSON answer.

use fdc_search::{FdcClient, FdcConfig, FoodSearchBackend, NutritionProfile, Resolution, SearchError};
use serde::{Deserialize, Serialize};

/// Tool that looks up the generic nutrition profile of an ingredient.
///
/// # Arguments (JSON)
///
/// - `query` (string, required): the ingredient name, e.g. `"whole milk"`
pub struct NutritionTool<B = FdcClient> {
    backend: B,
}

impl NutritionTool<FdcClient> {
    /// Create a tool backed by FoodData Central.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid.
    pub fn from_config(config: FdcConfig) -> Result<Self, SearchError> {
        Ok(Self::new(FdcClient::new(config)?))
    }
}

impl<B: FoodSearchBackend> NutritionTool<B> {
    /// Create a tool over any search backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Tool name as registered with hosts.
    pub fn name(&self) -> &str {
        "get_ingredient_nutrition_profile"
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        "Get the generic (non-branded) nutrition profile of an ingredient from USDA \
         FoodData Central, standardized per 100 grams."
    }

    /// JSON Schema of the tool arguments.
    pub fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The ingredient to look up (e.g. 'whole milk', 'apple', 'bread')"
                }
            },
            "required": ["query"]
        })
    }

    /// Execute the tool with JSON arguments.
    pub async fn execute(&self, args: serde_json::Value) -> ToolOutcome {
        match serde_json::from_value::<ToolArgs>(args) {
            Ok(args) => self.lookup(&args.query).await,
            Err(e) => ToolOutcome::error(
                ToolErrorKind::InvalidInput,
                format!("Invalid arguments: {e}."),
                None,
            ),
        }
    }

    /// Resolve one ingredient name.
    pub async fn lookup(&self, query: &str) -> ToolOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return ToolOutcome::error(
                ToolErrorKind::InvalidInput,
                "Ingredient name cannot be empty.",
                Some(query.to_owned()),
            );
        }

        match fdc_search::resolve_with(&self.backend, trimmed, None).await {
            Ok(Resolution::Found(profile)) => ToolOutcome::Profile(profile),
            Ok(Resolution::NotFound { .. }) => ToolOutcome::error(
                ToolErrorKind::NotFound,
                format!(
                    "No generic nutrition data found for '{query}'. Try a different ingredient name."
                ),
                Some(query.to_owned()),
            ),
            Err(SearchError::InvalidInput(message)) => {
                ToolOutcome::error(ToolErrorKind::InvalidInput, message, Some(query.to_owned()))
            }
            Err(e) => {
                tracing::warn!(error = %e, "nutrition lookup failed");
                ToolOutcome::error(
                    ToolErrorKind::RequestFailed,
                    e.to_string(),
                    Some(query.to_owned()),
                )
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ToolArgs {
    query: String,
}

/// Result of one tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    /// The resolved profile.
    Profile(NutritionProfile),
    /// A failure, as a JSON error object.
    Error(ToolError),
}

impl ToolOutcome {
    /// Build an error outcome.
    pub fn error(kind: ToolErrorKind, message: impl Into<String>, query: Option<String>) -> Self {
        Self::Error(ToolError {
            error: kind,
            message: message.into(),
            query,
        })
    }

    /// The profile, if the lookup succeeded.
    pub fn profile(&self) -> Option<&NutritionProfile> {
        match self {
            Self::Profile(profile) => Some(profile),
            Self::Error(_) => None,
        }
    }

    /// The error kind, if the lookup failed.
    pub fn error_kind(&self) -> Option<ToolErrorKind> {
        match self {
            Self::Profile(_) => None,
            Self::Error(err) => Some(err.error),
        }
    }
}

/// Error object returned to hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolError {
    /// Failure category.
    pub error: ToolErrorKind,
    /// Human-readable detail.
    pub message: String,
    /// The query as received; absent when the request carried none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Failure category reported to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolErrorKind {
    /// Empty query or malformed arguments.
    #[serde(rename = "Invalid input")]
    InvalidInput,
    /// No generic record matched.
    #[serde(rename = "Ingredient not found")]
    NotFound,
    /// The upstream search failed.
    #[serde(rename = "API request failed")]
    RequestFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdc_search::{DataType, FoodRecord, SearchResponse};
    use serde_json::json;

    /// Backend returning the same foods for every tier, or failing.
    struct FixedBackend(Option<Vec<FoodRecord>>);

    impl FoodSearchBackend for FixedBackend {
        async fn search(
            &self,
            _query: &str,
            _data_type: Option<&str>,
            _credential: Option<&str>,
        ) -> Result<SearchResponse, SearchError> {
            match &self.0 {
                Some(foods) => Ok(SearchResponse {
                    foods: foods.clone(),
                    total_hits: None,
                }),
                None => Err(SearchError::Status {
                    status: 503,
                    body: "unavailable".into(),
                }),
            }
        }
    }

    fn apple() -> FoodRecord {
        FoodRecord {
            fdc_id: Some(171_688),
            description: "Apples, raw, with skin".into(),
            data_type: Some(DataType::SrLegacy),
            food_category: None,
            common_names: None,
            additional_descriptions: None,
            food_nutrients: vec![],
        }
    }

    #[test]
    fn schema_has_required_query() {
        let tool = NutritionTool::new(FixedBackend(Some(vec![])));
        let schema = tool.schema();
        assert_eq!(schema["required"], json!(["query"]));
        assert_eq!(schema["properties"]["query"]["type"], "string");
        assert_eq!(tool.name(), "get_ingredient_nutrition_profile");
    }

    #[tokio::test]
    async fn found_returns_profile_json() {
        let tool = NutritionTool::new(FixedBackend(Some(vec![apple()])));
        let outcome = tool.execute(json!({"query": " apple "})).await;
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json["fdcId"], 171_688);
        assert_eq!(json["servingSize"], 100);
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn empty_query_is_invalid_input() {
        let tool = NutritionTool::new(FixedBackend(None));
        let outcome = tool.execute(json!({"query": "   "})).await;
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json["error"], "Invalid input");
        assert_eq!(json["message"], "Ingredient name cannot be empty.");
    }

    #[tokio::test]
    async fn missing_query_is_invalid_input() {
        let tool = NutritionTool::new(FixedBackend(None));
        let outcome = tool.execute(json!({"ingredient": "apple"})).await;
        assert_eq!(outcome.error_kind(), Some(ToolErrorKind::InvalidInput));
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert!(json.get("query").is_none());
    }

    #[tokio::test]
    async fn no_match_is_not_found_with_query() {
        let tool = NutritionTool::new(FixedBackend(Some(vec![])));
        let outcome = tool.lookup("banana").await;
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert_eq!(json["error"], "Ingredient not found");
        assert_eq!(json["query"], "banana");
        assert!(json["message"].as_str().unwrap_or_default().contains("'banana'"));
    }

    #[tokio::test]
    async fn error_outcomes_echo_query_as_received() {
        let tool = NutritionTool::new(FixedBackend(Some(vec![])));
        let json = serde_json::to_value(tool.lookup("  Banana ").await).expect("serialize");
        assert_eq!(json["query"], "  Banana ");

        let tool = NutritionTool::new(FixedBackend(None));
        let json = serde_json::to_value(tool.lookup(" apple\n").await).expect("serialize");
        assert_eq!(json["error"], "API request failed");
        assert_eq!(json["query"], " apple\n");
    }

    #[tokio::test]
    async fn upstream_failure_is_request_failed() {
        let tool = NutritionTool::new(FixedBackend(None));
        let outcome = tool.lookup("apple").await;
        assert_eq!(outcome.error_kind(), Some(ToolErrorKind::RequestFailed));
        let json = serde_json::to_value(&outcome).expect("serialize");
        assert!(json["message"].as_str().unwrap_or_default().contains("503"));
    }

    #[test]
    fn outcome_round_trips_error_shape() {
        let outcome = ToolOutcome::error(ToolErrorKind::NotFound, "nothing", Some("kale".into()));
        let text = serde_json::to_string(&outcome).expect("serialize");
        let back: ToolOutcome = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, outcome);
    }
}
