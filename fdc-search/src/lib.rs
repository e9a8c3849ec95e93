//! # fdc-search
//!
//! Resolve a free-text ingredient name to one generic food record from
//! USDA FoodData Central and return its nutrient profile per 100 g.
//!
//! ## Design
//!
//! - Tiered retrieval: Foundation/SR Legacy first, then Survey (FNDDS),
//!   then everything except Branded
//! - Multi-factor relevance scoring picks the canonical generic form
//!   ("Milk, whole") over compound or processed foods ("Cheese, milk")
//! - One query is resolved end to end before the next; no caching, no
//!   retries, no shared state between calls
//! - "No match" is an explicit [`Resolution::NotFound`], distinct from
//!   upstream failure
//!
//! ## Security
//!
//! - API keys are redacted from `Debug` output and never appear in errors
//! - Queries are logged only at trace level

pub mod backend;
pub mod backends;
pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod profile;
pub mod types;

pub use backend::FoodSearchBackend;
pub use backends::FdcClient;
pub use config::FdcConfig;
pub use error::{Result, SearchError};
pub use orchestrator::ranking::ScoredCandidate;
pub use orchestrator::retrieval::Tier;
pub use profile::{NutritionProfile, ProfileNutrient};
pub use types::{DataType, FoodCategory, FoodRecord, NutrientEntry, SearchResponse};

use orchestrator::ranking::{rank_candidates, select_best};
use orchestrator::retrieval::retrieve_candidates;
use serde::Serialize;

/// Outcome of resolving one ingredient query.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The best generic match, projected to a profile.
    Found(NutritionProfile),
    /// No generic record matched in any tier.
    NotFound {
        /// The (trimmed) query that was searched.
        query: String,
    },
}

impl Resolution {
    /// The profile, if one was found.
    pub fn profile(&self) -> Option<&NutritionProfile> {
        match self {
            Self::Found(profile) => Some(profile),
            Self::NotFound { .. } => None,
        }
    }

    /// Consume into the profile, if one was found.
    pub fn into_profile(self) -> Option<NutritionProfile> {
        match self {
            Self::Found(profile) => Some(profile),
            Self::NotFound { .. } => None,
        }
    }
}

/// Full ranking behind a resolution, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    /// The (trimmed) query.
    pub query: String,
    /// Tier whose candidates were ranked; `None` if nothing matched.
    pub tier: Option<Tier>,
    /// Every candidate, best first.
    pub ranking: Vec<ScoredCandidate>,
}

/// Resolve an ingredient against FoodData Central.
///
/// Builds an [`FdcClient`] from `config` and delegates to [`resolve_with`].
/// `credential` overrides `config.api_key` for this call.
///
/// # Errors
///
/// Returns [`SearchError::InvalidInput`] for an empty query,
/// [`SearchError::Config`] for an invalid configuration, and an upstream
/// variant ([`SearchError::is_upstream`]) if any search call fails.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> fdc_search::Result<()> {
/// let config = fdc_search::FdcConfig::default().with_api_key("DEMO_KEY");
/// match fdc_search::resolve("whole milk", &config, None).await? {
///     fdc_search::Resolution::Found(profile) => {
///         println!("{} ({} nutrients)", profile.description, profile.nutrients.len());
///     }
///     fdc_search::Resolution::NotFound { query } => println!("nothing for {query}"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn resolve(
    query: &str,
    config: &FdcConfig,
    credential: Option<&str>,
) -> Result<Resolution> {
    let query = validate_query(query)?;
    let client = FdcClient::new(config.clone())?;
    resolve_with(&client, query, credential).await
}

/// Resolve an ingredient using any [`FoodSearchBackend`].
///
/// # Errors
///
/// Same as [`resolve`], minus configuration errors.
pub async fn resolve_with<B: FoodSearchBackend>(
    backend: &B,
    query: &str,
    credential: Option<&str>,
) -> Result<Resolution> {
    let query = validate_query(query)?;
    tracing::trace!(query, "resolving ingredient");

    let retrieval = retrieve_candidates(backend, query, credential).await?;

    match select_best(query, retrieval.candidates) {
        Some(best) => {
            tracing::debug!(
                fdc_id = ?best.food.fdc_id,
                score = best.score,
                position = best.position,
                "selected candidate"
            );
            Ok(Resolution::Found(NutritionProfile::from_food(best.food)))
        }
        None => Ok(Resolution::NotFound {
            query: query.to_owned(),
        }),
    }
}

/// Retrieve and rank candidates without selecting, against FoodData Central.
///
/// # Errors
///
/// Same as [`resolve`].
pub async fn explain(
    query: &str,
    config: &FdcConfig,
    credential: Option<&str>,
) -> Result<Explanation> {
    let query = validate_query(query)?;
    let client = FdcClient::new(config.clone())?;
    explain_with(&client, query, credential).await
}

/// Retrieve and rank candidates without selecting, using any backend.
///
/// The first entry of [`Explanation::ranking`] is what [`resolve_with`]
/// would select.
///
/// # Errors
///
/// Same as [`resolve_with`].
pub async fn explain_with<B: FoodSearchBackend>(
    backend: &B,
    query: &str,
    credential: Option<&str>,
) -> Result<Explanation> {
    let query = validate_query(query)?;
    let retrieval = retrieve_candidates(backend, query, credential).await?;
    Ok(Explanation {
        query: query.to_owned(),
        tier: retrieval.tier,
        ranking: rank_candidates(query, retrieval.candidates),
    })
}

fn validate_query(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SearchError::InvalidInput(
            "ingredient name cannot be empty".into(),
        ));
    }
    Ok(trimmed)
}
