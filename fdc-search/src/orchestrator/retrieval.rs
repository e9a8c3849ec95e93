//! Tiered candidate retrieval.
//!
//! Searches FoodData Central in order of trust and stops at the first tier
//! that returns anything:
//!
//! 1. [`Tier::Reference`]: Foundation and SR Legacy
//! 2. [`Tier::Survey`]: Survey (FNDDS)
//! 3. [`Tier::Unrestricted`]: every data type, with Branded records dropped
//!
//! Tiers are never merged, and they are awaited strictly one after another.

use std::fmt;

use serde::Serialize;

use crate::backend::FoodSearchBackend;
use crate::error::SearchError;
use crate::types::FoodRecord;

/// One step of the fallback sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    /// Foundation and SR Legacy reference data.
    Reference,
    /// Survey (FNDDS) data.
    Survey,
    /// Any data type except Branded.
    Unrestricted,
}

impl Tier {
    /// Tiers in the order they are tried.
    pub const ORDER: [Tier; 3] = [Self::Reference, Self::Survey, Self::Unrestricted];

    /// The upstream `dataType` filter for this tier, if any.
    pub fn data_type_filter(self) -> Option<&'static str> {
        match self {
            Self::Reference => Some("Foundation,SR Legacy"),
            Self::Survey => Some("Survey (FNDDS)"),
            Self::Unrestricted => None,
        }
    }

    /// Human-readable tier name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reference => "Foundation/SR Legacy",
            Self::Survey => "Survey (FNDDS)",
            Self::Unrestricted => "all non-branded",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of candidate retrieval.
#[derive(Debug, Clone, Default)]
pub struct Retrieval {
    /// The tier whose results were used; `None` when every tier was empty.
    pub tier: Option<Tier>,
    /// Candidates in upstream order.
    pub candidates: Vec<FoodRecord>,
}

/// Retrieve candidate foods for `query` using the tiered fallback.
///
/// # Pipeline
///
/// 1. Search the next tier with its `dataType` filter
/// 2. For [`Tier::Unrestricted`], drop Branded records locally
/// 3. Return the first non-empty result set, tagged with its tier
/// 4. If every tier is empty, return an empty [`Retrieval`]
///
/// # Errors
///
/// Any backend error aborts retrieval immediately; later tiers are not
/// tried and nothing is retried.
pub async fn retrieve_candidates<B: FoodSearchBackend>(
    backend: &B,
    query: &str,
    credential: Option<&str>,
) -> Result<Retrieval, SearchError> {
    for tier in Tier::ORDER {
        let response = backend
            .search(query, tier.data_type_filter(), credential)
            .await
            .inspect_err(|err| tracing::warn!(%tier, error = %err, "tier search failed"))?;

        let mut candidates = response.foods;
        if tier == Tier::Unrestricted {
            candidates.retain(|food| !food.is_branded());
        }

        tracing::debug!(%tier, count = candidates.len(), "tier returned candidates");

        if !candidates.is_empty() {
            return Ok(Retrieval {
                tier: Some(tier),
                candidates,
            });
        }
    }

    Ok(Retrieval::default())
}
