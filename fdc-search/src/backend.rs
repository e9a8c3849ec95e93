//! Trait definition for the upstream food search collaborator.
//!
//! The resolver never talks HTTP directly. It asks a [`FoodSearchBackend`]
//! for keyword matches, optionally restricted to a data type filter, and
//! ranks whatever comes back. [`crate::backends::FdcClient`] is the
//! production implementation.

use crate::error::SearchError;
use crate::types::SearchResponse;

/// A keyword search over a food database.
///
/// Implementors own transport, authentication and any rate limiting; the
/// resolver performs no retries and treats every error as final.
pub trait FoodSearchBackend: Send + Sync {
    /// Run one search.
    ///
    /// # Arguments
    ///
    /// * `query`: the trimmed ingredient query.
    /// * `data_type`: upstream `dataType` filter, e.g. `"Foundation,SR Legacy"`.
    ///   `None` searches every data type.
    /// * `credential`: per-call API key overriding any configured one.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, upstream rejects it,
    /// or the response cannot be decoded.
    fn search(
        &self,
        query: &str,
        data_type: Option<&str>,
        credential: Option<&str>,
    ) -> impl std::future::Future<Output = Result<SearchResponse, SearchError>> + Send;
}
