//! Resolution pipeline: tiered retrieval, relevance scoring, selection.
//!
//! [`retrieval`] walks the data-type tiers until one returns candidates,
//! [`scoring`] assigns each candidate a relevance score against the query,
//! and [`ranking`] sorts the scored candidates deterministically.

pub mod ranking;
pub mod retrieval;
pub mod scoring;
