//! Grant Match - deterministic grant-to-organization match scoring
//!
//! The `core` module holds the scoring engine: five independent sub-scores
//! (location, organization type, category, amount, keywords) combined into a
//! 0-100 score with human-readable reasons, plus stable batch ranking.
//! `routes` exposes the engine over HTTP without any storage of its own.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, get_top_matches, Matcher, TopMatches};
pub use models::{Organization, Grant, MatchResult, ScoreBreakdown, RankedGrant, ScoringWeights};
