// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Organization, Grant, OrgType, LegalStructure, MatchResult, ScoreBreakdown, RankedGrant, ScoringWeights};
pub use requests::{ScoreGrantRequest, TopMatchesRequest};
pub use responses::{TopMatchesResponse, HealthResponse, ErrorResponse};
