use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Grant, Organization};

/// Request to score a single grant
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreGrantRequest {
    #[validate(nested)]
    pub organization: Organization,
    pub grant: Grant,
}

/// Request to rank a batch of grants
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesRequest {
    #[validate(nested)]
    pub organization: Organization,
    #[validate(length(min = 1))]
    pub grants: Vec<Grant>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<usize>,
}
