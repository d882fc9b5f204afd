use serde::{Deserialize, Serialize};
use validator::Validate;

/// Organization profile used as the seeking side of a match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub org_type: Option<String>,
    #[serde(default)]
    pub legal_structure: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub vision: Option<String>,
    #[serde(default)]
    pub problem_statement: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub target_market: Option<String>,
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub funding_seeking: Option<String>,
}

impl Organization {
    /// Recognized organization type, if any
    pub fn kind(&self) -> Option<OrgType> {
        self.org_type.as_deref().and_then(OrgType::parse)
    }

    /// Recognized legal structure, if any
    pub fn legal(&self) -> Option<LegalStructure> {
        self.legal_structure.as_deref().and_then(LegalStructure::parse)
    }
}

/// Grant listing being scored against an organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub funder: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub amount_min: Option<f64>,
    #[serde(default)]
    pub amount_max: Option<f64>,
    #[serde(rename = "type", default)]
    pub grant_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    /// Two-letter state code, or `"ALL"` for nationwide grants
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// JSON-encoded array of tag strings
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub deadline: Option<chrono::NaiveDate>,
}

/// Organization types with dedicated keyword sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgType {
    Startup,
    SmallBusiness,
    Nonprofit,
    Research,
}

impl OrgType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "startup" => Some(OrgType::Startup),
            "small_business" => Some(OrgType::SmallBusiness),
            "nonprofit" => Some(OrgType::Nonprofit),
            "research" => Some(OrgType::Research),
            _ => None,
        }
    }
}

/// Legal structures with dedicated keyword sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalStructure {
    #[serde(rename = "501c3")]
    Nonprofit501c3,
    #[serde(rename = "llc")]
    Llc,
    #[serde(rename = "corp")]
    Corp,
    #[serde(rename = "sole_proprietor")]
    SoleProprietor,
}

impl LegalStructure {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "501c3" => Some(LegalStructure::Nonprofit501c3),
            "llc" => Some(LegalStructure::Llc),
            "corp" => Some(LegalStructure::Corp),
            "sole_proprietor" => Some(LegalStructure::SoleProprietor),
            _ => None,
        }
    }
}

/// Per-dimension sub-scores, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub location: u8,
    pub org_type: u8,
    pub category: u8,
    pub amount: u8,
    pub keywords: u8,
}

/// Scored compatibility between one organization and one grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub grant_id: String,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub reasons: Vec<String>,
}

/// A grant paired with its match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedGrant {
    pub grant: Grant,
    #[serde(rename = "match")]
    pub result: MatchResult,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub location: f64,
    pub org_type: f64,
    pub category: f64,
    pub amount: f64,
    pub keywords: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.location + self.org_type + self.category + self.amount + self.keywords
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 0.20,
            org_type: 0.25,
            category: 0.20,
            amount: 0.15,
            keywords: 0.20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_type_parse() {
        assert_eq!(OrgType::parse("startup"), Some(OrgType::Startup));
        assert_eq!(OrgType::parse(" Small_Business "), Some(OrgType::SmallBusiness));
        assert_eq!(OrgType::parse("cooperative"), None);
    }

    #[test]
    fn test_legal_structure_parse() {
        assert_eq!(LegalStructure::parse("501C3"), Some(LegalStructure::Nonprofit501c3));
        assert_eq!(LegalStructure::parse("sole_proprietor"), Some(LegalStructure::SoleProprietor));
        assert_eq!(LegalStructure::parse("partnership"), None);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((ScoringWeights::default().total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_grant_deserializes_camel_case() {
        let grant: Grant = serde_json::from_value(serde_json::json!({
            "id": "g1",
            "amountMin": 1000.0,
            "amountMax": 5000,
            "type": "federal",
            "state": "ALL",
            "tags": "[\"ai\"]",
            "deadline": "2025-06-30"
        }))
        .unwrap();

        assert_eq!(grant.amount_min, Some(1000.0));
        assert_eq!(grant.amount_max, Some(5000.0));
        assert_eq!(grant.grant_type.as_deref(), Some("federal"));
        assert!(grant.deadline.is_some());
    }

    #[test]
    fn test_match_result_serializes_camel_case() {
        let result = MatchResult {
            grant_id: "g1".to_string(),
            score: 70,
            breakdown: ScoreBreakdown { org_type: 65, ..Default::default() },
            reasons: vec!["x".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["grantId"], "g1");
        assert_eq!(json["breakdown"]["orgType"], 65);
    }
}
