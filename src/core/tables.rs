//! Static reference tables used by the scoring engine.
//!
//! Every table here is immutable data. The only lazily-built structure is the
//! state → region index, which is constructed once on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{LegalStructure, OrgType};

/// US geographic buckets used for partial location credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Northeast,
    Southeast,
    Midwest,
    Southwest,
    West,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Northeast,
        Region::Southeast,
        Region::Midwest,
        Region::Southwest,
        Region::West,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Northeast => "Northeast",
            Region::Southeast => "Southeast",
            Region::Midwest => "Midwest",
            Region::Southwest => "Southwest",
            Region::West => "West",
        }
    }

    /// Parse a region name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Option<Region> {
        let name = name.trim();
        Region::ALL
            .into_iter()
            .find(|region| region.name().eq_ignore_ascii_case(name))
    }

    pub fn states(self) -> &'static [&'static str] {
        match self {
            Region::Northeast => &["CT", "ME", "MA", "NH", "RI", "VT", "NJ", "NY", "PA"],
            Region::Southeast => &[
                "AL", "AR", "DE", "DC", "FL", "GA", "KY", "LA", "MD", "MS", "NC", "SC", "TN", "VA",
                "WV",
            ],
            Region::Midwest => &[
                "IL", "IN", "IA", "KS", "MI", "MN", "MO", "NE", "ND", "OH", "SD", "WI",
            ],
            Region::Southwest => &["AZ", "NM", "OK", "TX"],
            Region::West => &[
                "AK", "CA", "CO", "HI", "ID", "MT", "NV", "OR", "UT", "WA", "WY",
            ],
        }
    }
}

static STATE_REGIONS: Lazy<HashMap<&'static str, Region>> = Lazy::new(|| {
    Region::ALL
        .into_iter()
        .flat_map(|region| region.states().iter().map(move |state| (*state, region)))
        .collect()
});

/// Look up the region bucket for a two-letter state code
pub fn region_for_state(state: &str) -> Option<Region> {
    STATE_REGIONS
        .get(state.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Eligibility vocabulary associated with each organization type
pub fn org_type_keywords(org_type: OrgType) -> &'static [&'static str] {
    match org_type {
        OrgType::Startup => &[
            "startup",
            "start-up",
            "early-stage",
            "early stage",
            "emerging",
            "entrepreneur",
            "venture",
            "innovative",
            "small business",
            "technology",
        ],
        OrgType::SmallBusiness => &[
            "small business",
            "small_business",
            "sba",
            "sbir",
            "sttr",
            "for-profit",
            "business",
            "company",
            "enterprise",
        ],
        OrgType::Nonprofit => &[
            "nonprofit",
            "non-profit",
            "501(c)(3)",
            "501c3",
            "charitable",
            "charity",
            "community organization",
            "tax-exempt",
        ],
        OrgType::Research => &[
            "research",
            "university",
            "academic",
            "institution",
            "scientific",
            "laboratory",
            "r&d",
        ],
    }
}

/// Eligibility vocabulary associated with each legal structure
pub fn legal_structure_keywords(structure: LegalStructure) -> &'static [&'static str] {
    match structure {
        LegalStructure::Nonprofit501c3 => &[
            "501(c)(3)",
            "501c3",
            "nonprofit",
            "non-profit",
            "tax-exempt",
            "charitable",
        ],
        LegalStructure::Llc => &["llc", "limited liability", "for-profit", "small business"],
        LegalStructure::Corp => &["corporation", "corp", "c-corp", "for-profit", "company"],
        LegalStructure::SoleProprietor => &[
            "sole proprietor",
            "sole-proprietor",
            "self-employed",
            "individual",
            "small business",
        ],
    }
}

/// Industry vocabularies used for category alignment, as (industry, terms)
pub static INDUSTRIES: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "software",
            "technology",
            "tech",
            "digital",
            "ai",
            "artificial intelligence",
            "machine learning",
            "data",
            "cloud",
            "cyber",
            "platform",
            "computing",
        ],
    ),
    (
        "healthcare",
        &[
            "health",
            "medical",
            "healthcare",
            "biotech",
            "pharma",
            "clinical",
            "hospital",
            "patient",
            "disease",
            "wellness",
        ],
    ),
    (
        "cleantech",
        &[
            "clean energy",
            "renewable",
            "solar",
            "wind",
            "climate",
            "sustainable",
            "sustainability",
            "environmental",
            "carbon",
            "emissions",
        ],
    ),
    (
        "education",
        &[
            "education",
            "school",
            "student",
            "learning",
            "teaching",
            "training",
            "curriculum",
            "literacy",
        ],
    ),
    (
        "manufacturing",
        &[
            "manufacturing",
            "industrial",
            "production",
            "factory",
            "fabrication",
            "supply chain",
            "logistics",
        ],
    ),
    (
        "agriculture",
        &[
            "agriculture",
            "agricultural",
            "farm",
            "crop",
            "food",
            "rural",
            "livestock",
            "agtech",
        ],
    ),
    (
        "finance",
        &[
            "finance",
            "financial",
            "fintech",
            "banking",
            "lending",
            "payments",
            "investment",
            "insurance",
        ],
    ),
    (
        "social",
        &[
            "community",
            "social",
            "underserved",
            "equity",
            "housing",
            "poverty",
            "youth",
            "homeless",
            "justice",
        ],
    ),
    (
        "research",
        &[
            "research",
            "science",
            "scientific",
            "laboratory",
            "discovery",
            "experiment",
            "r&d",
        ],
    ),
];

/// Common English function words ignored during keyword extraction
pub static STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "have", "been", "were", "will", "with", "this", "that", "from",
    "they", "them", "their", "there", "these", "those", "what", "when", "where", "which", "who",
    "whom", "whose", "why", "how", "into", "onto", "upon", "over", "under", "about", "above",
    "below", "after", "before", "between", "through", "during", "within", "without", "also",
    "than", "then", "such", "some", "more", "most", "other", "only", "own", "same", "very",
    "just", "each", "both", "few", "its", "his", "she", "him", "may", "must", "shall", "should",
    "would", "could", "does", "did", "doing", "being", "your", "yours", "ours", "per", "via",
];

/// Whether a token is a stop word
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}
