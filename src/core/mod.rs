// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod tables;
pub mod text;

pub use matcher::{get_top_matches, Matcher, TopMatches, DEFAULT_TOP_LIMIT};
pub use scoring::{calculate_match_score, calculate_match_score_with, generate_reasons};
pub use tables::{region_for_state, Region};
pub use text::{extract_keywords, jaccard_similarity, parse_funding_amount};
