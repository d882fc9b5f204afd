use crate::core::tables::{
    legal_structure_keywords, org_type_keywords, region_for_state, Region, INDUSTRIES,
};
use crate::core::text::{
    count_matches, decode_tags, extract_keywords, jaccard_similarity, parse_funding_amount,
    shares_any, text_blob,
};
use crate::models::{Grant, MatchResult, OrgType, Organization, ScoreBreakdown, ScoringWeights};

/// Grant state value meaning the grant is open in every state
pub const NATIONWIDE: &str = "ALL";

const FALLBACK_REASON: &str = "Potential opportunity - review eligibility";

/// Calculate a match score (0-100) for a grant using the default weights
///
/// Scoring formula:
/// score = round(
///     location * 0.20 +       # Same state, nationwide, or same region
///     org_type * 0.25 +       # Eligibility text mentions the org's type/structure
///     category * 0.20 +       # Shared industry vocabulary plus category bonuses
///     amount * 0.15 +         # Funding sought falls inside the award range
///     keywords * 0.20         # Jaccard overlap of profile and grant keywords
/// )
pub fn calculate_match_score(org: &Organization, grant: &Grant) -> MatchResult {
    calculate_match_score_with(org, grant, &ScoringWeights::default())
}

/// Calculate a match score with explicit weights
pub fn calculate_match_score_with(
    org: &Organization,
    grant: &Grant,
    weights: &ScoringWeights,
) -> MatchResult {
    let breakdown = ScoreBreakdown {
        location: calculate_location_score(org, grant),
        org_type: calculate_org_type_score(org, grant),
        category: calculate_category_score(org, grant),
        amount: calculate_amount_score(org, grant),
        keywords: calculate_keyword_score(org, grant),
    };

    let weighted = f64::from(breakdown.location) * weights.location
        + f64::from(breakdown.org_type) * weights.org_type
        + f64::from(breakdown.category) * weights.category
        + f64::from(breakdown.amount) * weights.amount
        + f64::from(breakdown.keywords) * weights.keywords;

    let score = weighted.round().clamp(0.0, 100.0) as u8;
    let reasons = generate_reasons(org, grant, &breakdown);

    MatchResult {
        grant_id: grant.id.clone(),
        score,
        breakdown,
        reasons,
    }
}

/// Trimmed field value, treating empty strings as absent
#[inline]
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Location score (0-100)
///
/// 50 when the grant has no state, 85 for nationwide grants, 100 for the same
/// state, 60 when the org's state sits in the grant's declared region, else 20.
pub fn calculate_location_score(org: &Organization, grant: &Grant) -> u8 {
    let grant_state = match present(&grant.state) {
        Some(state) => state,
        None => return 50,
    };

    if grant_state == NATIONWIDE {
        return 85;
    }

    let org_state = present(&org.state);
    if org_state.is_some_and(|state| state.eq_ignore_ascii_case(grant_state)) {
        return 100;
    }

    let org_region = org_state.and_then(region_for_state);
    let grant_region = present(&grant.region).and_then(Region::from_name);
    if org_region.is_some() && org_region == grant_region {
        return 60;
    }

    20
}

/// Organization type score (0-100)
///
/// Starts at 50 and adds credit for type and legal-structure vocabulary found
/// in the grant's eligibility text. Explicit "for-profit only" / "nonprofit
/// only" language that excludes the org forces the score to 10.
pub fn calculate_org_type_score(org: &Organization, grant: &Grant) -> u8 {
    let blob = text_blob([
        grant.eligibility.as_deref(),
        grant.requirements.as_deref(),
        grant.description.as_deref(),
        grant.category.as_deref(),
    ]);

    let org_type = org.kind();
    let is_nonprofit = org_type == Some(OrgType::Nonprofit);

    if is_nonprofit && blob.contains("for-profit only") {
        return 10;
    }
    if !is_nonprofit && blob.contains("nonprofit only") {
        return 10;
    }

    let mut score: usize = 50;

    if let Some(org_type) = org_type {
        let hits = count_matches(&blob, org_type_keywords(org_type));
        score += (hits * 15).min(30);
    }

    if let Some(structure) = org.legal() {
        let hits = count_matches(&blob, legal_structure_keywords(structure));
        score += (hits * 10).min(20);
    }

    score.min(100) as u8
}

/// Category score (0-100)
///
/// Starts at 40, adds 15 per industry whose vocabulary appears in both the
/// org narrative and the grant listing, plus category-specific bonuses.
/// The sum is capped once at the end.
pub fn calculate_category_score(org: &Organization, grant: &Grant) -> u8 {
    let org_blob = text_blob([
        org.mission.as_deref(),
        org.problem_statement.as_deref(),
        org.solution.as_deref(),
        org.target_market.as_deref(),
    ]);
    let tags = decode_tags(grant.tags.as_deref());
    let grant_blob = text_blob([
        grant.title.as_deref(),
        grant.description.as_deref(),
        grant.category.as_deref(),
        Some(tags.as_str()),
    ]);

    let mut score: usize = 40;

    for (_, terms) in INDUSTRIES {
        if shares_any(&org_blob, &grant_blob, terms) {
            score += 15;
        }
    }

    let category = present(&grant.category).map(str::to_lowercase);
    let org_type = org.kind();

    score += match category.as_deref() {
        Some("sbir" | "sttr")
            if org_type == Some(OrgType::Research)
                || org_blob.contains("research")
                || org_blob.contains("innovation") =>
        {
            20
        }
        Some("small_business")
            if matches!(org_type, Some(OrgType::Startup | OrgType::SmallBusiness)) =>
        {
            15
        }
        Some("workforce") if org_blob.contains("training") => 15,
        Some("energy")
            if ["energy", "clean", "sustainable"]
                .iter()
                .any(|term| org_blob.contains(term)) =>
        {
            20
        }
        _ => 0,
    };

    score.min(100) as u8
}

/// Amount score (0-100)
///
/// 100 when the amount sought is inside the award range. Under-seeking scales
/// the ratio by 0.7 with a floor of 30; over-seeking scales by 0.8 with a
/// floor of 20. Missing or unparseable amounts are neutral (50), and so is
/// a non-positive `amount_max`, which listings use for "unspecified".
pub fn calculate_amount_score(org: &Organization, grant: &Grant) -> u8 {
    let (seeking, max) = match (present(&org.funding_seeking), grant.amount_max) {
        (Some(seeking), Some(max)) if max > 0.0 => (parse_funding_amount(seeking), max),
        _ => return 50,
    };

    if seeking <= 0.0 {
        return 50;
    }

    let min = grant.amount_min.unwrap_or(0.0);

    if seeking >= min && seeking <= max {
        100
    } else if seeking < min {
        (100.0 * seeking / min * 0.7).round().max(30.0) as u8
    } else {
        (100.0 * max / seeking * 0.8).round().max(20.0) as u8
    }
}

/// Keyword score (0-100)
///
/// Jaccard similarity of the org and grant keyword sets, mapped through
/// `min(100, round(similarity * 200) + 30)`. Neutral 40 if either side has
/// no keywords.
pub fn calculate_keyword_score(org: &Organization, grant: &Grant) -> u8 {
    let org_keywords = extract_keywords(&text_blob([
        org.mission.as_deref(),
        org.problem_statement.as_deref(),
        org.solution.as_deref(),
        org.target_market.as_deref(),
        org.name.as_deref(),
    ]));

    let tags = decode_tags(grant.tags.as_deref());
    let grant_keywords = extract_keywords(&text_blob([
        grant.title.as_deref(),
        grant.description.as_deref(),
        grant.eligibility.as_deref(),
        grant.requirements.as_deref(),
        Some(tags.as_str()),
    ]));

    if org_keywords.is_empty() || grant_keywords.is_empty() {
        return 40;
    }

    let similarity = jaccard_similarity(&org_keywords, &grant_keywords);
    ((similarity * 200.0).round() as u32 + 30).min(100) as u8
}

/// Build the human-readable explanation for a breakdown
///
/// Checks run in a fixed order; the list is never empty.
pub fn generate_reasons(org: &Organization, grant: &Grant, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut reasons = Vec::new();

    if breakdown.location >= 80 {
        match present(&grant.state) {
            Some(NATIONWIDE) | None => {
                reasons.push("National grant - available in all states".to_string())
            }
            Some(state) => reasons.push(format!("Located in {} - matches your state", state)),
        }
    }

    if breakdown.org_type >= 70 {
        let org_type = present(&org.org_type).unwrap_or("your organization");
        reasons.push(format!("Strong fit for {}", org_type));
    }

    if breakdown.category >= 70 {
        reasons.push("Aligns with your industry and mission".to_string());
    }

    if breakdown.amount >= 80 {
        reasons.push("Grant amount matches your funding needs".to_string());
    } else if breakdown.amount >= 60 {
        reasons.push("Grant amount partially matches your needs".to_string());
    }

    if breakdown.keywords >= 70 {
        reasons.push("Strong keyword match with your profile".to_string());
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }

    reasons
}
