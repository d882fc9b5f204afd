// Unit tests for Grant Match

use grant_match::core::{
    calculate_match_score, get_top_matches, parse_funding_amount,
    scoring::{
        calculate_amount_score, calculate_keyword_score, calculate_location_score,
        calculate_org_type_score,
    },
};
use grant_match::models::{Grant, Organization};

fn startup_org() -> Organization {
    Organization {
        id: "org-startup".to_string(),
        org_type: Some("startup".to_string()),
        state: Some("CA".to_string()),
        funding_seeking: Some("250k".to_string()),
        mission: Some("AI-powered logistics platform".to_string()),
        ..Default::default()
    }
}

fn logistics_grant() -> Grant {
    Grant {
        id: "grant-logistics".to_string(),
        title: Some("AI Logistics Innovation Grant".to_string()),
        state: Some("CA".to_string()),
        amount_min: Some(100_000.0),
        amount_max: Some(500_000.0),
        category: Some("small_business".to_string()),
        eligibility: Some("small business, California-based".to_string()),
        ..Default::default()
    }
}

/// A spread of sparse and dense records for property-style checks
fn sample_orgs() -> Vec<Organization> {
    vec![
        Organization::default(),
        startup_org(),
        Organization {
            id: "org-nonprofit".to_string(),
            org_type: Some("nonprofit".to_string()),
            legal_structure: Some("501c3".to_string()),
            state: Some("ny".to_string()),
            mission: Some("Community health clinics for underserved youth".to_string()),
            problem_statement: Some("Rural patients lack access to care".to_string()),
            funding_seeking: Some("$2M".to_string()),
            ..Default::default()
        },
        Organization {
            id: "org-weird".to_string(),
            org_type: Some("cooperative".to_string()),
            legal_structure: Some("partnership".to_string()),
            state: Some("ZZ".to_string()),
            funding_seeking: Some("lots".to_string()),
            mission: Some("!!! ??? ...".to_string()),
            ..Default::default()
        },
    ]
}

fn sample_grants() -> Vec<Grant> {
    vec![
        Grant::default(),
        logistics_grant(),
        Grant {
            id: "grant-national".to_string(),
            title: Some("National Health Equity Fund".to_string()),
            description: Some("Supports nonprofit clinics serving underserved communities".to_string()),
            state: Some("ALL".to_string()),
            amount_min: Some(0.0),
            amount_max: Some(1_000_000.0),
            category: Some("health".to_string()),
            tags: Some(r#"["health","equity","community"]"#.to_string()),
            ..Default::default()
        },
        Grant {
            id: "grant-broken".to_string(),
            state: Some("TX".to_string()),
            region: Some("Southwest".to_string()),
            amount_min: Some(5_000_000.0),
            amount_max: Some(1_000.0),
            tags: Some("{not json".to_string()),
            eligibility: Some("For-profit only".to_string()),
            ..Default::default()
        },
    ]
}

#[test]
fn test_scores_stay_in_range() {
    for org in sample_orgs() {
        for grant in sample_grants() {
            let result = calculate_match_score(&org, &grant);
            let b = result.breakdown;
            assert!(result.score <= 100);
            for sub in [b.location, b.org_type, b.category, b.amount, b.keywords] {
                assert!(sub <= 100, "sub-score {} out of range for {}", sub, grant.id);
            }
            assert!(!result.reasons.is_empty());
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    for org in sample_orgs() {
        for grant in sample_grants() {
            assert_eq!(calculate_match_score(&org, &grant), calculate_match_score(&org, &grant));
        }
    }
}

#[test]
fn test_nationwide_grant_location() {
    let grant = Grant {
        state: Some("ALL".to_string()),
        ..Default::default()
    };
    for org in sample_orgs() {
        assert_eq!(calculate_location_score(&org, &grant), 85);
    }
}

#[test]
fn test_same_state_location_is_case_insensitive() {
    let org = Organization {
        state: Some("wa".to_string()),
        ..Default::default()
    };
    let grant = Grant {
        state: Some("WA".to_string()),
        ..Default::default()
    };
    assert_eq!(calculate_location_score(&org, &grant), 100);
}

#[test]
fn test_amount_inside_range() {
    let org = Organization {
        funding_seeking: Some("$150,000".to_string()),
        ..Default::default()
    };
    let grant = Grant {
        amount_min: Some(150_000.0),
        amount_max: Some(150_000.0),
        ..Default::default()
    };
    assert_eq!(calculate_amount_score(&org, &grant), 100);
}

#[test]
fn test_funding_parsing() {
    assert_eq!(parse_funding_amount("500k"), 500_000.0);
    assert_eq!(parse_funding_amount("$2M"), 2_000_000.0);
}

#[test]
fn test_identical_text_keyword_score() {
    let text = "Regenerative agriculture cooperative restoring prairie soil";
    let org = Organization {
        mission: Some(text.to_string()),
        ..Default::default()
    };
    let grant = Grant {
        description: Some(text.to_string()),
        ..Default::default()
    };
    assert_eq!(calculate_keyword_score(&org, &grant), 100);
}

#[test]
fn test_nonprofit_excluded_by_for_profit_only() {
    let org = Organization {
        org_type: Some("nonprofit".to_string()),
        legal_structure: Some("501c3".to_string()),
        ..Default::default()
    };
    let grant = Grant {
        eligibility: Some("Nonprofit and 501(c)(3) language aside, this is for-profit only".to_string()),
        ..Default::default()
    };
    assert_eq!(calculate_org_type_score(&org, &grant), 10);
}

#[test]
fn test_top_matches_sorted_and_limited() {
    let grants = sample_grants();
    for org in sample_orgs() {
        for limit in [0, 1, 3, 10] {
            let top = get_top_matches(&org, &grants, limit);
            assert_eq!(top.len(), limit.min(grants.len()));
            assert!(top.windows(2).all(|w| w[0].1.score >= w[1].1.score));
        }
    }
}

#[test]
fn test_startup_scenario() {
    let result = calculate_match_score(&startup_org(), &logistics_grant());

    assert_eq!(result.breakdown.location, 100);
    assert!(result.breakdown.org_type >= 65);
    assert_eq!(result.breakdown.amount, 100);
    assert!(result.breakdown.category >= 55);
    assert!(result.breakdown.keywords > 40);
    assert!(result
        .reasons
        .contains(&"Located in CA - matches your state".to_string()));
    assert!(result
        .reasons
        .contains(&"Grant amount matches your funding needs".to_string()));
}
