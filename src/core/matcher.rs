use rayon::prelude::*;

use crate::core::scoring::calculate_match_score_with;
use crate::models::{Grant, MatchResult, Organization, RankedGrant, ScoringWeights};

/// Number of results returned when the caller does not ask for a limit
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Batches at least this large are scored in parallel by default
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Result of ranking a batch of grants
#[derive(Debug)]
pub struct TopMatches {
    pub matches: Vec<RankedGrant>,
    pub total_grants: usize,
}

/// Batch scoring and ranking orchestrator
///
/// Scores each grant independently, then orders the results with a stable
/// sort on score so that equal scores keep their input order. Large batches
/// are scored on the rayon pool; results are collected in input order before
/// sorting, so the output never depends on completion order.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    parallel_threshold: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Minimum batch size scored in parallel. Zero parallelizes every batch.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single grant
    pub fn score(&self, org: &Organization, grant: &Grant) -> MatchResult {
        let result = calculate_match_score_with(org, grant, &self.weights);
        tracing::trace!(grant_id = %grant.id, score = result.score, "scored grant");
        result
    }

    /// Score every grant and order the pairs by descending score
    pub fn rank<'a>(&self, org: &Organization, grants: &'a [Grant]) -> Vec<(&'a Grant, MatchResult)> {
        self.rank_indices(org, grants)
            .into_iter()
            .map(|(idx, result)| (&grants[idx], result))
            .collect()
    }

    /// Rank owned grants and keep the best `limit`
    ///
    /// # Arguments
    /// * `org` - The organization profile being matched
    /// * `grants` - Candidate grants supplied by the caller
    /// * `limit` - Maximum number of matches to return
    pub fn top_matches(&self, org: &Organization, grants: Vec<Grant>, limit: usize) -> TopMatches {
        let total_grants = grants.len();

        let mut ranked = self.rank_indices(org, &grants);
        ranked.truncate(limit);

        // Move the selected grants out without cloning
        let mut slots: Vec<Option<Grant>> = grants.into_iter().map(Some).collect();
        let matches: Vec<RankedGrant> = ranked
            .into_iter()
            .filter_map(|(idx, result)| {
                slots[idx].take().map(|grant| RankedGrant { grant, result })
            })
            .collect();

        tracing::debug!(
            org_id = %org.id,
            returned = matches.len(),
            total_grants,
            "ranked grants"
        );

        TopMatches {
            matches,
            total_grants,
        }
    }

    /// Score all grants as (input index, result), sorted by descending score
    fn rank_indices(&self, org: &Organization, grants: &[Grant]) -> Vec<(usize, MatchResult)> {
        let mut scored: Vec<(usize, MatchResult)> = if grants.len() >= self.parallel_threshold {
            tracing::debug!(grants = grants.len(), "scoring batch in parallel");
            grants
                .par_iter()
                .enumerate()
                .map(|(idx, grant)| (idx, self.score(org, grant)))
                .collect()
        } else {
            grants
                .iter()
                .enumerate()
                .map(|(idx, grant)| (idx, self.score(org, grant)))
                .collect()
        };

        // Vec::sort_by is stable: ties stay in input order
        scored.sort_by(|a, b| b.1.score.cmp(&a.1.score));
        scored
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank grants for an organization with default weights and keep the best `limit`
///
/// Returns `(grant, result)` pairs sorted by descending score; ties keep the
/// order of `grants`. The output length is `min(limit, grants.len())`.
pub fn get_top_matches<'a>(
    org: &Organization,
    grants: &'a [Grant],
    limit: usize,
) -> Vec<(&'a Grant, MatchResult)> {
    let mut ranked = Matcher::with_default_weights().rank(org, grants);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_org() -> Organization {
        Organization {
            id: "org".to_string(),
            org_type: Some("nonprofit".to_string()),
            state: Some("NY".to_string()),
            mission: Some("Literacy programs for underserved youth".to_string()),
            funding_seeking: Some("75k".to_string()),
            ..Default::default()
        }
    }

    fn create_grant(id: &str, state: Option<&str>) -> Grant {
        Grant {
            id: id.to_string(),
            title: Some("Community literacy fund".to_string()),
            state: state.map(str::to_string),
            amount_min: Some(10_000.0),
            amount_max: Some(100_000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_matcher_keeps_configured_weights() {
        let weights = ScoringWeights {
            location: 0.5,
            org_type: 0.2,
            category: 0.1,
            amount: 0.1,
            keywords: 0.1,
        };
        let matcher = Matcher::new(weights);
        assert_eq!(matcher.weights(), &weights);
        assert_eq!(Matcher::default().weights(), &ScoringWeights::default());
    }

    #[test]
    fn test_rank_sorted_by_score() {
        let matcher = Matcher::with_default_weights();
        let grants = vec![
            create_grant("far", Some("TX")),
            create_grant("home", Some("NY")),
            create_grant("national", Some("ALL")),
        ];

        let ranked = matcher.rank(&create_org(), &grants);

        let ids: Vec<&str> = ranked.iter().map(|(g, _)| g.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "national", "far"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let grants: Vec<Grant> = (0..5).map(|i| create_grant(&i.to_string(), None)).collect();

        let ranked = matcher.rank(&create_org(), &grants);

        let ids: Vec<&str> = ranked.iter().map(|(g, _)| g.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let org = create_org();
        let grants: Vec<Grant> = (0..40)
            .map(|i| {
                let state = ["NY", "ALL", "TX", "PA"][i % 4];
                create_grant(&i.to_string(), Some(state))
            })
            .collect();

        let sequential = Matcher::with_default_weights()
            .with_parallel_threshold(usize::MAX)
            .rank(&org, &grants);
        let parallel = Matcher::with_default_weights()
            .with_parallel_threshold(0)
            .rank(&org, &grants);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_top_matches_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let grants: Vec<Grant> = (0..20)
            .map(|i| create_grant(&i.to_string(), Some(if i % 2 == 0 { "NY" } else { "CA" })))
            .collect();

        let result = matcher.top_matches(&create_org(), grants, 5);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_grants, 20);
        assert!(result.matches.iter().all(|m| m.grant.state.as_deref() == Some("NY")));
        assert_eq!(result.matches[0].grant.id, "0");
        assert!(result
            .matches
            .iter()
            .all(|m| m.grant.id == m.result.grant_id));
    }

    #[test]
    fn test_get_top_matches() {
        let grants = vec![create_grant("a", Some("CA")), create_grant("b", Some("NY"))];

        let top = get_top_matches(&create_org(), &grants, DEFAULT_TOP_LIMIT);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0.id, "b");

        let top = get_top_matches(&create_org(), &grants, 1);
        assert_eq!(top.len(), 1);
    }
}
