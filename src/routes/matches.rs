use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::error::ApiError;
use crate::models::{HealthResponse, ScoreGrantRequest, TopMatchesRequest, TopMatchesResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_grant))
        .route("/matches/top", web::post().to(top_matches));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single grant
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "organization": { "id": "string", "type": "startup", "state": "CA" },
///   "grant": { "id": "string", "state": "ALL", "amountMax": 500000 }
/// }
/// ```
async fn score_grant(
    state: web::Data<AppState>,
    req: web::Json<ScoreGrantRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let result = state.matcher.score(&req.organization, &req.grant);

    tracing::info!(
        org_id = %req.organization.id,
        grant_id = %req.grant.id,
        score = result.score,
        "Scored grant"
    );

    Ok(HttpResponse::Ok().json(result))
}

/// Rank a batch of grants for an organization
///
/// POST /api/v1/matches/top
///
/// Request body:
/// ```json
/// {
///   "organization": { "id": "string" },
///   "grants": [{ "id": "string" }],
///   "limit": 10
/// }
/// ```
async fn top_matches(
    state: web::Data<AppState>,
    req: web::Json<TopMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let TopMatchesRequest {
        organization,
        grants,
        limit,
    } = req.into_inner();

    let max_grants = state.matching.max_grants;
    if grants.len() > max_grants {
        return Err(ApiError::TooManyGrants {
            count: grants.len(),
            max: max_grants,
        });
    }

    let limit = resolve_limit(limit, &state.matching);

    tracing::info!(
        "Ranking {} grants for organization {}, limit: {}",
        grants.len(),
        organization.id,
        limit
    );

    let result = state.matcher.top_matches(&organization, grants, limit);

    Ok(HttpResponse::Ok().json(TopMatchesResponse {
        matches: result.matches,
        total_grants: result.total_grants,
    }))
}

/// Apply the configured default and cap to a requested limit
fn resolve_limit(requested: Option<usize>, settings: &MatchingSettings) -> usize {
    requested
        .unwrap_or(settings.default_limit)
        .min(settings.max_limit)
}
