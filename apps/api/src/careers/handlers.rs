//! Axum route handlers for the career endpoints.

use axum::{extract::State, Json};
use tracing::debug;

use crate::careers::extract::SkillPayload;
use crate::careers::guides::{list_guides, GuideResponse};
use crate::careers::recommend::{recommend, RecommendationResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /recommend-careers
///
/// Body must be `{ "skills": [string, ...] }`; anything else is rejected
/// by `SkillPayload` before the lookup runs.
pub async fn handle_recommend_careers(
    State(state): State<AppState>,
    SkillPayload(input): SkillPayload,
) -> Result<Json<RecommendationResponse>, AppError> {
    let response = recommend(state.catalog, &input.skills);
    debug!(
        skills = input.skills.len(),
        recommendations = response.recommendations.len(),
        "career recommendations computed"
    );

    Ok(Json(response))
}

/// GET /growth-guides
pub async fn handle_growth_guides(State(state): State<AppState>) -> Json<GuideResponse> {
    Json(list_guides(state.catalog))
}
