use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::services::insights::InsightRecord;
use crate::state::AppState;
use axum::{response::IntoResponse, Extension};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct InsightsStateResponse {
    /// Whether an analysis is currently running
    pub busy: bool,
    pub configured: bool,
    pub latest: Option<InsightRecord>,
}

#[utoipa::path(
    post,
    path = "/api/v1/insights",
    responses(
        (status = 200, description = "Narrative or sentinel text", body = InsightRecord),
        (status = 409, description = "Another analysis is in progress", body = AppError),
    ),
    tag = "insights"
)]
pub async fn generate_insights(
    Extension(state): Extension<AppState>,
) -> AppResult<impl IntoResponse> {
    let record = state.insights.generate(state.store.reports()).await?;
    Ok(ApiResponse::ok(record))
}

#[utoipa::path(
    get,
    path = "/api/v1/insights",
    responses(
        (status = 200, description = "Most recent analysis and busy flag", body = InsightsStateResponse),
    ),
    tag = "insights"
)]
pub async fn latest_insights(Extension(state): Extension<AppState>) -> impl IntoResponse {
    ApiResponse::ok(InsightsStateResponse {
        busy: state.insights.is_busy(),
        configured: state.insights.is_configured(),
        latest: state.insights.latest(),
    })
}
