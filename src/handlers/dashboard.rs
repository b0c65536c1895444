use crate::response::ApiResponse;
use crate::services::aggregation::{self, CategoryCount, DashboardSummary, UrgencyCount};
use crate::state::AppState;
use axum::{response::IntoResponse, Extension};

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Totals and both aggregations", body = DashboardSummary),
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let reports = state.store.reports();
    let documents = state.store.documents();
    ApiResponse::ok(aggregation::dashboard(&reports, &documents))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/categories",
    responses(
        (status = 200, description = "Report count per category, in order of first appearance", body = Vec<CategoryCount>),
    ),
    tag = "dashboard"
)]
pub async fn by_category(Extension(state): Extension<AppState>) -> impl IntoResponse {
    ApiResponse::ok(aggregation::aggregate_by_category(&state.store.reports()))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/urgency",
    responses(
        (status = 200, description = "Report count per urgency, in order of first appearance", body = Vec<UrgencyCount>),
    ),
    tag = "dashboard"
)]
pub async fn by_urgency(Extension(state): Extension<AppState>) -> impl IntoResponse {
    ApiResponse::ok(aggregation::aggregate_by_urgency(&state.store.reports()))
}
