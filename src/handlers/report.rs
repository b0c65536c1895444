use crate::error::{AppError, AppResult};
use crate::models::SchoolReport;
use crate::response::ApiResponse;
use crate::services::intake::{IntakeService, ReportSubmission};
use crate::state::AppState;
use axum::{response::IntoResponse, Extension, Json};

#[utoipa::path(
    post,
    path = "/api/v1/reports",
    request_body = ReportSubmission,
    responses(
        (status = 200, description = "Report submitted", body = SchoolReport),
        (status = 400, description = "Missing required fields", body = AppError),
    ),
    tag = "reports"
)]
pub async fn create_report(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ReportSubmission>,
) -> AppResult<impl IntoResponse> {
    let report = IntakeService::submit_report(payload)?;
    state.store.append_report(report.clone());

    Ok(ApiResponse::with_message(
        report,
        "Report submitted successfully".to_string(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/reports",
    responses(
        (status = 200, description = "All reports, newest first", body = Vec<SchoolReport>),
    ),
    tag = "reports"
)]
pub async fn list_reports(Extension(state): Extension<AppState>) -> impl IntoResponse {
    ApiResponse::ok(state.store.reports())
}
