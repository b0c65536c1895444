use crate::error::{AppError, AppResult};
use crate::models::EvidenceDocument;
use crate::response::ApiResponse;
use crate::services::intake::{DocumentSubmission, IntakeService};
use crate::state::AppState;
use axum::{response::IntoResponse, Extension, Json};

#[utoipa::path(
    post,
    path = "/api/v1/documents",
    request_body = DocumentSubmission,
    responses(
        (status = 200, description = "Document recorded", body = EvidenceDocument),
        (status = 400, description = "Missing required fields or invalid URL", body = AppError),
    ),
    tag = "documents"
)]
pub async fn create_document(
    Extension(state): Extension<AppState>,
    Json(payload): Json<DocumentSubmission>,
) -> AppResult<impl IntoResponse> {
    let document = IntakeService::submit_document(payload)?;
    state.store.append_document(document.clone());

    Ok(ApiResponse::ok(document))
}

#[utoipa::path(
    get,
    path = "/api/v1/documents",
    responses(
        (status = 200, description = "All evidence documents, newest first", body = Vec<EvidenceDocument>),
    ),
    tag = "documents"
)]
pub async fn list_documents(Extension(state): Extension<AppState>) -> impl IntoResponse {
    ApiResponse::ok(state.store.documents())
}
