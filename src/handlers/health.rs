use crate::state::AppState;
use axum::{response::IntoResponse, Extension, Json};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Health check successful", body = serde_json::Value)
    )
)]
pub async fn health_check(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let insights_configured = state.insights.is_configured();

    Json(json!({
        "status": "ok",
        "service": "Education Watch API",
        "version": env!("CARGO_PKG_VERSION"),
        "reports": state.store.report_count(),
        "documents": state.store.document_count(),
        "insights_configured": insights_configured,
    }))
}
