use edwatch::config::{insights::InsightsConfig, server::ServerConfig};
use edwatch::{routes, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        edwatch::handlers::health::health_check,
        // Report routes
        edwatch::handlers::report::create_report,
        edwatch::handlers::report::list_reports,
        // Document routes
        edwatch::handlers::document::create_document,
        edwatch::handlers::document::list_documents,
        // Dashboard routes
        edwatch::handlers::dashboard::get_dashboard,
        edwatch::handlers::dashboard::by_category,
        edwatch::handlers::dashboard::by_urgency,
        // Insight routes
        edwatch::handlers::insights::generate_insights,
        edwatch::handlers::insights::latest_insights,
    ),
    components(
        schemas(
            edwatch::response::ApiResponse<serde_json::Value>,
            edwatch::error::AppError,
            // Reports
            edwatch::models::SchoolReport,
            edwatch::models::Province,
            edwatch::models::IssueCategory,
            edwatch::models::Urgency,
            edwatch::models::ReporterRole,
            edwatch::services::intake::ReportSubmission,
            // Documents
            edwatch::models::EvidenceDocument,
            edwatch::models::FileType,
            edwatch::services::intake::DocumentSubmission,
            // Dashboard
            edwatch::services::aggregation::DashboardSummary,
            edwatch::services::aggregation::CategoryCount,
            edwatch::services::aggregation::UrgencyCount,
            // Insights
            edwatch::services::insights::InsightRecord,
            edwatch::services::insights::InsightStatus,
            edwatch::handlers::insights::InsightsStateResponse,
        )
    ),
    tags(
        (name = "reports", description = "School issue report intake and listing"),
        (name = "documents", description = "Evidence document intake and listing"),
        (name = "dashboard", description = "Aggregated report views"),
        (name = "insights", description = "AI-generated narrative summaries"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edwatch=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration before doing anything else
    let (server_config, insights_config) = validate_config()?;

    tracing::info!(
        "Starting Education Watch API v{}...",
        env!("CARGO_PKG_VERSION")
    );

    if insights_config.is_configured() {
        tracing::info!("Gemini insights configured (model {})", insights_config.model);
    } else {
        tracing::warn!("Gemini API key not set, AI insights will be unavailable");
    }

    let state = AppState::from_config(&server_config, insights_config)?;
    tracing::info!(
        "Session state ready with {} reports and {} documents",
        state.store.report_count(),
        state.store.document_count()
    );

    let app = routes::create_app(state, &server_config.cors_origins)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = server_config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Validate all configuration at startup (fail-fast).
fn validate_config() -> anyhow::Result<(ServerConfig, InsightsConfig)> {
    let server = ServerConfig::from_env();
    let insights = InsightsConfig::from_env()?;
    Ok((server, insights))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, gracefully shutting down...");
}
