use crate::handlers;
use crate::state::AppState;
use axum::{extract::Extension, routing, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_routes() -> Router {
    Router::new().nest("/api/v1", api_routes())
}

fn api_routes() -> Router {
    Router::new()
        // Reports
        .route(
            "/reports",
            routing::get(handlers::report::list_reports).post(handlers::report::create_report),
        )
        // Evidence documents
        .route(
            "/documents",
            routing::get(handlers::document::list_documents)
                .post(handlers::document::create_document),
        )
        // Aggregations
        .route(
            "/dashboard",
            routing::get(handlers::dashboard::get_dashboard),
        )
        .route(
            "/dashboard/categories",
            routing::get(handlers::dashboard::by_category),
        )
        .route(
            "/dashboard/urgency",
            routing::get(handlers::dashboard::by_urgency),
        )
        // AI insights
        .route(
            "/insights",
            routing::get(handlers::insights::latest_insights)
                .post(handlers::insights::generate_insights),
        )
}

/// Full application router with session state, tracing and CORS attached.
pub fn create_app(state: AppState, cors_origins: &str) -> Router {
    Router::new()
        .route("/", routing::get(handlers::health_check))
        .merge(create_routes())
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_origins))
}

fn build_cors_layer(origins_str: &str) -> CorsLayer {
    use axum::http::{header, HeaderValue, Method};

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if origins_str.trim() == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = origins_str
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}
