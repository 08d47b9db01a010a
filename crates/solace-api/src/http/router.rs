//! Axum router configuration with middleware.
//!
//! The chat API lives at `/api/chat`; `/health` is an unauthenticated
//! liveness probe. Middleware: CORS (configured allow-list, POST/OPTIONS,
//! credentials) and request tracing.
//!
//! The pre-built front-end bundle is served from the configured web
//! directory. API routes take priority; unknown paths fall through to the
//! bundle's `index.html` for client-side routing. If the directory does
//! not exist, only the API is served.

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use solace_core::gateway::ChatGateway;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router<G: ChatGateway + 'static>(state: AppState<G>) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);
    let web_dir = state.config.web_dir.clone();

    let mut router = Router::new()
        .route("/api/chat", post(handlers::chat::chat::<G>))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "front-end static file serving enabled");
    }

    router
}

/// CORS layer for the configured origin allow-list.
///
/// Credentials are allowed, so request headers are mirrored rather than
/// wildcarded (tower-http rejects `*` headers combined with credentials).
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// GET /health - Simple liveness probe.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
