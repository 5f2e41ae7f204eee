//! Router configuration for the web server.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{guard, handlers, AppState};

/// Upload cap for listing screenshots.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Create the main router with all routes.
///
/// Everything except `/login` and `/health` sits behind the session gate,
/// static assets included.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", get(handlers::home))
        .route(
            "/process_image",
            post(handlers::process_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/analyze_business", post(handlers::analyze_business))
        .route("/proxy_anthropic", post(handlers::proxy_anthropic))
        .route("/static/style.css", get(handlers::serve_css))
        .route("/static/app.js", get(handlers::serve_js))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_session,
        ));

    Router::new()
        .merge(protected)
        .route("/login", get(handlers::login_form).post(handlers::login_submit))
        .route("/logout", get(handlers::logout))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
