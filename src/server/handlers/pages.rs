//! Page handlers.

use axum::response::{Html, IntoResponse};

use super::super::templates;

/// Main application page.
pub async fn home() -> impl IntoResponse {
    Html(templates::index_page())
}
