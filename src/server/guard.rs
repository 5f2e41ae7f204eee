//! Session gate middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::AppState;
use crate::session;

/// Redirect to the login page unless the request carries a valid session
/// cookie. Protected handler bodies never run for unauthenticated callers,
/// regardless of method or payload.
pub async fn require_session(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let authenticated = session::token_from_headers(req.headers())
        .map(|token| state.session_key.verify(&token))
        .unwrap_or(false);

    if authenticated {
        next.run(req).await
    } else {
        Redirect::to("/login").into_response()
    }
}
