//! Login and logout handlers.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use super::super::templates;
use super::super::AppState;
use crate::session;

/// Submitted login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Render the login form.
pub async fn login_form() -> impl IntoResponse {
    Html(templates::login_page(None))
}

/// Attempt authentication against the shared password.
pub async fn login_submit(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    if form.password == state.settings.app_password {
        info!("login succeeded");
        let token = state.session_key.issue();
        (
            [(header::SET_COOKIE, session::session_cookie(&token))],
            Redirect::to("/"),
        )
            .into_response()
    } else {
        info!("login failed");
        Html(templates::login_page(Some("Invalid password"))).into_response()
    }
}

/// Clear the session cookie. Idempotent: clears whether or not a session was
/// present.
pub async fn logout() -> Response {
    (
        [(header::SET_COOKIE, session::clear_session_cookie())],
        Redirect::to("/login"),
    )
        .into_response()
}
