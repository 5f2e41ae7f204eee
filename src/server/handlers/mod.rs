//! HTTP request handlers for the web server.

mod api;
mod auth;
mod pages;
mod static_files;

pub use api::{analyze_business, health, process_image, proxy_anthropic};
pub use auth::{login_form, login_submit, logout};
pub use pages::home;
pub use static_files::{serve_css, serve_js};
