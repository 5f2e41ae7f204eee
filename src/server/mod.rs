//! Web server for listing analysis.
//!
//! Binds the OCR extractor and the LLM pipelines to a small password-gated
//! HTTP surface. Requests are independent and stateless; the only thing shared
//! between them is the startup configuration and the session-signing key.

mod assets;
mod guard;
mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::llm::{LlmClient, LlmConfig};
use crate::ocr::{OcrBackend, TesseractBackend};
use crate::session::SessionKey;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub session_key: Arc<SessionKey>,
    pub ocr: Arc<dyn OcrBackend>,
    pub llm: Arc<LlmClient>,
}

impl AppState {
    pub fn new(settings: Arc<Settings>) -> Self {
        let session_key = Arc::new(SessionKey::new(&settings.secret_key));
        let ocr = Arc::new(TesseractBackend::new(
            &settings.tesseract_cmd,
            &settings.tesseract_lang,
        ));
        let llm = Arc::new(LlmClient::new(
            LlmConfig::new(&settings.anthropic_api_key)
                .with_base_url(&settings.anthropic_base_url)
                .with_model(&settings.anthropic_model),
        ));

        Self {
            settings,
            session_key,
            ocr,
            llm,
        }
    }
}

/// Start the web server.
pub async fn serve(settings: Arc<Settings>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
