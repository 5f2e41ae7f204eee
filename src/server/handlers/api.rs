//! JSON API handlers: image processing, business analysis, prompt proxy.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use super::super::AppState;
use crate::analysis::{self, AnalysisError};

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Upload a listing screenshot, OCR it, and extract the financial fields.
pub async fn process_image(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let filename = field.file_name().unwrap_or("").to_string();
                let data = match field.bytes().await {
                    Ok(data) => data.to_vec(),
                    Err(e) => {
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read file data: {}", e),
                        );
                    }
                };
                upload = Some((filename, data));
                break;
            }
            Ok(None) => break,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read upload: {}", e),
                );
            }
        }
    }

    let Some((filename, data)) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "No file part");
    };
    if filename.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No selected file");
    }

    // OCR is blocking; keep it off the async workers.
    let ocr = state.ocr.clone();
    let text = match tokio::task::spawn_blocking(move || ocr.extract_text(&data)).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            error!("OCR failed: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
        Err(e) => {
            error!("OCR task failed: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    match analysis::extract_fields(&state.llm, &text).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => {
            error!("field extraction failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Business analysis request body. `financials` and `metrics` are opaque JSON
/// documents forwarded into the prompt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub business_type: String,
    pub financials: Value,
    pub metrics: Value,
}

/// Score a business opportunity from 1 to 10.
pub async fn analyze_business(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    match analysis::score_opportunity(&state.llm, &req.business_type, &req.financials, &req.metrics)
        .await
    {
        Ok(rating) => Json(json!({ "rating": rating })).into_response(),
        Err(AnalysisError::InvalidRating) => {
            error_response(StatusCode::BAD_REQUEST, "Invalid rating received from LLM")
        }
        Err(e) => {
            error!("business analysis failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Forward an arbitrary prompt to the LLM and return the raw reply.
pub async fn proxy_anthropic(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let prompt = body.get("prompt").and_then(Value::as_str).unwrap_or("");
    if prompt.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No prompt provided");
    }

    match state.llm.complete(prompt).await {
        Ok(result) => Json(json!({ "result": result })).into_response(),
        Err(e) => {
            error!("prompt proxy failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
