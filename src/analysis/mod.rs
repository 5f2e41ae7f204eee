//! Listing analysis pipelines.
//!
//! Two prompt-driven pipelines over the LLM client:
//! - [`extract_fields`]: OCR text in, seven fixed financial fields out.
//! - [`score_opportunity`]: financials and deal metrics in, a 1-10 score out.
//!
//! Both fill a `const` template with `{placeholder}` substitution and send a
//! single deterministic completion. A malformed reply is an error; there is no
//! repair or retry pass.

mod fields;
mod scoring;

pub use fields::{extract_fields, FinancialRecord, FIELD_EXTRACTION_PROMPT};
pub use scoring::{score_opportunity, SCORING_PROMPT};

use thiserror::Error;

use crate::llm::LlmError;

/// Errors from the analysis pipelines.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The LLM call itself failed.
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// The model's reply was not the bare JSON it was instructed to return.
    #[error("Malformed extraction response: {0}")]
    MalformedResponse(String),

    /// The model's reply was not an integer in [1, 10].
    #[error("Invalid rating received from LLM")]
    InvalidRating,
}
