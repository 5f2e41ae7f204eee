//! LLM client for financial field extraction, opportunity scoring, and the
//! prompt proxy.
//!
//! Talks to the Anthropic Messages API.

mod client;

pub use client::{LlmClient, LlmConfig, LlmError};
