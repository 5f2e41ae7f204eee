//! Dealsight - business listing screenshot analysis and opportunity scoring.
//!
//! A small password-gated web application that extracts financial fields from
//! uploaded listing screenshots (OCR + LLM extraction) and scores business
//! opportunities against a fixed rubric.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod llm;
pub mod ocr;
pub mod server;
pub mod session;
