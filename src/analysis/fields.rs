//! Financial field extraction from OCR text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AnalysisError;
use crate::llm::LlmClient;

/// Prompt for extracting the seven financial fields from listing text.
pub const FIELD_EXTRACTION_PROMPT: &str = r#"Extract the following financial information from the text:
Asking Price, EBITDA, Gross Revenue, Cash Flow, Inventory, Real Estate, FF&E

Text: {text}

Format the output as a JSON object with these keys: askingPrice, ebitda, grossRevenue, cashFlow, inventory, realEstate, ffe.
If a value is not found, set it to null. Do not include any additional formatting or backticks in your response."#;

/// The seven-field extraction target. Every key is always present in the
/// serialized form; fields the model could not find are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub asking_price: Option<f64>,
    pub ebitda: Option<f64>,
    pub gross_revenue: Option<f64>,
    pub cash_flow: Option<f64>,
    pub inventory: Option<f64>,
    pub real_estate: Option<f64>,
    pub ffe: Option<f64>,
}

/// Extract the seven financial fields from OCR text.
///
/// The model is instructed to answer with bare JSON; anything else (prose,
/// markdown fences, off-schema values) fails with
/// [`AnalysisError::MalformedResponse`].
pub async fn extract_fields(llm: &LlmClient, text: &str) -> Result<FinancialRecord, AnalysisError> {
    let prompt = FIELD_EXTRACTION_PROMPT.replace("{text}", text);

    let response = llm.complete(&prompt).await?;
    debug!(chars = response.len(), "parsing field extraction response");

    serde_json::from_str(response.trim()).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_parses_numbers_and_nulls() {
        let record: FinancialRecord = serde_json::from_str(
            r#"{"askingPrice": 250000, "ebitda": null, "grossRevenue": 1200000.5,
                "cashFlow": 90000, "inventory": null, "realEstate": null, "ffe": 15000}"#,
        )
        .unwrap();

        assert_eq!(record.asking_price, Some(250000.0));
        assert_eq!(record.ebitda, None);
        assert_eq!(record.gross_revenue, Some(1200000.5));
        assert_eq!(record.ffe, Some(15000.0));
    }

    #[test]
    fn test_record_serializes_all_seven_keys() {
        let record = FinancialRecord {
            asking_price: Some(100.0),
            ebitda: None,
            gross_revenue: None,
            cash_flow: None,
            inventory: None,
            real_estate: None,
            ffe: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "askingPrice",
                "ebitda",
                "grossRevenue",
                "cashFlow",
                "inventory",
                "realEstate",
                "ffe"
            ]
        );
        assert!(value["ebitda"].is_null());
    }

    #[test]
    fn test_fenced_json_is_rejected() {
        let fenced = "```json\n{\"askingPrice\": 1}\n```";
        assert!(serde_json::from_str::<FinancialRecord>(fenced).is_err());
    }

    #[test]
    fn test_prompt_embeds_text() {
        let prompt = FIELD_EXTRACTION_PROMPT.replace("{text}", "Asking $1M");
        assert!(prompt.contains("Asking $1M"));
        assert!(!prompt.contains("{text}"));
    }
}
