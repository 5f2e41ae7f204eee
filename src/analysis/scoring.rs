//! Business opportunity scoring.

use serde_json::Value;
use tracing::debug;

use super::AnalysisError;
use crate::llm::LlmClient;

/// Prompt for scoring a business opportunity from financials and metrics.
pub const SCORING_PROMPT: &str = r#"Analyze this {business_type} business opportunity:

Financials:
{financials}

Calculated Metrics:
{metrics}

Evaluate the business based on these criteria, in order of importance:
1. Profitability: Is the Monthly Net Operating Income positive? This is crucial.
2. Debt Coverage: Can the monthly cash flow comfortably cover the debt service?
3. Return on Investment: Is the Cash on Cash Return above 20%?
4. Valuation: Is the Sales Multiple reasonable for this type of business?
5. Growth Potential: Based on the business type and financials, is there room for growth?

Scoring guide:
1-2: Very poor investment, significant risks (e.g., negative Monthly Net Operating Income)
3-4: Poor investment, major concerns
5-6: Below average, some significant concerns
7: Average opportunity, potential with some risks
8-9: Good opportunity, strong financials
10: Excellent opportunity, exceptional financials and growth potential

A business with negative Monthly Net Operating Income should never score above 4.

Provide a score from 1 to 10 based on this analysis. Only return the numerical score without any explanation."#;

/// Score a business opportunity from 1 to 10.
///
/// `financials` and `metrics` are opaque JSON documents; they are
/// pretty-printed into the prompt without server-side schema validation. A
/// reply that is not an integer in [1, 10] fails with
/// [`AnalysisError::InvalidRating`].
pub async fn score_opportunity(
    llm: &LlmClient,
    business_type: &str,
    financials: &Value,
    metrics: &Value,
) -> Result<u8, AnalysisError> {
    let prompt = SCORING_PROMPT
        .replace("{business_type}", business_type)
        .replace(
            "{financials}",
            &serde_json::to_string_pretty(financials).unwrap_or_else(|_| "{}".to_string()),
        )
        .replace(
            "{metrics}",
            &serde_json::to_string_pretty(metrics).unwrap_or_else(|_| "{}".to_string()),
        );

    let response = llm.complete(&prompt).await?;
    let rating = parse_rating(&response)?;

    debug!(rating, "analysis rating");
    Ok(rating)
}

/// Parse the model's reply as an integer score in [1, 10].
fn parse_rating(response: &str) -> Result<u8, AnalysisError> {
    let rating: i64 = response
        .trim()
        .parse()
        .map_err(|_| AnalysisError::InvalidRating)?;

    if (1..=10).contains(&rating) {
        Ok(rating as u8)
    } else {
        Err(AnalysisError::InvalidRating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_in_range() {
        assert_eq!(parse_rating("4").unwrap(), 4);
        assert_eq!(parse_rating("  7\n").unwrap(), 7);
        assert_eq!(parse_rating("1").unwrap(), 1);
        assert_eq!(parse_rating("10").unwrap(), 10);
    }

    #[test]
    fn test_parse_rating_out_of_range() {
        assert!(matches!(parse_rating("0"), Err(AnalysisError::InvalidRating)));
        assert!(matches!(parse_rating("11"), Err(AnalysisError::InvalidRating)));
        assert!(matches!(parse_rating("-3"), Err(AnalysisError::InvalidRating)));
    }

    #[test]
    fn test_parse_rating_non_numeric() {
        assert!(matches!(parse_rating("abc"), Err(AnalysisError::InvalidRating)));
        assert!(matches!(parse_rating("7/10"), Err(AnalysisError::InvalidRating)));
        assert!(matches!(parse_rating(""), Err(AnalysisError::InvalidRating)));
    }

    #[test]
    fn test_prompt_embeds_all_sections() {
        let financials = serde_json::json!({"askingPrice": 250000});
        let metrics = serde_json::json!({"monthlyNetOperatingIncome": -500.0});

        let prompt = SCORING_PROMPT
            .replace("{business_type}", "laundromat")
            .replace("{financials}", &serde_json::to_string_pretty(&financials).unwrap())
            .replace("{metrics}", &serde_json::to_string_pretty(&metrics).unwrap());

        assert!(prompt.contains("laundromat business opportunity"));
        assert!(prompt.contains("\"askingPrice\": 250000"));
        assert!(prompt.contains("monthlyNetOperatingIncome"));
        assert!(prompt.contains("never score above 4"));
    }
}
