//! End-to-end tests for the LLM analysis pipelines against a mocked API.

use dealsight::analysis::{extract_fields, score_opportunity, AnalysisError};
use dealsight::llm::{LlmClient, LlmConfig};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "model": "claude-3-5-haiku-latest",
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 5}
    })
}

fn client(server: &MockServer) -> LlmClient {
    LlmClient::new(LlmConfig::new("test-key").with_base_url(server.uri()))
}

#[tokio::test]
async fn extract_fields_embeds_text_and_parses_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_string_contains("Asking price $250,000"))
        .and(body_string_contains("askingPrice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(
            r#"{"askingPrice": 250000, "ebitda": null, "grossRevenue": 1200000,
                "cashFlow": 90000, "inventory": null, "realEstate": null, "ffe": 15000}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let record = extract_fields(&client(&server), "Asking price $250,000 for this shop")
        .await
        .unwrap();

    assert_eq!(record.asking_price, Some(250000.0));
    assert_eq!(record.ebitda, None);
    assert_eq!(record.ffe, Some(15000.0));
}

#[tokio::test]
async fn extract_fields_rejects_fenced_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(
            "```json\n{\"askingPrice\": 250000}\n```",
        )))
        .mount(&server)
        .await;

    let err = extract_fields(&client(&server), "some text").await.unwrap_err();
    assert!(matches!(err, AnalysisError::MalformedResponse(_)));
}

#[tokio::test]
async fn score_opportunity_sends_rubric_and_parses_score() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_string_contains("laundromat business opportunity"))
        .and(body_string_contains("never score above 4"))
        .and(body_string_contains("monthlyNetOperatingIncome"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("3")))
        .expect(1)
        .mount(&server)
        .await;

    let financials = serde_json::json!({"askingPrice": "250000", "cashFlow": "-10000"});
    let metrics = serde_json::json!({"monthlyNetOperatingIncome": -2000.0});

    let score = score_opportunity(&client(&server), "laundromat", &financials, &metrics)
        .await
        .unwrap();
    assert_eq!(score, 3);
}

#[tokio::test]
async fn score_opportunity_rejects_out_of_range() {
    for reply in ["0", "11", "a ten"] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response(reply)))
            .mount(&server)
            .await;

        let err = score_opportunity(
            &client(&server),
            "cafe",
            &serde_json::json!({}),
            &serde_json::json!({}),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidRating), "reply {:?}", reply);
    }
}

#[tokio::test]
async fn transport_failure_surfaces_as_llm_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = score_opportunity(
        &client(&server),
        "cafe",
        &serde_json::json!({}),
        &serde_json::json!({}),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AnalysisError::Llm(_)));
}
