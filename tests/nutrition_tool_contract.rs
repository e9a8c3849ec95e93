//! Contract tests for the nutrition tool against a mock FoodData Central.

use fdc_search::FdcConfig;
use nutrition_profile::host::serve_lines;
use nutrition_profile::{NutritionTool, ToolErrorKind};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tool_for(server: &MockServer) -> NutritionTool {
    let config = FdcConfig::default()
        .with_base_url(server.uri())
        .with_api_key("test-key");
    NutritionTool::from_config(config).expect("tool")
}

async fn mount_tier(server: &MockServer, data_type: Option<&str>, body: serde_json::Value) {
    let mock = Mock::given(method("GET")).and(path("/foods/search"));
    let mock = match data_type {
        Some(filter) => mock.and(query_param("dataType", filter)),
        None => mock.and(query_param_is_missing("dataType")),
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn found_profile_has_upstream_field_names() {
    let server = MockServer::start().await;
    mount_tier(
        &server,
        Some("Foundation,SR Legacy"),
        json!({
            "foods": [{
                "fdcId": 171688,
                "description": "Apples, raw, with skin",
                "dataType": "SR Legacy",
                "foodCategory": {"id": 9, "description": "Fruits and Fruit Juices"},
                "foodNutrients": [
                    {"nutrientId": 1008, "nutrientName": "Energy", "nutrientNumber": "208",
                     "unitName": "KCAL", "value": 52.0, "rank": 300},
                    {"nutrientId": 1079, "nutrientName": "Fiber, total dietary", "nutrientNumber": "291",
                     "unitName": "G", "value": 2.4, "rank": 1200, "percentDailyValue": 9}
                ]
            }]
        }),
    )
    .await;

    let outcome = tool_for(&server).execute(json!({"query": "apple"})).await;
    let json = serde_json::to_value(&outcome).expect("serialize");
    assert_eq!(json["ingredientName"], "Apples, raw, with skin");
    assert_eq!(json["fdcId"], 171688);
    assert_eq!(json["dataType"], "SR Legacy");
    assert_eq!(json["foodCategory"]["description"], "Fruits and Fruit Juices");
    assert_eq!(json["servingSize"], 100);
    assert_eq!(json["servingSizeUnit"], "g");
    assert_eq!(json["nutrients"][0]["nutrientName"], "Energy");
    assert_eq!(json["nutrients"][1]["percentDailyValue"], 9.0);
}

#[tokio::test]
async fn survey_tier_used_when_reference_empty() {
    let server = MockServer::start().await;
    mount_tier(&server, Some("Foundation,SR Legacy"), json!({"foods": []})).await;
    mount_tier(
        &server,
        Some("Survey (FNDDS)"),
        json!({"foods": [{"fdcId": 9, "description": "Apple, raw", "dataType": "Survey (FNDDS)"}]}),
    )
    .await;

    let outcome = tool_for(&server).lookup("apple").await;
    let profile = outcome.profile().expect("profile");
    assert_eq!(profile.description, "Apple, raw");
}

#[tokio::test]
async fn all_tiers_empty_is_ingredient_not_found() {
    let server = MockServer::start().await;
    mount_tier(&server, Some("Foundation,SR Legacy"), json!({"foods": []})).await;
    mount_tier(&server, Some("Survey (FNDDS)"), json!({"foods": []})).await;
    mount_tier(&server, None, json!({"foods": []})).await;

    let outcome = tool_for(&server).lookup("banana").await;
    let json = serde_json::to_value(&outcome).expect("serialize");
    assert_eq!(json["error"], "Ingredient not found");
    assert_eq!(json["query"], "banana");
}

#[tokio::test]
async fn upstream_error_is_api_request_failed_without_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .respond_with(ResponseTemplate::new(429).set_body_string("OVER_RATE_LIMIT"))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = tool_for(&server).lookup("apple").await;
    assert_eq!(outcome.error_kind(), Some(ToolErrorKind::RequestFailed));
    let text = serde_json::to_string(&outcome).expect("serialize");
    assert!(text.contains("429"));
    assert!(!text.contains("test-key"));
}

#[tokio::test]
async fn empty_query_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foods": []})))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = tool_for(&server).lookup("  ").await;
    assert_eq!(outcome.error_kind(), Some(ToolErrorKind::InvalidInput));
}

#[tokio::test]
async fn host_bridge_answers_each_line_through_real_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .and(query_param("query", "whole milk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "foods": [
                {"fdcId": 1, "description": "Cheese, milk, processed", "dataType": "SR Legacy"},
                {"fdcId": 2, "description": "Milk, whole", "dataType": "Foundation"}
            ]
        })))
        .mount(&server)
        .await;

    let tool = tool_for(&server);
    let input = "{\"query\": \"whole milk\"}\n{\"query\": \"\"}\n";
    let mut output = Vec::new();
    let handled = serve_lines(&tool, input.as_bytes(), &mut output)
        .await
        .expect("serve");
    assert_eq!(handled, 2);

    let lines: Vec<serde_json::Value> = String::from_utf8(output)
        .expect("utf8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("json"))
        .collect();
    assert_eq!(lines[0]["fdcId"], 2);
    assert_eq!(lines[1]["error"], "Invalid input");
}
