mod fixtures;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use fixtures::{function_call_stream, text_stream, Upstreams, GREYNOISE_KEY};
use greybot::web::FUNCTION_HEADER;

fn generate(prompt: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "prompt": prompt }).to_string()))
        .unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_direct_answer_is_relayed_without_dispatch() {
    let upstreams = Upstreams::start().await;
    upstreams
        .mock_first_pass(text_stream(&["GreyNoise ", "tracks ", "internet scanners."]))
        .await;

    let response = upstreams.router().oneshot(generate("What is GreyNoise?")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/plain; charset=utf-8"
    );
    assert!(response.headers().get(FUNCTION_HEADER).is_none());
    assert_eq!(body_text(response).await, "GreyNoise tracks internet scanners.");

    assert_eq!(upstreams.chat_requests().await.len(), 1);
    assert_eq!(upstreams.search_request_count().await, 0);
}

#[tokio::test]
async fn test_first_pass_carries_catalog_and_conversation() {
    let upstreams = Upstreams::start().await;
    upstreams.mock_first_pass(text_stream(&["ok"])).await;

    let response = upstreams.router().oneshot(generate("Show me tor exit nodes")).await.unwrap();
    body_text(response).await;

    let requests = upstreams.chat_requests().await;
    let first = &requests[0];
    assert_eq!(first["model"], "gpt-4-1106-preview");
    assert_eq!(first["stream"], true);
    assert_eq!(first["function_call"], "auto");
    assert_eq!(first["max_tokens"], 1024);
    assert_eq!(first["functions"].as_array().unwrap().len(), 13);
    assert_eq!(first["messages"][0]["role"], "system");
    assert_eq!(first["messages"][1], json!({"role": "user", "content": "Show me tor exit nodes"}));
}

#[tokio::test]
async fn test_function_call_dispatches_and_relays_second_pass() {
    let upstreams = Upstreams::start().await;
    let search_result = json!({"count": 3, "data": [{"ip": "45.83.64.1", "classification": "malicious"}]});

    upstreams
        .mock_first_pass(function_call_stream(
            "get_category_with_classification",
            &json!({"classification": "malicious", "category": "hosting"}),
        ))
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/experimental/gnql"))
        .and(query_param("query", "classification:malicious metadata.category:hosting"))
        .and(query_param("size", "20"))
        .and(header("key", GREYNOISE_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_result.clone()))
        .expect(1)
        .mount(&upstreams.greynoise)
        .await;
    upstreams
        .mock_second_pass(text_stream(&["Found 3 ", "malicious hosting IPs."]))
        .await;

    let response = upstreams
        .router()
        .oneshot(generate("Which hosting providers are malicious?"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(FUNCTION_HEADER).unwrap(),
        "get_category_with_classification"
    );
    assert_eq!(body_text(response).await, "Found 3 malicious hosting IPs.");

    let requests = upstreams.chat_requests().await;
    assert_eq!(requests.len(), 2);

    let second = &requests[1];
    assert!(second.get("functions").is_none());
    assert!(second.get("function_call").is_none());
    assert_eq!(second["max_tokens"], 500);
    assert!((second["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);

    let messages = second["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0], requests[0]["messages"][0]);
    assert_eq!(messages[1], requests[0]["messages"][1]);
    assert_eq!(messages[2]["role"], "function");
    assert_eq!(messages[2]["name"], "get_category_with_classification");
    let content: serde_json::Value =
        serde_json::from_str(messages[2]["content"].as_str().unwrap()).unwrap();
    assert_eq!(content, search_result);
}

#[tokio::test]
async fn test_get_is_rejected_without_upstream_calls() {
    let upstreams = Upstreams::start().await;

    let response = upstreams
        .router()
        .oneshot(Request::builder().method("GET").uri("/api/generate").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_text(response).await, "Method not allowed");
    assert!(upstreams.chat_requests().await.is_empty());
    assert_eq!(upstreams.search_request_count().await, 0);
}

#[tokio::test]
async fn test_put_is_rejected() {
    let upstreams = Upstreams::start().await;

    let response = upstreams
        .router()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/generate")
                .body(Body::from(r#"{"prompt":"hi"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(upstreams.chat_requests().await.is_empty());
}

#[tokio::test]
async fn test_first_pass_failure_is_500_with_upstream_message() {
    let upstreams = Upstreams::start().await;
    upstreams
        .mock_first_pass(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "The server had an error while processing your request.", "type": "server_error"}
        })))
        .await;

    let response = upstreams.router().oneshot(generate("Is 1.2.3.4 bad?")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_text(response).await,
        "The server had an error while processing your request."
    );
    assert_eq!(upstreams.chat_requests().await.len(), 1);
    assert_eq!(upstreams.search_request_count().await, 0);
}

#[tokio::test]
async fn test_unrecognized_function_is_500() {
    let upstreams = Upstreams::start().await;
    upstreams
        .mock_first_pass(function_call_stream("get_weather", &json!({"city": "Paris"})))
        .await;

    let response = upstreams.router().oneshot(generate("Weather in Paris?")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Unrecognized function: get_weather");
    assert_eq!(upstreams.chat_requests().await.len(), 1);
    assert_eq!(upstreams.search_request_count().await, 0);
}

#[tokio::test]
async fn test_non_json_search_failure_aborts_before_second_pass() {
    let upstreams = Upstreams::start().await;
    upstreams
        .mock_first_pass(function_call_stream("get_ip_data", &json!({"ip": "8.8.8.8"})))
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/noise/context/8.8.8.8"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .expect(1)
        .mount(&upstreams.greynoise)
        .await;

    let response = upstreams.router().oneshot(generate("What about 8.8.8.8?")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("rate limit exceeded"));
    assert_eq!(upstreams.chat_requests().await.len(), 1);
}

#[tokio::test]
async fn test_json_search_error_reaches_second_pass() {
    let upstreams = Upstreams::start().await;
    let search_error = json!({"error": "invalid ip"});

    upstreams
        .mock_first_pass(function_call_stream("get_ip_data", &json!({})))
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/noise/context/undefined"))
        .respond_with(ResponseTemplate::new(400).set_body_json(search_error.clone()))
        .expect(1)
        .mount(&upstreams.greynoise)
        .await;
    upstreams
        .mock_second_pass(text_stream(&["Please give me an IP address."]))
        .await;

    let response = upstreams.router().oneshot(generate("Look up an IP")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Please give me an IP address.");

    let requests = upstreams.chat_requests().await;
    assert_eq!(requests.len(), 2);
    let content: serde_json::Value =
        serde_json::from_str(requests[1]["messages"][2]["content"].as_str().unwrap()).unwrap();
    assert_eq!(content, search_error);
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let upstreams = Upstreams::start().await;

    let response = upstreams
        .router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.starts_with("Invalid request body"));
    assert!(upstreams.chat_requests().await.is_empty());
}

#[tokio::test]
async fn test_concurrent_prompts_do_not_share_state() {
    let upstreams = Upstreams::start().await;
    for (prompt, answer) in [("alpha", "answer-alpha"), ("beta", "answer-beta")] {
        Mock::given(method("POST"))
            .and(wiremock::matchers::body_partial_json(json!({
                "messages": [{"role": "system"}, {"role": "user", "content": prompt}]
            })))
            .respond_with(text_stream(&[answer]))
            .mount(&upstreams.openai)
            .await;
    }

    let router = upstreams.router();
    let (alpha, beta) = tokio::join!(
        router.clone().oneshot(generate("alpha")),
        router.clone().oneshot(generate("beta")),
    );

    assert_eq!(body_text(alpha.unwrap()).await, "answer-alpha");
    assert_eq!(body_text(beta.unwrap()).await, "answer-beta");

    for request in upstreams.chat_requests().await {
        assert_eq!(request["messages"].as_array().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn test_health() {
    let upstreams = Upstreams::start().await;
    let response = upstreams
        .router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}
