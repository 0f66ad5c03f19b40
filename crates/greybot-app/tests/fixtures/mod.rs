#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use greybot::relay::ChatRelay;
use greybot::web::{create_router, AppState};
use greybot_llm_api::OpenAiClient;
use greybot_toolcore::{ArgumentPolicy, ToolContext};
use greybot_tools::initialize_tool_registry;

pub const CHAT_PATH: &str = "/v1/chat/completions";
pub const GREYNOISE_KEY: &str = "gn-test-key";

/// Stand-ins for both upstream services
pub struct Upstreams {
    pub openai: MockServer,
    pub greynoise: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            openai: MockServer::start().await,
            greynoise: MockServer::start().await,
        }
    }

    pub fn relay(&self, policy: ArgumentPolicy) -> ChatRelay {
        ChatRelay::new(
            Arc::new(OpenAiClient::new("sk-test", &self.openai.uri())),
            Arc::new(initialize_tool_registry()),
            ToolContext::new(self.greynoise.uri(), GREYNOISE_KEY).with_argument_policy(policy),
            "gpt-4-1106-preview",
        )
    }

    pub fn router(&self) -> axum::Router {
        create_router(AppState {
            relay: Arc::new(self.relay(ArgumentPolicy::Passthrough)),
        })
    }

    /// Chat requests received so far, parsed as JSON
    pub async fn chat_requests(&self) -> Vec<Value> {
        self.openai
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }

    pub async fn search_request_count(&self) -> usize {
        self.greynoise.received_requests().await.unwrap_or_default().len()
    }

    /// First pass (the one carrying `max_tokens: 1024`) answers with `body`
    pub async fn mock_first_pass(&self, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .and(body_partial_json(json!({"max_tokens": 1024})))
            .respond_with(response)
            .mount(&self.openai)
            .await;
    }

    /// Second pass (the one carrying `max_tokens: 500`) answers with `body`
    pub async fn mock_second_pass(&self, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(CHAT_PATH))
            .and(body_partial_json(json!({"max_tokens": 500})))
            .respond_with(response)
            .mount(&self.openai)
            .await;
    }
}

pub fn sse(chunks: &[Value]) -> ResponseTemplate {
    let mut body: String = chunks
        .iter()
        .map(|chunk| format!("data: {}\n\n", chunk))
        .collect();
    body.push_str("data: [DONE]\n\n");
    ResponseTemplate::new(200).set_body_raw(body, "text/event-stream")
}

pub fn text_stream(tokens: &[&str]) -> ResponseTemplate {
    let mut chunks = vec![json!({"choices": [{"index": 0, "delta": {"role": "assistant", "content": ""}, "finish_reason": null}]})];
    chunks.extend(tokens.iter().map(|token| {
        json!({"choices": [{"index": 0, "delta": {"content": token}, "finish_reason": null}]})
    }));
    chunks.push(json!({"choices": [{"index": 0, "delta": {}, "finish_reason": "stop"}]}));
    sse(&chunks)
}

/// A function call whose arguments arrive split in two fragments
pub fn function_call_stream(name: &str, arguments: &Value) -> ResponseTemplate {
    let arguments = arguments.to_string();
    let (head, tail) = arguments.split_at(arguments.len() / 2);
    sse(&[
        json!({"choices": [{"index": 0, "delta": {"role": "assistant", "content": null, "function_call": {"name": name, "arguments": ""}}, "finish_reason": null}]}),
        json!({"choices": [{"index": 0, "delta": {"function_call": {"arguments": head}}, "finish_reason": null}]}),
        json!({"choices": [{"index": 0, "delta": {"function_call": {"arguments": tail}}, "finish_reason": null}]}),
        json!({"choices": [{"index": 0, "delta": {}, "finish_reason": "function_call"}]}),
    ])
}
