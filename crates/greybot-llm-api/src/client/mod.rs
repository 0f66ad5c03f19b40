use anyhow::Result;
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use greybot_models::{ChatRequest, StreamChunk, StreamFunctionDelta};

pub mod openai;
pub mod sse;

pub use openai::OpenAiClient;
pub use sse::{SseDecoder, SseFrame};

/// One decoded piece of a streamed completion
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Non-empty content token
    Content(String),
    /// Function call fragment; name usually arrives first, arguments in pieces
    FunctionCall(StreamFunctionDelta),
    /// `finish_reason` of the choice, e.g. `stop` or `function_call`
    Finish(String),
}

impl StreamEvent {
    /// Flatten a chunk into events, preserving content / function / finish order
    pub fn from_chunk(chunk: StreamChunk) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        if let Some(choice) = chunk.choices.into_iter().next() {
            if let Some(content) = choice.delta.content.filter(|c| !c.is_empty()) {
                events.push(StreamEvent::Content(content));
            }
            if let Some(function_call) = choice.delta.function_call {
                events.push(StreamEvent::FunctionCall(function_call));
            }
            if let Some(reason) = choice.finish_reason {
                events.push(StreamEvent::Finish(reason));
            }
        }
        events
    }
}

/// Stream of decoded events; ends after `[DONE]` or when upstream closes
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>;

/// Chat-completion client used by the relay
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Start a streamed completion. Errors before the first byte (rejected request,
    /// network failure) are returned here; later failures arrive as stream items.
    async fn chat_streaming(&self, request: ChatRequest) -> Result<EventStream>;
}
