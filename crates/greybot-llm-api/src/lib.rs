//! # greybot-llm-api
//!
//! Streaming client for OpenAI-compatible chat-completion endpoints with legacy
//! function calling.
//!
//! ## Example
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use greybot_llm_api::{LlmClient, OpenAiClient, StreamEvent, OPENAI_API_URL};
//! use greybot_models::{ChatRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = OpenAiClient::new("sk-...", OPENAI_API_URL);
//!     let request = ChatRequest::streaming("gpt-4-1106-preview", vec![Message::user("Hello!")]);
//!
//!     let mut events = client.chat_streaming(request).await?;
//!     while let Some(event) = events.next().await {
//!         if let StreamEvent::Content(token) = event? {
//!             print!("{}", token);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{
    EventStream,
    LlmClient,
    OpenAiClient,
    SseDecoder,
    SseFrame,
    StreamEvent,
};

pub use config::{
    DEFAULT_MODEL,
    OPENAI_API_URL,
    normalize_api_url,
};

pub use error::UpstreamError;
