//! Two-pass chat relay.
//!
//! The first completion carries the function catalog. If the model answers in text,
//! that stream is relayed as-is. If it calls a function, the call is dispatched through
//! the registry, its JSON result is appended to the conversation and a second,
//! catalog-free completion is relayed instead.

use anyhow::Result;
use async_stream::stream;
use colored::Colorize;
use futures_util::StreamExt;
use std::sync::Arc;
use uuid::Uuid;

use greybot_llm_api::LlmClient;
use greybot_logging::{safe_truncate, ConversationLogger};
use greybot_models::{ChatRequest, FunctionCall, Message};
use greybot_toolcore::{ToolContext, ToolParameters, ToolRegistry};

pub mod prompt;
pub mod stream;

pub use prompt::{initial_conversation, SYSTEM_PROMPT};
pub use stream::{classify, relay_tokens, Classification, TokenStream};

pub const FIRST_PASS_MAX_TOKENS: u32 = 1024;
pub const SECOND_PASS_MAX_TOKENS: u32 = 500;
pub const SECOND_PASS_TEMPERATURE: f32 = 0.7;

/// Result of a relayed turn
pub struct RelayResponse {
    /// The function the model called, if the turn took the dispatch path
    pub function_call: Option<FunctionCall>,
    pub tokens: TokenStream,
}

/// Stateless and shared across requests; each `run` owns its own conversation
pub struct ChatRelay {
    client: Arc<dyn LlmClient>,
    registry: Arc<ToolRegistry>,
    context: ToolContext,
    model: String,
    logger: Option<Arc<ConversationLogger>>,
}

impl ChatRelay {
    pub fn new(
        client: Arc<dyn LlmClient>,
        registry: Arc<ToolRegistry>,
        context: ToolContext,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            registry,
            context,
            model: model.into(),
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<ConversationLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one turn. Errors returned here happened before any token was relayed;
    /// later upstream failures surface as an error item that ends `tokens`.
    pub async fn run(&self, prompt: &str) -> Result<RelayResponse> {
        let turn_id = Uuid::new_v4();
        let mut messages = initial_conversation(prompt);
        for message in &messages {
            self.log_message(turn_id, message).await;
        }

        let request = ChatRequest::streaming(&self.model, messages.clone())
            .with_functions(self.registry.function_definitions())
            .with_max_tokens(FIRST_PASS_MAX_TOKENS);
        let mut events = self.client.chat_streaming(request).await?;

        let call = match classify(&mut events).await? {
            Classification::Direct(first) => {
                return Ok(RelayResponse {
                    function_call: None,
                    tokens: self.transcribe(turn_id, relay_tokens(Some(first), events)),
                });
            }
            Classification::Empty => {
                return Ok(RelayResponse {
                    function_call: None,
                    tokens: Box::pin(futures::stream::empty()),
                });
            }
            Classification::FunctionCall(call) => call,
        };

        if self.context.verbose {
            println!(
                "{} {}({})",
                "🔧 Calling".bright_yellow(),
                call.name.bright_yellow().bold(),
                safe_truncate(&call.arguments, 200)
            );
        }
        if let Some(logger) = &self.logger {
            logger.log_function_call(turn_id, &call).await;
        }

        let params = ToolParameters::from_model_arguments(&call.arguments);
        let result = match self.registry.dispatch(&call.name, params, &self.context).await {
            Ok(result) => result,
            Err(e) => {
                if self.context.verbose {
                    let label = if e.is_local() {
                        "⚠️  Function call rejected:"
                    } else {
                        "❌ Search request failed:"
                    };
                    eprintln!("{} {}", label.red(), e);
                }
                return Err(e.into());
            }
        };

        let result_message = Message::function_result(&call.name, result.to_string());
        self.log_message(turn_id, &result_message).await;
        messages.push(result_message);

        let request = ChatRequest::streaming(&self.model, messages)
            .with_max_tokens(SECOND_PASS_MAX_TOKENS)
            .with_temperature(SECOND_PASS_TEMPERATURE);
        let events = self.client.chat_streaming(request).await?;

        Ok(RelayResponse {
            function_call: Some(call),
            tokens: self.transcribe(turn_id, relay_tokens(None, events)),
        })
    }

    async fn log_message(&self, turn_id: Uuid, message: &Message) {
        if let Some(logger) = &self.logger {
            logger.log_message(turn_id, message).await;
        }
    }

    /// Record the relayed answer once the stream completes
    fn transcribe(&self, turn_id: Uuid, tokens: TokenStream) -> TokenStream {
        let Some(logger) = self.logger.clone() else {
            return tokens;
        };

        let mut tokens = tokens;
        Box::pin(stream! {
            let mut answer = String::new();
            while let Some(token) = tokens.next().await {
                if let Ok(token) = &token {
                    answer.push_str(token);
                }
                yield token;
            }
            logger.log_message(turn_id, &Message::assistant(answer)).await;
        })
    }
}
