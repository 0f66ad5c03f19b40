use anyhow::Result;
use async_stream::stream;
use async_trait::async_trait;
use colored::Colorize;
use futures::Stream;
use futures_util::StreamExt;

use greybot_logging::{log_request, log_response, log_stream_chunk};
use greybot_models::{ApiErrorBody, ChatRequest, StreamChunk};

use crate::client::{EventStream, LlmClient, SseDecoder, SseFrame, StreamEvent};
use crate::config::normalize_api_url;
use crate::error::UpstreamError;

/// Client for OpenAI's streaming chat-completions endpoint
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
    verbose: bool,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, api_url: &str) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: normalize_api_url(api_url),
            client: reqwest::Client::new(),
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat_streaming(&self, request: ChatRequest) -> Result<EventStream> {
        log_request(&self.api_url, &request, &self.api_key, self.verbose);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            log_response(&status, &headers, &error_body, self.verbose);

            return Err(UpstreamError::from_response(status.as_u16(), &error_body).into());
        }

        if self.verbose {
            println!("\n{}", "📡 Starting streaming response...".bright_cyan());
            println!("{}", "═".repeat(80).bright_cyan());
        }

        Ok(Box::pin(decode_events(response, self.verbose)))
    }
}

fn decode_events(response: reqwest::Response, verbose: bool) -> impl Stream<Item = Result<StreamEvent>> + Send {
    stream! {
        let mut body = response.bytes_stream();
        let mut decoder = SseDecoder::new();
        let mut chunk_counter = 0;

        loop {
            let (frames, closed) = match body.next().await {
                Some(Ok(bytes)) => (decoder.push(&bytes), false),
                Some(Err(e)) => {
                    yield Err(anyhow::Error::from(UpstreamError::Transport(e)));
                    return;
                }
                None => (decoder.finish().into_iter().collect::<Vec<_>>(), true),
            };

            for frame in frames {
                match frame {
                    SseFrame::Done => {
                        if verbose {
                            println!("{}", "✓ Stream completed".bright_green());
                            println!("{}", "═".repeat(80).bright_green());
                        }
                        return;
                    }
                    SseFrame::Data(data) => {
                        chunk_counter += 1;
                        log_stream_chunk(chunk_counter, &data, verbose);

                        match parse_data(&data) {
                            Ok(events) => {
                                for event in events {
                                    yield Ok(event);
                                }
                            }
                            Err(e) => {
                                yield Err(anyhow::Error::from(e));
                                return;
                            }
                        }
                    }
                }
            }

            if closed {
                return;
            }
        }
    }
}

/// Decode one `data:` payload. Unparseable chunks are skipped; an error object ends the stream.
fn parse_data(data: &str) -> Result<Vec<StreamEvent>, UpstreamError> {
    if let Ok(error) = serde_json::from_str::<ApiErrorBody>(data) {
        return Err(UpstreamError::Stream(error.error.message));
    }
    Ok(serde_json::from_str::<StreamChunk>(data)
        .map(StreamEvent::from_chunk)
        .unwrap_or_default())
}
