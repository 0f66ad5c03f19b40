use anyhow::Result;
use async_stream::stream;
use futures::Stream;
use futures_util::StreamExt;
use std::pin::Pin;

use greybot_llm_api::StreamEvent;
use greybot_models::FunctionCall;

/// Output tokens relayed to the caller, in upstream order
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// How the first pass resolved
#[derive(Debug, PartialEq)]
pub enum Classification {
    /// The model answered in text; carries the first non-empty token
    Direct(String),
    /// The model asked for a function; name and arguments fully accumulated
    FunctionCall(FunctionCall),
    /// The stream ended with neither
    Empty,
}

/// Read the first pass until it commits to text or a complete function call.
///
/// On `Direct` the rest of the stream is left unread for [`relay_tokens`].
pub async fn classify<S>(events: &mut S) -> Result<Classification>
where
    S: Stream<Item = Result<StreamEvent>> + Unpin,
{
    let mut call: Option<FunctionCall> = None;

    while let Some(event) = events.next().await {
        match event? {
            StreamEvent::Content(token) => {
                if call.is_none() {
                    return Ok(Classification::Direct(token));
                }
            }
            StreamEvent::FunctionCall(delta) => {
                let call = call.get_or_insert_with(FunctionCall::default);
                if let Some(name) = delta.name {
                    call.name.push_str(&name);
                }
                if let Some(arguments) = delta.arguments {
                    call.arguments.push_str(&arguments);
                }
            }
            StreamEvent::Finish(reason) => {
                if reason == "function_call" && call.is_some() {
                    break;
                }
            }
        }
    }

    Ok(match call {
        Some(call) => Classification::FunctionCall(call),
        None => Classification::Empty,
    })
}

/// Content tokens of `events`, preceded by `first` when the first pass already produced one.
/// An upstream error is yielded once and ends the stream.
pub fn relay_tokens<S>(first: Option<String>, mut events: S) -> TokenStream
where
    S: Stream<Item = Result<StreamEvent>> + Send + Unpin + 'static,
{
    Box::pin(stream! {
        if let Some(first) = first {
            yield Ok(first);
        }
        while let Some(event) = events.next().await {
            match event {
                Ok(StreamEvent::Content(token)) => yield Ok(token),
                Ok(_) => {}
                Err(e) => {
                    yield Err(e);
                    return;
                }
            }
        }
    })
}
