use greybot_models::ApiErrorBody;
use thiserror::Error;

/// Failures talking to the chat-completion API
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Non-2xx response; `message` is the upstream `error.message` when present
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Error object delivered inside the event stream
    #[error("{0}")]
    Stream(String),

    #[error("chat API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl UpstreamError {
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) if body.trim().is_empty() => format!("chat API returned status {}", status),
            Err(_) => body.trim().to_string(),
        };
        Self::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Stream(_) => None,
        }
    }
}
