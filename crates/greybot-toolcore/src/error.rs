use thiserror::Error;

/// Reasons a function dispatch can fail
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unrecognized function: {0}")]
    Unrecognized(String),

    #[error("Function '{function}' is missing required argument '{argument}'")]
    MissingArgument { function: String, argument: String },

    #[error("Invalid search API URL: {0}")]
    InvalidUrl(String),

    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Search API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Search API returned invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl DispatchError {
    /// True when the failure happened before any outbound request was made
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Unrecognized(_) | Self::MissingArgument { .. })
    }
}
