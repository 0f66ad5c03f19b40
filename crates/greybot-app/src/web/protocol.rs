use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Response header naming the function a turn dispatched, when it took that path
pub const FUNCTION_HEADER: &str = "x-greybot-function";
