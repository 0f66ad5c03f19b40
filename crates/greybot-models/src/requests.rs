use serde::{Deserialize, Serialize};
use super::types::Message;

/// Let the model decide whether to call a function
pub const FUNCTION_CALL_AUTO: &str = "auto";

/// Function definition advertised to the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Chat API request structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub functions: Vec<FunctionDef>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub function_call: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Streaming request with no functions attached
    pub fn streaming(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            functions: Vec::new(),
            function_call: None,
            stream: Some(true),
            max_tokens: None,
            temperature: None,
        }
    }

    /// Attach a function catalog and let the model pick
    pub fn with_functions(mut self, functions: Vec<FunctionDef>) -> Self {
        self.function_call = if functions.is_empty() {
            None
        } else {
            Some(FUNCTION_CALL_AUTO.to_string())
        };
        self.functions = functions;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
