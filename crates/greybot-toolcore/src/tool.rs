use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use greybot_models::FunctionDef;

use crate::error::DispatchError;
use crate::tool_context::{ArgumentPolicy, ToolContext};

/// Substituted for arguments the model left out when running in passthrough mode
pub const MISSING_ARGUMENT_PLACEHOLDER: &str = "undefined";

/// Tool parameters
#[derive(Debug, Clone, Default)]
pub struct ToolParameters {
    pub data: HashMap<String, Value>,
}

impl ToolParameters {
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        let data: HashMap<String, Value> = serde_json::from_str(json_str)?;
        Ok(Self { data })
    }

    /// Parse the argument text streamed by the model.
    ///
    /// Empty or malformed text yields no arguments; the missing-argument policy
    /// decides what happens next.
    pub fn from_model_arguments(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        Self::from_json(raw).unwrap_or_default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    /// String form of an argument; non-string JSON values keep their JSON text
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.data.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Resolve an argument for substitution into a query template
    pub fn resolve(
        &self,
        function: &str,
        key: &str,
        policy: ArgumentPolicy,
    ) -> Result<String, DispatchError> {
        match (self.get_string(key), policy) {
            (Some(value), _) => Ok(value),
            (None, ArgumentPolicy::Passthrough) => Ok(MISSING_ARGUMENT_PLACEHOLDER.to_string()),
            (None, ArgumentPolicy::Strict) => Err(DispatchError::MissingArgument {
                function: function.to_string(),
                argument: key.to_string(),
            }),
        }
    }
}

/// Tool parameter definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterDefinition {
    pub param_type: String,
    pub description: String,
    pub required: bool,
}

/// Tool trait that all query handlers implement
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name of the tool (must be unique)
    fn name(&self) -> &str;

    /// Human-readable description advertised to the model
    fn description(&self) -> &str;

    /// Parameter definitions
    fn parameters(&self) -> HashMap<String, ParameterDefinition>;

    /// Execute the tool, returning the raw JSON result
    async fn execute(&self, params: ToolParameters, context: &ToolContext) -> Result<Value, DispatchError>;

    /// Get the function descriptor sent to the chat API
    fn to_function_definition(&self) -> FunctionDef {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for (name, param_def) in self.parameters() {
            let param_json = serde_json::json!({
                "type": param_def.param_type,
                "description": param_def.description,
            });
            properties.insert(name.clone(), param_json);

            if param_def.required {
                required.push(name);
            }
        }
        // HashMap order is random; keep the descriptor stable
        required.sort();

        FunctionDef {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": properties,
                "required": required
            }),
        }
    }
}

/// Helper macro for creating parameter definitions
#[macro_export]
macro_rules! param {
    ($name:expr, $type:expr, $desc:expr, required) => {
        (
            $name.to_string(),
            $crate::ParameterDefinition {
                param_type: $type.to_string(),
                description: $desc.to_string(),
                required: true,
            },
        )
    };
    ($name:expr, $type:expr, $desc:expr, optional) => {
        (
            $name.to_string(),
            $crate::ParameterDefinition {
                param_type: $type.to_string(),
                description: $desc.to_string(),
                required: false,
            },
        )
    };
}
