use std::collections::HashMap;
use std::sync::Arc;

use greybot_models::FunctionDef;
use serde_json::Value;

use super::error::DispatchError;
use super::tool::{Tool, ToolParameters};
use super::tool_context::ToolContext;

/// Name-to-handler table the relay dispatches function calls through
#[derive(Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.get_tool_names())
            .finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a new tool; a later tool with the same name replaces the earlier one
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get tool names, sorted
    pub fn get_tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute the tool registered under `name`
    pub async fn dispatch(
        &self,
        name: &str,
        params: ToolParameters,
        context: &ToolContext,
    ) -> Result<Value, DispatchError> {
        match self.get_tool(name) {
            Some(tool) => tool.execute(params, context).await,
            None => Err(DispatchError::Unrecognized(name.to_string())),
        }
    }

    /// Get all function descriptors, ordered by name
    pub fn function_definitions(&self) -> Vec<FunctionDef> {
        let mut tools: Vec<_> = self.tools.iter().collect();
        // Sort by tool name to ensure consistent ordering (critical for prompt caching)
        tools.sort_by_key(|(name, _)| name.as_str());
        tools
            .into_iter()
            .map(|(_, tool)| tool.to_function_definition())
            .collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
