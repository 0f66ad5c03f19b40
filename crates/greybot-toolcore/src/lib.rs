//! Function-calling core: the `Tool` trait every query handler implements, the
//! parameters it receives, and the registry the relay dispatches through.

pub mod error;
pub mod tool;
pub mod tool_context;
pub mod tool_registry;

pub use error::DispatchError;
pub use tool::{ParameterDefinition, Tool, ToolParameters, MISSING_ARGUMENT_PLACEHOLDER};
pub use tool_context::{ArgumentPolicy, ToolContext};
pub use tool_registry::ToolRegistry;
