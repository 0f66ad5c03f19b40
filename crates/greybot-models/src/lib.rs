// Models module - data structures for chat API communication
pub mod types;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use types::{Role, Message, FunctionCall};
pub use requests::{ChatRequest, FunctionDef, FUNCTION_CALL_AUTO};
pub use responses::{
    StreamChunk, StreamChoice, StreamDelta, StreamFunctionDelta,
    ApiErrorBody, ApiErrorDetail,
};
