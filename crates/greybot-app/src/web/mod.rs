// Web front door for the relay
pub mod protocol;
pub mod routes;
pub mod server;

pub use protocol::{GenerateRequest, FUNCTION_HEADER};
pub use routes::{create_router, AppState};
pub use server::{WebServer, WebServerConfig};
