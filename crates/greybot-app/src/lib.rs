//! GreyBot Application Library
//!
//! Chat relay between a web front end, an OpenAI-compatible model and GreyNoise.

pub use greybot_llm_api as llm_api;
pub use greybot_models as models;
pub use greybot_toolcore::{self as toolcore, ToolContext, ToolRegistry};
pub use greybot_tools as tools;

pub mod app;
pub mod cli;
pub mod config;
pub mod relay;
pub mod web;

pub use cli::Cli;
pub use config::ClientConfig;
pub use relay::{ChatRelay, RelayResponse};
pub use web::{WebServer, WebServerConfig};
