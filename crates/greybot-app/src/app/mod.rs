// Application setup
pub mod web_server;

pub use web_server::{build_relay, run_web_server};
