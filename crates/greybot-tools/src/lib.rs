//! GreyNoise query tools
//!
//! Every function the chat model may call is a single templated GET against the
//! GreyNoise API. GNQL searches share one table-driven handler (`GnqlTool`); the IP
//! context lookup has its own endpoint.

pub mod catalog;
pub mod gnql;
pub mod greynoise;
pub mod ip_context;
pub mod vpn;

pub use catalog::gnql_tools;
pub use gnql::{Clause, GnqlTool};
pub use greynoise::{DEFAULT_GREYNOISE_API_URL, fetch_json};
pub use ip_context::IpContextTool;

use greybot_toolcore::ToolRegistry;

/// Initialize the tool registry with all available tools
pub fn initialize_tool_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(IpContextTool);
    for tool in gnql_tools() {
        registry.register(tool);
    }

    registry
}
