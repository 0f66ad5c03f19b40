use anyhow::{Context, Result};
use axum::http::HeaderName;
use axum::Router;
use colored::Colorize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::relay::ChatRelay;
use crate::web::protocol::FUNCTION_HEADER;
use crate::web::routes;

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
    pub web_dir: Option<PathBuf>,
}

/// Web server instance
pub struct WebServer {
    config: WebServerConfig,
    relay: Arc<ChatRelay>,
}

impl WebServer {
    pub fn new(config: WebServerConfig, relay: Arc<ChatRelay>) -> Self {
        Self { config, relay }
    }

    /// Full application: API routes, CORS and the optional static front end
    pub fn router(&self) -> Router {
        let app_state = routes::AppState {
            relay: self.relay.clone(),
        };

        let mut app = routes::create_router(app_state);

        if let Some(web_dir) = &self.config.web_dir {
            if web_dir.exists() {
                println!("Serving static files from: {}", web_dir.display());
                app = app.fallback_service(ServeDir::new(web_dir));
            } else {
                eprintln!(
                    "{} {}",
                    "⚠️  Static directory not found, not serving it:".yellow(),
                    web_dir.display()
                );
            }
        }

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .expose_headers([HeaderName::from_static(FUNCTION_HEADER)]);

        app.layer(cors)
    }

    /// Start the web server and run until Ctrl-C
    pub async fn start(self) -> Result<()> {
        let app = self.router();

        println!("🌐 Web server starting on http://{}", self.config.bind_addr);
        println!("   Generate endpoint: POST http://{}/api/generate", self.config.bind_addr);
        println!("   Model: {}", self.relay.model());

        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", self.config.bind_addr))?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        println!("\n{}", "Shutting down...".bright_black());
    }
}
