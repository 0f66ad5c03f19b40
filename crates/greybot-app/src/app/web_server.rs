use anyhow::{Context, Result};
use colored::Colorize;
use std::net::SocketAddr;
use std::sync::Arc;

use greybot_logging::ConversationLogger;
use greybot_tools::initialize_tool_registry;

use crate::cli::Cli;
use crate::config::ClientConfig;
use crate::relay::ChatRelay;
use crate::web::server::{WebServer, WebServerConfig};

/// Wire the chat client, the function registry and the optional transcript logger
pub async fn build_relay(cli: &Cli, client_config: &ClientConfig) -> Result<(ChatRelay, Option<Arc<ConversationLogger>>)> {
    let registry = Arc::new(initialize_tool_registry());
    let mut relay = ChatRelay::new(
        Arc::new(client_config.chat_client()),
        registry,
        client_config.tool_context()?,
        &client_config.model,
    );

    let logger = match &cli.log_dir {
        Some(log_dir) => {
            let logger = ConversationLogger::new(log_dir)
                .await
                .with_context(|| format!("failed to open conversation log in {}", log_dir.display()))?;
            println!("   Conversation log: {}", logger.file_path().display());
            let logger = Arc::new(logger);
            relay = relay.with_logger(logger.clone());
            Some(logger)
        }
        None => None,
    };

    Ok((relay, logger))
}

/// Run the web server
pub async fn run_web_server(cli: &Cli, client_config: ClientConfig) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", cli.web_bind, cli.web_port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", cli.web_bind, cli.web_port))?;

    println!("{}", "🌐 Starting GreyBot web server...".bright_cyan());
    println!("   Address: {}", addr);
    println!("   Chat API: {}", client_config.openai_api_url);
    println!("   GreyNoise API: {}", client_config.greynoise_api_url);

    let (relay, logger) = build_relay(cli, &client_config).await?;

    let config = WebServerConfig {
        bind_addr: addr,
        web_dir: cli.web_dir.clone(),
    };

    let server = WebServer::new(config, Arc::new(relay));
    let result = server.start().await;

    if let Some(logger) = logger {
        logger.shutdown().await;
    }

    result
}
