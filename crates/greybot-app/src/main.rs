use anyhow::Result;
use clap::Parser;

use greybot::app::run_web_server;
use greybot::{Cli, ClientConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client_config = ClientConfig::from_cli(&cli);
    client_config.validate()?;

    run_web_server(&cli, client_config).await
}
