use clap::Parser;
use std::path::PathBuf;

use greybot_llm_api::{DEFAULT_MODEL, OPENAI_API_URL};
use greybot_tools::DEFAULT_GREYNOISE_API_URL;

/// CLI arguments for greybot
#[derive(Parser, Debug, Clone)]
#[command(name = "greybot")]
#[command(about = "GreyBot - chat with GreyNoise threat intelligence")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// API key for the chat-completion endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// API key for GreyNoise
    #[arg(long, env = "GREYNOISE_API_KEY", hide_env_values = true)]
    pub greynoise_api_key: String,

    /// Model used for both completion passes
    #[arg(long, default_value = DEFAULT_MODEL, env = "GREYBOT_MODEL")]
    pub model: String,

    /// Chat-completion endpoint (bare hosts get /v1/chat/completions appended)
    #[arg(long, value_name = "URL", default_value = OPENAI_API_URL, env = "GREYBOT_OPENAI_API_URL")]
    pub openai_api_url: String,

    /// GreyNoise API base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_GREYNOISE_API_URL, env = "GREYBOT_GREYNOISE_API_URL")]
    pub greynoise_api_url: String,

    /// Web server bind address
    #[arg(long, default_value = "127.0.0.1", env = "GREYBOT_WEB_BIND")]
    pub web_bind: String,

    /// Web server port
    #[arg(long, default_value = "3000", env = "GREYBOT_WEB_PORT")]
    pub web_port: u16,

    /// Directory of static front-end files served at /
    #[arg(long, value_name = "DIR", env = "GREYBOT_WEB_DIR")]
    pub web_dir: Option<PathBuf>,

    /// Write a JSONL transcript of every turn into this directory
    #[arg(long, value_name = "DIR", env = "GREYBOT_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Timeout for each GreyNoise request, in seconds
    #[arg(long, value_name = "SECS", default_value = "30", env = "GREYBOT_SEARCH_TIMEOUT")]
    pub search_timeout: u64,

    /// Fail a function call that omits a required argument instead of sending "undefined"
    #[arg(long, env = "GREYBOT_STRICT_ARGUMENTS")]
    pub strict_arguments: bool,

    /// Show detailed request/response logging
    #[arg(short, long, env = "GREYBOT_VERBOSE")]
    pub verbose: bool,
}
