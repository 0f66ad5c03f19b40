use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::time::Duration;

use greybot_llm_api::{normalize_api_url, OpenAiClient};
use greybot_toolcore::{ArgumentPolicy, ToolContext};

use crate::cli::Cli;

/// Settings shared by the relay and the function registry context
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub greynoise_api_key: String,
    pub greynoise_api_url: String,
    pub model: String,
    pub argument_policy: ArgumentPolicy,
    pub search_timeout: Duration,
    pub verbose: bool,
}

impl ClientConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let argument_policy = if cli.strict_arguments {
            ArgumentPolicy::Strict
        } else {
            ArgumentPolicy::Passthrough
        };

        Self {
            openai_api_key: cli.openai_api_key.trim().to_string(),
            openai_api_url: normalize_api_url(&cli.openai_api_url),
            greynoise_api_key: cli.greynoise_api_key.trim().to_string(),
            greynoise_api_url: cli.greynoise_api_url.trim().to_string(),
            model: cli.model.trim().to_string(),
            argument_policy,
            search_timeout: Duration::from_secs(cli.search_timeout),
            verbose: cli.verbose,
        }
    }

    /// Reject settings that could only fail later, mid-request
    pub fn validate(&self) -> Result<()> {
        if self.openai_api_key.is_empty() {
            bail!("OPENAI_API_KEY is empty");
        }
        if self.greynoise_api_key.is_empty() {
            bail!("GREYNOISE_API_KEY is empty");
        }
        if self.model.is_empty() {
            bail!("model name is empty");
        }
        if self.search_timeout.is_zero() {
            bail!("search timeout must be at least one second");
        }
        Url::parse(&self.openai_api_url)
            .with_context(|| format!("invalid chat API URL: {}", self.openai_api_url))?;
        let search = Url::parse(&self.greynoise_api_url)
            .with_context(|| format!("invalid GreyNoise API URL: {}", self.greynoise_api_url))?;
        if search.cannot_be_a_base() {
            bail!("invalid GreyNoise API URL: {}", self.greynoise_api_url);
        }
        Ok(())
    }

    pub fn tool_context(&self) -> Result<ToolContext> {
        let context = ToolContext::new(&self.greynoise_api_url, &self.greynoise_api_key)
            .with_timeout(self.search_timeout)
            .context("failed to build GreyNoise HTTP client")?
            .with_argument_policy(self.argument_policy)
            .with_verbose(self.verbose);
        Ok(context)
    }

    pub fn chat_client(&self) -> OpenAiClient {
        OpenAiClient::new(&self.openai_api_key, &self.openai_api_url).with_verbose(self.verbose)
    }
}
