use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::collections::HashMap;

use greybot_toolcore::{
    param, ArgumentPolicy, DispatchError, ParameterDefinition, Tool, ToolContext, ToolParameters,
};

use crate::greynoise::{endpoint, fetch_json};

/// Full GreyNoise context for a single IP address
pub struct IpContextTool;

impl IpContextTool {
    pub fn request_url(&self, base: &str, params: &ToolParameters, policy: ArgumentPolicy) -> Result<Url, DispatchError> {
        let ip = params.resolve(self.name(), "ip", policy)?;
        endpoint(base, &["v2", "noise", "context", &ip])
    }
}

#[async_trait]
impl Tool for IpContextTool {
    fn name(&self) -> &str {
        "get_ip_data"
    }

    fn description(&self) -> &str {
        "Get the ip data from greynoise.io"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([
            param!("ip", "string", "The ip to get the data from", required),
        ])
    }

    async fn execute(&self, params: ToolParameters, context: &ToolContext) -> Result<Value, DispatchError> {
        let url = self.request_url(&context.search_api_url, &params, context.argument_policy)?;
        fetch_json(context, self.name(), url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url() {
        let params = ToolParameters::default().with("ip", "183.89.74.49");
        let url = IpContextTool
            .request_url("https://api.greynoise.io", &params, ArgumentPolicy::Passthrough)
            .unwrap();
        assert_eq!(url.as_str(), "https://api.greynoise.io/v2/noise/context/183.89.74.49");
    }

    #[test]
    fn test_missing_ip_passthrough() {
        let url = IpContextTool
            .request_url("https://api.greynoise.io", &ToolParameters::default(), ArgumentPolicy::Passthrough)
            .unwrap();
        assert_eq!(url.path(), "/v2/noise/context/undefined");
    }
}
