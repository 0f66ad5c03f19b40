use colored::Colorize;
use reqwest::Url;
use serde_json::Value;

use greybot_logging::{log_response, log_search_request};
use greybot_toolcore::{DispatchError, ToolContext};

/// Public GreyNoise API
pub const DEFAULT_GREYNOISE_API_URL: &str = "https://api.greynoise.io";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "key";

/// Build `<base>/<segments...>`, percent-encoding each segment
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, DispatchError> {
    let mut url = Url::parse(base).map_err(|e| DispatchError::InvalidUrl(format!("{}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| DispatchError::InvalidUrl(format!("{}: cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// GET a search endpoint and return its JSON body untouched.
///
/// Non-2xx replies with a JSON body are returned as the result; only
/// non-JSON error bodies become `DispatchError::Status`.
pub async fn fetch_json(context: &ToolContext, function: &str, url: Url) -> Result<Value, DispatchError> {
    log_search_request(function, url.as_str(), &context.search_api_key, context.verbose);

    let response = context
        .client
        .get(url)
        .header("accept", "application/json")
        .header(API_KEY_HEADER, &context.search_api_key)
        .send()
        .await?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await?;

    if !status.is_success() {
        log_response(&status, &headers, &body, context.verbose);
        // JSON error replies go to the model like any other result
        return match serde_json::from_str(&body) {
            Ok(value) => {
                if context.verbose {
                    println!(
                        "{} {} answered {}, passing its error body to the model",
                        "⚠️ ".yellow(),
                        function,
                        status
                    );
                }
                Ok(value)
            }
            Err(_) => Err(DispatchError::Status {
                status: status.as_u16(),
                body,
            }),
        };
    }

    serde_json::from_str(&body).map_err(DispatchError::Decode)
}
