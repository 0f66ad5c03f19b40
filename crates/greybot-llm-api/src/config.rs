/// Default OpenAI API URL
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used for both passes unless overridden
pub const DEFAULT_MODEL: &str = "gpt-4-1106-preview";

/// Normalize an API URL to the chat-completions endpoint.
/// Bare hosts get `/v1/chat/completions` appended; anything already naming a chat path is kept.
pub fn normalize_api_url(url: &str) -> String {
    let url = url.trim();
    if url.contains("/completions") || url.contains("/chat") {
        return url.to_string();
    }

    if url.ends_with('/') {
        format!("{}v1/chat/completions", url)
    } else {
        format!("{}/v1/chat/completions", url)
    }
}
