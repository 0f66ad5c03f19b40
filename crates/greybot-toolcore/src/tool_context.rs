use std::time::Duration;

/// What to do when the model omits an argument a query template needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentPolicy {
    /// Substitute the literal placeholder and let the search API decide
    #[default]
    Passthrough,
    /// Reject the dispatch before any request is made
    Strict,
}

/// Everything a tool needs to reach the search API.
///
/// Built once at start-up and shared by every request; holds no per-request state.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub client: reqwest::Client,
    pub search_api_url: String,
    pub search_api_key: String,
    pub argument_policy: ArgumentPolicy,
    pub verbose: bool,
}

impl ToolContext {
    pub fn new(search_api_url: impl Into<String>, search_api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            search_api_url: search_api_url.into().trim_end_matches('/').to_string(),
            search_api_key: search_api_key.into(),
            argument_policy: ArgumentPolicy::default(),
            verbose: false,
        }
    }

    /// Use a client with a request timeout instead of the default one
    pub fn with_timeout(mut self, timeout: Duration) -> reqwest::Result<Self> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn with_argument_policy(mut self, policy: ArgumentPolicy) -> Self {
        self.argument_policy = policy;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
