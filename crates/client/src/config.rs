/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the roster API, without a trailing slash.
    pub api_url: String,
}

impl ClientConfig {
    /// Reads `ROSTER_API_URL`, defaulting to `http://localhost:5000`.
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("ROSTER_API_URL").unwrap_or_else(|_| "http://localhost:5000".into());
        Self::new(api_url)
    }

    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { api_url }
    }
}
