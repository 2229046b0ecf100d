use std::env;

/// Runtime configuration, read once at startup and handed to the server.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub API token. The server boots without one; the stats endpoint
    /// answers 500 until it is set.
    pub github_token: Option<String>,
    /// Login used in search queries and the events feed. When unset, the
    /// login returned by the identity lookup is used instead.
    pub username: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let username = env::var("GITHUB_USERNAME").ok().filter(|u| !u.is_empty());

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        Self {
            github_token,
            username,
            host,
            port,
        }
    }
}
