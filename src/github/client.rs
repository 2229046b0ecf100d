use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{ActivityEvent, GitHubUser, Repository, SearchResult};

/// Accept header required by the commit search endpoint.
const COMMIT_SEARCH_ACCEPT: &str = "application/vnd.github.cloak-preview";

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    pub base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("ghstats/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, accept: Option<&str>) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Fetching: {}", url);

        let mut request = self.client.get(&url);
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "GET {} failed: {} - {}",
                path, status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Identity lookup for the authenticated user. Unlike the aggregate
    /// fetchers, a failure here propagates to the caller.
    pub async fn get_user(&self) -> Result<GitHubUser> {
        self.get_json("/user", None).await
    }

    /// Sum of stargazers across the user's repositories. Any failure yields 0.
    pub async fn total_stars(&self) -> u64 {
        match self.get_json::<Vec<Repository>>("/user/repos", None).await {
            Ok(repos) => repos.iter().map(|r| r.stargazers_count).sum(),
            Err(e) => {
                tracing::warn!("Failed to fetch stars: {}", e);
                0
            }
        }
    }

    /// Total commits authored by `login`, via commit search. Any failure yields 0.
    pub async fn total_commits(&self, login: &str) -> u64 {
        let path = format!("/search/commits?q=author:{}", login);
        match self
            .get_json::<SearchResult>(&path, Some(COMMIT_SEARCH_ACCEPT))
            .await
        {
            Ok(result) => result.total_count,
            Err(e) => {
                tracing::warn!("Failed to fetch commit count: {}", e);
                0
            }
        }
    }

    /// Total pull requests authored by `login`. Any failure yields 0.
    pub async fn total_prs(&self, login: &str) -> u64 {
        let path = format!("/search/issues?q=author:{}+type:pr", login);
        match self.get_json::<SearchResult>(&path, None).await {
            Ok(result) => result.total_count,
            Err(e) => {
                tracing::warn!("Failed to fetch PR count: {}", e);
                0
            }
        }
    }

    /// Total issues authored by `login`. Any failure yields 0.
    pub async fn total_issues(&self, login: &str) -> u64 {
        let path = format!("/search/issues?q=author:{}+type:issue", login);
        match self.get_json::<SearchResult>(&path, None).await {
            Ok(result) => result.total_count,
            Err(e) => {
                tracing::warn!("Failed to fetch issue count: {}", e);
                0
            }
        }
    }

    /// Count of non-fork repositories among everything the user has access to.
    /// Entries without a `fork` field are excluded. Any failure yields 0.
    pub async fn contributed_to(&self) -> u64 {
        match self
            .get_json::<Vec<Repository>>("/user/repos?type=all", None)
            .await
        {
            Ok(repos) => repos.iter().filter(|r| r.fork == Some(false)).count() as u64,
            Err(e) => {
                tracing::warn!("Failed to fetch contributed repos: {}", e);
                0
            }
        }
    }

    /// Public event feed for `login`, as input to the streak calculator.
    /// Any failure yields an empty feed.
    pub async fn user_events(&self, login: &str) -> Vec<ActivityEvent> {
        let path = format!("/users/{}/events", login);
        match self.get_json::<Vec<ActivityEvent>>(&path, None).await {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("Failed to fetch event feed: {}", e);
                Vec::new()
            }
        }
    }
}
