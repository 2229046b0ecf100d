use serde::{Deserialize, Serialize};

/// Aggregate result record returned by the stats endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_commits: u64,
    pub total_stars: u64,
    pub total_prs: u64,
    pub total_issues: u64,
    pub contributed_to: u64,
    pub total_contributions: u64,
    pub current_streak: u64,
    pub longest_streak: u64,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
}

/// Repository entry as returned by `/user/repos`. Only the fields the
/// aggregators read; counts default to zero when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub stargazers_count: u64,
    /// Absent on some entries; those are excluded from the contributed_to count.
    pub fork: Option<bool>,
}

/// Envelope of the `/search/commits` and `/search/issues` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub total_count: u64,
}

/// One entry of the `/users/{login}/events` feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type")]
    pub kind: String,
    /// Kept as the raw RFC3339 string; the streak calculator parses it and
    /// skips events it cannot parse.
    pub created_at: Option<String>,
}
