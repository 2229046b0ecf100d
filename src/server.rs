use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::StatsSummary;
use crate::streak;

/// Origin the frontend is served from.
const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Shared request-handling state, built once at startup. The client is absent
/// when no token is configured; the stats handler answers 500 in that case
/// without touching the network.
#[derive(Clone)]
pub struct AppState {
    pub client: Option<GitHubClient>,
    pub username: Option<String>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = match &config.github_token {
            Some(token) => Some(GitHubClient::new(token)?),
            None => None,
        };
        Ok(Self {
            client,
            username: config.username.clone(),
        })
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static(ALLOWED_ORIGIN))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/github-stats", get(github_stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::from_config(&config)?;
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_check() -> &'static str {
    "Server is running"
}

/// Aggregate the stats summary: one identity lookup, then the five counters
/// and the event feed fetched concurrently and merged in a fixed order.
async fn github_stats(
    State(state): State<AppState>,
) -> std::result::Result<Json<StatsSummary>, (StatusCode, String)> {
    let Some(client) = state.client.as_ref() else {
        tracing::error!("Stats requested but GITHUB_TOKEN is not set");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "GitHub token not set".to_string(),
        ));
    };

    let user = client.get_user().await.map_err(|e| {
        tracing::error!("Identity lookup failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let login = state
        .username
        .clone()
        .unwrap_or_else(|| user.login.clone());

    let (total_stars, total_commits, total_prs, total_issues, contributed_to, events) = futures::join!(
        client.total_stars(),
        client.total_commits(&login),
        client.total_prs(&login),
        client.total_issues(&login),
        client.contributed_to(),
        client.user_events(&login),
    );
    let streaks = streak::compute(&events);

    Ok(Json(StatsSummary {
        total_commits,
        total_stars,
        total_prs,
        total_issues,
        contributed_to,
        total_contributions: streaks.total_contributions,
        current_streak: streaks.current_streak,
        longest_streak: streaks.longest_streak,
        name: user.name.unwrap_or_default(),
        avatar_url: user.avatar_url,
    }))
}
