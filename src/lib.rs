pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod server;
pub mod streak;

pub use config::Config;
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use models::StatsSummary;
