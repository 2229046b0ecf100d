use clap::Parser;
use tracing_subscriber::EnvFilter;

use ghstats::{server, Config};

#[derive(Parser, Debug)]
#[command(name = "ghstats")]
#[command(version = "0.1.0")]
#[command(about = "Serve aggregated GitHub profile stats over HTTP")]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ghstats=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables from the optional local env file
    if dotenvy::from_filename(".env.local").is_ok() {
        tracing::info!(".env.local loaded");
    }

    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    if config.github_token.is_none() {
        tracing::warn!("GITHUB_TOKEN is not set; /api/github-stats will answer 500");
    }

    server::run(config).await?;
    Ok(())
}
