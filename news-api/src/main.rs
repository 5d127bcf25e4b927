//! news-api server binary.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use news_api::db::pool::create_pool;
use news_api::http::{run_server, ServerConfig};
use news_api::tracing_setup::{init_tracing, TracingConfig};

#[derive(Debug, Parser)]
#[command(
    name = "news-api",
    about = "REST API for news articles, topics, users, and comments"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1:9090")]
    bind: SocketAddr,

    /// PostgreSQL connection string (falls back to DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Allow any CORS origin instead of localhost only
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug })?;

    let database_url = match cli.database_url {
        Some(url) => url,
        None => std::env::var("DATABASE_URL")
            .context("DATABASE_URL is not set and --database-url was not given")?,
    };

    let pool = create_pool(&database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    run_server(pool, config).await?;
    Ok(())
}
