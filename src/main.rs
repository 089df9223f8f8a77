// src/main.rs

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use interview_ai::api::http_router;
use interview_ai::config::CONFIG;
use interview_ai::state::AppState;
use interview_ai::store::SqliteSessionStore;

#[derive(Parser)]
#[command(name = "interview-ai")]
#[command(about = "Mock interview session server")]
struct Args {
    /// Bind host (overrides INTERVIEW_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides INTERVIEW_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Database path (sqlite URL)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("interview_ai=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    // Resolve values: CLI args > env vars (handled by clap) > config defaults
    let host = args.host.unwrap_or_else(|| CONFIG.host.clone());
    let port = args.port.unwrap_or(CONFIG.port);
    let database_url = args
        .database_url
        .unwrap_or_else(|| CONFIG.database_url.clone());

    let db_url = if database_url.starts_with("sqlite:") {
        database_url
    } else {
        format!("sqlite:{}", database_url)
    };

    info!("Starting interview server");
    info!("Database: {}", db_url);

    let store = Arc::new(SqliteSessionStore::connect(&db_url).await?);

    let state = AppState::with_store(store);
    let app = http_router(state, &CONFIG);

    let bind_address = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Interview server listening on http://{}", bind_address);
    info!("  GET  /ping");
    info!("  GET  /test/jobs");
    info!("  POST /test/start?job=...");
    info!("  GET  /test/sessions");
    info!("  GET  /test/sessions/{{id}}");
    info!("  POST /test/answer?sessionId=...");

    axum::serve(listener, app).await?;

    Ok(())
}
