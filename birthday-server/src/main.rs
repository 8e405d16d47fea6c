mod tracing_setup;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use birthday_server::db::{self, PgUserStore};
use birthday_server::{run_server, AppConfig, AppState, Args, SystemClock};
use tracing_setup::TracingConfig;

#[tokio::main]
async fn main() {
    // Existing environment variables win over .env
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Err(err) = tracing_setup::init(&TracingConfig { debug: args.debug }) {
        eprintln!("failed to initialize tracing: {err}");
        std::process::exit(1);
    }

    if let Err(err) = run(args).await {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = AppConfig::try_from(args)?;

    let pool = db::initialize(&config.database_url, config.max_connections)
        .await
        .context("failed to connect DB")?;

    let state = AppState::new(Arc::new(PgUserStore::new(pool)), Arc::new(SystemClock));

    tracing::info!("Starting birthday server on {}", config.bind_addr);
    run_server(state, config.bind_addr)
        .await
        .context("router error")?;

    Ok(())
}
