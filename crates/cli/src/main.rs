//! # Relief API
//!
//! Disaster-response REST service: report CRUD plus cached enrichment
//! lookups (geocoding, social feed, official updates, image checks).

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use relief_domain::CliOverrides;
use relief_jobs::{CachePurgeJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "relief-api")]
#[command(version)]
#[command(about = "Disaster-response coordination API")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long, env = "RELIEF_CONFIG")]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long, env = "PORT")]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// SQLite database path
    #[arg(short = 'd', long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Cache entry lifetime in seconds
    #[arg(long)]
    cache_ttl: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
        cache_ttl_secs: cli.cache_ttl,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Relief API starting");

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let providers = di::Providers::new(&config.providers)?;
    let use_cases = di::UseCases::new(&repos, &providers, &config);

    let shutdown = CancellationToken::new();

    if config.cache.purge_enabled() {
        JobRunner::new()
            .with_cache_purge(
                CachePurgeJob::new(use_cases.purge_cache.clone())
                    .with_interval(config.cache.purge_interval_secs)
                    .with_cancellation(shutdown.clone()),
            )
            .start()
            .await;
    }

    let result = server::start_web_server(&config, use_cases.app_state(&config)).await;
    shutdown.cancel();

    result
}
