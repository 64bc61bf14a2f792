//! Pet directory entry-point: loads settings, prepares the record store, and
//! serves the directory pages.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use pet_directory::inbound::http::health::HealthState;
use pet_directory::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use pet_directory::settings::DirectorySettings;
use server::{ServerConfig, create_server};

fn init_tracing(settings: &DirectorySettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_log_filter()));
    let result = if settings.debug() {
        fmt().with_env_filter(filter).try_init()
    } else {
        fmt().with_env_filter(filter).json().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Migrate the configured database when enabled, then open the pool.
async fn prepare_store(settings: &DirectorySettings) -> Result<DbPool> {
    let database_url = settings.database_url();
    if settings.run_migrations() {
        let applied =
            run_pending_migrations(database_url).wrap_err("failed to migrate database")?;
        info!(database_url, applied = applied.len(), "migrations applied");
    }

    DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size()))
        .await
        .wrap_err("failed to create database pool")
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = DirectorySettings::load().wrap_err("failed to load settings")?;
    init_tracing(&settings);

    let pool = prepare_store(&settings).await?;

    let bind_addr = settings.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, pool))
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            health_state.mark_draining();
            info!("shutdown requested; draining");
        }
    });

    info!(%bind_addr, "pet directory listening");
    server.await.wrap_err("server terminated with an error")
}
