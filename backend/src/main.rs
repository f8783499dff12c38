//! Organisation directory entry-point: loads settings, prepares storage and
//! serves the REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use org_directory::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use org_directory::inbound::http::health::HealthState;
use org_directory::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{AppSettings, ServerConfig, build_repositories, create_server};

async fn connect_database(settings: &AppSettings) -> Result<Option<DbPool>> {
    let Some(database_url) = settings.database_url.as_deref() else {
        info!("no database configured; using in-memory directory");
        return Ok(None);
    };
    run_pending_migrations(database_url)
        .await
        .wrap_err("apply database migrations")?;
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .wrap_err("build database pool")?;
    info!("connected to PostgreSQL directory");
    Ok(Some(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().wrap_err("load application settings")?;
    // Seeding is configured through the environment and config file only.
    let example_data = ExampleDataSettings::load_from_iter([OsString::from("org-directory")])
        .wrap_err("load example data settings")?;
    let config = ServerConfig::from_settings(&settings).wrap_err("parse bind address")?;

    let pool = connect_database(&settings).await?;
    let repositories = build_repositories(pool.as_ref());
    seed_example_data_on_startup(&example_data, repositories.employees.as_ref())
        .await
        .wrap_err("seed example data")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config, repositories)?;
    info!(bind_addr = %config.bind_addr, "listening");
    server.await?;
    Ok(())
}
