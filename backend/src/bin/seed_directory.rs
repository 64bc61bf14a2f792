//! Load a JSON seed document into the directory database.
//!
//! Every existing owner and pet is replaced inside one transaction, so a
//! failed run leaves the database as it was.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use pet_directory::domain::ports::DirectorySeedRepository;
use pet_directory::outbound::persistence::{
    DbPool, DieselDirectorySeedRepository, PoolConfig, run_pending_migrations,
};
use pet_directory::outbound::seed_file::read_seed_file;
use pet_directory::settings::DirectorySettings;

/// `seed-directory` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-directory",
    about = "Replace the pet directory contents with a JSON seed document",
    version
)]
struct CliArgs {
    /// Path to the seed document.
    #[arg(value_name = "path")]
    seed_path: PathBuf,
    /// SQLite database file. Defaults to the server's configured database.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Skip applying embedded migrations before seeding.
    #[arg(long = "skip-migrations")]
    skip_migrations: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();
    let settings = DirectorySettings::load_from_iter([std::ffi::OsString::from("pet-directory")])
        .wrap_err("failed to load directory settings")?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to create Tokio runtime")?;
    runtime.block_on(async_main(args, settings))
}

/// Target database: the `--database-url` flag, else the server's setting.
fn target_database(args: &CliArgs, settings: &DirectorySettings) -> String {
    args.database_url
        .clone()
        .unwrap_or_else(|| settings.database_url().to_owned())
}

async fn async_main(args: CliArgs, settings: DirectorySettings) -> Result<()> {
    let seed = read_seed_file(&args.seed_path)?;
    let database_url = target_database(&args, &settings);

    if !args.skip_migrations {
        run_pending_migrations(&database_url).wrap_err("failed to migrate database")?;
    }

    let pool = DbPool::new(PoolConfig::new(&database_url).with_max_size(1).with_min_idle(None))
        .await
        .wrap_err("failed to create database pool")?;
    let repository = DieselDirectorySeedRepository::new(pool);

    let summary = repository
        .replace_all(&seed.owners(), &seed.pets())
        .await
        .wrap_err("failed to apply seed document")?;

    info!(
        %database_url,
        owners = summary.owners,
        pets = summary.pets,
        "directory seeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;
    use rstest::rstest;

    fn settings_with_database(url: &str) -> DirectorySettings {
        let _guard = lock_env([("DIRECTORY_DATABASE_URL", Some(url.to_owned()))]);
        DirectorySettings::load_from_iter([std::ffi::OsString::from("pet-directory")])
            .expect("config should load")
    }

    #[rstest]
    fn database_defaults_to_server_setting() {
        let settings = settings_with_database("/srv/pets.db");
        let args = CliArgs::parse_from(["seed-directory", "seed.json"]);

        assert_eq!(target_database(&args, &settings), "/srv/pets.db");
    }

    #[rstest]
    fn flag_overrides_server_setting() {
        let settings = settings_with_database("/srv/pets.db");
        let args =
            CliArgs::parse_from(["seed-directory", "seed.json", "--database-url", "other.db"]);

        assert_eq!(target_database(&args, &settings), "other.db");
    }
}
