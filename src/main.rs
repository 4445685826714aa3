//! Vulnerable HTTP fixture.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id + trace layers ──▶ routing table ──▶ handler
//!                                                                      │
//!          ┌───────────────┬───────────────┬──────────────┬────────────┤
//!          ▼               ▼               ▼              ▼            ▼
//!     store::users     shell::system   marshal::loads  store::files  store::accounts
//!     (SQLite)         (sh -c)         (reduce steps)  (base dir)    (static table)
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use vuln_fixture::config::{load_config, FixtureConfig};
use vuln_fixture::lifecycle::{signals, startup, Shutdown};
use vuln_fixture::observability::logging;
use vuln_fixture::{store, HttpServer};

#[derive(Parser)]
#[command(name = "vuln-fixture")]
#[command(about = "Deliberately vulnerable HTTP service for security tooling", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Force debug mode on.
    #[arg(long, conflicts_with = "no_debug")]
    debug: bool,

    /// Force debug mode off.
    #[arg(long)]
    no_debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and files directory, then exit
    Seed,
}

impl Cli {
    fn apply_overrides(&self, config: &mut FixtureConfig) {
        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if self.debug {
            config.debug = true;
        }
        if self.no_debug {
            config.debug = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FixtureConfig::default(),
    };
    cli.apply_overrides(&mut config);

    logging::init(&config.observability);
    tracing::info!("vuln-fixture v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(Commands::Seed) = cli.command {
        store::seed(&config.storage)?;
        tracing::info!("Seed complete");
        return Ok(());
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        debug = config.debug,
        database = %config.storage.database_path,
        files_dir = %config.storage.files_dir,
        "Configuration loaded"
    );

    startup::prepare(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_ctrl_c(shutdown.clone());

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
