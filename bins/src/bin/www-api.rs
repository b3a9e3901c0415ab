// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The year wheel www API
//!

use clap::Parser;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;
use yearwheel_store::{Config, Repository, SqliteStore};
use yearwheel_www_api::{ApiAccessMode, prepare_api_router};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Year wheel www API entry point (serve the www JSON API)
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("yearwheel")
        .add_filter_allow_str("tower_http")
        .build();
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    // Load the config, letting the flags override it
    let mut config = Config::ensure_setup()?;
    if let Some(database) = &args.database {
        config.set_database_path(database);
    }

    if let Err(error) = serve(&config, &args).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }

    Ok(())
}

/// Serve the API
async fn serve(config: &Config, args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Setup up the API mode
    let access_mode = if args.read_only {
        ApiAccessMode::Read
    } else {
        ApiAccessMode::ReadWrite
    };

    // Open the store
    let store = SqliteStore::open(config.database_path()).await?;
    let repository = Repository::new(store);

    // Get the router
    let api_router = prepare_api_router(
        repository,
        access_mode,
        config.password.clone(),
        config.wheel_layout_params(),
    )
    .await?;

    // Bind the listener for new connections
    let listener = tokio::net::TcpListener::bind(&args.addr).await?;

    // Print the address
    info!("Serving ({access_mode:?}) at http://{}/api/v1", args.addr);

    // Serve the server
    axum::serve(listener, api_router).await?;

    Ok(())
}

/// Year wheel www API CLI args using [clap]
#[derive(Parser, Debug)]
#[command(version, about = "Year wheel www API server")]
pub struct Cli {
    /// Path to the database (defaults to the one in the config file)
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Only serve the GET routes
    #[arg(long)]
    pub read_only: bool,

    /// The address to listen on
    #[arg(long, default_value = "0.0.0.0:2408")]
    pub addr: String,
}
