//! Starter gate.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ timeout ─▶ route guard ─▶ handlers
//!                                                          │              │
//!                                                    RouteTable      date / forms
//!                                                    SessionProbe    menus / site
//! ```

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use starter_gate::config::{self, GateConfig};
use starter_gate::date::{self, DateInput, MaskProgress};
use starter_gate::observability::{logging, metrics};
use starter_gate::{AppState, HttpServer, RouteTable};

#[derive(Parser)]
#[command(name = "starter-gate")]
#[command(about = "Route guard and date utilities for the starter web app", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve,
    /// Show how a path is classified
    Classify { path: String },
    /// Date conversions
    Date {
        #[command(subcommand)]
        command: DateCommands,
    },
}

#[derive(Subcommand)]
enum DateCommands {
    /// Storage string (YYYY-MM-DD) to DD/MM/YYYY
    Display { value: String },
    /// Any date-like text to YYYY-MM-DD
    Storage { value: String },
    /// Mask typed digits as DD/MM/YYYY
    Mask { raw: String },
}

fn load(path: Option<&PathBuf>) -> Result<GateConfig, config::ConfigError> {
    match path {
        Some(path) => config::load_config(path),
        None => config::default_config(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(cli.config.as_ref())?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Classify { path } => {
            let routes = RouteTable::from_config(&config.routes)?;
            let report = serde_json::json!({
                "path": path,
                "public": routes.is_public(&path),
                "protected": routes.is_protected(&path),
                "access": routes.classify(&path),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Date { command } => match command {
            DateCommands::Display { value } => println!("{}", date::to_display_date(Some(value.as_str()))),
            DateCommands::Storage { value } => {
                match date::to_storage_string(Some(DateInput::Text(value.as_str()))) {
                    Some(storage) => println!("{}", storage),
                    None => eprintln!("Unrecognized date: {}", value),
                }
            }
            DateCommands::Mask { raw } => {
                let masked = date::format_progressive_input(&raw);
                match date::parse_masked_input(&masked, Utc::now().date_naive()) {
                    Some(parsed) => println!("{} -> {}", masked, parsed),
                    None => println!("{} ({:?})", masked, MaskProgress::of(&masked)),
                }
            }
        },
    }

    Ok(())
}

async fn serve(config: GateConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging(&config.observability);

    tracing::info!("starter-gate v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        public_prefixes = config.routes.public_prefixes.len(),
        protected_prefixes = config.routes.protected_prefixes.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let state = AppState::from_config(config)?;
    HttpServer::new(state).run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
