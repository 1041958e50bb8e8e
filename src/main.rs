//! SWAPI Explorer - Main entry point
//!
//! Looks up Star Wars API resources from the command line, or serves them
//! over HTTP with `serve`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use swapi_explorer::client::Resolver;
use swapi_explorer::config::Config;
use swapi_explorer::display;
use swapi_explorer::error::ApiResult;
use swapi_explorer::server::{run_server, AppState};
use swapi_explorer::services::{CatalogService, CatalogServiceImpl};
use swapi_explorer::Fetcher;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "swapi-explorer", version, about = "Explore the Star Wars API")]
struct Cli {
    /// Log every successful fetch and print fetch statistics at the end
    #[arg(long, global = true)]
    debug: bool,

    /// Request deadline in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    timeout: Option<u64>,

    /// Upstream API root
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Verify TLS certificates (trust-all is the default)
    #[arg(long, global = true)]
    verify_tls: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a character
    Person { id: u32 },
    /// List starships
    Starships {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List planets
    Planets {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List films in release order
    Films,
    /// Show a vehicle
    Vehicle { id: u32 },
    /// Run the default lookups concurrently
    All,
    /// Run the HTTP demo server
    Serve {
        /// Address to bind
        #[arg(long)]
        addr: Option<String>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the environment.
    fn apply(&self, config: &mut Config) -> Result<()> {
        if self.debug {
            config.debug = true;
        }
        if let Some(timeout) = self.timeout {
            Config::validate_timeout("--timeout", timeout)?;
            config.timeout_ms = timeout;
        }
        if let Some(base_url) = &self.base_url {
            Config::validate_base_url("--base-url", base_url)?;
            config.base_url = base_url.clone();
        }
        if self.verify_tls {
            config.accept_invalid_certs = false;
        }
        if let Command::Serve { addr: Some(addr) } = &self.command {
            config.server_addr = addr.clone();
        }
        Ok(())
    }
}

fn init_logging(config: &Config) {
    // RUST_LOG wins; otherwise LOG_LEVEL, raised to debug for this crate with --debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut directives = config.log_level.clone();
        if config.debug {
            directives.push_str(",swapi_explorer=debug");
        }
        EnvFilter::new(directives)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print a lookup result, returning whether it succeeded.
fn report<T>(result: ApiResult<T>, render: impl FnOnce(&T) -> String) -> bool {
    match result {
        Ok(value) => {
            println!("{}", render(&value));
            true
        }
        Err(e) => {
            eprintln!("error: {}", e);
            false
        }
    }
}

async fn run_all(catalog: &dyn CatalogService) -> bool {
    let (person, starships, planets, films, vehicle) = futures::join!(
        catalog.character(1),
        catalog.starships(1),
        catalog.planets(1),
        catalog.films(),
        catalog.vehicle(4),
    );

    // Evaluate every report so each failure is printed
    [
        report(person, display::render_character),
        report(starships, display::render_starships),
        report(planets, display::render_planets),
        report(films, display::render_films),
        report(vehicle, display::render_vehicle),
    ]
    .iter()
    .all(|ok| *ok)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config)?;
    init_logging(&config);

    info!(
        "Using API at {} with a {}ms timeout",
        config.base_url, config.timeout_ms
    );

    let fetcher = Arc::new(Fetcher::new(&config)?);
    let resolver = fetcher.clone() as Arc<dyn Resolver>;
    let catalog = Arc::new(CatalogServiceImpl::new(resolver.clone())) as Arc<dyn CatalogService>;

    let ok = match cli.command {
        Command::Person { id } => report(catalog.character(id).await, display::render_character),
        Command::Starships { page } => {
            report(catalog.starships(page).await, display::render_starships)
        }
        Command::Planets { page } => report(catalog.planets(page).await, display::render_planets),
        Command::Films => report(catalog.films().await, display::render_films),
        Command::Vehicle { id } => report(catalog.vehicle(id).await, display::render_vehicle),
        Command::All => run_all(catalog.as_ref()).await,
        Command::Serve { .. } => {
            let state = AppState::new(resolver, catalog);
            if let Err(e) = run_server(state, &config.server_addr).await {
                error!("Server failed: {}", e);
                return Err(e);
            }
            info!("Server shutdown complete");
            true
        }
    };

    if config.debug {
        eprintln!(
            "{}",
            display::render_metrics(&fetcher.metrics().summary(), fetcher.cache_len())
        );
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
