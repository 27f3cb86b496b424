use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use playstore_scraper::app::StoreSearchPort;
use playstore_scraper::catalog::{self, CategoryDirectory, Resolution};
use playstore_scraper::config::Config;
use playstore_scraper::infra::ReqwestStoreClient;
use playstore_scraper::observability::{self, metrics};
use playstore_scraper::server::{self, AppState};

#[derive(Parser)]
#[command(name = "playstore_scraper")]
#[command(about = "US Play Store category scraper API")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Interface to bind (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the category directory
    Categories {
        /// Only game categories
        #[arg(long, conflicts_with = "apps")]
        games: bool,
        /// Only app categories
        #[arg(long)]
        apps: bool,
    },
    /// Resolve a category name the way the API does
    Resolve {
        /// Free-form category name, e.g. "Health Fitness"
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = Config::load(cli.config.as_deref())?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let _log_guard = observability::init_logging(&config.logging.dir);
            metrics::init();
            info!(
                "Store search service: {} (timeout {}s)",
                config.store.base_url, config.store.timeout_seconds
            );

            let store: Arc<dyn StoreSearchPort> = Arc::new(ReqwestStoreClient::new(&config.store)?);
            let state = AppState::new(store, config.store.clone());
            server::start_server(state, &config.server).await?;
        }
        Commands::Categories { games, apps } => {
            let directory = CategoryDirectory::global();
            let selected: Vec<_> = directory
                .all()
                .iter()
                .filter(|c| (!games || c.is_game()) && (!apps || !c.is_game()))
                .collect();
            for category in &selected {
                println!("{:<18} {}", category.key, category.canonical_id);
            }
            println!("\n{} of {} categories", selected.len(), directory.len());
        }
        Commands::Resolve { name } => match catalog::resolve(&name) {
            Resolution::Resolved(category) => {
                println!("{} -> {}", category.key, category.canonical_id);
            }
            Resolution::NotFound(miss) => {
                println!("Category '{}' not found (normalized: {})", miss.input, miss.normalized);
                println!("Suggestions: {}", miss.suggestions.join(", "));
                std::process::exit(1);
            }
        },
    }
    Ok(())
}
