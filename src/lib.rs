pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use config::Config;

use cli::{Cli, Commands, SeedCommands, cmd_list_movies, cmd_seed_director, cmd_seed_genre};

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) | None => run_server(config).await,

        Some(Commands::Init) => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists, leaving it untouched.");
            }
            Ok(())
        }

        Some(Commands::Seed { command }) => match command {
            SeedCommands::Director { name } => cmd_seed_director(&config, &name).await,
            SeedCommands::Genre { name } => cmd_seed_genre(&config, &name).await,
        },

        Some(Commands::Movies) => cmd_list_movies(&config).await,
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    info!("Filmarr v{} starting...", env!("CARGO_PKG_VERSION"));

    let port = config.server.port;
    let state = api::create_app_state(config).await?;
    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let server_handle = tokio::spawn(async move {
        info!("Web API running at http://{}", addr);
        if let Err(e) = axum::serve(listener, app).await {
            error!("Web server error: {}", e);
        }
    });

    info!("Service running. Press Ctrl+C to stop.");

    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            error!("Error listening for shutdown: {}", e);
        }
    }

    server_handle.abort();
    info!("Service stopped");

    Ok(())
}
