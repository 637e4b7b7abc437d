use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use mini_board::config::{self, AppConfig};
use mini_board::network::BoardServer;
use mini_board::storage::MessageStore;
use tokio::signal;

#[derive(Parser)]
#[command(name = "mini_board", version, about = "Minimal concurrent message board")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Address to listen on, overrides the config file
    #[arg(long, value_name = "ADDR")]
    listen: Option<String>,
    /// Write the effective config back to the config file and exit
    #[arg(long)]
    write_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if let Some(listen) = cli.listen {
        app_config.listen_addr = listen;
    }

    if cli.write_config {
        config::save_config(&cli.config, &app_config)?;
        log::info!("Wrote config to {}", cli.config);
        return Ok(());
    }

    run_board(app_config).await
}

async fn run_board(app_config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Starting Mini Message Board...");

    let store = Arc::new(MessageStore::new());
    let server = BoardServer::bind(&app_config, Arc::clone(&store)).await?;

    tokio::select! {
        result = server.run() => {
            if let Err(err) = result {
                log::error!("Board server error: {}", err);
            }
        }
        _ = signal::ctrl_c() => {
            log::info!("Received shutdown signal, stopping board server...");
        }
    }

    log::info!("Final statistics: {} messages", store.len());

    Ok(())
}
