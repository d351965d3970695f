//! to-do lists server binary.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use todo_lists::http::HttpServer;
use todo_lists::lifecycle::{signals, startup, Shutdown};
use todo_lists::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "todo-lists")]
#[command(about = "Server-rendered multi-list to-do application", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, env = "TODO_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on (all interfaces). Overrides the config file.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// JSON snapshot file for the store. Overrides the config file.
    #[arg(long, env = "TODO_STORE_PATH")]
    store_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = startup::prepare_config(
        cli.config.as_deref(),
        startup::Overrides {
            port: cli.port,
            store_path: cli.store_path,
        },
    )?;

    logging::init_logging(&config.observability)?;

    tracing::info!("todo-lists v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        store_path = ?config.store.path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation guarantees the address parses.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let store = startup::open_store(&config.store).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, store);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
