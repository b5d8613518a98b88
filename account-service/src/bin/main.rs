use std::process;
use std::sync::Arc;

use account_service::config::{log_directives, DEFAULT_HOST, DEFAULT_PORT};
use account_service::{server, AccountService, AccountServiceConfig};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Account Service CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set the log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Host to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_directives(&cli.log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AccountServiceConfig::new(cli.host, cli.port);
    let service = Arc::new(AccountService::new());

    debug!("Starting account service with in-memory repository");

    if let Err(e) = server::serve(&config, service).await {
        error!("Account service failed: {}", e);
        process::exit(1);
    }
}
