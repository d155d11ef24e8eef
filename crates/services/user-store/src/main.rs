//! User Store - CLI for user records and schema migrations.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_store::cli::Cli;
use user_store::StoreConfig;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = StoreConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config.log.level);
    tracing::debug!(?config, "Configuration loaded");

    match user_store::run(cli.command, &config).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("error [{}]: {}", e.code(), e.user_message());
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, level: &str) {
    let filter = if verbose { "debug" } else { level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
