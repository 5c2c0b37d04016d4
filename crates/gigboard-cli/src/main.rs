use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use gigboard_application::AuthSession;
use gigboard_core::identity::{CredentialStore, IdentityProvider};
use gigboard_core::job::JobGateway;
use gigboard_infrastructure::{ConfigService, FileCredentialStore};
use gigboard_interaction::{HttpIdentityProvider, HttpJobGateway};
use tracing_subscriber::EnvFilter;

mod app;
mod prompt;
mod render;
mod shell;

#[derive(Parser)]
#[command(name = "gigboard")]
#[command(about = "Gigboard - a terminal client for a freelance job board", long_about = None)]
struct Cli {
    /// Override the job-board API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Override the identity service base URL
    #[arg(long)]
    identity_url: Option<String>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_service = ConfigService::new();
    let mut config = config_service.get_config();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(url) = cli.identity_url {
        config.identity_url = url;
    }

    let gateway: Arc<dyn JobGateway> = Arc::new(HttpJobGateway::new(&config.api_url));
    let provider: Arc<dyn IdentityProvider> =
        Arc::new(HttpIdentityProvider::new(&config.identity_url));
    let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::new_default()?);

    let auth = Arc::new(AuthSession::new(provider, store));

    // Resolve the cached session in the background while the REPL starts
    let restorer = Arc::clone(&auth);
    tokio::spawn(async move {
        restorer.restore().await;
    });

    let app = app::App::new(auth, gateway);
    shell::run(app).await
}

/// Installs the tracing subscriber on stderr so the REPL surface on stdout
/// stays clean. RUST_LOG wins over the verbosity flags.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
