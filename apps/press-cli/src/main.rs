mod commands;
mod config;
mod telemetry;
mod terminal;

use std::io;
use std::sync::Arc;

use clap::Parser;

use press_client::ViewController;
use press_core::ports::{KeyValueStore, PressApi};
use press_infra::{FileStore, InMemoryPressApi, InMemoryStore};

use crate::commands::{App, Cli, Command};
use crate::config::ClientConfig;
use crate::telemetry::init_tracing;
use crate::terminal::{PendingNavigation, PromptConfirmation};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let mut config = ClientConfig::from_env();
    init_tracing(config.json_logs);

    let cli = Cli::parse();
    if let Some(api_base) = &cli.api_base {
        config.api_base = api_base.clone();
    }

    tracing::info!(
        api_base = %config.api_base,
        offline = cli.offline,
        "Starting press"
    );

    let api = build_backend(&config, cli.offline).await?;
    let store: Arc<dyn KeyValueStore> = if cli.offline {
        Arc::new(InMemoryStore::new())
    } else {
        let store = FileStore::open(&config.state_file)?;
        tracing::debug!(path = %store.path().display(), "Session file opened");
        Arc::new(store)
    };

    let assume_yes = matches!(cli.command, Command::Delete { yes: true, .. });
    let navigator = Arc::new(PendingNavigation::default());
    let controller = ViewController::new(
        api.clone(),
        store,
        navigator.clone(),
        Arc::new(PromptConfirmation::new(assume_yes)),
    );

    let app = App::new(controller, navigator, api);
    app.run(cli.command, &mut io::stdout().lock()).await
}

async fn build_backend(config: &ClientConfig, offline: bool) -> anyhow::Result<Arc<dyn PressApi>> {
    if offline {
        tracing::info!("Using seeded in-memory backend");
        return Ok(Arc::new(InMemoryPressApi::seeded().await));
    }

    #[cfg(feature = "http")]
    {
        let api = press_infra::HttpPressApi::new(&press_infra::HttpApiConfig {
            base_url: config.api_base.clone(),
        })?;
        Ok(Arc::new(api))
    }

    #[cfg(not(feature = "http"))]
    {
        let _ = config;
        anyhow::bail!("Built without the http feature; use --offline")
    }
}
