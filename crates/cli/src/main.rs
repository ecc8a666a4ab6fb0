//! Terminal driver for the customer directory.
//!
//! Selects a backend from the environment, runs the initial load, and
//! prints the collection. This is the reference embedding of the sync
//! core: a real UI binds the same directory and editor state to its
//! widgets instead of stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rigdesk_client::BackendConfig;
use rigdesk_sync::{Directory, Liveness, LoadState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rigdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Backend selection ---
    let config = BackendConfig::from_env();
    tracing::info!(?config, "Loaded backend configuration");
    let backend = config.into_backend();

    // --- Initial load ---
    let liveness = Liveness::new();
    let mut directory = Directory::new();
    directory.load(backend.as_ref(), &liveness.token()).await;

    match directory.load_state() {
        LoadState::Loaded => {
            println!("{} customer(s)", directory.store().len());
            for record in directory.store().records() {
                let f = &record.fields;
                println!(
                    "#{:<5} {} - {} (rigs: {}, jack ups: {}, MODUs: {}) {}",
                    record.id, f.name, f.address, f.no_rigs, f.no_jackups, f.no_modus, f.site_url
                );
            }
            Ok(())
        }
        LoadState::Failed(message) => Err(anyhow::anyhow!("customer list fetch failed: {message}")),
        state => Err(anyhow::anyhow!("unexpected load state: {state:?}")),
    }
}
