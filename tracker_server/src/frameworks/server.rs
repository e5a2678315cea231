// Framework bootstrap for the drone tracker runtime.

use crate::frameworks::autopilot::autopilot_task;
use crate::frameworks::config::{self, TrackerConfig};
use crate::frameworks::file_store::JsonFileStore;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::net::SocketAddr;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, config: TrackerConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&config).await?;

    if let Some(tick_interval) = config.auto_tick {
        tokio::spawn(autopilot_task(state.clone(), tick_interval));
    }

    let app = routes::app(state, &config.static_dir);

    tracing::info!(%address, "listening");
    tracing::info!("- Access the app at: http://{address}");
    tracing::info!("- Simulate drone movement: http://{address}/api/simulate-movement");
    tracing::info!("- Reset drone positions: http://{address}/api/reset-drones");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let config = TrackerConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
    })?;
    let address = SocketAddr::new(config::http_host(), config::http_port());

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

async fn build_state(config: &TrackerConfig) -> Result<AppState> {
    let store = JsonFileStore::new(&config.data_dir);
    store.seed_defaults().await.inspect_err(|e| {
        tracing::error!(data_dir = %config.data_dir.display(), error = %e, "failed to prepare data directory");
    })?;
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        static_dir = %config.static_dir.display(),
        flight = ?config.flight,
        "tracker configured"
    );

    Ok(AppState::new(store, config.flight))
}
