//! Binary entrypoint for the chistes HTTP server.
//!
//! Configuration comes from environment variables (see [`ServerConfig`]).
//! Log verbosity follows `RUST_LOG` and defaults to `info`.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use chistes_server::config::ServerConfig;
use chistes_server::router::build_router;
use chistes_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid configuration")?;

    let state = AppState::new(&config).context("failed to initialize application state")?;
    let stored = state.store.lock().await.list().map(|j| j.len());
    match stored {
        Ok(count) => tracing::info!(db = %config.db_path, jokes = count, "joke store opened"),
        Err(e) => tracing::warn!(db = %config.db_path, error = %e, "joke store opened but could not be listed"),
    }

    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("chistes server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // The router (and with it the store connection) is dropped once serve returns.
    tracing::info!("chistes server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
