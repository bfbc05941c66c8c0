//! Draxen API server entry point.
//!
//! Binary name: `draxen`
//!
//! Loads configuration (file, then environment, then flags), wires the chat
//! resolver to the configured provider, and serves the HTTP API until
//! Ctrl+C or SIGTERM.

mod cli;
mod http;
mod server;
mod state;
#[cfg(test)]
mod testing;

use anyhow::anyhow;
use clap::Parser;

use draxen_infra::config::{apply_env_overrides, load_server_config, resolve_api_key};
use draxen_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

use cli::Cli;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow!("failed to initialize tracing: {e}"))?;

    let env = |key: &str| std::env::var(key).ok();

    let mut config = apply_env_overrides(load_server_config(&cli.config).await, env);
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let api_key = resolve_api_key(&config.generation.provider_name, env)?;

    tracing::info!(
        provider = %config.generation.provider_name,
        model = %config.generation.model,
        environment = %config.environment,
        "Configuration loaded"
    );

    let listener = server::bind_with_fallback(&config.host, config.port).await?;
    let addr = listener.local_addr()?;

    let state = AppState::init(config, &api_key);
    let router = http::router::build_router(state);

    println!(
        "{} Draxen AI listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!(
        "  {}",
        console::style("Press Ctrl+C to stop").dim()
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    shutdown_tracing();
    Ok(())
}
