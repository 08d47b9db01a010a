//! Solace server entry point.
//!
//! Binary name: `solace`
//!
//! Parses CLI arguments, loads environment configuration, wires the
//! gateway client, then serves the chat API and the front-end bundle.

mod http;
mod state;
#[cfg(test)]
mod test_support;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use solace_infra::config::AppConfig;
use state::ConcreteAppState;

/// Peer-support chat relay.
#[derive(Parser)]
#[command(name = "solace", version)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "SOLACE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "SOLACE_PORT", default_value_t = 8000)]
    port: u16,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,solace=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        gateway = %config.gateway_url,
        model = %config.model,
        "starting Solace relay"
    );

    let state = ConcreteAppState::from_config(config);
    let router = http::router::build_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
