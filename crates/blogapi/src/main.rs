mod app;
mod config;
mod handlers;
mod identity;
mod state;
mod storage;

use anyhow::Result;
use blogapi_core::auth::basic_auth;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    app::create_app,
    config::{Config, LogFormat},
    state::AppState,
};

/// Blog API - posts and login for a personal website
#[derive(Parser, Debug)]
#[command(name = "blogapi")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print the `Authorization: Basic` value for the app client
    BasicAuth {
        /// App client ID
        #[arg(long, env = "USER_POOL_CLIENT_ID")]
        client_id: String,

        /// App client secret
        #[arg(long, env = "CLIENT_SECRET", hide_env_values = true)]
        client_secret: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::BasicAuth {
        client_id,
        client_secret,
    }) = &cli.command
    {
        println!("{}", basic_auth(client_id, client_secret));
        return Ok(());
    }

    let config = Config::from_env();
    init_tracing(config.log_format);

    let state = AppState::from_config(&config).await?;
    let app = create_app(state);

    serve(app, &cli, &config).await
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "blogapi=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Hand the router to the Lambda runtime.
#[cfg(feature = "lambda")]
async fn serve(app: axum::Router, _cli: &Cli, _config: &Config) -> Result<()> {
    tracing::info!("Starting Lambda runtime");
    lambda_http::run(app).await.map_err(|e| anyhow::anyhow!(e))
}

/// Run a local HTTP server with graceful shutdown.
#[cfg(not(feature = "lambda"))]
async fn serve(app: axum::Router, cli: &Cli, config: &Config) -> Result<()> {
    use axum::http::StatusCode;
    use listenfd::ListenFd;
    use tokio::net::TcpListener;
    use tower_http::timeout::TimeoutLayer;

    let app = app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        config.request_timeout(),
    ));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
#[cfg(not(feature = "lambda"))]
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
