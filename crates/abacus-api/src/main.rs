use std::process::ExitCode;

use abacus_api::cli::{self, Cli, Dispatch};
use abacus_api::config::AbacusConfig;
use abacus_api::{create_app, tracing_setup};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    match cli::dispatch(Cli::parse().into_command()) {
        Dispatch::Done(output) => {
            output.print();
            Ok(output.exit_code())
        }
        Dispatch::Serve { host, port } => {
            let mut config = AbacusConfig::load()?;
            tracing_setup::init_tracing(&config.logging)?;

            info!(version = env!("CARGO_PKG_VERSION"), "Starting Abacus");

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            start_server(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn start_server(config: &AbacusConfig) -> anyhow::Result<()> {
    let addr = config.server.bind_address();
    let app = create_app(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "Web server started successfully");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
