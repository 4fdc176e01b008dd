mod config;
mod error;
mod server;

use clap::Parser;
use color_eyre::Result;
use extremote_lingo::Dispatcher;
use media_backend::{BluezBackend, TimeoutBackend};
use nng::{Protocol, Socket};
use server::Server;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling and logging
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "extremote_server=info,extremote_lingo=info,media_backend=info".into()
            }),
        )
        .init();

    let config = config::Config::from_args(config::CliArgs::parse());
    tracing::info!("Configuration: {:?}", config);

    // Every backend call is bounded by the configured timeout
    let backend = TimeoutBackend::new(BluezBackend::new(), config.backend_timeout);
    let dispatcher = Dispatcher::new(backend, config.lingo);

    // Create NNG socket for receiving commands
    let socket = Socket::new(Protocol::Rep0)?;
    socket.listen(&config.listen)?;
    tracing::info!("Listening on {}", config.listen);

    let server = Server::new(dispatcher, socket);
    server.run().await?;

    Ok(())
}
