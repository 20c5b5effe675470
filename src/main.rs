use std::sync::Arc;

use crude_server::config::Config;
use crude_server::http::handler::HttpHandler;
use crude_server::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    let handler = Arc::new(HttpHandler::new(&cfg.static_files)?);

    tokio::select! {
        res = server::listener::run(&cfg.server, handler) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
