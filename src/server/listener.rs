use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tracing::{error, info, warn};

use crate::config::{ConcurrencyMode, ServerConfig};
use crate::http::connection::Connection;
use crate::server::RequestHandler;

/// Per-connection settings the accept loop hands to every connection.
#[derive(Debug, Clone, Copy)]
pub struct ServeOptions {
    pub read_buffer_size: usize,
    pub concurrency: ConcurrencyMode,
}

impl From<&ServerConfig> for ServeOptions {
    fn from(cfg: &ServerConfig) -> Self {
        Self {
            read_buffer_size: cfg.read_buffer_size,
            concurrency: cfg.concurrency,
        }
    }
}

/// Binds a listening socket with address reuse enabled.
pub fn bind(addr: SocketAddr, backlog: u32) -> anyhow::Result<TcpListener> {
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };

    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {}", addr))?;

    Ok(socket.listen(backlog)?)
}

/// Resolves the configured address, binds it and serves forever.
pub async fn run<H: RequestHandler>(cfg: &ServerConfig, handler: Arc<H>) -> anyhow::Result<()> {
    let addr = tokio::net::lookup_host((cfg.host.as_str(), cfg.port))
        .await
        .with_context(|| format!("failed to resolve {}", cfg.listen_addr()))?
        .next()
        .with_context(|| format!("no address found for {}", cfg.listen_addr()))?;

    let listener = bind(addr, cfg.backlog)?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, handler, ServeOptions::from(cfg)).await
}

/// Accept loop. Failures on one connection are logged and never end it.
pub async fn serve<H: RequestHandler>(
    listener: TcpListener,
    handler: Arc<H>,
    opts: ServeOptions,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let handler = Arc::clone(&handler);
        match opts.concurrency {
            ConcurrencyMode::Sequential => {
                handle_connection(socket, peer, handler, opts.read_buffer_size).await
            }
            ConcurrencyMode::PerConnection => {
                tokio::spawn(handle_connection(
                    socket,
                    peer,
                    handler,
                    opts.read_buffer_size,
                ));
            }
        }
    }
}

async fn handle_connection<H: RequestHandler>(
    socket: TcpStream,
    peer: SocketAddr,
    handler: Arc<H>,
    read_limit: usize,
) {
    let mut conn = Connection::new(socket, handler, read_limit);
    if let Err(e) = conn.run().await {
        error!("Connection error from {}: {:#}", peer, e);
    }
}
