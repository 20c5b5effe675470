use std::io;
use std::sync::Arc;

use anyhow::Context;
use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::writer::ResponseWriter;
use crate::server::RequestHandler;

/// Drives a single request/response exchange over `stream`.
///
/// The connection reads once, hands the bytes to the handler, writes the
/// whole response and closes. There is no keep-alive.
pub struct Connection<S, H> {
    stream: S,
    handler: Arc<H>,
    read_limit: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Bytes),
    Writing(ResponseWriter),
    Closed,
}

impl<S, H> Connection<S, H>
where
    S: AsyncRead + AsyncWrite + Unpin,
    H: RequestHandler,
{
    pub fn new(stream: S, handler: Arc<H>, read_limit: usize) -> Self {
        Self {
            stream,
            handler,
            read_limit,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => ConnectionState::Processing(self.read_chunk().await?),

                ConnectionState::Processing(request) => {
                    let response = self.process(request).await?;
                    ConnectionState::Writing(ResponseWriter::new(response))
                }

                ConnectionState::Writing(mut writer) => {
                    match writer.write_to_stream(&mut self.stream).await {
                        Ok(()) => {}
                        Err(e) if peer_gone(&e) => {
                            tracing::debug!("Peer went away before the response was sent: {}", e);
                            break;
                        }
                        Err(e) => return Err(e.context("failed to write response")),
                    }

                    if let Err(e) = self.stream.shutdown().await {
                        tracing::debug!("Shutdown after response failed: {}", e);
                    }

                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Performs the single bounded read. Zero bytes is a valid outcome.
    async fn read_chunk(&mut self) -> anyhow::Result<Bytes> {
        let mut buf = BytesMut::with_capacity(self.read_limit);

        let n = (&mut self.stream)
            .take(self.read_limit as u64)
            .read_buf(&mut buf)
            .await
            .context("failed to read request")?;

        if n == 0 {
            tracing::debug!("Client sent no data");
        }

        Ok(buf.freeze())
    }

    /// Runs the handler off the async workers; it may touch the filesystem.
    async fn process(&self, request: Bytes) -> anyhow::Result<Vec<u8>> {
        let handler = Arc::clone(&self.handler);

        tokio::task::spawn_blocking(move || handler.handle(&request))
            .await
            .context("request handler failed")
    }
}

fn peer_gone(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>().is_some_and(|e| {
        matches!(
            e.kind(),
            io::ErrorKind::BrokenPipe
                | io::ErrorKind::ConnectionReset
                | io::ErrorKind::ConnectionAborted
                | io::ErrorKind::WriteZero
        )
    })
}
