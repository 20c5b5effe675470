//! Connection acceptance, decoupled from the protocol spoken on top.

pub mod listener;

/// Turns the bytes read from a connection into the bytes written back.
///
/// Implementations are called from many connections and must not rely on
/// per-call mutable state.
pub trait RequestHandler: Send + Sync + 'static {
    fn handle(&self, request: &[u8]) -> Vec<u8>;
}

/// Writes every request back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandler;

impl RequestHandler for EchoHandler {
    fn handle(&self, request: &[u8]) -> Vec<u8> {
        request.to_vec()
    }
}
