use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::headers::HeaderMap;
use crate::http::response::Response;
use crate::http::status::StatusCode;

const HTTP_VERSION: &str = "HTTP/1.1";

/// `HTTP/1.1 <code> <reason>\r\n`
pub fn response_line(status: StatusCode) -> Vec<u8> {
    format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    )
    .into_bytes()
}

/// One `Name: Value\r\n` line per header, in map order.
pub fn response_headers(headers: &HeaderMap) -> Vec<u8> {
    let mut buf = Vec::new();

    for (k, v) in headers.iter() {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    buf
}

pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = response_line(resp.status);

    buf.extend_from_slice(&response_headers(&resp.headers));

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf.extend_from_slice(&resp.body);

    buf
}

/// Holds serialized response bytes and writes them out in full.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            buffer: bytes,
            written: 0,
        }
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(io::Error::from(io::ErrorKind::WriteZero).into());
            }

            self.written += n;
        }

        stream.flush().await?;

        Ok(())
    }
}
