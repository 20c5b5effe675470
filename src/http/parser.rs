use crate::http::request::{DEFAULT_VERSION, Request};

/// Parses the request line out of a raw request buffer.
///
/// Parsing never fails: the buffer is cut at the first CRLF and the line is
/// split on single spaces. Token 0 is the method, token 1 the URI and token
/// 2 the version; missing tokens fall back to their defaults and anything
/// after the third token is ignored. Bytes that are not valid UTF-8 are
/// replaced rather than rejected.
pub fn parse_request(buf: &[u8]) -> Request {
    let request_line = match find_line_end(buf) {
        Some(end) => &buf[..end],
        None => buf,
    };

    let mut words = request_line.split(|b| *b == b' ');

    // split always yields at least one (possibly empty) item
    let method = words.next().map(decode).unwrap_or_default();
    let uri = words.next().map(decode);
    let version = words
        .next()
        .map(decode)
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());

    Request {
        method,
        uri,
        version,
    }
}

fn decode(word: &[u8]) -> String {
    String::from_utf8_lossy(word).into_owned()
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}
