use crate::http::headers::HeaderMap;
use crate::http::status::StatusCode;

pub const NOT_FOUND_BODY: &[u8] = b"<h1>404 Not Found</h1>";
pub const NOT_IMPLEMENTED_BODY: &[u8] = b"<h1>501 Not Implemented</h1>";
pub const FORBIDDEN_BODY: &[u8] = b"<h1>403 Forbidden</h1>";

/// Represents a complete HTTP response ready to be sent to a client.
///
/// `headers` already holds the base headers merged with any per-response
/// overrides, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in emission order
    pub headers: HeaderMap,
    /// Response body as bytes, possibly empty
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// Starts from the default header set; headers added with
/// [`ResponseBuilder::header`] override base headers of the same name.
///
/// # Example
///
/// ```
/// # use crude_server::http::response::ResponseBuilder;
/// # use crude_server::http::status::StatusCode;
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"hi".to_vec())
///     .build();
/// assert_eq!(response.headers.get("Server"), Some("CrudeServer"));
/// assert_eq!(response.headers.get("Content-Type"), Some("text/plain"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    base: HeaderMap,
    overrides: HeaderMap,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            base: HeaderMap::defaults(),
            overrides: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a per-response header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key, value);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response, merging overrides into the base headers.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.base.merged(&self.overrides),
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK response with the given body and default headers.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok).body(body.into()).build()
    }

    /// Creates the fixed 404 Not Found response.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .body(NOT_FOUND_BODY.to_vec())
            .build()
    }

    /// Creates the fixed 403 Forbidden response.
    pub fn forbidden() -> Self {
        ResponseBuilder::new(StatusCode::Forbidden)
            .body(FORBIDDEN_BODY.to_vec())
            .build()
    }

    /// Creates the fixed 501 Not Implemented response.
    pub fn not_implemented() -> Self {
        ResponseBuilder::new(StatusCode::NotImplemented)
            .body(NOT_IMPLEMENTED_BODY.to_vec())
            .build()
    }
}
