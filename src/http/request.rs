/// HTTP methods the server has a handler for.
///
/// Any other verb is still parsed into a [`Request`]; dispatch answers it
/// with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file from the document root
    GET,
    /// OPTIONS - Describe the supported methods
    OPTIONS,
}

/// A request as read off the wire: only the request line is interpreted.
///
/// Built once per connection and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// First token of the request line, verbatim. Empty for an empty request.
    pub method: String,
    /// Second token of the request line, if any.
    pub uri: Option<String>,
    /// Third token of the request line, `"1.1"` when absent.
    pub version: String,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: String,
    uri: Option<String>,
    version: Option<String>,
}

pub const DEFAULT_VERSION: &str = "1.1";

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - Method token, matched case-sensitively
    ///
    /// # Returns
    ///
    /// `Some(Method)` if a handler exists for the token, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use crude_server::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("DELETE"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "OPTIONS" => Some(Method::OPTIONS),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::OPTIONS => "OPTIONS",
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: String::new(),
            uri: None,
            version: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            uri: self.uri,
            version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        }
    }
}

impl Request {
    /// The dispatchable method, or `None` when no handler exists for it.
    pub fn known_method(&self) -> Option<Method> {
        Method::from_str(&self.method)
    }

    /// The request URI, or an empty string when the request line had none.
    pub fn uri_or_empty(&self) -> &str {
        self.uri.as_deref().unwrap_or("")
    }

    /// True when the request line carried no method token at all.
    pub fn is_empty(&self) -> bool {
        self.method.is_empty()
    }
}
