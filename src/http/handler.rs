use tracing::{debug, info, warn};

use crate::config::StaticConfig;
use crate::http::files::{DocumentRoot, Resolution};
use crate::http::mime;
use crate::http::parser::parse_request;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder};
use crate::http::status::StatusCode;
use crate::http::writer::serialize_response;
use crate::server::RequestHandler;

/// Methods advertised by OPTIONS, in the order they are listed.
pub const ALLOWED_METHODS: [Method; 2] = [Method::OPTIONS, Method::GET];

/// Content type used when the file extension is not recognised.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Static file server: parses a raw request, dispatches on its method and
/// produces a complete response.
///
/// Holds no mutable state, so one instance can serve any number of
/// connections at once.
#[derive(Debug, Clone)]
pub struct HttpHandler {
    root: DocumentRoot,
}

impl HttpHandler {
    pub fn new(cfg: &StaticConfig) -> anyhow::Result<Self> {
        let root = DocumentRoot::new(&cfg.root, cfg.index.clone())?;
        info!(root = %root.path().display(), "Serving static files");
        Ok(Self { root })
    }

    pub fn with_root(root: DocumentRoot) -> Self {
        Self { root }
    }

    pub fn document_root(&self) -> &DocumentRoot {
        &self.root
    }

    /// Runs exactly one handler for `req` and returns its response.
    pub fn respond(&self, req: &Request) -> Response {
        let response = match req.known_method() {
            Some(Method::GET) => self.handle_get(req),
            Some(Method::OPTIONS) => self.handle_options(req),
            None => self.handle_not_implemented(req),
        };

        info!(
            method = %req.method,
            uri = req.uri_or_empty(),
            status = response.status.as_u16(),
            "Request handled"
        );

        response
    }

    fn handle_get(&self, req: &Request) -> Response {
        // A GET without a URI token is treated like "/"
        let (path, requested) = match self.root.resolve(req.uri_or_empty()) {
            Resolution::File { path, requested } => (path, requested),
            Resolution::NotFound => return Response::not_found(),
            Resolution::Forbidden => {
                warn!(uri = req.uri_or_empty(), "Rejected path outside document root");
                return Response::forbidden();
            }
        };

        let body = match std::fs::read(&path) {
            Ok(body) => body,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read file");
                return Response::not_found();
            }
        };

        // Typed by the name the client asked for, not a symlink target
        let content_type = mime::guess_type(&requested).unwrap_or(DEFAULT_CONTENT_TYPE);

        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", content_type)
            .body(body)
            .build()
    }

    fn handle_options(&self, _req: &Request) -> Response {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Allow", allow_header())
            .build()
    }

    fn handle_not_implemented(&self, req: &Request) -> Response {
        if req.is_empty() {
            debug!("Empty request line");
        }
        Response::not_implemented()
    }
}

/// `Allow` value listing every method with a handler.
pub fn allow_header() -> String {
    ALLOWED_METHODS
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl RequestHandler for HttpHandler {
    fn handle(&self, raw: &[u8]) -> Vec<u8> {
        let request = parse_request(raw);
        serialize_response(&self.respond(&request))
    }
}
