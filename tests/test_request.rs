use crude_server::http::handler::{ALLOWED_METHODS, allow_header};
use crude_server::http::request::{Method, Request, RequestBuilder};

#[test]
fn test_method_lookup_is_case_sensitive() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("OPTIONS"), Some(Method::OPTIONS));
    assert_eq!(Method::from_str("get"), None);
    assert_eq!(Method::from_str("options"), None);
}

#[test]
fn test_method_lookup_rejects_unsupported_verbs() {
    for verb in ["POST", "PUT", "DELETE", "HEAD", "PATCH", ""] {
        assert_eq!(Method::from_str(verb), None, "{verb:?} should have no handler");
    }
}

#[test]
fn test_method_as_str_round_trips() {
    for method in [Method::GET, Method::OPTIONS] {
        assert_eq!(Method::from_str(method.as_str()), Some(method));
    }
}

#[test]
fn test_allow_header_lists_every_dispatchable_method() {
    assert_eq!(allow_header(), "OPTIONS, GET");

    for method in ALLOWED_METHODS {
        let req = RequestBuilder::new().method(method.as_str()).build();
        assert_eq!(req.known_method(), Some(method));
    }
}

#[test]
fn test_request_known_method() {
    let req = RequestBuilder::new().method("GET").uri("/").build();
    assert_eq!(req.known_method(), Some(Method::GET));

    let req = RequestBuilder::new().method("TRACE").uri("/").build();
    assert_eq!(req.known_method(), None);
}

#[test]
fn test_request_builder_defaults() {
    let req = RequestBuilder::new().method("GET").build();

    assert_eq!(
        req,
        Request {
            method: "GET".to_string(),
            uri: None,
            version: "1.1".to_string(),
        }
    );
}

#[test]
fn test_request_uri_or_empty() {
    let with_uri = RequestBuilder::new().method("GET").uri("/a").build();
    let without_uri = RequestBuilder::new().method("GET").build();

    assert_eq!(with_uri.uri_or_empty(), "/a");
    assert_eq!(without_uri.uri_or_empty(), "");
}

#[test]
fn test_request_is_empty() {
    assert!(RequestBuilder::new().build().is_empty());
    assert!(!RequestBuilder::new().method("GET").build().is_empty());
}
