//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, only the
//! request line is interpreted, and static files are served from a document
//! root.
//!
//! # Architecture
//!
//! - **`connection`**: Drives one accepted connection from read to close
//! - **`parser`**: Extracts the request line from a raw byte buffer
//! - **`request`**: Request representation and the dispatchable method set
//! - **`handler`**: Method dispatch plus the GET, OPTIONS and 501 handlers
//! - **`files`**: URI to file resolution, confined to the document root
//! - **`mime`**: MIME type detection based on file extensions
//! - **`status`**: The status code table
//! - **`headers`**: Ordered header map with default/override merging
//! - **`response`**: Response representation with builder pattern
//! - **`writer`**: Serializes responses and writes them to the client
//!
//! # Connection lifecycle
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read
//!        └──────┬──────┘
//!               │ Bytes received (possibly none)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, dispatch, serialize
//!        └──────┬───────────┘
//!               │ Response bytes ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send every byte
//!        └──────┬───────────┘
//!               │
//!               ▼
//!            Closed
//! ```

pub mod connection;
pub mod files;
pub mod handler;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod status;
pub mod writer;
