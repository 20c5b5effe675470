//! Crude Server - a minimal static file server over raw TCP
//!
//! Core library for the acceptor and HTTP functionality.

pub mod config;
pub mod http;
pub mod server;
