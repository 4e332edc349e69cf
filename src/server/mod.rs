//! HTTP server adapters
//!
//! This module translates between HTTP and the HTTP-agnostic API layer.
//!
//! - `router` - maps a method and URL onto an API handler, independent of any server crate
//! - `tiny_http` - lightweight blocking server that feeds requests to the router

pub mod router;
pub mod tiny_http;
