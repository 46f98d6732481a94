//! Request/response channel to the laspad server
//!
//! A transport performs exactly one request per call and resolves with the
//! full response body. Status codes are not interpreted: an error page is
//! handed to the decoder like any other body.

mod http;

pub use http::HttpTransport;

use crate::error::Result;
use async_trait::async_trait;

/// Transport trait for sending a command target to the server
///
/// No retry and no cancellation. A request that never completes keeps the
/// running command waiting forever.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request for `target` and return the response body
    async fn send(&self, target: &str) -> Result<String>;
}
