//! Console trait for view-agnostic message output
//!
//! The session decodes server replies and reports them here. A terminal
//! front end prints them, a JSON front end serialises them, tests record
//! them.

use crate::error::Error;
use crate::types::LogStyle;
use async_trait::async_trait;

/// Receiver of decoded session events
#[async_trait]
pub trait Console: Send + Sync {
    /// Called when a command target is about to be sent
    async fn on_command(&self, target: &str);

    /// Called with a line for the log
    async fn on_log(&self, style: LogStyle, text: &str);

    /// Called with a fatal server error; should block until acknowledged
    async fn on_fatal(&self, message: &str);

    /// Called when the running command finished
    async fn on_finished(&self, payload: &str);

    /// Called with a reply that has no recognized tag
    async fn on_unrecognized(&self, raw: &str);

    /// Called when a request failed before any body was received
    async fn on_transport_error(&self, error: &Error);
}

/// No-op console for testing or when output isn't needed
pub struct NoopConsole;

#[async_trait]
impl Console for NoopConsole {
    async fn on_command(&self, _target: &str) {}
    async fn on_log(&self, _style: LogStyle, _text: &str) {}
    async fn on_fatal(&self, _message: &str) {}
    async fn on_finished(&self, _payload: &str) {}
    async fn on_unrecognized(&self, _raw: &str) {}
    async fn on_transport_error(&self, _error: &Error) {}
}
