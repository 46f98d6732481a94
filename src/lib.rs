//! laspad-client - command client for the laspad workshop server
//!
//! Drives long-running server operations (update, need, publish, launch)
//! over a request/response HTTP channel. Each command is one request
//! followed by polls of the next-message endpoint until a terminal message
//! arrives; every reply is a tagged message that is decoded and dispatched
//! to a view layer.

pub mod branches;
pub mod config;
pub mod error;
pub mod protocol;
pub mod session;
pub mod transport;
pub mod types;
