//! Scripted transport for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

use async_trait::async_trait;
use laspad_client::error::{Error, Result};
use laspad_client::session::ActivationGate;
use laspad_client::transport::Transport;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One scripted reply
#[derive(Debug, Clone)]
pub enum Reply {
    /// Resolve with this body
    Body(String),
    /// Fail before any body arrives
    Fail(String),
}

/// Transport that replays a fixed script
///
/// Features:
/// - Call tracking for verification
/// - Activation-state capture at every send
/// - Error injection for failure path testing
/// - Fails once the script is exhausted so a runaway loop ends the test
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    targets: Mutex<Vec<String>>,
    gate: Mutex<Option<Arc<ActivationGate>>>,
    active_at_send: Mutex<Vec<bool>>,
}

impl ScriptedTransport {
    /// Transport replying with `bodies` in order
    pub fn new(bodies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(bodies.iter().map(|b| Reply::Body((*b).to_string())).collect()),
            targets: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
            active_at_send: Mutex::new(Vec::new()),
        }
    }

    /// Append a reply body
    pub fn push_body(&self, body: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Reply::Body(body.into()));
    }

    /// Append a transport failure
    pub fn push_failure(&self, msg: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Fail(msg.to_string()));
    }

    /// Record the gate state whenever a request is sent
    pub fn observe(&self, gate: Arc<ActivationGate>) {
        *self.gate.lock().unwrap() = Some(gate);
    }

    /// Targets sent so far
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }

    /// Gate state at each send
    pub fn active_at_send(&self) -> Vec<bool> {
        self.active_at_send.lock().unwrap().clone()
    }

    /// Replies not yet consumed
    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, target: &str) -> Result<String> {
        self.targets.lock().unwrap().push(target.to_string());

        if let Some(gate) = self.gate.lock().unwrap().as_ref() {
            self.active_at_send.lock().unwrap().push(gate.is_active());
        }

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail(msg)) => Err(Error::Internal(msg)),
            None => Err(Error::Internal(format!("script exhausted at {target}"))),
        }
    }
}
