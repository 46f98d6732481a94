//! Poll loop over the next-message endpoint

use crate::error::Result;
use crate::protocol::{decode, DecodeError};
use crate::transport::Transport;
use crate::types::{Message, PollAction};
use async_trait::async_trait;
use tracing::debug;

/// Handler for decoded replies
///
/// Performs the side effect for one reply and tells the loop whether to
/// keep polling.
#[async_trait]
pub trait MessageHandler: Send {
    /// Handle one decoded reply
    async fn handle(&mut self, reply: std::result::Result<Message, DecodeError>) -> PollAction;
}

/// Repeatedly requests the next message until a handler says stop
///
/// Iterative: the number of replies has no effect on stack depth.
pub struct PollLoop<'a> {
    transport: &'a dyn Transport,
    endpoint: &'a str,
}

impl<'a> PollLoop<'a> {
    /// Create a poll loop over `endpoint`
    pub const fn new(transport: &'a dyn Transport, endpoint: &'a str) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Poll the endpoint until the handler returns [`PollAction::Stop`]
    ///
    /// Returns the number of requests sent.
    pub async fn run(&self, handler: &mut dyn MessageHandler) -> Result<u64> {
        self.drive(self.endpoint, handler).await
    }

    /// Send `first_target` once, then poll the endpoint until stopped
    ///
    /// Returns the number of requests sent, including the first.
    pub async fn drive(&self, first_target: &str, handler: &mut dyn MessageHandler) -> Result<u64> {
        let mut target = first_target;
        let mut requests = 0u64;

        loop {
            let body = self.transport.send(target).await?;
            requests += 1;
            debug!(request = target, requests, len = body.len(), "reply received");

            if handler.handle(decode(&body)).await == PollAction::Stop {
                return Ok(requests);
            }
            target = self.endpoint;
        }
    }
}
