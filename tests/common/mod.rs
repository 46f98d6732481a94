//! Shared test utilities

#![allow(dead_code)]

pub mod mock_transport;
pub mod mock_view;

pub use mock_transport::ScriptedTransport;
pub use mock_view::{RecordingConsole, RecordingSurface};

use laspad_client::session::{Session, SessionOptions};
use std::sync::Arc;

/// A session wired to fresh mocks
pub struct Harness {
    pub session: Session,
    pub transport: Arc<ScriptedTransport>,
    pub console: Arc<RecordingConsole>,
    pub surface: Arc<RecordingSurface>,
}

impl Harness {
    /// Session whose transport replies with `bodies` in order
    pub fn new(bodies: &[&str]) -> Self {
        Self::with_options(bodies, SessionOptions::default())
    }

    /// Same as [`Harness::new`] with custom session options
    pub fn with_options(bodies: &[&str], options: SessionOptions) -> Self {
        let transport = Arc::new(ScriptedTransport::new(bodies));
        let console = Arc::new(RecordingConsole::default());
        let surface = Arc::new(RecordingSurface::default());
        let session = Session::new(
            transport.clone(),
            console.clone(),
            surface.clone(),
            options,
        );
        transport.observe(session.gate().clone());

        Self {
            session,
            transport,
            console,
            surface,
        }
    }
}
