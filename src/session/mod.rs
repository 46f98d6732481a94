//! Command session
//!
//! A session owns the activation gate and the registered controls, and
//! turns one logical command into a sequence of HTTP exchanges:
//! 1. Send the command target
//! 2. Decode the reply and dispatch it to the console
//! 3. Poll the next-message endpoint until `ERR` or `FIN`

mod console;
mod controls;
mod gate;
mod poll;

pub use console::{Console, NoopConsole};
pub use controls::{ControlRegistry, ControlSurface, NEED_PROMPT};
pub use gate::{ActivationGate, DEFAULT_BUSY_APPEARANCE};
pub use poll::{MessageHandler, PollLoop};

use crate::branches::{BranchListBuilder, BranchSplit};
use crate::error::{Error, Result};
use crate::protocol::{endpoint, DecodeError};
use crate::transport::Transport;
use crate::types::{
    Appearance, Branch, ControlAction, ControlId, Kind, LogStyle, Message, Outcome, PollAction,
    ProjectState,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Completion callback, called once with the `FIN` payload
pub type OnComplete = Box<dyn FnOnce(String) + Send>;

/// A single logical server command
pub struct Command {
    /// Target sent as the first request, e.g. `/update`
    pub target: String,
    /// Called with the payload when the command finishes
    pub on_complete: Option<OnComplete>,
}

impl Command {
    /// Command without a completion callback
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            on_complete: None,
        }
    }

    /// Attach a completion callback
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce(String) + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("target", &self.target)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Session options
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// How the `/get_branches` payload is split into branches
    pub branch_split: BranchSplit,
    /// Appearance of controls while a command is in flight
    pub busy_appearance: Appearance,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            branch_split: BranchSplit::default(),
            busy_appearance: Appearance::new(DEFAULT_BUSY_APPEARANCE),
        }
    }
}

/// Drives commands against one server on behalf of one view
pub struct Session {
    transport: Arc<dyn Transport>,
    console: Arc<dyn Console>,
    surface: Arc<dyn ControlSurface>,
    gate: Arc<ActivationGate>,
    controls: ControlRegistry,
    branch_split: BranchSplit,
    bootstrapped: bool,
}

impl Session {
    /// Create a session and register the standard command controls
    pub fn new(
        transport: Arc<dyn Transport>,
        console: Arc<dyn Console>,
        surface: Arc<dyn ControlSurface>,
        options: SessionOptions,
    ) -> Self {
        let mut controls = ControlRegistry::new();
        for (label, action) in [
            ("Update", ControlAction::Run(endpoint::UPDATE.to_string())),
            ("Need dependency", ControlAction::NeedDependency),
            ("Launch NS2", ControlAction::Run(endpoint::NS2.to_string())),
            ("Launch editor", ControlAction::Run(endpoint::EDITOR.to_string())),
        ] {
            surface.add_control(controls.register(label, action));
        }

        Self {
            transport,
            console,
            surface,
            gate: Arc::new(ActivationGate::new(options.busy_appearance)),
            controls,
            branch_split: options.branch_split,
            bootstrapped: false,
        }
    }

    /// Whether a command is in flight
    pub fn is_active(&self) -> bool {
        self.gate.is_active()
    }

    /// The session's activation gate
    pub const fn gate(&self) -> &Arc<ActivationGate> {
        &self.gate
    }

    /// Registered controls
    pub const fn controls(&self) -> &ControlRegistry {
        &self.controls
    }

    /// Set the activation flag and restyle every registered control
    pub fn set_active(&self, active: bool) {
        self.gate
            .set_active(active, &self.controls.ids(), self.surface.as_ref());
    }

    /// Run a command until its terminal message
    ///
    /// Transport failures unlock the controls, are reported to the console
    /// and returned as errors.
    // Exclusive borrow: one command in flight per session
    #[allow(clippy::needless_pass_by_ref_mut)]
    pub async fn command(&mut self, command: Command) -> Result<Outcome> {
        let Command {
            target,
            on_complete,
        } = command;

        info!(command = %target, "command");
        self.console.on_command(&target).await;
        self.set_active(true);

        let mut dispatch = Dispatch {
            session: self,
            on_complete,
            outcome: None,
        };
        let poll = PollLoop::new(self.transport.as_ref(), endpoint::NEXT_MESSAGE);

        match poll.drive(&target, &mut dispatch).await {
            Ok(_) => dispatch
                .outcome
                .ok_or_else(|| Error::Internal("poll loop stopped without a terminal message".into())),
            Err(e) => {
                warn!(command = %target, error = %e, "transport failure");
                self.set_active(false);
                self.console.on_transport_error(&e).await;
                Err(e)
            }
        }
    }

    /// Activate a control as if the operator clicked it
    ///
    /// Returns `None` without sending anything while a command is in flight
    /// or when the dependency prompt is cancelled.
    pub async fn activate(&mut self, id: ControlId) -> Result<Option<Outcome>> {
        if self.is_active() {
            return Ok(None);
        }

        let action = self
            .controls
            .get(id)
            .ok_or(Error::ControlNotFound(id))?
            .action
            .clone();

        let target = match action {
            ControlAction::Run(target) => target,
            ControlAction::Publish(branch) => endpoint::publish(&branch),
            ControlAction::NeedDependency => match self.surface.prompt(NEED_PROMPT) {
                Some(mod_id) => endpoint::need(&mod_id),
                None => return Ok(None),
            },
        };

        self.command(Command::new(target)).await.map(Some)
    }

    /// Fetch the branch list and create one publish control per branch
    ///
    /// Runs at most once per session. A failed fetch creates no controls.
    pub async fn bootstrap(&mut self) -> Result<Outcome> {
        if self.bootstrapped {
            return Err(Error::AlreadyBootstrapped);
        }
        self.bootstrapped = true;

        let outcome = self.command(Command::new(endpoint::GET_BRANCHES)).await?;
        if let Outcome::Finished(payload) = &outcome {
            BranchListBuilder::new(self.branch_split.clone()).build(
                payload,
                &mut self.controls,
                self.surface.as_ref(),
            );
        }
        Ok(outcome)
    }

    /// Update dependencies
    pub async fn update(&mut self) -> Result<Outcome> {
        self.command(Command::new(endpoint::UPDATE)).await
    }

    /// Add a workshop dependency
    pub async fn need(&mut self, mod_id: &str) -> Result<Outcome> {
        self.command(Command::new(endpoint::need(mod_id))).await
    }

    /// Launch Natural Selection 2
    pub async fn ns2(&mut self) -> Result<Outcome> {
        self.command(Command::new(endpoint::NS2)).await
    }

    /// Launch the editor
    pub async fn editor(&mut self) -> Result<Outcome> {
        self.command(Command::new(endpoint::EDITOR)).await
    }

    /// Publish a branch
    pub async fn publish(&mut self, branch: &Branch) -> Result<Outcome> {
        self.command(Command::new(endpoint::publish(branch))).await
    }

    /// Let the server pick a project directory
    ///
    /// Returns `None` when the server reported a fatal error.
    pub async fn find_project(&mut self) -> Result<Option<ProjectState>> {
        let outcome = self.command(Command::new(endpoint::FIND_PROJECT)).await?;
        Ok(match outcome {
            Outcome::Finished(payload) => Some(ProjectState::from_payload(&payload)),
            Outcome::Failed(_) => None,
        })
    }

    /// Initialise a new project in the picked directory
    pub async fn create_project(&mut self) -> Result<Outcome> {
        self.command(Command::new(endpoint::CREATE_PROJECT)).await
    }
}

/// Applies the kind-specific effect of each reply for one command
struct Dispatch<'s> {
    session: &'s Session,
    on_complete: Option<OnComplete>,
    outcome: Option<Outcome>,
}

#[async_trait]
impl MessageHandler for Dispatch<'_> {
    async fn handle(&mut self, reply: std::result::Result<Message, DecodeError>) -> PollAction {
        let console = self.session.console.as_ref();

        let Message { kind, payload } = match reply {
            Ok(message) => message,
            Err(DecodeError::UnrecognizedTag { raw }) => {
                console.on_unrecognized(&raw).await;
                return PollAction::Continue;
            }
        };

        match kind {
            Kind::Error => {
                warn!(message = %payload, "fatal server error");
                self.session.set_active(false);
                console.on_log(LogStyle::Warning, &payload).await;
                console.on_fatal(&payload).await;
                self.outcome = Some(Outcome::Failed(payload));
                PollAction::Stop
            }
            Kind::Warning => {
                console.on_log(LogStyle::Warning, &payload).await;
                PollAction::Continue
            }
            Kind::Log => {
                console.on_log(LogStyle::Plain, &payload).await;
                PollAction::Continue
            }
            Kind::Info => {
                console.on_log(LogStyle::Emphasized, &payload).await;
                PollAction::Continue
            }
            Kind::Finished => {
                self.session.set_active(false);
                console.on_finished(&payload).await;
                if let Some(callback) = self.on_complete.take() {
                    callback(payload.clone());
                }
                self.outcome = Some(Outcome::Finished(payload));
                PollAction::Stop
            }
        }
    }
}
