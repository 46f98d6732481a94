//! Core types for laspad-client

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a decoded server message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Fatal error, ends the command
    Error,
    /// Warning line for the log
    Warning,
    /// Emphasized line for the log
    Info,
    /// Plain line for the log
    Log,
    /// Command finished, payload goes to the completion callback
    Finished,
}

impl Kind {
    /// Every kind, in wire-tag order
    pub const ALL: [Self; 5] = [
        Self::Error,
        Self::Warning,
        Self::Log,
        Self::Info,
        Self::Finished,
    ];

    /// Three-character wire tag for this kind
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "ERR",
            Self::Warning => "WRN",
            Self::Log => "LOG",
            Self::Info => "INF",
            Self::Finished => "FIN",
        }
    }

    /// Look up the kind for a wire tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Whether a message of this kind ends the poll loop
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Error | Self::Finished)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single decoded server message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message kind, from the tag
    pub kind: Kind,
    /// Everything after the tag, unmodified
    pub payload: String,
}

/// How a log line should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStyle {
    /// Warning-styled line (warnings and fatal errors)
    Warning,
    /// Plain line
    Plain,
    /// Emphasized line
    Emphasized,
}

/// What the poll loop should do after a message was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollAction {
    /// Request the next message
    Continue,
    /// Terminal message handled, stop polling
    Stop,
}

/// Terminal result of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Server sent `FIN` with this payload
    Finished(String),
    /// Server sent `ERR` with this payload
    Failed(String),
}

impl Outcome {
    /// Whether the command finished successfully
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    /// Payload of the terminal message
    pub fn payload(&self) -> &str {
        match self {
            Self::Finished(payload) | Self::Failed(payload) => payload,
        }
    }
}

/// A publishable target identifier surfaced by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Branch(String);

impl Branch {
    /// Wrap a branch identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Branch identifier as sent to the server
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session-local identifier of an interactive control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub u32);

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rendered background of a control (e.g. a colour name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Appearance(String);

impl Appearance {
    /// Wrap an appearance value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw appearance value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What activating a control does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAction {
    /// Run a fixed command target
    Run(String),
    /// Prompt for a dependency id, then run `/need?<id>`
    NeedDependency,
    /// Run `/publish?<branch>` for the owned branch
    Publish(Branch),
}

/// An interactive control registered with the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Identifier within the session
    pub id: ControlId,
    /// Button label
    pub label: String,
    /// Action performed on activation
    pub action: ControlAction,
}

impl Control {
    /// Whether this is a branch-publish control
    pub const fn is_branch(&self) -> bool {
        matches!(self.action, ControlAction::Publish(_))
    }
}

/// Project state reported by `/find_project`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectState {
    /// The selected directory already holds a laspad project
    Existing,
    /// The selected directory needs `/create_project`
    New,
    /// Any other payload
    Unknown(String),
}

impl ProjectState {
    /// Interpret a `/find_project` completion payload
    pub fn from_payload(payload: &str) -> Self {
        match payload {
            "old" => Self::Existing,
            "new" => Self::New,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// A view event, in the order the session produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A command was sent
    Command {
        /// Command target
        target: String,
    },
    /// A line for the log
    Log {
        /// Rendering style
        style: LogStyle,
        /// Line text
        text: String,
    },
    /// Blocking fatal alert
    Fatal {
        /// Error text from the server
        message: String,
    },
    /// Command finished
    Finished {
        /// Completion payload
        payload: String,
    },
    /// Reply without a recognized tag
    Unrecognized {
        /// Full reply body
        raw: String,
    },
    /// Request failed before a body was received
    TransportError {
        /// Error description
        error: String,
    },
}
