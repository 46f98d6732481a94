//! CLI commands
//!
//! Command implementations for the `laspad-client` binary.

mod commands;
mod console;
mod interactive;
mod style;
mod surface;

pub use commands::{run_branches, run_need, run_open, run_publish, run_simple, SimpleCommand};
pub use console::{JsonConsole, TerminalConsole};
pub use interactive::run_interactive;
pub use surface::TerminalSurface;
