//! Terminal and JSON-lines consoles

use crate::cli::style::{arrow, check, cross, spinner_style, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use dialoguer::Input;
use indicatif::ProgressBar;
use laspad_client::error::Error;
use laspad_client::session::Console;
use laspad_client::types::{Event, LogStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{trace, warn};

/// Console that prints styled log lines with a spinner while a command runs
///
/// Two modes:
/// - interactive: fatal errors block until the operator presses enter
/// - batch: fatal errors are printed and the command fails
pub struct TerminalConsole {
    interactive: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalConsole {
    /// Console for the interactive menu
    pub const fn interactive() -> Self {
        Self {
            interactive: true,
            spinner: Mutex::new(None),
        }
    }

    /// Console for one-shot subcommands
    pub const fn batch() -> Self {
        Self {
            interactive: false,
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, target: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(target.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));

        if let Some(old) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(spinner)
        {
            old.finish_and_clear();
        }
    }

    fn stop_spinner(&self) {
        if let Some(spinner) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            spinner.finish_and_clear();
        }
    }

    /// Print above the spinner without tearing it
    fn print(&self, f: impl FnOnce()) {
        let guard = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(spinner) => spinner.suspend(f),
            None => f(),
        }
    }
}

#[async_trait]
impl Console for TerminalConsole {
    async fn on_command(&self, target: &str) {
        println!("{} {}", arrow(), target.accent());
        self.start_spinner(target);
    }

    async fn on_log(&self, style: LogStyle, text: &str) {
        self.print(|| match style {
            LogStyle::Warning => println!("{}", text.warn().for_stdout()),
            LogStyle::Plain => println!("{text}"),
            LogStyle::Emphasized => println!("{}", text.emphasis()),
        });
    }

    async fn on_fatal(&self, message: &str) {
        self.stop_spinner();
        eprintln!("{} {} {}", cross(), "Fatal error:".error(), message);

        if self.interactive {
            let acknowledged = tokio::task::block_in_place(|| {
                Input::<String>::new()
                    .with_prompt("Press enter to continue")
                    .allow_empty(true)
                    .interact_text()
            });
            if let Err(e) = acknowledged {
                warn!(error = %e, "could not wait for acknowledgement");
            }
        }
    }

    async fn on_finished(&self, payload: &str) {
        self.stop_spinner();
        if payload.is_empty() {
            println!("{} {}", check(), "done".success());
        } else {
            println!("{} {} {}", check(), "done".success(), payload.muted());
        }
    }

    async fn on_unrecognized(&self, raw: &str) {
        // The server answers an empty body while it has nothing queued
        if raw.is_empty() {
            trace!("empty reply");
            return;
        }
        self.print(|| println!("{} {}", "?".muted(), raw.muted()));
    }

    async fn on_transport_error(&self, error: &Error) {
        self.stop_spinner();
        eprintln!("{} {}", cross(), error.error());
    }
}

/// Console that writes one JSON object per event to stdout
pub struct JsonConsole;

impl JsonConsole {
    fn emit(event: &Event) {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!(error = %e, "could not serialize event"),
        }
    }
}

#[async_trait]
impl Console for JsonConsole {
    async fn on_command(&self, target: &str) {
        Self::emit(&Event::Command {
            target: target.to_string(),
        });
    }

    async fn on_log(&self, style: LogStyle, text: &str) {
        Self::emit(&Event::Log {
            style,
            text: text.to_string(),
        });
    }

    async fn on_fatal(&self, message: &str) {
        Self::emit(&Event::Fatal {
            message: message.to_string(),
        });
    }

    async fn on_finished(&self, payload: &str) {
        Self::emit(&Event::Finished {
            payload: payload.to_string(),
        });
    }

    async fn on_unrecognized(&self, raw: &str) {
        Self::emit(&Event::Unrecognized {
            raw: raw.to_string(),
        });
    }

    async fn on_transport_error(&self, error: &Error) {
        Self::emit(&Event::TransportError {
            error: error.to_string(),
        });
    }
}
