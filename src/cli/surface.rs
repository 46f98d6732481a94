//! Terminal rendering of controls

use crate::cli::style::{BRANCH_APPEARANCE, COMMAND_APPEARANCE, Stylize};
use dialoguer::Input;
use laspad_client::session::ControlSurface;
use laspad_client::types::{Appearance, Control, ControlId};
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use tracing::warn;

#[derive(Debug, Clone)]
struct Widget {
    label: String,
    enabled: bool,
    appearance: Appearance,
}

/// A menu entry as currently rendered
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// Control behind the entry
    pub id: ControlId,
    /// Styled label
    pub text: String,
    /// Whether the control accepts activation
    pub enabled: bool,
}

/// Control surface backed by a terminal menu
pub struct TerminalSurface {
    widgets: Mutex<BTreeMap<ControlId, Widget>>,
    interactive: bool,
}

impl TerminalSurface {
    /// Create a surface; prompts are only shown when `interactive`
    pub const fn new(interactive: bool) -> Self {
        Self {
            widgets: Mutex::new(BTreeMap::new()),
            interactive,
        }
    }

    /// Menu entries in control order
    pub fn menu(&self) -> Vec<MenuEntry> {
        self.widgets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(id, widget)| MenuEntry {
                id: *id,
                text: widget.label.appearance(&widget.appearance).to_string(),
                enabled: widget.enabled,
            })
            .collect()
    }
}

impl ControlSurface for TerminalSurface {
    fn add_control(&self, control: &Control) {
        let appearance = if control.is_branch() {
            BRANCH_APPEARANCE
        } else {
            COMMAND_APPEARANCE
        };
        self.widgets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                control.id,
                Widget {
                    label: control.label.clone(),
                    enabled: true,
                    appearance: Appearance::new(appearance),
                },
            );
    }

    fn set_enabled(&self, id: ControlId, enabled: bool) {
        if let Some(widget) = self
            .widgets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&id)
        {
            widget.enabled = enabled;
        }
    }

    fn appearance(&self, id: ControlId) -> Appearance {
        self.widgets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .map_or_else(|| Appearance::new(COMMAND_APPEARANCE), |w| w.appearance.clone())
    }

    fn set_appearance(&self, id: ControlId, appearance: &Appearance) {
        if let Some(widget) = self
            .widgets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&id)
        {
            widget.appearance = appearance.clone();
        }
    }

    fn prompt(&self, question: &str) -> Option<String> {
        if !self.interactive {
            return None;
        }

        let answer = tokio::task::block_in_place(|| {
            Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()
        });

        match answer {
            Ok(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "prompt failed");
                None
            }
        }
    }
}
