//! Recording console and control surface for testing

use async_trait::async_trait;
use laspad_client::error::Error;
use laspad_client::session::{Console, ControlSurface};
use laspad_client::types::{Appearance, Control, ControlId, Event, LogStyle};
use std::collections::HashMap;
use std::sync::Mutex;

/// Console that records every event in order
#[derive(Default)]
pub struct RecordingConsole {
    events: Mutex<Vec<Event>>,
}

impl RecordingConsole {
    /// Events recorded so far
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Log lines recorded so far
    pub fn logs(&self) -> Vec<(LogStyle, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Log { style, text } => Some((style, text)),
                _ => None,
            })
            .collect()
    }

    /// Number of fatal alerts shown
    pub fn fatal_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Fatal { .. }))
            .count()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl Console for RecordingConsole {
    async fn on_command(&self, target: &str) {
        self.push(Event::Command {
            target: target.to_string(),
        });
    }

    async fn on_log(&self, style: LogStyle, text: &str) {
        self.push(Event::Log {
            style,
            text: text.to_string(),
        });
    }

    async fn on_fatal(&self, message: &str) {
        self.push(Event::Fatal {
            message: message.to_string(),
        });
    }

    async fn on_finished(&self, payload: &str) {
        self.push(Event::Finished {
            payload: payload.to_string(),
        });
    }

    async fn on_unrecognized(&self, raw: &str) {
        self.push(Event::Unrecognized {
            raw: raw.to_string(),
        });
    }

    async fn on_transport_error(&self, error: &Error) {
        self.push(Event::TransportError {
            error: error.to_string(),
        });
    }
}

/// Surface keeping widget state in memory
///
/// New controls start enabled with the appearance `look-<id>`, so every
/// control has a distinct original.
#[derive(Default)]
pub struct RecordingSurface {
    added: Mutex<Vec<Control>>,
    enabled: Mutex<HashMap<ControlId, bool>>,
    appearance: Mutex<HashMap<ControlId, Appearance>>,
    appearance_history: Mutex<HashMap<ControlId, Vec<String>>>,
    prompt_answer: Mutex<Option<String>>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingSurface {
    /// Answer the next prompts with `answer` (`None` cancels)
    pub fn answer_prompt(&self, answer: Option<&str>) {
        *self.prompt_answer.lock().unwrap() = answer.map(ToString::to_string);
    }

    /// Controls added so far
    pub fn added(&self) -> Vec<Control> {
        self.added.lock().unwrap().clone()
    }

    /// Whether a control is enabled
    pub fn is_enabled(&self, id: ControlId) -> bool {
        self.enabled.lock().unwrap().get(&id).copied().unwrap_or(false)
    }

    /// Current appearance of a control
    pub fn look(&self, id: ControlId) -> String {
        self.appearance(id).as_str().to_string()
    }

    /// Every appearance set on a control, in order
    pub fn history(&self, id: ControlId) -> Vec<String> {
        self.appearance_history
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    /// Questions asked so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ControlSurface for RecordingSurface {
    fn add_control(&self, control: &Control) {
        self.added.lock().unwrap().push(control.clone());
        self.enabled.lock().unwrap().insert(control.id, true);
        self.appearance
            .lock()
            .unwrap()
            .insert(control.id, Appearance::new(format!("look-{}", control.id.0)));
    }

    fn set_enabled(&self, id: ControlId, enabled: bool) {
        self.enabled.lock().unwrap().insert(id, enabled);
    }

    fn appearance(&self, id: ControlId) -> Appearance {
        self.appearance
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Appearance::new("unknown"))
    }

    fn set_appearance(&self, id: ControlId, appearance: &Appearance) {
        self.appearance.lock().unwrap().insert(id, appearance.clone());
        self.appearance_history
            .lock()
            .unwrap()
            .entry(id)
            .or_default()
            .push(appearance.as_str().to_string());
    }

    fn prompt(&self, question: &str) -> Option<String> {
        self.prompts.lock().unwrap().push(question.to_string());
        self.prompt_answer.lock().unwrap().clone()
    }
}
