//! Interactive controls and the surface that renders them

use crate::types::{Appearance, Control, ControlAction, ControlId};

/// Prompt shown when a dependency control is activated
pub const NEED_PROMPT: &str = "Mod ID of dependency to add";

/// View-side rendering of controls
///
/// Implementations own the widgets; the session only refers to them by id.
pub trait ControlSurface: Send + Sync {
    /// Create the widget for a newly registered control
    fn add_control(&self, control: &Control);

    /// Enable or disable a control
    fn set_enabled(&self, id: ControlId, enabled: bool);

    /// Currently rendered background of a control
    fn appearance(&self, id: ControlId) -> Appearance;

    /// Override the rendered background of a control
    fn set_appearance(&self, id: ControlId, appearance: &Appearance);

    /// Ask the operator for a line of text, `None` when cancelled
    fn prompt(&self, question: &str) -> Option<String>;
}

/// Controls registered in one session, in creation order
#[derive(Debug, Default)]
pub struct ControlRegistry {
    controls: Vec<Control>,
    next_id: u32,
}

impl ControlRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control and return it
    pub fn register(&mut self, label: impl Into<String>, action: ControlAction) -> &Control {
        let id = ControlId(self.next_id);
        self.next_id += 1;
        self.controls.push(Control {
            id,
            label: label.into(),
            action,
        });
        &self.controls[self.controls.len() - 1]
    }

    /// Look up a control by id
    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    /// All controls
    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }

    /// Ids of all controls, for the activation gate
    pub fn ids(&self) -> Vec<ControlId> {
        self.controls.iter().map(|c| c.id).collect()
    }

    /// Branch-publish controls only
    pub fn branches(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(|c| c.is_branch())
    }

    /// Number of registered controls
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether no control is registered
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
