//! Activation gate
//!
//! Tracks whether a command is in flight and keeps every control's enabled
//! state and appearance consistent with it. Each session owns its own gate.

use crate::session::controls::ControlSurface;
use crate::types::{Appearance, ControlId};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Appearance shown on controls while a command is in flight
pub const DEFAULT_BUSY_APPEARANCE: &str = "grey";

#[derive(Debug, Default)]
struct GateState {
    in_flight: bool,
    /// Appearance captured the first time each control was toggled
    originals: HashMap<ControlId, Appearance>,
}

/// Per-session "command in flight" flag
#[derive(Debug)]
pub struct ActivationGate {
    busy: Appearance,
    state: Mutex<GateState>,
}

impl Default for ActivationGate {
    fn default() -> Self {
        Self::new(Appearance::new(DEFAULT_BUSY_APPEARANCE))
    }
}

impl ActivationGate {
    /// Create an inactive gate using `busy` as the in-flight appearance
    pub fn new(busy: Appearance) -> Self {
        Self {
            busy,
            state: Mutex::new(GateState::default()),
        }
    }

    /// Whether a command is currently in flight
    pub fn is_active(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .in_flight
    }

    /// Appearance applied while active
    pub const fn busy_appearance(&self) -> &Appearance {
        &self.busy
    }

    /// Appearance captured for a control on its first toggle, if any
    pub fn original_appearance(&self, id: ControlId) -> Option<Appearance> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .originals
            .get(&id)
            .cloned()
    }

    /// Set the in-flight flag and restyle every given control
    ///
    /// Controls are disabled while active. Restoring always uses the
    /// appearance captured on the control's first toggle.
    pub fn set_active(&self, active: bool, controls: &[ControlId], surface: &dyn ControlSurface) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.in_flight = active;

        for &id in controls {
            surface.set_enabled(id, !active);
            let original = state
                .originals
                .entry(id)
                .or_insert_with(|| surface.appearance(id));
            let appearance = if active { &self.busy } else { &*original };
            surface.set_appearance(id, appearance);
        }
    }
}
