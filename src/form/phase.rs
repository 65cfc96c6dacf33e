//! Form phase state machine.

use serde::{Deserialize, Serialize};

/// The phases of one signup attempt.
///
/// Editing → Submitting → Success, with Submitting falling back to
/// Editing on failure. Success is terminal: the form is discarded and
/// the UI only offers navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Editing,
    Submitting,
    Success,
}

impl FormPhase {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: FormPhase) -> bool {
        use FormPhase::*;
        matches!(
            (self, target),
            (Editing, Submitting) | (Submitting, Editing) | (Submitting, Success)
        )
    }

    /// Whether this phase is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether field edits are accepted in this phase. Doubles as the
    /// in-flight guard: while Submitting, nothing else may start.
    pub fn allows_edits(&self) -> bool {
        matches!(self, Self::Editing)
    }
}

impl Default for FormPhase {
    fn default() -> Self {
        Self::Editing
    }
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Success => "success",
        };
        write!(f, "{s}")
    }
}
