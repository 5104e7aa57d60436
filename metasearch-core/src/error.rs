use thiserror::Error;

use crate::slot::Slot;

/// Errors originating from the engine registry and panel controller.
///
/// None of these are fatal: each one is scoped to a single action or a
/// single slot, and the controller's state is left as it was before the
/// failing step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("please enter a search query")]
    EmptyQuery,

    #[error("engine \"{code}\" is not configured (panel {slot})")]
    UnknownEngine { slot: Slot, code: String },

    #[error("unknown preset \"{0}\"")]
    UnknownPreset(String),

    #[error("invalid panel index: {0} (must be 1, 2 or 3)")]
    InvalidSlot(u8),

    #[error("engine \"{code}\" has {placeholders} query placeholders (expected exactly 1)")]
    InvalidTemplate { code: String, placeholders: usize },

    #[error("engine code \"{0}\" is already registered")]
    DuplicateEngine(String),
}

impl CoreError {
    /// The slot this error is scoped to, if any.
    pub fn slot(&self) -> Option<Slot> {
        match self {
            Self::UnknownEngine { slot, .. } => Some(*slot),
            _ => None,
        }
    }
}
