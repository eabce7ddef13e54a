//! Confirmation provider for destructive actions.

use std::fmt;

/// A destructive action awaiting the user's consent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Delete a whole set.
    DeleteSet {
        /// Display name of the set.
        name: String,
    },
    /// Delete one slot; its members return to the pool.
    DeleteSlot {
        /// Display name of the owning set.
        set: String,
        /// Slot label.
        label: String,
    },
    /// Drop every set and the persisted document.
    Reset,
    /// Replace the persisted roster with the shared one being previewed.
    AdoptPreview,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::DeleteSet { name } => write!(f, "Delete set \"{name}\"?"),
            Prompt::DeleteSlot { set, label } => {
                write!(f, "Delete \"{label}\" from \"{set}\"? Its members return to the pool.")
            }
            Prompt::Reset => f.write_str("Delete every set and the saved data?"),
            Prompt::AdoptPreview => {
                f.write_str("Overwrite your saved sets with the shared data?")
            }
        }
    }
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    /// Returns true if the action should proceed.
    fn confirm(&mut self, prompt: &Prompt) -> bool;
}

impl<F: FnMut(&Prompt) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &Prompt) -> bool {
        self(prompt)
    }
}

/// Answers every prompt the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &Prompt) -> bool {
        self.0
    }
}
