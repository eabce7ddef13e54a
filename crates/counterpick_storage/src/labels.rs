//! Positional default names.
//!
//! A slot whose label equals the default for its position is written without
//! a label in the persisted form, and a set without a name is displayed under
//! its positional name.

/// Default labels for slots and sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    slot_defaults: Vec<String>,
    fallback_slot: String,
    set_prefix: String,
}

impl Labels {
    /// Creates labels with explicit positional slot defaults.
    #[must_use]
    pub fn new(
        slot_defaults: Vec<String>,
        fallback_slot: impl Into<String>,
        set_prefix: impl Into<String>,
    ) -> Self {
        Self {
            slot_defaults,
            fallback_slot: fallback_slot.into(),
            set_prefix: set_prefix.into(),
        }
    }

    /// Default label of the slot at `index`.
    #[must_use]
    pub fn slot_default(&self, index: usize) -> &str {
        self.slot_defaults
            .get(index)
            .map_or(self.fallback_slot.as_str(), String::as_str)
    }

    /// Returns true if `label` is the default for position `index`.
    #[must_use]
    pub fn is_default_slot_label(&self, index: usize, label: &str) -> bool {
        self.slot_default(index) == label
    }

    /// Label given to a slot inserted without a name.
    #[must_use]
    pub fn new_slot(&self) -> &str {
        &self.fallback_slot
    }

    /// Number of slots a freshly created set starts with.
    #[must_use]
    pub fn initial_slot_count(&self) -> usize {
        self.slot_defaults.len().max(1)
    }

    /// Display name of an unnamed set at `index` (1-based in the output).
    #[must_use]
    pub fn set_name(&self, index: usize) -> String {
        format!("{}{}", self.set_prefix, index + 1)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new(
            vec!["ターゲット".to_string(), "有利".to_string()],
            "項目名",
            "Set ",
        )
    }
}
