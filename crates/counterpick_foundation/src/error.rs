//! Error types for counterpick.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityId;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for counterpick operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a set not found error.
    #[must_use]
    pub fn set_not_found(set: impl Into<String>) -> Self {
        Self::new(ErrorKind::SetNotFound(set.into()))
    }

    /// Creates a slot not found error.
    #[must_use]
    pub fn slot_not_found(set: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::new(ErrorKind::SlotNotFound {
            set: set.into(),
            slot: slot.into(),
        })
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(id: EntityId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates an error for an entity that is not where a move claims it is.
    #[must_use]
    pub fn entity_not_placed(entity: EntityId, location: impl Into<String>) -> Self {
        Self::new(ErrorKind::EntityNotPlaced {
            entity,
            location: location.into(),
        })
    }

    /// Creates a cross-set move error.
    #[must_use]
    pub fn cross_set(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(ErrorKind::CrossSet {
            from: from.into(),
            to: to.into(),
        })
    }

    /// Creates an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidIdentifier(id.into()))
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode(message.into()))
    }

    /// Creates a storage error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage(message.into()))
    }

    /// Creates a usage error for a malformed command.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }

    /// Returns true if this error is a rejected move or edit rather than a failure.
    ///
    /// Rejections happen constantly during speculative drag interactions and are
    /// treated as no-ops by callers.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::SetNotFound(_)
                | ErrorKind::SlotNotFound { .. }
                | ErrorKind::EntityNotFound(_)
                | ErrorKind::EntityNotPlaced { .. }
                | ErrorKind::CrossSet { .. }
                | ErrorKind::LastSlot(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No set with this id exists in the roster.
    #[error("set not found: {0}")]
    SetNotFound(String),

    /// No slot with this id exists in the set.
    #[error("slot not found: {slot} in set {set}")]
    SlotNotFound {
        /// The set that was searched.
        set: String,
        /// The slot id that was not found.
        slot: String,
    },

    /// Entity id is not part of the catalog.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// Entity is not in the container a move named as its source.
    #[error("entity {entity} is not in {location}")]
    EntityNotPlaced {
        /// The entity being moved.
        entity: EntityId,
        /// Description of the claimed source container.
        location: String,
    },

    /// Moves between different sets are never allowed.
    #[error("cross-set move from {from} to {to}")]
    CrossSet {
        /// Source set id.
        from: String,
        /// Destination set id.
        to: String,
    },

    /// The only remaining slot of a set cannot be deleted.
    #[error("cannot delete the last slot of set {0}")]
    LastSlot(String),

    /// Identifier contains reserved characters or words.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// An entity id appears twice where it must be unique (catalog or set placements).
    #[error("duplicate entity: {0}")]
    DuplicateEntity(EntityId),

    /// A set must always hold at least one slot.
    #[error("set {0} has no slots")]
    EmptySet(String),

    /// Two sets or two slots of one set share an id.
    #[error("duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    /// A persisted or transported payload could not be decoded at all.
    #[error("decode error: {0}")]
    Decode(String),

    /// DEFLATE compression or decompression failed.
    #[error("compression error: {0}")]
    Compression(String),

    /// The key-value store rejected a read or write.
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Share-link generation or clipboard delivery failed.
    #[error("share failed: {0}")]
    Share(String),

    /// A REPL command was not recognized or had the wrong arguments.
    #[error("{0}")]
    Usage(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that was running (e.g. `load persisted`).
    pub operation: Option<String>,
    /// Storage key or file involved, if any.
    pub key: Option<String>,
    /// Additional notes, outermost last.
    pub notes: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Adds a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "during {operation}")?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key {key:?})")?;
        }
        for note in &self.notes {
            write!(f, "; {note}")?;
        }
        Ok(())
    }
}
