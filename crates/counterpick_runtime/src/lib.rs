//! Persistence, sharing, sessions, and the REPL for counterpick.
//!
//! This crate provides:
//! - [`codec`] - Persisted JSON form, including legacy field shapes
//! - [`transport`] - DEFLATE + URL-safe base64 payloads for share links
//! - [`KeyValueStore`] - Where the persisted form lives ([`MemoryStore`], [`FileStore`])
//! - [`Session`] - Loading, preview mode, auto-persist, and confirmations
//! - [`Repl`] - Command loop driving a session
//! - [`logging`] - Subscriber installation for binaries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod config;
pub mod confirm;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod session;
pub mod share;
pub mod store;
pub mod transport;
pub mod view;

pub use config::SessionConfig;
pub use confirm::{AutoConfirm, Confirm, Prompt};
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use repl::Repl;
pub use session::{Mode, Session};
pub use share::{Clipboard, MemoryClipboard};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use view::RosterView;
