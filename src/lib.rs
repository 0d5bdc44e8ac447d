//! An in-memory fake shell: a command interpreter over a typed file tree,
//! with fuzzy "did you mean" suggestions.
//!
//! The crate is display-agnostic. Input arrives as trimmed lines via
//! [`ShellSession::handle_line`]; output leaves as ordered
//! [`models::OutputLine`]s plus optional display effects. Terminal
//! rendering, key capture, and audio belong to the caller (see
//! `src/main.rs` for a stdin/stdout reference driver).

pub mod config;
pub mod core;
pub mod models;
pub mod session;

pub use crate::core::{Command, CommandResult, Effect, FileTree, NodeKind};
pub use crate::models::OutputLine;
pub use crate::session::ShellSession;
