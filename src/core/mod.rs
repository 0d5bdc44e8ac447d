//! Core logic for the shell: the file tree, the fuzzy matcher, and the
//! command interpreter.

mod commands;
pub mod matcher;
mod tree;

pub use commands::{execute_command, Command, CommandResult, Effect, PathArg};
pub use tree::{DuplicateName, FileTree, NavError, Node, NodeId, NodeKind};
