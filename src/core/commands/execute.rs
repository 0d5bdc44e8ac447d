//! Command execution logic.
//!
//! Runs parsed commands against the file tree and returns output lines.
//! Prompt recomputation happens in the session after execution, so `cd`
//! only has to move the cursor.

use crate::config::{COMMAND_MATCH_THRESHOLD, CONTACT_TEXT, HELP_TEXT, NAME_MATCH_THRESHOLD, RESUME_TEXT};
use crate::core::matcher::best_match;
use crate::core::tree::{FileTree, NavError, NodeKind};
use crate::models::OutputLine;

use super::{Command, CommandResult, Effect, PathArg};

/// Execute a parsed command.
///
/// `cd` mutates the tree cursor; `mute` flips the mute flag; everything
/// else only reads. `cls` and `reset` are surfaced as effects for the
/// display collaborator.
pub fn execute_command(cmd: Command, tree: &mut FileTree, muted: &mut bool) -> CommandResult {
    match cmd {
        Command::Help => execute_help(*muted),
        Command::Resume => text_block(RESUME_TEXT),
        Command::Contact => text_block(CONTACT_TEXT),
        Command::Dir => execute_dir(tree),
        Command::Cd(path) => execute_cd(path, tree),
        Command::Play(name) => execute_open(name, NodeKind::Game, "Usage: play <game>", tree),
        Command::Read(name) => execute_open(name, NodeKind::Document, "Usage: read <document>", tree),
        Command::Mute => execute_mute(muted),
        Command::Cls => CommandResult::effect(Effect::ClearScreen),
        Command::Reset => CommandResult::effect(Effect::Reset),
        Command::Unknown(input) => execute_unknown(&input),
    }
}

/// Render a compiled-in text asset line by line.
fn text_block(asset: &str) -> CommandResult {
    CommandResult::output(asset.lines().map(OutputLine::text).collect())
}

/// Execute `help`: the static reference text plus the live mute status.
fn execute_help(muted: bool) -> CommandResult {
    let mut lines: Vec<OutputLine> = HELP_TEXT.lines().map(OutputLine::text).collect();
    lines.push(OutputLine::empty());
    lines.push(OutputLine::text(format!(
        "Sounds are currently {}.",
        if muted { "OFF" } else { "ON" }
    )));
    CommandResult::output(lines)
}

/// Execute `dir`/`ls`: one header line, then the child names tab-joined.
fn execute_dir(tree: &FileTree) -> CommandResult {
    let mut lines = vec![OutputLine::text(format!(
        "Directory of {}:",
        tree.full_path_name()
    ))];
    let names = tree.child_names();
    if names.is_empty() {
        lines.push(OutputLine::text("[Empty directory]"));
    } else {
        lines.push(OutputLine::text(names.join("\t")));
    }
    CommandResult::output(lines)
}

/// Execute `cd`.
fn execute_cd(path: Option<PathArg>, tree: &mut FileTree) -> CommandResult {
    let Some(path) = path else {
        return CommandResult::output(vec![OutputLine::text("Usage: cd <directory>")]);
    };
    match tree.navigate_to(path.as_str()) {
        Ok(()) => CommandResult::empty(),
        Err(NavError::NoSuchPath) => CommandResult::output(vec![OutputLine::error(
            "The system cannot find the path specified.",
        )]),
        Err(NavError::NotADirectory(_)) => CommandResult::output(vec![OutputLine::error(
            format!("{path} is not a directory."),
        )]),
    }
}

/// Execute `play`/`read`: exact lookup, then a fuzzy suggestion drawn from
/// the children of the expected kind.
///
/// Opening a correctly-typed item is deliberately a stub.
fn execute_open(
    name: Option<String>,
    kind: NodeKind,
    usage: &str,
    tree: &FileTree,
) -> CommandResult {
    let Some(name) = name else {
        return CommandResult::output(vec![OutputLine::text(usage)]);
    };

    match tree.child_by_name(&name) {
        Some(node) if node.kind == kind => {
            CommandResult::output(vec![OutputLine::text("To be implemented!!")])
        }
        Some(_) => CommandResult::output(vec![OutputLine::error(format!(
            "{name} is not a {kind}."
        ))]),
        None => {
            let mut lines = vec![OutputLine::error(format!(
                "{name} is not a {kind} in this directory."
            ))];
            let candidates = tree.children_of_kind(kind);
            if candidates.is_empty() {
                lines.push(OutputLine::text(format!("This directory has no {kind}s.")));
            } else {
                let names = candidates.iter().map(|n| n.name.as_str());
                if let Some(best) = best_match(&name, names, NAME_MATCH_THRESHOLD) {
                    lines.push(OutputLine::info(format!("Did you mean {best}?")));
                }
            }
            CommandResult::output(lines)
        }
    }
}

/// Execute `mute`: flip the session flag and report the new state.
fn execute_mute(muted: &mut bool) -> CommandResult {
    *muted = !*muted;
    CommandResult::output(vec![OutputLine::text(format!(
        "Turned sounds {}",
        if *muted { "OFF" } else { "ON" }
    ))])
}

/// Fallback for unrecognized input: fuzzy-match the whole line against the
/// command table and suggest the closest name when it is close enough.
fn execute_unknown(input: &str) -> CommandResult {
    let suggestion = best_match(input, Command::names().iter().copied(), COMMAND_MATCH_THRESHOLD);
    let first = match suggestion {
        Some(best) => OutputLine::error(format!(
            "Sorry, command not recognized. Did you mean {}?",
            best.to_uppercase()
        )),
        None => OutputLine::error("Sorry, command not recognized."),
    };
    CommandResult::output(vec![
        first,
        OutputLine::text("Type \"help\" for available commands."),
    ])
}

// =============================================================================
// Tests
// =============================================================================
