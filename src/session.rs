//! Shell session state and the line-handling entry point.
//!
//! Everything mutable about a running shell lives in [`ShellSession`]: the
//! tree, the command history and its navigation cursor, the mute flag, and
//! the prompt string. Nothing is module-global, so independent sessions can
//! coexist (and be tested) side by side.

use crate::config::{self, PROMPT_SUFFIX};
use crate::core::{execute_command, Command, CommandResult, FileTree};
use crate::models::OutputLine;

/// One interactive shell session.
///
/// Each [`ShellSession::handle_line`] call fully processes one input line
/// before returning; there is no suspended state between lines.
#[derive(Clone, Debug)]
pub struct ShellSession {
    tree: FileTree,
    history: Vec<String>,
    /// Index into `history` while browsing with previous/next; `None` means
    /// the live (empty) input line.
    history_index: Option<usize>,
    muted: bool,
    prompt: String,
}

impl ShellSession {
    /// Create a session over the given tree, cursor wherever the tree left it.
    pub fn new(tree: FileTree) -> Self {
        let prompt = Self::prompt_for(&tree);
        Self {
            tree,
            history: Vec::new(),
            history_index: None,
            muted: false,
            prompt,
        }
    }

    /// The stock session: the compiled-in demo tree.
    pub fn demo() -> Self {
        Self::new(config::demo_tree())
    }

    fn prompt_for(tree: &FileTree) -> String {
        format!("{}{}", tree.full_path_name(), PROMPT_SUFFIX)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    /// The welcome text shown once at startup, ending with the prompt.
    pub fn banner(&self) -> Vec<OutputLine> {
        let mut lines: Vec<OutputLine> = config::BANNER_TEXT
            .lines()
            .map(|line| {
                if line.is_empty() {
                    OutputLine::empty()
                } else {
                    OutputLine::text(line)
                }
            })
            .collect();
        lines.push(OutputLine::empty());
        lines.push(OutputLine::prompt(self.prompt.as_str()));
        lines
    }

    /// Process one line of input and return everything to display.
    ///
    /// The line is trimmed, recorded to history (unless empty), case-folded,
    /// dispatched, and the output is terminated with the current prompt.
    pub fn handle_line(&mut self, line: &str) -> CommandResult {
        let line = line.trim();
        if line.is_empty() {
            return CommandResult::output(vec![OutputLine::prompt(self.prompt.as_str())]);
        }

        self.record(line);
        let cmd = Command::parse_line(line);
        let mut result = execute_command(cmd, &mut self.tree, &mut self.muted);

        // Navigation may have moved the cursor.
        self.prompt = Self::prompt_for(&self.tree);
        result.output.push(OutputLine::prompt(self.prompt.as_str()));
        result
    }

    // -- Command history --

    fn record(&mut self, line: &str) {
        self.history.push(line.to_string());
        self.history_index = None;
    }

    /// Step to the previous (older) history entry.
    ///
    /// Returns the line the input collaborator should display. Stepping
    /// before the oldest entry clears back to the live line, signalled by
    /// `None`.
    pub fn history_previous(&mut self) -> Option<&str> {
        let index = match self.history_index {
            None if !self.history.is_empty() => self.history.len() - 1,
            None => return None,
            Some(0) => {
                self.history_index = None;
                return None;
            }
            Some(i) => i - 1,
        };
        self.history_index = Some(index);
        Some(self.history[index].as_str())
    }

    /// Step to the next (newer) history entry.
    ///
    /// Stepping past the newest entry returns to the live input line,
    /// signalled by `None`.
    pub fn history_next(&mut self) -> Option<&str> {
        let index = self.history_index?;
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            Some(self.history[index + 1].as_str())
        } else {
            self.history_index = None;
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
