//! Command parsing and execution.
//!
//! User input is parsed into the closed [`Command`] enum and run through
//! [`execute_command`], which returns output lines plus an optional display
//! effect. Input that matches no command carries the whole line into
//! [`Command::Unknown`] so the fuzzy matcher can suggest a correction.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::{CommandResult, Effect};

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to `cd`.
///
/// Stored as typed (not validated); validation happens during execution
/// against the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for PathArg {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    Resume,
    /// List the current directory (`dir`, alias `ls`).
    Dir,
    Cls,
    Reset,
    Cd(Option<PathArg>),
    Contact,
    Play(Option<String>),
    Read(Option<String>),
    Mute,
    /// Input that matched nothing; carries the full case-folded line so the
    /// fuzzy matcher can work on what the user actually typed.
    Unknown(String),
}

impl Command {
    /// The fixed command table used for fuzzy suggestions.
    ///
    /// `ls` is accepted as an alias of `dir` but deliberately not listed,
    /// so suggestions always point at the canonical name.
    pub fn names() -> &'static [&'static str] {
        &[
            "help", "resume", "dir", "cls", "reset", "cd", "contact", "play", "read", "mute",
        ]
    }

    /// Parse one trimmed input line.
    ///
    /// The whole line is case-folded first, so `HELP` and `help` are the
    /// same command and `cd BLOG` looks up `blog`.
    pub fn parse_line(line: &str) -> Self {
        let line = line.to_lowercase();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (line.as_str(), None),
        };
        let arg = arg.filter(|a| !a.is_empty());

        match name {
            "help" => Self::Help,
            "resume" => Self::Resume,
            "dir" | "ls" => Self::Dir,
            "cls" => Self::Cls,
            "reset" => Self::Reset,
            "cd" => Self::Cd(arg.map(PathArg::new)),
            "contact" => Self::Contact,
            "play" => Self::Play(arg.map(str::to_string)),
            "read" => Self::Read(arg.map(str::to_string)),
            "mute" => Self::Mute,
            _ => Self::Unknown(line),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(Command::parse_line("help"), Command::Help);
        assert_eq!(Command::parse_line("resume"), Command::Resume);
        assert_eq!(Command::parse_line("cls"), Command::Cls);
        assert_eq!(Command::parse_line("reset"), Command::Reset);
        assert_eq!(Command::parse_line("contact"), Command::Contact);
        assert_eq!(Command::parse_line("mute"), Command::Mute);
    }

    #[test]
    fn test_parse_dir_and_alias() {
        assert_eq!(Command::parse_line("dir"), Command::Dir);
        assert_eq!(Command::parse_line("ls"), Command::Dir);
    }

    #[test]
    fn test_parse_case_folds_whole_line() {
        assert_eq!(Command::parse_line("HELP"), Command::Help);
        assert_eq!(Command::parse_line("MuTe"), Command::Mute);
        assert!(matches!(
            Command::parse_line("CD BLOG"),
            Command::Cd(Some(ref p)) if p == "blog"
        ));
    }

    #[test]
    fn test_parse_cd() {
        assert_eq!(Command::parse_line("cd"), Command::Cd(None));
        assert!(matches!(
            Command::parse_line("cd blog"),
            Command::Cd(Some(ref p)) if p == "blog"
        ));
        assert!(matches!(
            Command::parse_line("cd   ../games"),
            Command::Cd(Some(ref p)) if p == "../games"
        ));
    }

    #[test]
    fn test_parse_play_and_read() {
        assert_eq!(Command::parse_line("play"), Command::Play(None));
        assert_eq!(
            Command::parse_line("play test.game"),
            Command::Play(Some("test.game".into()))
        );
        assert_eq!(
            Command::parse_line("read test.blog"),
            Command::Read(Some("test.blog".into()))
        );
    }

    #[test]
    fn test_parse_unknown_keeps_full_line() {
        assert_eq!(
            Command::parse_line("hlep me please"),
            Command::Unknown("hlep me please".into())
        );
    }

    #[test]
    fn test_names_table() {
        let names = Command::names();
        assert!(names.contains(&"help"));
        assert!(names.contains(&"mute"));
        // The alias stays out of the suggestion table.
        assert!(!names.contains(&"ls"));
    }
}
