//! Terminal output types.
//!
//! [`OutputLine`] is the whole contract between the interpreter and whatever
//! displays it: an ordered sequence of styled text lines. Collaborators map
//! the variants to colors or markup however they like, but must preserve
//! emission order.

/// One line of interpreter output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLine {
    /// Plain text.
    Text(String),
    /// Error message (typically rendered red).
    Error(String),
    /// Informational highlight, e.g. a "did you mean" suggestion.
    Info(String),
    /// Blank line.
    Empty,
    /// The shell prompt; rendered without a trailing newline.
    Prompt(String),
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::Info(s.into())
    }

    pub fn empty() -> Self {
        Self::Empty
    }

    pub fn prompt(s: impl Into<String>) -> Self {
        Self::Prompt(s.into())
    }

    /// The line's text content, regardless of styling.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Error(s) | Self::Info(s) | Self::Prompt(s) => s,
            Self::Empty => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(OutputLine::text("hello"), OutputLine::Text("hello".into()));
        assert_eq!(OutputLine::error("bad"), OutputLine::Error("bad".into()));
        assert_eq!(OutputLine::info("hint"), OutputLine::Info("hint".into()));
        assert_eq!(OutputLine::empty(), OutputLine::Empty);
        assert_eq!(OutputLine::prompt("~$ "), OutputLine::Prompt("~$ ".into()));
    }

    #[test]
    fn test_as_str() {
        assert_eq!(OutputLine::text("hello").as_str(), "hello");
        assert_eq!(OutputLine::empty().as_str(), "");
        assert_eq!(OutputLine::prompt("root~$ ").as_str(), "root~$ ");
    }
}
