//! Application configuration.
//!
//! Centralizes the compiled-in constants: text assets (loaded at compile
//! time with `include_str!`), the demo tree manifest, and the fuzzy-match
//! thresholds.

use crate::core::FileTree;
use crate::models::Manifest;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Welcome text printed once at startup.
pub const BANNER_TEXT: &str = include_str!("../assets/text/banner.txt");

/// Reference text for the `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Text for the `resume` command.
pub const RESUME_TEXT: &str = include_str!("../assets/text/resume.txt");

/// Text for the `contact` command.
pub const CONTACT_TEXT: &str = include_str!("../assets/text/contact.txt");

/// The fixed demo hierarchy, as a JSON manifest.
pub const DEMO_MANIFEST: &str = include_str!("../assets/manifest.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name.
pub const APP_NAME: &str = "treesh";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Appended to the current path to form the prompt, e.g. `root~$ `.
pub const PROMPT_SUFFIX: &str = "~$ ";

// =============================================================================
// Fuzzy Match Thresholds
// =============================================================================

/// Maximum normalized distance for suggesting a command on unrecognized
/// input. Past this, "command not recognized" carries no suggestion.
pub const COMMAND_MATCH_THRESHOLD: f64 = 0.5;

/// Threshold for `play`/`read` file-name suggestions. Fully permissive:
/// whenever any candidate of the right kind exists, the closest one is
/// suggested.
pub const NAME_MATCH_THRESHOLD: f64 = 1.0;

// =============================================================================
// Demo Tree
// =============================================================================

/// Build the stock file tree from the compiled-in manifest.
///
/// Falls back to a bare root if the manifest fails to decode, so a bad
/// asset degrades to an empty shell instead of aborting.
pub fn demo_tree() -> FileTree {
    match serde_json::from_str::<Manifest>(DEMO_MANIFEST) {
        Ok(manifest) => FileTree::from_manifest(&manifest),
        Err(err) => {
            log::warn!("demo manifest failed to decode: {err}");
            FileTree::new("root")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_tree_matches_manifest() {
        let tree = demo_tree();
        assert_eq!(tree.child_names(), vec!["projects", "blog", "games"]);
    }
}
