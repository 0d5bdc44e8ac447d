//! Manifest types for the compiled-in demo tree.
//!
//! The fixed hierarchy shipped with the shell is described as JSON and
//! decoded into these types at startup; see `FileTree::from_manifest`.

use serde::{Deserialize, Serialize};

use crate::core::NodeKind;

/// Root manifest structure.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Manifest {
    /// Name of the tree's root directory.
    pub root: String,
    /// Nodes to create, in order.
    pub entries: Vec<ManifestEntry>,
}

/// One node in the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ManifestEntry {
    /// Slash-separated path relative to the root, e.g. `blog/test.blog`.
    /// Intermediate directories are created implicitly.
    pub path: String,
    pub kind: NodeKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_decodes() {
        let json = r#"{
            "root": "root",
            "entries": [
                { "path": "blog", "kind": "directory" },
                { "path": "blog/test.blog", "kind": "document" },
                { "path": "games/test.game", "kind": "game" }
            ]
        }"#;
        let manifest: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.root, "root");
        assert_eq!(manifest.entries.len(), 3);
        assert_eq!(manifest.entries[1].kind, NodeKind::Document);
        assert_eq!(manifest.entries[2].path, "games/test.game");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{ "root": "root", "entries": [ { "path": "x", "kind": "socket" } ] }"#;
        assert!(serde_json::from_str::<Manifest>(json).is_err());
    }
}
