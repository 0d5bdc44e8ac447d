//! Arena-backed file tree with a current-directory cursor.
//!
//! Nodes live in a flat `Vec` and refer to each other by [`NodeId`], so the
//! parent back-edge is a plain index rather than an owning reference. The
//! root is always id 0. Trees are built once at startup (either by explicit
//! [`FileTree::add_child`] calls or from a [`Manifest`]); there is no
//! deletion or rename.

use thiserror::Error;

use crate::models::Manifest;

// =============================================================================
// Node Types
// =============================================================================

/// Index of a node in the tree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node is always the first arena entry.
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0
    }
}

/// The kind of a tree node.
///
/// Only directories can be navigated into; documents and games are leaf
/// content opened by `read` and `play`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    Document,
    Game,
}

impl NodeKind {
    pub fn is_directory(self) -> bool {
        matches!(self, NodeKind::Directory)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Directory => write!(f, "directory"),
            NodeKind::Document => write!(f, "document"),
            NodeKind::Game => write!(f, "game"),
        }
    }
}

/// A single node in the tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

// =============================================================================
// Errors
// =============================================================================

/// A child insert collided with an existing sibling name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("a sibling named '{name}' already exists")]
pub struct DuplicateName {
    pub name: String,
}

/// A navigation attempt failed; the cursor is unchanged.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// A segment named a child that does not exist, or `..` was used at root.
    #[error("no such path")]
    NoSuchPath,
    /// A segment named an existing child that cannot be descended into.
    #[error("'{0}' is not a directory")]
    NotADirectory(String),
}

// =============================================================================
// FileTree
// =============================================================================

/// The owning container for the node hierarchy plus the cursor.
///
/// The cursor is the tree's notion of "current directory". It always points
/// at a directory node reachable from root and only moves on successful
/// [`FileTree::navigate_to`] calls.
#[derive(Clone, Debug)]
pub struct FileTree {
    nodes: Vec<Node>,
    cursor: NodeId,
}

impl FileTree {
    /// Create a tree containing only a directory root, cursor at root.
    pub fn new(root_name: impl Into<String>) -> Self {
        let root = Node {
            name: root_name.into(),
            kind: NodeKind::Directory,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            cursor: NodeId::ROOT,
        }
    }

    /// Build a tree from a manifest of slash-separated paths.
    ///
    /// Intermediate directories are created on demand. Entries that collide
    /// with an existing sibling, or whose path runs through a non-directory,
    /// are skipped with a logged warning; the rest of the manifest is still
    /// applied.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut tree = Self::new(manifest.root.as_str());

        'entries: for entry in &manifest.entries {
            let segments: Vec<&str> = entry.path.split('/').filter(|s| !s.is_empty()).collect();
            let Some((leaf, dirs)) = segments.split_last() else {
                log::warn!("manifest entry with empty path skipped");
                continue;
            };

            let mut parent = NodeId::ROOT;
            for dir in dirs {
                parent = match tree.find_child(parent, dir) {
                    Some(id) if tree.nodes[id.index()].kind.is_directory() => id,
                    Some(_) => {
                        log::warn!("manifest entry '{}' blocked by non-directory '{dir}'", entry.path);
                        continue 'entries;
                    }
                    None => tree.insert_node(parent, dir, NodeKind::Directory),
                };
            }

            if tree.find_child(parent, leaf).is_some() {
                log::warn!("manifest entry '{}' duplicates an existing node", entry.path);
            } else {
                tree.insert_node(parent, leaf, entry.kind);
            }
        }

        tree
    }

    // -- Construction --

    /// Create a new child of the given kind under the cursor node.
    ///
    /// Sibling names are unique: on a collision the tree is left unchanged,
    /// a warning is logged, and `Err` is returned.
    pub fn add_child(&mut self, name: &str, kind: NodeKind) -> Result<NodeId, DuplicateName> {
        if self.find_child(self.cursor, name).is_some() {
            log::warn!(
                "child '{name}' already exists under '{}', add_child skipped",
                self.current_dir_name()
            );
            return Err(DuplicateName { name: name.to_string() });
        }
        Ok(self.insert_node(self.cursor, name, kind))
    }

    fn insert_node(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_string(),
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    // -- Navigation --

    /// Resolve a `/`-separated path relative to the cursor and move there.
    ///
    /// Each segment is `..` (to parent), `.` (stay), or a child name to
    /// descend into. Resolution is transactional: the cursor is updated only
    /// if every segment resolves, so a failure partway through a path never
    /// strands the cursor at an intermediate node.
    pub fn navigate_to(&mut self, path: &str) -> Result<(), NavError> {
        let mut current = self.cursor;
        for segment in path.split('/') {
            match segment {
                ".." => {
                    current = self.nodes[current.index()]
                        .parent
                        .ok_or(NavError::NoSuchPath)?;
                }
                "." => {}
                name => {
                    let child = self
                        .find_child(current, name)
                        .ok_or(NavError::NoSuchPath)?;
                    if !self.nodes[child.index()].kind.is_directory() {
                        return Err(NavError::NotADirectory(name.to_string()));
                    }
                    current = child;
                }
            }
        }
        self.cursor = current;
        Ok(())
    }

    // -- Lookup --

    fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.index()]
            .children
            .iter()
            .copied()
            .find(|id| self.nodes[id.index()].name == name)
    }

    /// The ordered direct children of the cursor node.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.nodes[self.cursor.index()]
            .children
            .iter()
            .map(|id| &self.nodes[id.index()])
    }

    /// The names of the cursor node's children, in insertion order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children().map(|n| n.name.as_str()).collect()
    }

    /// Exact (case-sensitive) name lookup under the cursor node.
    pub fn child_by_name(&self, name: &str) -> Option<&Node> {
        self.find_child(self.cursor, name)
            .map(|id| &self.nodes[id.index()])
    }

    /// The ordered subsequence of cursor children with the given kind.
    pub fn children_of_kind(&self, kind: NodeKind) -> Vec<&Node> {
        self.children().filter(|n| n.kind == kind).collect()
    }

    /// The name of the cursor node itself.
    pub fn current_dir_name(&self) -> &str {
        &self.nodes[self.cursor.index()].name
    }

    /// `/`-joined names from root to the cursor, root name first.
    pub fn full_path_name(&self) -> String {
        let mut names = Vec::new();
        let mut current = Some(self.cursor);
        while let Some(id) = current {
            let node = &self.nodes[id.index()];
            names.push(node.name.as_str());
            current = node.parent;
        }
        names.reverse();
        names.join("/")
    }
}

// =============================================================================
// Tests
// =============================================================================
