//! Data models shared across the crate.
//!
//! - [`OutputLine`] - the text-output contract with display collaborators
//! - [`Manifest`], [`ManifestEntry`] - the compiled-in demo tree description

mod manifest;
mod terminal;

pub use manifest::{Manifest, ManifestEntry};
pub use terminal::OutputLine;
