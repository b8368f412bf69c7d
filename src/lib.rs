pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod heuristic;
pub mod layouts;
pub mod trie;
// cmd and reports are binary modules (see main.rs).

pub use crate::api::{JumpOutcome, JumpSession};
pub use crate::geometry::KeyboardLayout;
pub use crate::layouts::LayoutSet;
pub use crate::trie::{FrozenNode, LabelTrie, TrieParams};
