// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_outline --heading-base-level=0

//! Understory Outline: indentation-structured text as a rooted tree.
//!
//! Understory Outline turns a plain-text outline, one item per line and two spaces of
//! indentation per level, into an immutable [`Outline`] tree, and renders such a tree
//! back into the same text format.
//!
//! - [`parse_outline`] never fails. Inconsistent indentation degrades into some valid
//!   tree, and a document without content yields a lone [`EMPTY_OUTLINE_TEXT`] root.
//! - [`outline_to_text`] is its inverse: re-parsing the output reproduces the same shape
//!   and text.
//! - Every node carries an opaque [`NodeId`] minted by an [`IdSource`].
//!
//! ## Where this fits
//!
//! The outline is the document model of a tree diagram. Geometry lives elsewhere:
//! `understory_tree_layout` computes a left-to-right diagram layout from an [`Outline`],
//! and renderers draw from that. Persistence and sharing are expected to store the raw
//! text rather than the tree.
//!
//! ## Parsing rules
//!
//! - Blank and whitespace-only lines are skipped entirely.
//! - A line's level is its count of leading whitespace characters divided by
//!   [`INDENT_WIDTH`], rounded down (so three spaces is level 1).
//! - The first non-blank line is the root regardless of its own indentation.
//! - Each following line becomes the last child of the nearest open ancestor with a
//!   strictly smaller level; equal or shallower levels backtrack. The root is never
//!   backtracked past.
//!
//! ## Example
//!
//! ```rust
//! use understory_outline::{outline_to_text, parse_outline};
//!
//! let text = "Root Node\n  Child 1\n    Grandchild 1\n    Grandchild 2\n  Child 2\n  Child 3";
//! let outline = parse_outline(text);
//!
//! let root = &outline[outline.root()];
//! assert_eq!(root.text(), "Root Node");
//! let children: Vec<&str> = root
//!     .children()
//!     .iter()
//!     .map(|&child| outline[child].text())
//!     .collect();
//! assert_eq!(children, ["Child 1", "Child 2", "Child 3"]);
//! assert_eq!(outline.node_count(), 6);
//!
//! // Serializing and re-parsing keeps shape and text; identifiers are fresh.
//! let again = parse_outline(&outline_to_text(&outline));
//! assert!(outline.same_shape(&again));
//! assert_ne!(outline[outline.root()].id(), again[again.root()].id());
//! ```
//!
//! ## Storage
//!
//! Nodes live in a flat arena addressed by [`NodeIndex`]; children are index lists and
//! there are no parent links. Parsing, serialization, and traversal use explicit stacks,
//! so thousands of nesting levels are handled without deep recursion.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod ids;
mod outline;
mod parse;
mod serialize;
mod types;

pub use ids::{IdSource, SequentialIds, SessionIds};
pub use outline::{DepthFirst, Outline, OutlineBuilder, OutlineNode, is_valid_label};
pub use parse::{EMPTY_OUTLINE_TEXT, INDENT_WIDTH, parse_outline, parse_outline_with};
pub use serialize::{outline_to_text, subtree_to_text, write_subtree};
pub use types::{NodeFlags, NodeId, NodeIndex};
