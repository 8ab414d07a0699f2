// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tree_layout --heading-base-level=0

//! Understory Tree Layout: deterministic left-to-right tree diagrams.
//!
//! Understory Tree Layout places every node of an [`understory_outline::Outline`] on a 2D
//! canvas so the tree reads left to right: the root on the left, each level a fixed
//! distance further right, siblings stacked top to bottom in document order.
//!
//! - Parents are vertically centered on the span of their children.
//! - Consecutive sibling subtrees never overlap; the vertical gap between them is exactly
//!   [`SIBLING_GAP`] (or [`LayoutConfig::sibling_gap`]).
//! - Node boxes are [`NODE_HEIGHT`] tall and wide enough for their label, but never
//!   narrower than [`MIN_NODE_WIDTH`].
//!
//! The output is a [`Layout`]: a borrowed view of the outline with one [`kurbo::Rect`] per
//! node. Walk it as a tree of [`Position`]s starting from [`Layout::root`], or in
//! pre-order with [`flatten_positions`]. [`bounding_box`] gives the extent of the whole
//! diagram, for example to fit it into a viewport.
//!
//! ## Not a renderer
//!
//! This crate produces geometry only. Drawing, pan and zoom, and hit testing policies
//! belong to the host; [`Layout::node_at`] is provided as a simple building block.
//!
//! ## Example
//!
//! ```rust
//! use understory_outline::parse_outline;
//! use understory_tree_layout::{bounding_box, compute_layout, count_nodes, max_depth};
//!
//! let outline = parse_outline(
//!     "Root Node\n  Child 1\n    Grandchild 1\n    Grandchild 2\n  Child 2\n  Child 3",
//! );
//! assert_eq!(count_nodes(&outline, outline.root()), 6);
//! assert_eq!(max_depth(&outline, outline.root()), 2);
//!
//! let layout = compute_layout(&outline);
//! let root = layout.root();
//! assert_eq!(root.children().len(), 3);
//!
//! let bbox = bounding_box(&layout);
//! assert_eq!((bbox.min_x, bbox.min_y), (0.0, 0.0));
//! assert_eq!(bbox.height, 220.0);
//! ```
//!
//! Spacing is tunable through [`LayoutConfig`]:
//!
//! ```rust
//! use kurbo::Point;
//! use understory_outline::parse_outline;
//! use understory_tree_layout::{LayoutConfig, compute_layout_with};
//!
//! let outline = parse_outline("a\n  b\n  c");
//! let config = LayoutConfig {
//!     level_gap: 200.0,
//!     sibling_gap: 10.0,
//!     origin: Point::new(16.0, 16.0),
//!     ..LayoutConfig::default()
//! };
//! let layout = compute_layout_with(&outline, &config);
//! let c = layout.root().children().last().unwrap();
//! assert_eq!((c.x(), c.y()), (216.0, 66.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod geometry;
mod layout;

pub use config::{
    CHAR_WIDTH, LEVEL_GAP, LayoutConfig, MIN_NODE_WIDTH, NODE_HEIGHT, NODE_PADDING, SIBLING_GAP,
};
pub use geometry::{
    BoundingBox, bounding_box, count_nodes, flatten_positions, max_depth, max_depth_from,
};
pub use layout::{Layout, Position, compute_layout, compute_layout_with};
