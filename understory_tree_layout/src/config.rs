// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout constants and the tunable [`LayoutConfig`].

use kurbo::{Point, Size};

/// Height of every node box.
pub const NODE_HEIGHT: f64 = 40.0;
/// Horizontal padding on each side of a node's label.
pub const NODE_PADDING: f64 = 20.0;
/// Horizontal distance between a node's left edge and its children's left edges.
pub const LEVEL_GAP: f64 = 150.0;
/// Vertical gap between adjacent sibling subtrees.
pub const SIBLING_GAP: f64 = 20.0;
/// Lower bound on a node's width.
pub const MIN_NODE_WIDTH: f64 = 100.0;
/// Estimated advance of one label character.
pub const CHAR_WIDTH: f64 = 8.0;

/// Parameters of the tree layout.
///
/// [`LayoutConfig::default`] uses the module constants and places the root at the origin.
/// All values are in the same logical units and are expected to be finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// See [`NODE_HEIGHT`].
    pub node_height: f64,
    /// See [`NODE_PADDING`].
    pub node_padding: f64,
    /// See [`LEVEL_GAP`].
    pub level_gap: f64,
    /// See [`SIBLING_GAP`].
    pub sibling_gap: f64,
    /// See [`MIN_NODE_WIDTH`].
    pub min_node_width: f64,
    /// See [`CHAR_WIDTH`].
    pub char_width: f64,
    /// Left edge of the root and top edge of the whole diagram.
    pub origin: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_height: NODE_HEIGHT,
            node_padding: NODE_PADDING,
            level_gap: LEVEL_GAP,
            sibling_gap: SIBLING_GAP,
            min_node_width: MIN_NODE_WIDTH,
            char_width: CHAR_WIDTH,
            origin: Point::ORIGIN,
        }
    }
}

impl LayoutConfig {
    /// Size of the box for a node labelled `text`.
    ///
    /// The width is `max(min_node_width, chars * char_width + 2 * node_padding)`,
    /// counting Unicode scalar values; the height is always `node_height`.
    #[must_use]
    pub fn node_size(&self, text: &str) -> Size {
        #[allow(
            clippy::cast_precision_loss,
            reason = "Label lengths are far below 2^52 characters."
        )]
        let chars = text.chars().count() as f64;
        let width = (chars * self.char_width + 2.0 * self.node_padding).max(self.min_node_width);
        Size::new(width, self.node_height)
    }
}
