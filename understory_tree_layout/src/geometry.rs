// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure helpers over computed layouts and outlines.

use alloc::vec::Vec;

use kurbo::Rect;
use smallvec::SmallVec;
use understory_outline::{NodeIndex, Outline};

use crate::layout::{Layout, Position};

/// Axis-aligned extent of a whole diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Smallest left edge.
    pub min_x: f64,
    /// Smallest top edge.
    pub min_y: f64,
    /// Largest right edge.
    pub max_x: f64,
    /// Largest bottom edge.
    pub max_y: f64,
    /// `max_x - min_x`.
    pub width: f64,
    /// `max_y - min_y`.
    pub height: f64,
}

impl BoundingBox {
    /// Builds a bounding box from a rectangle with `x0 <= x1` and `y0 <= y1`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            min_x: rect.x0,
            min_y: rect.y0,
            max_x: rect.x1,
            max_y: rect.y1,
            width: rect.x1 - rect.x0,
            height: rect.y1 - rect.y0,
        }
    }

    /// The same extent as a [`Rect`].
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        bbox.rect()
    }
}

/// Every position of `layout` in pre-order (root first, depth first).
#[must_use]
pub fn flatten_positions<'a>(layout: &'a Layout<'a>) -> Vec<Position<'a>> {
    layout.iter().collect()
}

/// Extent of all node boxes in `layout`.
///
/// For a single node this is exactly that node's box.
#[must_use]
pub fn bounding_box(layout: &Layout<'_>) -> BoundingBox {
    let mut positions = layout.iter();
    // Every layout has at least its root.
    let first = positions.next().map_or(Rect::ZERO, |p| p.rect());
    let rect = positions.fold(first, |acc, p| acc.union(p.rect()));
    BoundingBox::from_rect(rect)
}

/// Number of nodes in the subtree rooted at `node`, `node` included.
///
/// Returns `0` if `node` is not part of `outline`.
#[must_use]
pub fn count_nodes(outline: &Outline, node: NodeIndex) -> usize {
    outline.depth_first_from(node).count()
}

/// Largest number of edges between `node` and any of its descendants.
///
/// A leaf has depth `0`, a node with only leaf children has depth `1`.
#[must_use]
pub fn max_depth(outline: &Outline, node: NodeIndex) -> usize {
    max_depth_from(outline, node, 0)
}

/// Like [`max_depth`], counting `node` itself as being at `current_depth`.
///
/// An out-of-range `node` counts as a leaf and yields `current_depth`, while
/// [`count_nodes`] reports `0` for it.
#[must_use]
pub fn max_depth_from(outline: &Outline, node: NodeIndex, current_depth: usize) -> usize {
    if outline.get(node).is_none() {
        return current_depth;
    }
    let mut deepest = current_depth;
    let mut pending: SmallVec<[(NodeIndex, usize); 16]> = SmallVec::new();
    pending.push((node, current_depth));
    while let Some((idx, depth)) = pending.pop() {
        deepest = deepest.max(depth);
        pending.extend(outline.children_of(idx).iter().map(|&c| (c, depth + 1)));
    }
    deepest
}
