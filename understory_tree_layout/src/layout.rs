// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core layout implementation: placement pass and position views.

use alloc::{vec, vec::Vec};
use core::fmt;

use kurbo::{Point, Rect};
use understory_outline::{NodeIndex, Outline, OutlineNode};

use crate::config::LayoutConfig;
use crate::geometry::BoundingBox;

/// Computed geometry for every node of an [`Outline`].
///
/// A `Layout` borrows the outline it was computed from and stores one box per node,
/// indexed like the outline's arena. It is never updated in place: lay out again after
/// building a new outline.
///
/// ## Example
///
/// ```rust
/// use kurbo::Rect;
/// use understory_outline::parse_outline;
/// use understory_tree_layout::compute_layout;
///
/// let outline = parse_outline("Root\n  A\n  B");
/// let layout = compute_layout(&outline);
///
/// let root = layout.root();
/// let [a, b] = [0, 1].map(|i| root.children().nth(i).unwrap());
/// assert_eq!(a.rect(), Rect::new(150.0, 0.0, 250.0, 40.0));
/// assert_eq!(b.rect(), Rect::new(150.0, 60.0, 250.0, 100.0));
/// // The parent is centered on the span of its children.
/// assert_eq!(root.rect(), Rect::new(0.0, 30.0, 100.0, 70.0));
/// ```
pub struct Layout<'a> {
    outline: &'a Outline,
    rects: Vec<Rect>,
    /// Union of each node's box with the boxes of all its descendants.
    subtree_bounds: Vec<Rect>,
}

impl fmt::Debug for Layout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("nodes", &self.rects.len())
            .field("bounds", &self.subtree_bounds.first())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    node: NodeIndex,
    x: f64,
    start_y: f64,
    /// Top of the next child subtree.
    cursor: f64,
    next_child: usize,
}

impl Frame {
    fn new(node: NodeIndex, x: f64, start_y: f64) -> Self {
        Self {
            node,
            x,
            start_y,
            cursor: start_y,
            next_child: 0,
        }
    }
}

/// Lay out `outline` with [`LayoutConfig::default`].
#[must_use]
pub fn compute_layout(outline: &Outline) -> Layout<'_> {
    compute_layout_with(outline, &LayoutConfig::default())
}

/// Lay out `outline` as a left-to-right tree diagram.
///
/// Nodes are placed in post-order:
/// - Each level sits `level_gap` to the right of its parent.
/// - Children are stacked top to bottom in document order. The first child subtree
///   starts at its parent's starting cursor and each following one starts
///   `sibling_gap` below the bottom of the previous subtree.
/// - A leaf sits at its starting cursor. A parent is vertically centered on the span
///   from its first child's top edge to the bottom of its last child's subtree.
///
/// The pass keeps its own stack, so its cost is linear in the node count regardless
/// of depth.
#[must_use]
pub fn compute_layout_with<'a>(outline: &'a Outline, config: &LayoutConfig) -> Layout<'a> {
    let count = outline.node_count();
    let mut rects = vec![Rect::ZERO; count];
    let mut subtree_bounds = vec![Rect::ZERO; count];

    let mut stack: Vec<Frame> = vec![Frame::new(
        outline.root(),
        config.origin.x,
        config.origin.y,
    )];

    while let Some(top) = stack.last_mut() {
        let node = &outline[top.node];
        if let Some(&child) = node.children().get(top.next_child) {
            top.next_child += 1;
            let frame = Frame::new(child, top.x + config.level_gap, top.cursor);
            stack.push(frame);
            continue;
        }

        let Some(frame) = stack.pop() else {
            unreachable!("the stack was just observed to be non-empty");
        };
        let size = config.node_size(node.text());
        let y = match (node.children().first(), node.children().last()) {
            (Some(&first), Some(&last)) => {
                let top = rects[first.get()].y0;
                let bottom = subtree_bounds[last.get()].y1;
                (top + bottom) / 2.0 - size.height / 2.0
            }
            _ => frame.start_y,
        };
        let rect = Rect::from_origin_size((frame.x, y), size);
        let bounds = node
            .children()
            .iter()
            .map(|c| subtree_bounds[c.get()])
            .fold(rect, |acc, child| acc.union(child));
        rects[frame.node.get()] = rect;
        subtree_bounds[frame.node.get()] = bounds;

        if let Some(parent) = stack.last_mut() {
            parent.cursor = bounds.y1 + config.sibling_gap;
        }
    }

    Layout {
        outline,
        rects,
        subtree_bounds,
    }
}

impl<'a> Layout<'a> {
    /// The outline this layout was computed from.
    #[must_use]
    pub fn outline(&self) -> &'a Outline {
        self.outline
    }

    /// Position of the root node.
    #[must_use]
    pub fn root(&self) -> Position<'_> {
        Position {
            layout: self,
            node: self.outline.root(),
        }
    }

    /// Position of `node`, or `None` if `node` is out of range for the outline.
    #[must_use]
    pub fn position(&self, node: NodeIndex) -> Option<Position<'_>> {
        self.rects.get(node.get()).map(|_| Position { layout: self, node })
    }

    /// Box of `node`, or `None` if `node` is out of range for the outline.
    #[must_use]
    pub fn rect(&self, node: NodeIndex) -> Option<Rect> {
        self.rects.get(node.get()).copied()
    }

    /// Pre-order iterator over all positions, root first.
    pub fn iter(&self) -> impl Iterator<Item = Position<'_>> + '_ {
        self.outline
            .depth_first()
            .map(move |node| Position { layout: self, node })
    }

    /// Bounding box of the whole diagram, see [`bounding_box`](crate::bounding_box).
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        crate::geometry::bounding_box(self)
    }

    /// Returns the first node in document order whose box contains `point`.
    ///
    /// Containment follows [`Rect::contains`]. Long labels can make a box reach into
    /// the next column; where boxes overlap, the node earlier in pre-order wins.
    #[must_use]
    pub fn node_at(&self, point: Point) -> Option<NodeIndex> {
        let mut pending: Vec<NodeIndex> = vec![self.outline.root()];
        while let Some(node) = pending.pop() {
            // Subtree bounds cover every descendant, so whole subtrees can be skipped.
            if !self.subtree_bounds[node.get()].contains(point) {
                continue;
            }
            if self.rects[node.get()].contains(point) {
                return Some(node);
            }
            pending.extend(self.outline.children_of(node).iter().rev().copied());
        }
        None
    }
}

/// A node paired with its computed box.
///
/// Positions form a tree mirroring the outline: [`Position::children`] yields exactly
/// one position per child node, in document order.
#[derive(Clone, Copy)]
pub struct Position<'a> {
    layout: &'a Layout<'a>,
    node: NodeIndex,
}

impl fmt::Debug for Position<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("node", &self.node)
            .field("rect", &self.rect())
            .finish_non_exhaustive()
    }
}

impl<'a> Position<'a> {
    /// Handle of the positioned node.
    #[must_use]
    pub fn index(&self) -> NodeIndex {
        self.node
    }

    /// The positioned node.
    #[must_use]
    pub fn node(&self) -> &'a OutlineNode {
        &self.layout.outline[self.node]
    }

    /// The node's box.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.layout.rects[self.node.get()]
    }

    /// Left edge.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.rect().x0
    }

    /// Top edge.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.rect().y0
    }

    /// Box width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect().width()
    }

    /// Box height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect().height()
    }

    /// Positions of the children, in document order.
    pub fn children(self) -> impl ExactSizeIterator<Item = Self> + 'a {
        let layout = self.layout;
        self.node()
            .children()
            .iter()
            .map(move |&node| Self { layout, node })
    }

    /// Vertical extent from this node's top edge to the bottom of its last child's subtree.
    ///
    /// For a leaf this is its own height.
    #[must_use]
    pub fn subtree_height(&self) -> f64 {
        self.layout.subtree_bounds[self.node.get()].y1 - self.y()
    }

    /// Smallest rectangle containing this node and all of its descendants.
    #[must_use]
    pub fn subtree_bounds(&self) -> Rect {
        self.layout.subtree_bounds[self.node.get()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LEVEL_GAP, NODE_HEIGHT, SIBLING_GAP};
    use alloc::{string::String, vec::Vec};
    use understory_outline::parse_outline;

    const SAMPLE: &str =
        "Root Node\n  Child 1\n    Grandchild 1\n    Grandchild 2\n  Child 2\n  Child 3";

    fn child(pos: Position<'_>, i: usize) -> Position<'_> {
        pos.children().nth(i).unwrap()
    }

    #[test]
    fn single_node_sits_at_origin() {
        let outline = parse_outline("Hello");
        let layout = compute_layout(&outline);
        let root = layout.root();
        assert_eq!(root.rect(), Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(root.subtree_height(), NODE_HEIGHT);
        assert_eq!(root.children().len(), 0);
    }

    #[test]
    fn sample_coordinates() {
        let outline = parse_outline(SAMPLE);
        let layout = compute_layout(&outline);
        let root = layout.root();
        let c1 = child(root, 0);
        let (g1, g2) = (child(c1, 0), child(c1, 1));
        let (c2, c3) = (child(root, 1), child(root, 2));

        // "Grandchild 1" is 12 characters: 12 * 8 + 40 = 136 wide.
        assert_eq!(g1.rect(), Rect::new(300.0, 0.0, 436.0, 40.0));
        assert_eq!(g2.rect(), Rect::new(300.0, 60.0, 436.0, 100.0));
        // Child 1 is centered on its children: (0 + 100) / 2 - 20.
        assert_eq!(c1.rect(), Rect::new(150.0, 30.0, 250.0, 70.0));
        assert_eq!(c1.subtree_height(), 70.0);
        assert_eq!(c1.subtree_bounds(), Rect::new(150.0, 0.0, 436.0, 100.0));
        assert_eq!(c2.y(), 120.0);
        assert_eq!(c3.y(), 180.0);
        // Root is centered between Child 1's top (30) and Child 3's bottom (220).
        assert_eq!(root.rect(), Rect::new(0.0, 105.0, 112.0, 145.0));
        assert_eq!(root.subtree_height(), 115.0);
        assert_eq!(root.subtree_bounds(), Rect::new(0.0, 0.0, 436.0, 220.0));
    }

    #[test]
    fn positions_mirror_the_outline() {
        let outline = parse_outline(SAMPLE);
        let layout = compute_layout(&outline);
        for pos in layout.iter() {
            assert_eq!(pos.children().len(), pos.node().children().len());
            for (p, &n) in pos.children().zip(pos.node().children()) {
                assert_eq!(p.index(), n);
                assert_eq!(p.node().text(), outline[n].text());
                assert_eq!(p.x(), pos.x() + LEVEL_GAP);
            }
        }
    }

    #[test]
    fn sibling_subtrees_are_separated_by_gap() {
        let outline = parse_outline(
            "r\n  a\n    a1\n      a11\n      a12\n    a2\n  b\n    b1\n    b2\n    b3\n  c\n  d\n    d1",
        );
        let layout = compute_layout(&outline);
        for pos in layout.iter() {
            let kids: Vec<Position<'_>> = pos.children().collect();
            for pair in kids.windows(2) {
                let gap = pair[1].subtree_bounds().y0 - pair[0].subtree_bounds().y1;
                assert_eq!(gap, SIBLING_GAP, "between {:?} and {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn node_boxes_never_overlap() {
        let outline = parse_outline(
            "r\n  a\n    a1\n      a11\n      a12\n      a13\n  b\n    b1\n      b11\n  c\n    c1\n    c2",
        );
        let layout = compute_layout(&outline);
        let rects: Vec<Rect> = layout.iter().map(|p| p.rect()).collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                let overlap = a.intersect(*b);
                assert!(
                    overlap.width() <= 0.0 || overlap.height() <= 0.0,
                    "{a:?} overlaps {b:?}"
                );
            }
        }
    }

    #[test]
    fn parents_are_centered_on_children() {
        let outline = parse_outline(SAMPLE);
        let layout = compute_layout(&outline);
        for pos in layout.iter().filter(|p| p.children().len() > 0) {
            let first = pos.children().next().unwrap();
            let last = pos.children().last().unwrap();
            let span_bottom = last.y() + last.subtree_height();
            let center = (first.y() + span_bottom) / 2.0;
            assert_eq!(pos.y() + pos.height() / 2.0, center);
        }
    }

    #[test]
    fn origin_offsets_everything() {
        let outline = parse_outline(SAMPLE);
        let plain = compute_layout(&outline);
        let config = LayoutConfig {
            origin: Point::new(-50.0, 10.0),
            ..LayoutConfig::default()
        };
        let moved = compute_layout_with(&outline, &config);
        for (a, b) in plain.iter().zip(moved.iter()) {
            assert_eq!(a.rect() + kurbo::Vec2::new(-50.0, 10.0), b.rect());
        }
    }

    #[test]
    fn node_at_finds_boxes() {
        let outline = parse_outline(SAMPLE);
        let layout = compute_layout(&outline);
        let c2 = child(layout.root(), 1);
        assert_eq!(layout.node_at(Point::new(200.0, 130.0)), Some(c2.index()));
        assert_eq!(layout.node_at(Point::new(10.0, 120.0)), Some(outline.root()));
        // Between two stacked siblings.
        assert_eq!(layout.node_at(Point::new(200.0, 110.0)), None);
        assert_eq!(layout.node_at(Point::new(-1.0, 0.0)), None);
    }

    #[test]
    fn lookups_reject_out_of_range_handles() {
        let big = parse_outline(SAMPLE);
        let small = parse_outline("alone\n  leaf");
        let layout = compute_layout(&small);
        let foreign = big.children_of(big.root())[2];
        assert!(layout.position(foreign).is_none());
        assert!(layout.rect(foreign).is_none());
        assert!(layout.position(small.root()).is_some());

        // Handles are plain indices: an in-range handle from another outline resolves.
        let borrowed = big.children_of(big.root())[0];
        assert_eq!(borrowed.get(), 1);
        assert_eq!(layout.rect(borrowed), layout.rect(small.children_of(small.root())[0]));
    }

    #[test]
    fn deep_outline_lays_out_iteratively() {
        let depth = 2_000;
        let mut text = String::new();
        for level in 0..depth {
            for _ in 0..level * 2 {
                text.push(' ');
            }
            text.push_str("n\n");
        }
        let outline = parse_outline(&text);
        let layout = compute_layout(&outline);
        let mut pos = layout.root();
        let mut levels = 0;
        while let Some(next) = pos.children().next() {
            assert_eq!(next.y(), 0.0, "a single chain stays on one row");
            pos = next;
            levels += 1;
        }
        assert_eq!(levels, depth - 1);
        #[allow(clippy::cast_precision_loss, reason = "Small test depth.")]
        let expected_x = (depth - 1) as f64 * LEVEL_GAP;
        assert_eq!(pos.x(), expected_x);
    }
}
