// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core outline implementation: arena storage, construction, traversal.

use alloc::{string::String, vec, vec::Vec};
use core::ops::Index;

use smallvec::SmallVec;

use crate::ids::{IdSource, SessionIds};
use crate::types::{NodeFlags, NodeId, NodeIndex};

/// A single node of an [`Outline`].
#[derive(Clone, Debug)]
pub struct OutlineNode {
    id: NodeId,
    text: String,
    flags: NodeFlags,
    source_line: Option<usize>,
    children: Vec<NodeIndex>,
}

impl OutlineNode {
    fn new(id: NodeId, text: String) -> Self {
        Self {
            id,
            text,
            flags: NodeFlags::empty(),
            source_line: None,
            children: Vec::new(),
        }
    }

    /// Identifier minted for this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display label: non-empty, a single line, no surrounding whitespace.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Presentation hints.
    #[must_use]
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// Shorthand for `flags().contains(NodeFlags::COLLAPSED)`.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.flags.contains(NodeFlags::COLLAPSED)
    }

    /// 1-based line of the source text this node was parsed from.
    ///
    /// `None` for the placeholder root of an empty document and for nodes
    /// created through an [`OutlineBuilder`].
    #[must_use]
    pub fn source_line(&self) -> Option<usize> {
        self.source_line
    }

    /// Children in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }
}

/// A rooted, ordered tree of text nodes.
///
/// Nodes live in a flat arena and refer to their children by [`NodeIndex`];
/// there are no parent links. An `Outline` always has at least its root and
/// is immutable once built, so it can be shared freely between readers.
///
/// ## Example
///
/// ```rust
/// use understory_outline::OutlineBuilder;
///
/// let mut builder = OutlineBuilder::new("Plan");
/// let root = builder.root();
/// let design = builder.push_child(root, "Design");
/// builder.push_child(design, "Sketches");
/// builder.push_child(root, "Build");
/// let outline = builder.build();
///
/// assert_eq!(outline.node_count(), 4);
/// let texts: Vec<&str> = outline
///     .depth_first()
///     .map(|idx| outline[idx].text())
///     .collect();
/// assert_eq!(texts, ["Plan", "Design", "Sketches", "Build"]);
/// ```
#[derive(Clone, Debug)]
pub struct Outline {
    nodes: Vec<OutlineNode>,
}

impl Outline {
    /// Handle of the root node of every outline.
    pub const ROOT: NodeIndex = NodeIndex(0);

    /// Returns the root handle.
    #[must_use]
    pub fn root(&self) -> NodeIndex {
        Self::ROOT
    }

    /// Returns the node behind `idx`, or `None` if `idx` is out of range.
    #[must_use]
    pub fn get(&self, idx: NodeIndex) -> Option<&OutlineNode> {
        self.nodes.get(idx.get())
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Children of `idx` in document order, or an empty slice if `idx` is out of range.
    #[must_use]
    pub fn children_of(&self, idx: NodeIndex) -> &[NodeIndex] {
        match self.get(idx) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Finds the node carrying `id`.
    #[must_use]
    pub fn find(&self, id: NodeId) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .position(|node| node.id == id)
            .map(NodeIndex::new)
    }

    /// Pre-order traversal of the whole outline, root first.
    pub fn depth_first(&self) -> DepthFirst<'_> {
        self.depth_first_from(Self::ROOT)
    }

    /// Pre-order traversal of the subtree rooted at `idx`.
    ///
    /// Yields nothing if `idx` is out of range.
    pub fn depth_first_from(&self, idx: NodeIndex) -> DepthFirst<'_> {
        let mut stack = SmallVec::new();
        if self.get(idx).is_some() {
            stack.push(idx);
        }
        DepthFirst {
            outline: self,
            stack,
        }
    }

    /// Returns `true` if both outlines have the same shape and the same text at
    /// every position. Identifiers, flags, and source lines are ignored.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        let mut pending: SmallVec<[(NodeIndex, NodeIndex); 16]> =
            SmallVec::from_elem((Self::ROOT, Self::ROOT), 1);
        while let Some((a, b)) = pending.pop() {
            let (a, b) = (&self[a], &other[b]);
            if a.text != b.text || a.children.len() != b.children.len() {
                return false;
            }
            pending.extend(a.children.iter().copied().zip(b.children.iter().copied()));
        }
        true
    }
}

impl Index<NodeIndex> for Outline {
    type Output = OutlineNode;

    /// Panics if `idx` does not belong to this outline.
    fn index(&self, idx: NodeIndex) -> &OutlineNode {
        &self.nodes[idx.get()]
    }
}

/// Pre-order iterator over an [`Outline`], see [`Outline::depth_first`].
#[derive(Clone, Debug)]
pub struct DepthFirst<'a> {
    outline: &'a Outline,
    stack: SmallVec<[NodeIndex; 16]>,
}

impl Iterator for DepthFirst<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let idx = self.stack.pop()?;
        self.stack
            .extend(self.outline[idx].children.iter().rev().copied());
        Some(idx)
    }
}

/// Returns `true` if `text` can label an outline node.
///
/// A label is non-empty, contains no `\n`, and has no leading or trailing whitespace.
/// These are exactly the labels [`parse_outline`](crate::parse_outline) produces, so
/// any outline built from them survives [`outline_to_text`](crate::outline_to_text)
/// and re-parsing unchanged.
#[must_use]
pub fn is_valid_label(text: &str) -> bool {
    !text.is_empty() && !text.contains('\n') && text.trim() == text
}

/// Incremental constructor for an [`Outline`].
///
/// The builder starts with a root node. Children are appended after any existing
/// children of their parent, so building in document order reproduces document order.
/// Each node takes one identifier from the builder's [`IdSource`].
///
/// Every label must pass [`is_valid_label`]; normalize user input (for example with
/// [`str::trim`]) before handing it over.
#[derive(Debug)]
pub struct OutlineBuilder<S: IdSource = SessionIds> {
    ids: S,
    nodes: Vec<OutlineNode>,
}

impl OutlineBuilder {
    /// Creates a builder whose root has `root_text`, using [`SessionIds`].
    ///
    /// # Panics
    ///
    /// Panics if `root_text` is not a valid label, see [`is_valid_label`].
    pub fn new(root_text: impl Into<String>) -> Self {
        Self::with_ids(SessionIds, root_text)
    }
}

impl<S: IdSource> OutlineBuilder<S> {
    /// Creates a builder whose root has `root_text`, minting identifiers from `ids`.
    ///
    /// # Panics
    ///
    /// Panics if `root_text` is not a valid label, see [`is_valid_label`].
    pub fn with_ids(mut ids: S, root_text: impl Into<String>) -> Self {
        let root_text = root_text.into();
        assert!(
            is_valid_label(&root_text),
            "invalid outline label {root_text:?}"
        );
        let root = OutlineNode::new(ids.next_id(), root_text);
        Self {
            ids,
            nodes: vec![root],
        }
    }

    /// Returns the root handle.
    #[must_use]
    pub fn root(&self) -> NodeIndex {
        Outline::ROOT
    }

    /// Appends a new node with `text` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not returned by this builder, or if `text` is not a
    /// valid label (see [`is_valid_label`]).
    pub fn push_child(&mut self, parent: NodeIndex, text: impl Into<String>) -> NodeIndex {
        let text = text.into();
        assert!(is_valid_label(&text), "invalid outline label {text:?}");
        let idx = NodeIndex::new(self.nodes.len());
        let node = OutlineNode::new(self.ids.next_id(), text);
        self.nodes[parent.get()].children.push(idx);
        self.nodes.push(node);
        idx
    }

    /// Replaces the flags of `idx`. Out-of-range handles are ignored.
    pub fn set_flags(&mut self, idx: NodeIndex, flags: NodeFlags) {
        if let Some(node) = self.nodes.get_mut(idx.get()) {
            node.flags = flags;
        }
    }

    pub(crate) fn set_source_line(&mut self, idx: NodeIndex, line: usize) {
        if let Some(node) = self.nodes.get_mut(idx.get()) {
            node.source_line = Some(line);
        }
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> Outline {
        Outline { nodes: self.nodes }
    }
}
