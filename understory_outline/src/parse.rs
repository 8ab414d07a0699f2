// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indentation-driven text to outline parsing.

use smallvec::SmallVec;

use crate::ids::{IdSource, SessionIds};
use crate::outline::{Outline, OutlineBuilder};
use crate::types::NodeIndex;

/// Text of the root produced for a document without any non-blank line.
pub const EMPTY_OUTLINE_TEXT: &str = "Empty Mindmap";

/// Number of leading whitespace characters per indentation level.
pub const INDENT_WIDTH: usize = 2;

/// A non-blank source line, split into its indentation level and content.
#[derive(Clone, Copy, Debug)]
struct ParsedLine<'a> {
    text: &'a str,
    level: usize,
    line_number: usize,
}

fn parsed_lines(text: &str) -> impl Iterator<Item = ParsedLine<'_>> {
    text.lines().enumerate().filter_map(|(i, raw)| {
        let content = raw.trim();
        if content.is_empty() {
            return None;
        }
        let indent = raw.chars().take_while(|c| c.is_whitespace()).count();
        Some(ParsedLine {
            text: content,
            level: indent / INDENT_WIDTH,
            line_number: i + 1,
        })
    })
}

/// Parse an indented outline using process-wide identifiers.
///
/// See [`parse_outline_with`] for the rules.
#[must_use]
pub fn parse_outline(text: &str) -> Outline {
    parse_outline_with(text, SessionIds)
}

/// Parse an indented outline, minting identifiers from `ids`.
///
/// - Blank and whitespace-only lines are skipped.
/// - A line's level is its count of leading whitespace characters divided by
///   [`INDENT_WIDTH`], rounded down. Tabs count as one character.
/// - The first non-blank line is the root, whatever its level.
/// - Every later line becomes the last child of the nearest open ancestor whose
///   level is strictly smaller. A line that is not deeper than any open ancestor
///   attaches to the root.
/// - Input without any non-blank line yields a lone [`EMPTY_OUTLINE_TEXT`] root.
///
/// Parsing never fails and does not recurse, so arbitrarily deep indentation is fine.
///
/// ```rust
/// use understory_outline::{SequentialIds, parse_outline_with};
///
/// let outline = parse_outline_with("Root\n  A\n    A1\n  B", SequentialIds::new());
/// let root = &outline[outline.root()];
/// assert_eq!(root.text(), "Root");
/// assert_eq!(root.children().len(), 2);
/// assert_eq!(outline.node_count(), 4);
/// ```
pub fn parse_outline_with<S: IdSource>(text: &str, ids: S) -> Outline {
    let mut lines = parsed_lines(text);
    let Some(first) = lines.next() else {
        return OutlineBuilder::with_ids(ids, EMPTY_OUTLINE_TEXT).build();
    };

    let mut builder = OutlineBuilder::with_ids(ids, first.text);
    let root = builder.root();
    builder.set_source_line(root, first.line_number);

    // Open ancestors and their levels. The root entry is never popped.
    let mut ancestors: SmallVec<[(NodeIndex, usize); 16]> = SmallVec::new();
    ancestors.push((root, first.level));

    for line in lines {
        while ancestors.len() > 1
            && ancestors
                .last()
                .is_some_and(|&(_, level)| level >= line.level)
        {
            ancestors.pop();
        }
        let parent = ancestors.last().map_or(root, |&(idx, _)| idx);
        let node = builder.push_child(parent, line.text);
        builder.set_source_line(node, line.line_number);
        ancestors.push((node, line.level));
    }

    builder.build()
}
