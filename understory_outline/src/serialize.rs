// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline to indented text.

use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

use crate::outline::Outline;
use crate::parse::INDENT_WIDTH;
use crate::types::NodeIndex;

/// Render the whole outline as indented text, root at level 0.
///
/// The output is the inverse of [`parse_outline`](crate::parse_outline): re-parsing it
/// reproduces the same shape and text (with fresh identifiers). This holds for built
/// outlines too, since [`OutlineBuilder`](crate::OutlineBuilder) only accepts labels
/// that pass [`is_valid_label`](crate::is_valid_label). Lines are joined with `\n` and
/// there is no trailing line break.
#[must_use]
pub fn outline_to_text(outline: &Outline) -> String {
    subtree_to_text(outline, outline.root(), 0)
}

/// Render the subtree rooted at `node`, starting at indentation `level`.
///
/// Returns an empty string if `node` is out of range.
#[must_use]
pub fn subtree_to_text(outline: &Outline, node: NodeIndex, level: usize) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_subtree(&mut out, outline, node, level);
    out
}

/// Stream the subtree rooted at `node` into `out`, see [`subtree_to_text`].
pub fn write_subtree<W: fmt::Write + ?Sized>(
    out: &mut W,
    outline: &Outline,
    node: NodeIndex,
    level: usize,
) -> fmt::Result {
    if outline.get(node).is_none() {
        return Ok(());
    }
    let mut pending: SmallVec<[(NodeIndex, usize); 16]> = SmallVec::new();
    pending.push((node, level));
    let mut first = true;
    while let Some((idx, level)) = pending.pop() {
        if !first {
            out.write_char('\n')?;
        }
        first = false;
        let node = &outline[idx];
        write!(
            out,
            "{:indent$}{}",
            "",
            node.text(),
            indent = level * INDENT_WIDTH
        )?;
        pending.extend(node.children().iter().rev().map(|&c| (c, level + 1)));
    }
    Ok(())
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtree(f, self, self.root(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::outline::OutlineBuilder;
    use crate::parse::{EMPTY_OUTLINE_TEXT, parse_outline};
    use alloc::format;

    #[test]
    fn renders_two_spaces_per_level() {
        let mut builder = OutlineBuilder::with_ids(SequentialIds::new(), "Root");
        let root = builder.root();
        let a = builder.push_child(root, "A");
        builder.push_child(a, "A1");
        builder.push_child(root, "B");
        let outline = builder.build();

        assert_eq!(outline_to_text(&outline), "Root\n  A\n    A1\n  B");
        assert_eq!(format!("{outline}"), "Root\n  A\n    A1\n  B");
        assert_eq!(subtree_to_text(&outline, a, 3), "      A\n        A1");
    }

    #[test]
    fn single_node_has_no_line_break() {
        let outline = parse_outline("");
        assert_eq!(outline_to_text(&outline), EMPTY_OUTLINE_TEXT);
    }

    #[test]
    fn round_trip_preserves_shape() {
        let inputs = [
            "Root Node\n  Child 1\n    Grandchild 1\n    Grandchild 2\n  Child 2\n  Child 3",
            "a\n   b\n c\n\n        d\n  e\nf",
            "      deep root\nshallow\n  under shallow\n    x\n  y",
            "\t\tTabbed\n\t\t\t\tchild\n\n",
            "only",
        ];
        for input in inputs {
            let parsed = parse_outline(input);
            let text = outline_to_text(&parsed);
            let reparsed = parse_outline(&text);
            assert!(parsed.same_shape(&reparsed), "round trip changed {input:?}");
            assert_eq!(outline_to_text(&reparsed), text);
        }
    }

    #[test]
    fn built_outlines_round_trip() {
        let mut builder = OutlineBuilder::with_ids(SequentialIds::new(), "root");
        let root = builder.root();
        for label in ["tab\tinside", "carriage\rreturn", "  padded  ".trim(), "tail"] {
            builder.push_child(root, label);
        }
        let outline = builder.build();
        let reparsed = parse_outline(&outline_to_text(&outline));
        assert_eq!(reparsed.node_count(), outline.node_count());
        assert!(outline.same_shape(&reparsed));
    }

    #[test]
    fn normalizes_indentation() {
        let outline = parse_outline("A\n     B\n  C");
        assert_eq!(outline_to_text(&outline), "A\n  B\n  C");
    }

    #[test]
    fn out_of_range_node_renders_nothing() {
        let outline = parse_outline("A");
        assert_eq!(subtree_to_text(&outline, NodeIndex::new(5), 0), "");
    }
}
