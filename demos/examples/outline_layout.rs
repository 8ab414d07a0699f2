// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text outline to tree diagram: `understory_outline` + `understory_tree_layout`.
//!
//! This example shows how to:
//! - parse an indented outline into a tree,
//! - lay it out left to right and walk the resulting positions,
//! - compute the diagram extent and pick a node under a point,
//! - serialize the tree back into outline text.
//!
//! Run:
//! - `cargo run -p understory_demos --example outline_layout`

use kurbo::Point;
use understory_outline::{outline_to_text, parse_outline};
use understory_tree_layout::{Position, bounding_box, compute_layout, count_nodes, max_depth};

const DOCUMENT: &str = "\
Release plan
  Design
    Sketches
    Review

  Build
    Parser
    Layout engine
      Sibling spacing
  Ship
";

fn print_subtree(pos: Position<'_>, depth: usize) {
    let rect = pos.rect();
    println!(
        "{:indent$}{:<20} x={:>6.1} y={:>6.1} w={:>6.1} h={:>5.1}",
        "",
        pos.node().text(),
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height(),
        indent = depth * 2
    );
    for child in pos.children() {
        print_subtree(child, depth + 1);
    }
}

fn main() {
    let outline = parse_outline(DOCUMENT);
    println!(
        "parsed {} nodes, max depth {}",
        count_nodes(&outline, outline.root()),
        max_depth(&outline, outline.root())
    );

    let layout = compute_layout(&outline);
    print_subtree(layout.root(), 0);

    let bbox = bounding_box(&layout);
    println!(
        "diagram spans ({}, {}) .. ({}, {}), {} x {}",
        bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y, bbox.width, bbox.height
    );

    // Pick the node under a point, as a click handler would.
    let probe = Point::new(160.0, 10.0);
    match layout.node_at(probe) {
        Some(node) => {
            let node = &outline[node];
            println!(
                "{probe:?} hits {:?} ({}, line {:?})",
                node.text(),
                node.id(),
                node.source_line()
            );
        }
        None => println!("{probe:?} hits nothing"),
    }

    // Blank lines and stray indentation are normalized on the way back out.
    println!("---\n{}", outline_to_text(&outline));
}
