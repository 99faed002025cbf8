use pretty_assertions::assert_eq;

use super::*;
use crate::{Chunk, Compound, Indexing, NodeTag, Primary};

/// Hand-built tree for `ls  x`: Chunk > Compound(ls), Sep, Compound > Indexing > Primary(x).
fn sample() -> (Tree, [NodeId; 6]) {
    let mut arena = NodeArena::new();
    let chunk = arena.alloc(NodeKind::Chunk(Chunk::default()), Span::new(0, 5));
    let ls = arena.alloc(NodeKind::Compound(Compound::default()), Span::new(0, 2));
    let sep = arena.alloc(NodeKind::Sep, Span::new(2, 4));
    let x = arena.alloc(NodeKind::Compound(Compound::default()), Span::new(4, 5));
    let idx = arena.alloc(NodeKind::Indexing(Indexing::default()), Span::new(4, 5));
    let prim = arena.alloc(NodeKind::Primary(Primary::default()), Span::new(4, 5));
    arena.attach(chunk, ls);
    arena.attach(chunk, sep);
    arena.attach(chunk, x);
    arena.attach(x, idx);
    arena.attach(idx, prim);
    let tree = Tree {
        root: chunk,
        arena,
        source: Source::new("[test]", "ls  x"),
    };
    (tree, [chunk, ls, sep, x, idx, prim])
}

#[test]
fn text_slices_source() {
    let (tree, [chunk, ls, sep, x, ..]) = sample();
    assert_eq!(tree.text(chunk), "ls  x");
    assert_eq!(tree.text(ls), "ls");
    assert_eq!(tree.text(sep), "  ");
    assert_eq!(tree.text(x), "x");
}

#[test]
fn attach_links_both_ways() {
    let (tree, [chunk, ls, sep, x, ..]) = sample();
    assert_eq!(tree.children(chunk), &[ls, sep, x]);
    assert_eq!(tree.parent(sep), Some(chunk));
    assert_eq!(tree.parent(chunk), None);
}

#[test]
fn leaf_at_prefers_word_before_cursor() {
    let (tree, [_, ls, sep, _, _, prim]) = sample();
    assert_eq!(tree.leaf_at(0), Some(ls));
    assert_eq!(tree.leaf_at(2), Some(ls));
    assert_eq!(tree.leaf_at(3), Some(sep));
    assert_eq!(tree.leaf_at(5), Some(prim));
    assert_eq!(tree.leaf_at(6), None);
}

#[test]
fn path_to_root_walks_parents() {
    let (tree, [chunk, _, _, x, idx, prim]) = sample();
    assert_eq!(tree.path_to_root(prim), vec![prim, idx, x, chunk]);
    let tags: Vec<_> = tree
        .path_to_root(prim)
        .into_iter()
        .map(|id| tree.kind(id).tag())
        .collect();
    assert_eq!(
        tags,
        vec![
            NodeTag::Primary,
            NodeTag::Indexing,
            NodeTag::Compound,
            NodeTag::Chunk
        ]
    );
}

