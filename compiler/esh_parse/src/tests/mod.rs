//! Parser tests.
//!
//! `parser` walks the tree for valid input, `errors` pins down the first
//! error (and partial flag) for malformed input, `properties` runs the
//! quoter and the validator over generated input.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests fail loudly on unexpected shapes"
)]

mod errors;

use esh_ir::{
    Chunk, Compound, Filter, Form, Indexing, NodeId, NodeKind, Pipeline, Primary, Source, Tree,
};

use crate::{check_parse_tree, parse_as, Config, ParseOutput};

fn parse_kind(code: &str, root: NodeKind) -> ParseOutput {
    let out = parse_as(Source::new("[test]", code), root, Config::default());
    if let Err(e) = check_parse_tree(&out.tree, out.tree.root) {
        panic!("malformed tree for {code:?}: {e}");
    }
    out
}

/// Parse as a chunk, requiring success.
fn parse_ok(code: &str) -> Tree {
    parse_ok_as(code, NodeKind::Chunk(Chunk::default()))
}

fn parse_ok_as(code: &str, root: NodeKind) -> Tree {
    let out = parse_kind(code, root);
    assert!(
        out.errors.is_empty(),
        "unexpected errors for {code:?}: {:?}",
        out.errors
    );
    out.tree
}

fn filter_root() -> NodeKind {
    NodeKind::Filter(Filter::default())
}

fn primary_root() -> NodeKind {
    NodeKind::Primary(Primary::default())
}

fn texts(tree: &Tree, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|&id| tree.text(id).to_string()).collect()
}

fn chunk(tree: &Tree, id: NodeId) -> &Chunk {
    tree.kind(id).as_chunk().expect("chunk")
}

fn pipeline(tree: &Tree, id: NodeId) -> &Pipeline {
    tree.kind(id).as_pipeline().expect("pipeline")
}

fn form(tree: &Tree, id: NodeId) -> &Form {
    tree.kind(id).as_form().expect("form")
}

fn compound(tree: &Tree, id: NodeId) -> &Compound {
    tree.kind(id).as_compound().expect("compound")
}

fn indexing(tree: &Tree, id: NodeId) -> &Indexing {
    tree.kind(id).as_indexing().expect("indexing")
}

fn primary(tree: &Tree, id: NodeId) -> &Primary {
    tree.kind(id).as_primary().expect("primary")
}

/// The only form of the only pipeline.
fn only_form(tree: &Tree) -> &Form {
    let pipelines = &chunk(tree, tree.root).pipelines;
    assert_eq!(pipelines.len(), 1, "pipelines of {:?}", tree.source.code);
    let forms = &pipeline(tree, pipelines[0]).forms;
    assert_eq!(forms.len(), 1, "forms of {:?}", tree.source.code);
    form(tree, forms[0])
}

/// Head primary of a compound's first indexing.
fn head_primary(tree: &Tree, compound_id: NodeId) -> &Primary {
    let first = compound(tree, compound_id).indexings[0];
    primary(tree, indexing(tree, first).head.expect("head"))
}

/// The head primaries of every indexing of a compound.
fn indexing_heads(tree: &Tree, compound_id: NodeId) -> Vec<&Primary> {
    compound(tree, compound_id)
        .indexings
        .iter()
        .map(|&i| primary(tree, indexing(tree, i).head.expect("head")))
        .collect()
}

/// Parse `a <arg>...` and return the head primaries of its arguments.
fn arg_primaries(tree: &Tree) -> Vec<&Primary> {
    only_form(tree)
        .args
        .iter()
        .map(|&arg| head_primary(tree, arg))
        .collect()
}
