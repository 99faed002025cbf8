//! Human-readable dumps of a tree.
//!
//! [`pprint_ast`] shows payload fields and properties; [`pprint_parse_tree`]
//! shows every node, separators included, with its text and span. Both
//! collapse chains of single-child nodes onto one line as `A/B/C`.

use std::fmt::{self, Write};

use esh_ir::{ExprCtx, NodeId, NodeKind, Tree};
use esh_stack::ensure_sufficient_stack;

const INDENT: usize = 2;
/// Longest node text shown in full by [`pprint_parse_tree`].
const MAX_TEXT: usize = 10;

/// Write the AST view of the subtree at `id`.
///
/// For `ls x`:
///
/// ```text
/// Chunk/Pipeline/Form
///   head: Compound ctx=Cmd
///     indexings: Indexing ctx=Cmd
///       head: Primary ctx=Cmd ty=Bareword value="ls"
///   args: Compound/Indexing/Primary ty=Bareword value="x"
/// ```
pub fn pprint_ast(tree: &Tree, id: NodeId, out: &mut impl Write) -> fmt::Result {
    ast_node(tree, id, out, 0, "")
}

fn ast_node(
    tree: &Tree,
    mut id: NodeId,
    out: &mut impl Write,
    indent: usize,
    leading: &str,
) -> fmt::Result {
    write!(out, "{:indent$}{leading}", "")?;
    loop {
        let kind = tree.kind(id);
        let node_props = props(kind);
        let fields = child_fields(kind);
        if let ([], [(_, only)]) = (node_props.as_slice(), fields.as_slice()) {
            write!(out, "{}/", kind.name())?;
            id = *only;
            continue;
        }
        write!(out, "{}", kind.name())?;
        for prop in &node_props {
            write!(out, " {prop}")?;
        }
        writeln!(out)?;
        for (field, child) in fields {
            let leading = format!("{field}: ");
            ensure_sufficient_stack(|| ast_node(tree, child, out, indent + INDENT, &leading))?;
        }
        return Ok(());
    }
}

/// `name=value` pairs for the non-default scalar fields of a payload.
fn props(kind: &NodeKind) -> Vec<String> {
    let ctx = |ctx: ExprCtx| (ctx != ExprCtx::Normal).then(|| format!("ctx={ctx}"));
    match kind {
        NodeKind::Pipeline(p) if p.background => vec!["background=true".to_string()],
        NodeKind::Redir(r) => {
            let mode = r.mode.map_or_else(|| "invalid".to_string(), |m| m.to_string());
            let mut props = vec![format!("mode={mode}")];
            if r.right_is_fd {
                props.push("right_is_fd=true".to_string());
            }
            props
        }
        NodeKind::Compound(c) => ctx(c.ctx).into_iter().collect(),
        NodeKind::Indexing(i) => ctx(i.ctx).into_iter().collect(),
        NodeKind::Primary(p) => {
            let mut props: Vec<String> = ctx(p.ctx).into_iter().collect();
            props.push(format!("ty={}", p.ty));
            if !p.value.is_empty() {
                props.push(format!("value={:?}", p.value_lossy()));
            }
            props
        }
        _ => Vec::new(),
    }
}

/// Payload children in field order, each with its field name.
fn child_fields(kind: &NodeKind) -> Vec<(&'static str, NodeId)> {
    let mut fields = Vec::new();
    let mut many = |name: &'static str, ids: &[NodeId]| {
        fields.extend(ids.iter().map(|&id| (name, id)));
    };
    match kind {
        NodeKind::Chunk(n) => many("pipelines", &n.pipelines),
        NodeKind::Pipeline(n) => many("forms", &n.forms),
        NodeKind::Form(n) => {
            many("assignments", &n.assignments);
            many("head", n.head.as_slice());
            many("args", &n.args);
            many("opts", &n.opts);
            many("redirs", &n.redirs);
        }
        NodeKind::Assignment(n) => {
            many("left", n.left.as_slice());
            many("right", n.right.as_slice());
        }
        NodeKind::Redir(n) => {
            many("left", n.left.as_slice());
            many("right", n.right.as_slice());
        }
        NodeKind::Filter(n) => {
            many("args", &n.args);
            many("opts", &n.opts);
        }
        NodeKind::Compound(n) => many("indexings", &n.indexings),
        NodeKind::Indexing(n) => {
            many("head", n.head.as_slice());
            many("indices", &n.indices);
        }
        NodeKind::Array(n) => many("compounds", &n.compounds),
        NodeKind::Primary(n) => {
            many("elements", &n.elements);
            many("chunk", n.chunk.as_slice());
            many("map_pairs", &n.map_pairs);
            many("braced", &n.braced);
        }
        NodeKind::MapPair(n) => {
            many("key", n.key.as_slice());
            many("value", n.value.as_slice());
        }
        NodeKind::Sep => {}
    }
    fields
}

/// Write the parse-tree view of the subtree at `id`.
///
/// ```text
/// Chunk/Pipeline/Form "ls x" 0-4
///   Compound/Indexing/Primary "ls" 0-2
///   Sep " " 2-3
///   Compound/Indexing/Primary "x" 3-4
/// ```
pub fn pprint_parse_tree(tree: &Tree, id: NodeId, out: &mut impl Write) -> fmt::Result {
    parse_tree_node(tree, id, out, 0)
}

fn parse_tree_node(
    tree: &Tree,
    mut id: NodeId,
    out: &mut impl Write,
    indent: usize,
) -> fmt::Result {
    write!(out, "{:indent$}", "")?;
    while let [only] = tree.children(id) {
        write!(out, "{}/", tree.kind(id).name())?;
        id = *only;
    }
    let span = tree.span(id);
    writeln!(
        out,
        "{} {:?} {}-{}",
        tree.kind(id).name(),
        compact_text(tree.text(id)),
        span.start,
        span.end
    )?;
    for &child in tree.children(id) {
        ensure_sufficient_stack(|| parse_tree_node(tree, child, out, indent + INDENT))?;
    }
    Ok(())
}

fn compact_text(text: &str) -> String {
    if text.chars().count() <= MAX_TEXT {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_TEXT - 3).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests;
