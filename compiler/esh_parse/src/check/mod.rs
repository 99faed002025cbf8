//! Structural validation of a parse tree.
//!
//! Every node's children must tile the node's span exactly, link back to it,
//! and include every node its payload refers to. The parser keeps these
//! properties even for malformed input; this check is what the tests use to
//! prove it.

use esh_ir::{NodeId, NodeKind, Span, Tree};
use esh_stack::ensure_sufficient_stack;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("child {child:?} of {node:?} has parent {found:?}")]
    WrongParent {
        node: NodeId,
        child: NodeId,
        found: Option<NodeId>,
    },
    #[error("first child of {node:?} starts at {child_start}, node starts at {node_start}")]
    StartMismatch {
        node: NodeId,
        node_start: u32,
        child_start: u32,
    },
    #[error("last child of {node:?} ends at {child_end}, node ends at {node_end}")]
    EndMismatch {
        node: NodeId,
        node_end: u32,
        child_end: u32,
    },
    #[error("children of {node:?} leave a gap or overlap between {before} and {after}")]
    NotContiguous {
        node: NodeId,
        before: Span,
        after: Span,
    },
    #[error("{field} of {node:?} refers to {target:?}, which is not a child")]
    DetachedField {
        node: NodeId,
        field: &'static str,
        target: NodeId,
    },
}

/// Validate the subtree rooted at `id`.
pub fn check_parse_tree(tree: &Tree, id: NodeId) -> Result<(), TreeError> {
    let node = tree.node(id);
    let children = tree.children(id);

    for &child in children {
        let found = tree.parent(child);
        if found != Some(id) {
            return Err(TreeError::WrongParent {
                node: id,
                child,
                found,
            });
        }
    }

    if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
        let child_start = tree.span(first).start;
        if child_start != node.span.start {
            return Err(TreeError::StartMismatch {
                node: id,
                node_start: node.span.start,
                child_start,
            });
        }
        let child_end = tree.span(last).end;
        if child_end != node.span.end {
            return Err(TreeError::EndMismatch {
                node: id,
                node_end: node.span.end,
                child_end,
            });
        }
    }

    for pair in children.windows(2) {
        let (before, after) = (tree.span(pair[0]), tree.span(pair[1]));
        if before.end != after.start {
            return Err(TreeError::NotContiguous {
                node: id,
                before,
                after,
            });
        }
    }

    for (field, target) in payload_fields(&node.kind) {
        if !children.contains(&target) {
            return Err(TreeError::DetachedField {
                node: id,
                field,
                target,
            });
        }
    }

    children
        .iter()
        .try_for_each(|&child| ensure_sufficient_stack(|| check_parse_tree(tree, child)))
}

/// Every node id a payload holds, with the field it sits in.
fn payload_fields(kind: &NodeKind) -> Vec<(&'static str, NodeId)> {
    fn many<'a>(
        field: &'static str,
        ids: &'a [NodeId],
    ) -> impl Iterator<Item = (&'static str, NodeId)> + 'a {
        ids.iter().map(move |&id| (field, id))
    }
    fn one(field: &'static str, id: Option<NodeId>) -> impl Iterator<Item = (&'static str, NodeId)> {
        id.into_iter().map(move |id| (field, id))
    }

    match kind {
        NodeKind::Chunk(n) => many("pipelines", &n.pipelines).collect(),
        NodeKind::Pipeline(n) => many("forms", &n.forms).collect(),
        NodeKind::Form(n) => many("assignments", &n.assignments)
            .chain(one("head", n.head))
            .chain(many("args", &n.args))
            .chain(many("opts", &n.opts))
            .chain(many("redirs", &n.redirs))
            .collect(),
        NodeKind::Assignment(n) => one("left", n.left).chain(one("right", n.right)).collect(),
        NodeKind::Redir(n) => one("left", n.left).chain(one("right", n.right)).collect(),
        NodeKind::Filter(n) => many("args", &n.args)
            .chain(many("opts", &n.opts))
            .collect(),
        NodeKind::Compound(n) => many("indexings", &n.indexings).collect(),
        NodeKind::Indexing(n) => one("head", n.head)
            .chain(many("indices", &n.indices))
            .collect(),
        NodeKind::Array(n) => many("compounds", &n.compounds).collect(),
        NodeKind::Primary(n) => many("elements", &n.elements)
            .chain(one("chunk", n.chunk))
            .chain(many("map_pairs", &n.map_pairs))
            .chain(many("braced", &n.braced))
            .collect(),
        NodeKind::MapPair(n) => one("key", n.key).chain(one("value", n.value)).collect(),
        NodeKind::Sep => Vec::new(),
    }
}
