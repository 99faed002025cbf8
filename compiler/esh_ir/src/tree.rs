//! A finished parse and the queries consumers run on it.

use crate::{Node, NodeArena, NodeId, NodeKind, Source, Span};

/// Result of parsing one [`Source`].
///
/// Immutable once built; it holds no interior mutability, so it can be shared
/// across threads by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    pub root: NodeId,
    pub arena: NodeArena,
    pub source: Source,
}

impl Tree {
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.arena[id].kind
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.arena[id].span
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.arena[id].children
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    /// Literal source text covered by a node.
    pub fn text(&self, id: NodeId) -> &str {
        self.source
            .code
            .get(self.span(id).to_range())
            .unwrap_or_default()
    }

    /// Deepest node touching `offset`.
    ///
    /// Descends from the root, at each level taking the first child whose
    /// span touches the offset (ends inclusive), so a cursor placed right
    /// after a word resolves to that word.
    pub fn leaf_at(&self, offset: u32) -> Option<NodeId> {
        if !self.span(self.root).touches(offset) {
            return None;
        }
        let mut current = self.root;
        while let Some(&child) = self
            .children(current)
            .iter()
            .find(|&&child| self.span(child).touches(offset))
        {
            current = child;
        }
        Some(current)
    }

    /// `id` followed by each of its ancestors, ending at the root.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path
    }
}

#[cfg(test)]
mod tests;
