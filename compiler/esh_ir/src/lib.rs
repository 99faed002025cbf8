//! esh IR - source text and syntax-tree types
//!
//! This crate holds the data model shared by the parser and its consumers:
//! - [`Source`]: the immutable text being parsed and its display name
//! - [`Span`]: half-open byte ranges into a source
//! - [`NodeArena`] / [`NodeId`]: flat storage for tree nodes
//! - [`NodeKind`] and its payload structs: one variant per grammar rule
//! - [`Tree`]: a finished parse with navigation helpers
//!
//! # Design
//!
//! Nodes never own each other. Every node lives in the arena and refers to
//! its children and its parent by [`NodeId`], so the parent back-links used by
//! editors and completion form no ownership cycle. A node's literal text is not
//! stored; it is the slice of the source covered by the node's span.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod node;
mod node_id;
mod source;
mod span;
mod tree;

pub use arena::NodeArena;
pub use node::{
    Array, Assignment, Chunk, Compound, ExprCtx, Filter, Form, Indexing, MapPair, Node, NodeKind,
    NodeTag, Pipeline, Primary, PrimaryType, Redir, RedirMode,
};
pub use node_id::NodeId;
pub use source::Source;
pub use span::{Span, SpanError};
pub use tree::Tree;
