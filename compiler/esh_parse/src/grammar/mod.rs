//! Grammar rules.
//!
//! Each rule is an `impl Parser` method taking the id of the node being
//! built and returning its finished payload:
//!
//! - `chunk`: [`Chunk`](esh_ir::Chunk) and [`Pipeline`](esh_ir::Pipeline)
//! - `form`: [`Form`](esh_ir::Form), [`Assignment`](esh_ir::Assignment),
//!   [`Redir`](esh_ir::Redir), [`Filter`](esh_ir::Filter) and
//!   [`MapPair`](esh_ir::MapPair)
//! - `compound`: [`Compound`](esh_ir::Compound),
//!   [`Indexing`](esh_ir::Indexing) and [`Array`](esh_ir::Array)
//! - `primary`: every [`Primary`](esh_ir::Primary) form

mod chunk;
mod compound;
mod form;
mod primary;

pub use form::valid_lhs_variable;
pub(crate) use primary::DOUBLE_ESCAPES;
