//! Diagnostics for the esh front end.
//!
//! - [`SourceContext`]: a span of a named source plus the excerpt around it
//! - [`Error`]: one diagnostic with a message and a `partial` flag
//! - [`Errors`]: the non-empty, ordered list a parse call reports
//! - [`emitter::TerminalEmitter`]: human-readable output with optional color
//!
//! Nothing here aborts: producers collect every [`Error`] and hand the list
//! over in one piece.

mod context;
pub mod emitter;
mod error;
pub mod span_utils;

pub use context::{Excerpt, SourceContext};
pub use error::{Error, Errors};
