//! Error-tolerant recursive-descent parser for the esh shell language.
//!
//! [`parse`] turns a [`Source`] into a [`Tree`] whose nodes are both the
//! abstract syntax (typed payloads) and the concrete syntax (every byte of
//! input sits in exactly one leaf). Parsing never stops at the first
//! problem: the tree is always complete, and every error found along the
//! way is returned next to it.
//!
//! Besides the parser the crate exports the pieces consumers of the tree
//! share with it: the character classes ([`chars`]), the quoter
//! ([`quote`]), the tree validator ([`check_parse_tree`]) and two
//! pretty-printers.

pub mod chars;
mod check;
mod error;
mod grammar;
mod parser;
mod pprint;
mod quote;
pub mod scanner;

use std::fmt;
use std::io::Write;

use esh_diagnostic::{Error, Errors};
use esh_ir::{Chunk, NodeKind, Source, Span, Tree};
use tracing::debug;

pub use check::{check_parse_tree, TreeError};
pub use error::{format_expected, ParseErrorKind, PARSE_ERROR};
pub use grammar::valid_lhs_variable;
pub use pprint::{pprint_ast, pprint_parse_tree};
pub use quote::{quote, quote_as, quote_variable_name};

use crate::parser::Parser;

/// Options for one parse call.
#[derive(Default)]
pub struct Config {
    /// Destination for deprecation warnings. Nothing in the current grammar
    /// is deprecated, so no warning is ever written.
    pub warning_writer: Option<Box<dyn Write + Send>>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("warning_writer", &self.warning_writer.is_some())
            .finish()
    }
}

/// A tree together with everything wrong with it.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub tree: Tree,
    /// In the order they were found.
    pub errors: Vec<Error>,
}

impl ParseOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether the input is a prefix of something valid: there are errors,
    /// and all of them sit at end of input.
    pub fn is_partial(&self) -> bool {
        self.has_errors() && self.errors.iter().all(|e| e.partial)
    }

    /// The errors as one value, `None` for a clean parse.
    pub fn error(&self) -> Option<Errors> {
        Errors::pack(self.errors.clone())
    }

    /// Split into the tree and a `Result`-style error.
    pub fn into_result(self) -> (Tree, Result<(), Errors>) {
        let errors = Errors::pack(self.errors);
        (self.tree, errors.map_or(Ok(()), Err))
    }
}

/// Parse `src` as a [`Chunk`].
pub fn parse(src: Source, cfg: Config) -> ParseOutput {
    parse_as(src, NodeKind::Chunk(Chunk::default()), cfg)
}

/// Parse `src` with `root` as the top-level rule.
///
/// `root` may carry rule input, e.g. the context of a
/// [`Compound`](esh_ir::Compound). Parsing a [`Filter`](esh_ir::Filter)
/// this way is how filter expressions are read.
///
/// # Panics
/// Panics if `src` is longer than `u32::MAX` bytes.
#[tracing::instrument(level = "debug", skip_all, fields(name = %src.name, len = src.len()))]
pub fn parse_as(src: Source, root: NodeKind, cfg: Config) -> ParseOutput {
    if let Err(e) = Span::try_from_range(0..src.len()) {
        panic!("source {} is too long: {e}", src.name);
    }
    let Config { warning_writer: _ } = cfg;

    let mut parser = Parser::new(&src);
    let root = parser.parse_root(root);
    let (arena, errors) = parser.into_parts();
    debug!(nodes = arena.len(), errors = errors.len(), "parsed");

    ParseOutput {
        tree: Tree {
            root,
            arena,
            source: src,
        },
        errors,
    }
}

#[cfg(test)]
mod tests;
