//! Parser state shared by every grammar rule.

use std::sync::Arc;

use esh_diagnostic::{Error, SourceContext};
use esh_ir::{NodeArena, NodeId, NodeKind, Source, Span};
use esh_stack::ensure_sufficient_stack;
use tracing::{debug, trace_span};

use crate::chars::{is_inline_whitespace, is_whitespace};
use crate::error::{ParseErrorKind, PARSE_ERROR};
use crate::scanner::Scanner;

/// Recursive-descent parser over one [`Source`].
///
/// Rules never fail: a mismatch records an error and returns, leaving the
/// nodes built so far attached.
pub(crate) struct Parser<'src> {
    pub(crate) scanner: Scanner<'src>,
    source: &'src Source,
    pub(crate) arena: NodeArena,
    pub(crate) errors: Vec<Error>,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source: &'src Source) -> Self {
        Parser {
            scanner: Scanner::new(source.code()),
            source,
            arena: NodeArena::new(),
            errors: Vec::new(),
        }
    }

    /// Parse the whole source as `root`, then report leftover input.
    pub(crate) fn parse_root(&mut self, root: NodeKind) -> NodeId {
        let id = self.parse_detached(root);
        self.done();
        id
    }

    pub(crate) fn into_parts(self) -> (NodeArena, Vec<Error>) {
        (self.arena, self.errors)
    }

    /// Current position as a span offset.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn offset(&self) -> u32 {
        // Sources longer than u32::MAX are rejected before parsing starts.
        self.scanner.pos() as u32
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.scanner.peek()
    }

    #[inline]
    pub(crate) fn peek_is(&self, c: char) -> bool {
        self.scanner.peek() == Some(c)
    }

    /// Parse a node of `kind` and append it to `parent`'s children.
    pub(crate) fn parse_node(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
        let id = self.parse_detached(kind);
        self.arena.attach(parent, id);
        id
    }

    /// Parse a node of `kind` without attaching it anywhere.
    ///
    /// The payload carried by `kind` is the rule's input: the expression
    /// context of Compound, Indexing and Primary, and the preset left side
    /// of a Redir.
    pub(crate) fn parse_detached(&mut self, kind: NodeKind) -> NodeId {
        let start = self.offset();
        let id = self.arena.alloc(NodeKind::Sep, Span::point(start));
        let _span = trace_span!("rule", kind = kind.name(), pos = start).entered();
        let kind = ensure_sufficient_stack(|| self.run_rule(id, kind));
        let end = self.offset();
        let node = &mut self.arena[id];
        node.kind = kind;
        node.span.end = end;
        id
    }

    fn run_rule(&mut self, id: NodeId, kind: NodeKind) -> NodeKind {
        match kind {
            NodeKind::Chunk(_) => NodeKind::Chunk(self.chunk(id)),
            NodeKind::Pipeline(_) => NodeKind::Pipeline(self.pipeline(id)),
            NodeKind::Form(_) => NodeKind::Form(self.form(id)),
            NodeKind::Assignment(_) => NodeKind::Assignment(self.assignment(id)),
            NodeKind::Redir(redir) => NodeKind::Redir(self.redir(id, redir.left)),
            NodeKind::Filter(_) => NodeKind::Filter(self.filter(id)),
            NodeKind::Compound(compound) => NodeKind::Compound(self.compound(id, compound.ctx)),
            NodeKind::Indexing(indexing) => NodeKind::Indexing(self.indexing(id, indexing.ctx)),
            NodeKind::Array(_) => NodeKind::Array(self.array(id)),
            NodeKind::Primary(primary) => NodeKind::Primary(self.primary(id, primary.ctx)),
            NodeKind::MapPair(_) => NodeKind::MapPair(self.map_pair(id)),
            NodeKind::Sep => NodeKind::Sep,
        }
    }

    /// Cover everything consumed since the last child of `id` with a Sep.
    pub(crate) fn add_sep(&mut self, id: NodeId) {
        let node = &self.arena[id];
        let begin = match node.children.last() {
            Some(&last) => self.arena[last].span.end,
            None => node.span.start,
        };
        let end = self.offset();
        if begin < end {
            let sep = self.arena.alloc(NodeKind::Sep, Span::new(begin, end));
            self.arena.attach(id, sep);
        }
    }

    /// Consume `sep` as a Sep child of `id` if it is next.
    pub(crate) fn parse_sep(&mut self, id: NodeId, sep: char) -> bool {
        if self.peek_is(sep) {
            self.scanner.next();
            self.add_sep(id);
            true
        } else {
            false
        }
    }

    /// Inline whitespace, comments and line continuations.
    pub(crate) fn spaces(&mut self, id: NodeId) {
        self.spaces_inner(id, false);
    }

    /// Like [`spaces`](Self::spaces), also consuming line breaks.
    pub(crate) fn spaces_and_newlines(&mut self, id: NodeId) {
        self.spaces_inner(id, true);
    }

    fn spaces_inner(&mut self, id: NodeId, newlines: bool) {
        loop {
            match self.peek() {
                Some(c) if is_inline_whitespace(c) || (newlines && is_whitespace(c)) => {
                    self.scanner.next();
                }
                // A comment ends before the line break.
                Some('#') => {
                    while !matches!(self.peek(), None | Some('\r' | '\n')) {
                        self.scanner.next();
                    }
                }
                Some('^') => {
                    self.scanner.next();
                    match self.peek() {
                        Some('\r') => {
                            self.scanner.next();
                            if self.peek_is('\n') {
                                self.scanner.next();
                            }
                        }
                        Some('\n') => {
                            self.scanner.next();
                        }
                        None => self.error(ParseErrorKind::ShouldBeNewline),
                        Some(_) => {
                            self.scanner.backup();
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
        self.add_sep(id);
    }

    /// Record an error covering the next code point, or zero-width at end
    /// of input.
    pub(crate) fn error(&mut self, kind: ParseErrorKind) {
        let start = self.scanner.pos();
        let width = self.peek().map_or(0, char::len_utf8);
        self.error_at(Span::from_range(start..start + width), kind);
    }

    pub(crate) fn error_at(&mut self, span: Span, kind: ParseErrorKind) {
        debug!(%span, error = %kind, "parse error");
        let context =
            SourceContext::new(self.source.name.clone(), Arc::clone(&self.source.code), span);
        self.errors
            .push(Error::new(PARSE_ERROR, kind.to_string(), context));
    }

    /// Report any input no rule consumed.
    fn done(&mut self) {
        if let Some(c) = self.peek() {
            self.error(ParseErrorKind::UnexpectedRune(c));
        }
    }

    pub(crate) fn kind(&self, id: NodeId) -> &NodeKind {
        &self.arena[id].kind
    }
}
