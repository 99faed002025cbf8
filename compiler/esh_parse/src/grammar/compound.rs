//! Compounds, indexings and the arrays inside brackets.

use esh_ir::{
    Array, Compound, ExprCtx, Indexing, NodeId, NodeKind, Primary, PrimaryType, Span,
};

use crate::chars::{starts_array, starts_compound, starts_indexing};
use crate::error::ParseErrorKind;
use crate::grammar::form::compound_in;
use crate::parser::Parser;

impl Parser<'_> {
    pub(crate) fn compound(&mut self, id: NodeId, ctx: ExprCtx) -> Compound {
        let mut compound = Compound {
            ctx,
            indexings: Vec::new(),
        };
        if let Some(tilde) = self.tilde(id, ctx) {
            compound.indexings.push(tilde);
        }
        while self.peek().is_some_and(|c| starts_indexing(c, ctx)) {
            let indexing = self.parse_node(
                NodeKind::Indexing(Indexing {
                    ctx,
                    ..Indexing::default()
                }),
                id,
            );
            compound.indexings.push(indexing);
        }
        compound
    }

    /// A leading `~` becomes its own one-character Indexing, so `~user/x`
    /// splits into a Tilde and the bareword after it.
    fn tilde(&mut self, id: NodeId, ctx: ExprCtx) -> Option<NodeId> {
        if !self.peek_is('~') {
            return None;
        }
        let start = self.offset();
        self.scanner.next();
        let span = Span::new(start, self.offset());
        let primary = self.arena.alloc(
            NodeKind::Primary(Primary {
                ctx,
                ty: PrimaryType::Tilde,
                value: b"~".to_vec(),
                ..Primary::default()
            }),
            span,
        );
        let indexing = self.arena.alloc(
            NodeKind::Indexing(Indexing {
                ctx,
                head: Some(primary),
                indices: Vec::new(),
            }),
            span,
        );
        self.arena.attach(indexing, primary);
        self.arena.attach(id, indexing);
        Some(indexing)
    }

    pub(crate) fn indexing(&mut self, id: NodeId, ctx: ExprCtx) -> Indexing {
        let head = self.parse_node(
            NodeKind::Primary(Primary {
                ctx,
                ..Primary::default()
            }),
            id,
        );
        let mut indexing = Indexing {
            ctx,
            head: Some(head),
            indices: Vec::new(),
        };
        while self.parse_sep(id, '[') {
            // `[]` is an empty index; anything else must be spaced or a word.
            if !self.peek().is_some_and(starts_array) && !self.peek_is(']') {
                self.error(ParseErrorKind::ShouldBeArray);
            }
            indexing
                .indices
                .push(self.parse_node(NodeKind::Array(Array::default()), id));
            if !self.parse_sep(id, ']') {
                self.error(ParseErrorKind::ShouldBeRBracket);
                return indexing;
            }
        }
        indexing
    }

    pub(crate) fn array(&mut self, id: NodeId) -> Array {
        let mut array = Array::default();
        self.spaces_and_newlines(id);
        while self
            .peek()
            .is_some_and(|c| starts_compound(c, ExprCtx::Normal))
        {
            array
                .compounds
                .push(self.parse_node(compound_in(ExprCtx::Normal), id));
            self.spaces_and_newlines(id);
        }
        array
    }
}
