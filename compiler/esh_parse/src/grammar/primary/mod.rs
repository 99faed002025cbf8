//! Primary expressions.
//!
//! The first character picks the form. Barewords are tried before anything
//! else, so in command position `*` and `^` continue a word instead of
//! starting a wildcard.

mod strings;

pub(crate) use strings::DOUBLE_ESCAPES;

use esh_ir::{Chunk, ExprCtx, MapPair, NodeId, NodeKind, Primary, PrimaryType};
use tracing::debug;

use crate::chars::{
    allowed_in_bareword, allowed_in_variable_name, is_braced_sep, is_inline_whitespace,
    starts_compound, starts_primary,
};
use crate::error::ParseErrorKind;
use crate::grammar::form::compound_in;
use crate::parser::Parser;

impl Parser<'_> {
    pub(crate) fn primary(&mut self, id: NodeId, ctx: ExprCtx) -> Primary {
        let mut primary = Primary {
            ctx,
            ..Primary::default()
        };
        debug!(pos = self.scanner.pos(), %ctx, "parse_primary");
        let Some(c) = self.peek().filter(|&c| starts_primary(c, ctx)) else {
            self.error(ParseErrorKind::ShouldBePrimary);
            return primary;
        };
        if allowed_in_bareword(c, ctx) {
            self.bareword(&mut primary);
            return primary;
        }
        match c {
            '\'' => {
                primary.ty = PrimaryType::SingleQuoted;
                self.scanner.next();
                primary.value = self.single_quoted_inner();
            }
            '"' => {
                primary.ty = PrimaryType::DoubleQuoted;
                self.scanner.next();
                primary.value = self.double_quoted_inner();
            }
            '$' => self.variable(&mut primary),
            '*' => self.star_wildcard(&mut primary),
            '?' if self.scanner.has_prefix("?(") => self.exception_capture(id, &mut primary),
            '?' => self.question_wildcard(&mut primary),
            '(' => self.output_capture(id, &mut primary),
            '[' => self.lbracket(id, &mut primary),
            '{' => self.lbrace(id, &mut primary),
            // Unreachable for characters accepted by `starts_primary`; keeps
            // an empty bareword.
            _ => {}
        }
        primary
    }

    fn bareword(&mut self, primary: &mut Primary) {
        primary.ty = PrimaryType::Bareword;
        let from = self.scanner.pos();
        while self.peek().is_some_and(|c| allowed_in_bareword(c, primary.ctx)) {
            self.scanner.next();
        }
        primary.value = self.scanner.since(from).as_bytes().to_vec();
    }

    fn variable(&mut self, primary: &mut Primary) {
        primary.ty = PrimaryType::Variable;
        self.scanner.next();
        let from = self.scanner.pos();
        match self.scanner.next() {
            None => {
                self.scanner.backup();
                self.error(ParseErrorKind::ShouldBeVariableName);
                self.scanner.next();
            }
            Some('\'') => primary.value = self.single_quoted_inner(),
            Some('"') => primary.value = self.double_quoted_inner(),
            Some(c) => {
                if !allowed_in_variable_name(c) && c != '@' {
                    self.scanner.backup();
                    self.error(ParseErrorKind::ShouldBeVariableName);
                }
                while self.peek().is_some_and(allowed_in_variable_name) {
                    self.scanner.next();
                }
                primary.value = self.scanner.since(from).as_bytes().to_vec();
            }
        }
    }

    fn star_wildcard(&mut self, primary: &mut Primary) {
        primary.ty = PrimaryType::Wildcard;
        let from = self.scanner.pos();
        while self.peek_is('*') {
            self.scanner.next();
        }
        primary.value = self.scanner.since(from).as_bytes().to_vec();
    }

    /// `?` or `??`. A second `?` that opens `?(` is left alone.
    fn question_wildcard(&mut self, primary: &mut Primary) {
        primary.ty = PrimaryType::Wildcard;
        let from = self.scanner.pos();
        self.scanner.next();
        if self.peek_is('?') && !self.scanner.has_prefix("?(") {
            self.scanner.next();
        }
        primary.value = self.scanner.since(from).as_bytes().to_vec();
    }

    fn exception_capture(&mut self, id: NodeId, primary: &mut Primary) {
        primary.ty = PrimaryType::ExceptionCapture;
        self.scanner.next();
        self.scanner.next();
        self.add_sep(id);
        primary.chunk = Some(self.parse_node(NodeKind::Chunk(Chunk::default()), id));
        if !self.parse_sep(id, ')') {
            self.error(ParseErrorKind::ShouldBeRParen);
        }
    }

    fn output_capture(&mut self, id: NodeId, primary: &mut Primary) {
        primary.ty = PrimaryType::OutputCapture;
        self.parse_sep(id, '(');
        primary.chunk = Some(self.parse_node(NodeKind::Chunk(Chunk::default()), id));
        if !self.parse_sep(id, ')') {
            self.error(ParseErrorKind::ShouldBeRParen);
        }
    }

    /// `[...]`: a list, or a map once a pair or a lone `&` shows up.
    fn lbracket(&mut self, id: NodeId, primary: &mut Primary) {
        self.parse_sep(id, '[');
        self.spaces_and_newlines(id);

        let mut lone_ampersand = false;
        loop {
            match self.peek() {
                Some('&') => {
                    self.scanner.next();
                    if !self
                        .peek()
                        .is_some_and(|c| starts_compound(c, ExprCtx::Lhs))
                    {
                        lone_ampersand = true;
                        self.add_sep(id);
                        self.spaces_and_newlines(id);
                        break;
                    }
                    self.scanner.backup();
                    primary
                        .map_pairs
                        .push(self.parse_node(NodeKind::MapPair(MapPair::default()), id));
                }
                Some(c) if starts_compound(c, ExprCtx::Normal) => primary
                    .elements
                    .push(self.parse_node(compound_in(ExprCtx::Normal), id)),
                _ => break,
            }
            self.spaces_and_newlines(id);
        }

        if !self.parse_sep(id, ']') {
            self.error(ParseErrorKind::ShouldBeRBracket);
        }
        if lone_ampersand || !primary.map_pairs.is_empty() {
            if !primary.elements.is_empty() {
                self.error(ParseErrorKind::BothElementsAndPairs);
            }
            primary.ty = PrimaryType::Map;
        } else {
            primary.ty = PrimaryType::List;
        }
    }

    /// `{` followed by whitespace, `;` or `|` opens a lambda; anything else
    /// is a brace list.
    fn lbrace(&mut self, id: NodeId, primary: &mut Primary) {
        self.parse_sep(id, '{');
        if self
            .peek()
            .is_some_and(|c| matches!(c, ';' | '\r' | '\n' | '|') || is_inline_whitespace(c))
        {
            self.lambda(id, primary);
            return;
        }

        primary.ty = PrimaryType::Braced;
        // Elements may be empty, which is what makes `{,foo}` parse.
        primary
            .braced
            .push(self.parse_node(compound_in(ExprCtx::BracedElem), id));
        while self.peek().is_some_and(is_braced_sep) {
            self.spaces_and_newlines(id);
            self.parse_sep(id, ',');
            self.spaces_and_newlines(id);
            primary
                .braced
                .push(self.parse_node(compound_in(ExprCtx::BracedElem), id));
        }
        if !self.parse_sep(id, '}') {
            self.error(ParseErrorKind::ShouldBeBraceSepOrRBracket);
        }
    }

    fn lambda(&mut self, id: NodeId, primary: &mut Primary) {
        primary.ty = PrimaryType::Lambda;
        self.spaces_and_newlines(id);
        if self.parse_sep(id, '|') {
            self.spaces_and_newlines(id);
            loop {
                match self.peek() {
                    Some('&') => primary
                        .map_pairs
                        .push(self.parse_node(NodeKind::MapPair(MapPair::default()), id)),
                    Some(c) if starts_compound(c, ExprCtx::Normal) => primary
                        .elements
                        .push(self.parse_node(compound_in(ExprCtx::Normal), id)),
                    _ => break,
                }
                self.spaces_and_newlines(id);
            }
            if !self.parse_sep(id, '|') {
                self.error(ParseErrorKind::ShouldBePipe);
            }
        }
        primary.chunk = Some(self.parse_node(NodeKind::Chunk(Chunk::default()), id));
        if !self.parse_sep(id, '}') {
            self.error(ParseErrorKind::ShouldBeRBrace);
        }
    }
}
