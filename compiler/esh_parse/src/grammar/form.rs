//! Forms and the pieces that only appear inside them: assignments,
//! redirections, map pairs. Also the Filter entry point, which is a form
//! without a head.

use esh_ir::{
    Assignment, Compound, ExprCtx, Filter, Form, Indexing, MapPair, NodeArena, NodeId, NodeKind,
    PrimaryType, Redir, RedirMode, Span,
};
use tracing::trace;

use crate::chars::{allowed_in_variable_name, is_redir_sign, is_whitespace, starts_compound};
use crate::error::ParseErrorKind;
use crate::parser::Parser;
use crate::scanner::Scanner;

impl Parser<'_> {
    pub(crate) fn form(&mut self, id: NodeId) -> Form {
        let mut form = Form::default();
        self.spaces(id);

        while starts_assignment(&self.scanner) {
            trace!(pos = self.scanner.pos(), "form word is an assignment");
            form.assignments.push(
                self.parse_node(NodeKind::Assignment(Assignment::default()), id),
            );
            self.spaces(id);
        }

        let has_head = self
            .peek()
            .is_some_and(|c| starts_compound(c, ExprCtx::Cmd));
        if !has_head && !form.assignments.is_empty() {
            return form;
        }
        // May be empty; a lone `&` or a redirection still needs a head.
        form.head = Some(self.parse_node(compound_in(ExprCtx::Cmd), id));
        self.spaces(id);

        loop {
            match self.peek() {
                Some('&') => {
                    self.scanner.next();
                    let is_opt = self
                        .peek()
                        .is_some_and(|c| starts_compound(c, ExprCtx::Lhs));
                    self.scanner.backup();
                    if !is_opt {
                        // Background marker, handled by the pipeline.
                        return form;
                    }
                    form.opts
                        .push(self.parse_node(NodeKind::MapPair(MapPair::default()), id));
                }
                Some(c) if starts_compound(c, ExprCtx::Normal) => {
                    let word = self.parse_detached(compound_in(ExprCtx::Normal));
                    if self.peek().is_some_and(is_redir_sign) {
                        let redir = Redir {
                            left: Some(word),
                            ..Redir::default()
                        };
                        form.redirs
                            .push(self.parse_node(NodeKind::Redir(redir), id));
                    } else {
                        self.arena.attach(id, word);
                        form.args.push(word);
                    }
                }
                Some(c) if is_redir_sign(c) => {
                    form.redirs
                        .push(self.parse_node(NodeKind::Redir(Redir::default()), id));
                }
                _ => return form,
            }
            self.spaces(id);
        }
    }

    pub(crate) fn assignment(&mut self, id: NodeId) -> Assignment {
        let left = self.parse_node(
            NodeKind::Indexing(Indexing {
                ctx: ExprCtx::Lhs,
                ..Indexing::default()
            }),
            id,
        );
        let head = self.kind(left).as_indexing().and_then(|i| i.head);
        if !head.is_some_and(|head| valid_lhs_variable(&self.arena, head, true)) {
            let span = self.arena[left].span;
            self.error_at(span, ParseErrorKind::ShouldBeVariableName);
        }
        if !self.parse_sep(id, '=') {
            self.error(ParseErrorKind::ShouldBeEqual);
        }
        let chained = starts_assignment(&self.scanner);
        let right = self.parse_node(compound_in(ExprCtx::Normal), id);
        if chained {
            let span = self.arena[right].span;
            self.error_at(span, ParseErrorKind::ChainedAssignment);
        }
        Assignment {
            left: Some(left),
            right: Some(right),
        }
    }

    /// `left` is an already parsed compound naming the fd, attached here.
    pub(crate) fn redir(&mut self, id: NodeId, left: Option<NodeId>) -> Redir {
        let mut redir = Redir {
            left,
            ..Redir::default()
        };
        if let Some(left) = left {
            let start = self.arena[left].span.start;
            self.arena[id].span.start = start;
            self.arena.attach(id, left);
        }

        let begin = self.scanner.pos();
        let sign_start = self.offset();
        while self.peek().is_some_and(is_redir_sign) {
            self.scanner.next();
        }
        redir.mode = RedirMode::from_sign(self.scanner.since(begin));
        if redir.mode.is_none() {
            let span = Span::new(sign_start, self.offset());
            self.error_at(span, ParseErrorKind::BadRedirSign);
        }
        self.add_sep(id);
        self.spaces(id);
        if self.parse_sep(id, '&') {
            redir.right_is_fd = true;
        }

        let right = self.parse_node(compound_in(ExprCtx::Normal), id);
        redir.right = Some(right);
        if is_empty_compound(&self.arena, right) {
            self.error(if redir.right_is_fd {
                ParseErrorKind::ShouldBeFd
            } else {
                ParseErrorKind::ShouldBeFilename
            });
        }
        redir
    }

    pub(crate) fn filter(&mut self, id: NodeId) -> Filter {
        let mut filter = Filter::default();
        self.spaces(id);
        loop {
            match self.peek() {
                Some('&') => filter
                    .opts
                    .push(self.parse_node(NodeKind::MapPair(MapPair::default()), id)),
                Some(c) if starts_compound(c, ExprCtx::Normal) => filter
                    .args
                    .push(self.parse_node(compound_in(ExprCtx::Normal), id)),
                _ => return filter,
            }
            self.spaces(id);
        }
    }

    pub(crate) fn map_pair(&mut self, id: NodeId) -> MapPair {
        self.parse_sep(id, '&');
        let key = self.parse_node(compound_in(ExprCtx::Lhs), id);
        if is_empty_compound(&self.arena, key) {
            self.error(ParseErrorKind::ShouldBeCompound);
        }
        let mut pair = MapPair {
            key: Some(key),
            value: None,
        };
        if self.parse_sep(id, '=') {
            self.spaces_and_newlines(id);
            pair.value = Some(self.parse_node(compound_in(ExprCtx::Normal), id));
        }
        pair
    }
}

pub(crate) fn compound_in(ctx: ExprCtx) -> NodeKind {
    NodeKind::Compound(Compound {
        ctx,
        ..Compound::default()
    })
}

fn is_empty_compound(arena: &NodeArena, id: NodeId) -> bool {
    arena[id]
        .kind
        .as_compound()
        .map_or(true, |c| c.indexings.is_empty())
}

/// Whether `primary` can be assigned to.
///
/// Quoted strings name any variable. A bareword must be a non-empty run of
/// variable-name characters, optionally prefixed by `@` when
/// `allow_sigil` is set. A brace list is valid when each element is a
/// single valid variable, as in `{a,@rest}=(...)`.
pub fn valid_lhs_variable(arena: &NodeArena, primary: NodeId, allow_sigil: bool) -> bool {
    let Some(p) = arena[primary].kind.as_primary() else {
        return false;
    };
    match p.ty {
        PrimaryType::SingleQuoted | PrimaryType::DoubleQuoted => true,
        PrimaryType::Bareword => {
            let Ok(name) = std::str::from_utf8(&p.value) else {
                return false;
            };
            if name.is_empty() {
                return false;
            }
            let name = if allow_sigil {
                name.strip_prefix('@').unwrap_or(name)
            } else {
                name
            };
            name.chars().all(allowed_in_variable_name)
        }
        PrimaryType::Braced => p.braced.iter().all(|&element| {
            let Some(compound) = arena[element].kind.as_compound() else {
                return false;
            };
            let [indexing] = compound.indexings.as_slice() else {
                return false;
            };
            arena[*indexing]
                .kind
                .as_indexing()
                .and_then(|i| i.head)
                .is_some_and(|head| valid_lhs_variable(arena, head, allow_sigil))
        }),
        _ => false,
    }
}

/// Whether the text at the scanner reads as `lhs=`, judged without building
/// any nodes.
///
/// The left side is a quoted string, a brace list, or a variable name with
/// an optional `@`, followed by any number of `[...]` indices. Nested
/// brackets are skipped by counting, so each form start looks at the text
/// of its first word once.
fn starts_assignment(scanner: &Scanner<'_>) -> bool {
    let mut sc = scanner.clone();
    let lhs = match sc.peek() {
        Some('\'') => skip_single_quoted(&mut sc),
        Some('"') => skip_double_quoted(&mut sc),
        Some('{') => {
            sc.next();
            // `{` followed by a space, `;`, `|` or a newline opens a lambda.
            let lambda = sc
                .peek()
                .is_some_and(|c| matches!(c, ';' | '|') || is_whitespace(c));
            !lambda && skip_balanced(&mut sc, 1)
        }
        Some(_) => {
            if sc.peek() == Some('@') {
                sc.next();
            }
            let mut name = false;
            while sc.peek().is_some_and(allowed_in_variable_name) {
                sc.next();
                name = true;
            }
            name
        }
        None => false,
    };
    if !lhs {
        return false;
    }
    while sc.peek() == Some('[') {
        sc.next();
        if !skip_balanced(&mut sc, 1) {
            return false;
        }
    }
    sc.peek() == Some('=')
}

/// Consumes through the closing `'`. `false` at end of input.
fn skip_single_quoted(sc: &mut Scanner<'_>) -> bool {
    sc.next();
    loop {
        match sc.next() {
            None => return false,
            Some('\'') if sc.peek() == Some('\'') => {
                sc.next();
            }
            Some('\'') => return true,
            Some(_) => {}
        }
    }
}

/// Consumes through the closing `"`. `false` at end of input.
fn skip_double_quoted(sc: &mut Scanner<'_>) -> bool {
    sc.next();
    loop {
        match sc.next() {
            None => return false,
            Some('\\') => {
                sc.next();
            }
            Some('"') => return true,
            Some(_) => {}
        }
    }
}

/// Consumes until `depth` open brackets are closed. Quoted strings and
/// comments are skipped whole.
fn skip_balanced(sc: &mut Scanner<'_>, mut depth: usize) -> bool {
    while depth > 0 {
        match sc.peek() {
            None => return false,
            Some('\'') => {
                if !skip_single_quoted(sc) {
                    return false;
                }
            }
            Some('"') => {
                if !skip_double_quoted(sc) {
                    return false;
                }
            }
            Some('#') => {
                while sc.peek().is_some_and(|c| c != '\n') {
                    sc.next();
                }
            }
            Some(c) => {
                sc.next();
                match c {
                    '(' | '[' | '{' => depth += 1,
                    ')' | ']' | '}' => depth -= 1,
                    _ => {}
                }
            }
        }
    }
    true
}
