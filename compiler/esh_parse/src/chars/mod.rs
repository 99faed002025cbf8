//! Character classes of the grammar.

use esh_ir::ExprCtx;
use unicode_general_category::{get_general_category, GeneralCategory};

#[inline]
pub fn is_inline_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[inline]
pub fn is_whitespace(c: char) -> bool {
    is_inline_whitespace(c) || c == '\r' || c == '\n'
}

#[inline]
pub(crate) fn is_pipeline_sep(c: char) -> bool {
    c == '\r' || c == '\n' || c == ';'
}

#[inline]
pub(crate) fn is_redir_sign(c: char) -> bool {
    c == '<' || c == '>'
}

#[inline]
pub(crate) fn is_braced_sep(c: char) -> bool {
    c == ',' || is_whitespace(c)
}

/// Letters, digits, `-_:~`, and any printable non-ASCII code point.
pub fn allowed_in_variable_name(c: char) -> bool {
    (!c.is_ascii() && is_printable(c))
        || c.is_ascii_alphanumeric()
        || matches!(c, '-' | '_' | ':' | '~')
}

/// Whether `c` may appear in an unquoted bareword in context `ctx`.
///
/// Every context accepts variable-name characters and `./\@%+!`. `=` is
/// rejected in [`ExprCtx::Lhs`], `,` in [`ExprCtx::BracedElem`], and `<>*^`
/// are accepted only in [`ExprCtx::Cmd`].
pub fn allowed_in_bareword(c: char, ctx: ExprCtx) -> bool {
    bareword_char(
        c,
        ctx != ExprCtx::Lhs,
        ctx != ExprCtx::BracedElem,
        ctx == ExprCtx::Cmd,
    )
}

/// Characters accepted in barewords in every context.
pub fn allowed_in_strict_bareword(c: char) -> bool {
    bareword_char(c, false, false, false)
}

fn bareword_char(c: char, eq: bool, comma: bool, cmd: bool) -> bool {
    allowed_in_variable_name(c)
        || matches!(c, '.' | '/' | '\\' | '@' | '%' | '+' | '!')
        || (eq && c == '=')
        || (comma && c == ',')
        || (cmd && matches!(c, '<' | '>' | '*' | '^'))
}

pub(crate) fn starts_primary(c: char, ctx: ExprCtx) -> bool {
    matches!(c, '\'' | '"' | '$' | '?' | '*' | '(' | '[' | '{') || allowed_in_bareword(c, ctx)
}

#[inline]
pub(crate) fn starts_indexing(c: char, ctx: ExprCtx) -> bool {
    starts_primary(c, ctx)
}

#[inline]
pub(crate) fn starts_compound(c: char, ctx: ExprCtx) -> bool {
    starts_indexing(c, ctx)
}

pub(crate) fn starts_form(c: char) -> bool {
    is_inline_whitespace(c) || starts_compound(c, ExprCtx::Cmd)
}

#[inline]
pub(crate) fn starts_pipeline(c: char) -> bool {
    starts_form(c)
}

pub(crate) fn starts_array(c: char) -> bool {
    is_whitespace(c) || starts_indexing(c, ExprCtx::Normal)
}

/// Whether a code point is a letter, mark, number, punctuation or symbol,
/// or the ASCII space.
///
/// Unassigned, private-use and surrogate code points are not printable, nor
/// is any separator other than U+0020.
pub fn is_printable(c: char) -> bool {
    use GeneralCategory as G;
    c == ' '
        || !matches!(
            get_general_category(c),
            G::Control
                | G::Format
                | G::Surrogate
                | G::PrivateUse
                | G::Unassigned
                | G::SpaceSeparator
                | G::LineSeparator
                | G::ParagraphSeparator
        )
}
