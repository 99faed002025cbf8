//! Parse error kinds.
//!
//! Each kind has a fixed text and a list of acceptable alternatives. The
//! message joins them the same way for every kind:
//!
//! | text  | expected     | message                       |
//! |-------|--------------|-------------------------------|
//! | `t`   | none         | `t`                           |
//! | empty | `a`          | `should be a`                 |
//! | `t`   | `a`, `b`     | `t, should be a or b`         |
//! | empty | `a`, `b`, `c`| `should be a, b or c`         |

use std::fmt;

/// Type label of every parse diagnostic.
pub const PARSE_ERROR: &str = "parse error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    ShouldBeForm,
    BadRedirSign,
    ShouldBeFd,
    ShouldBeFilename,
    ShouldBeArray,
    StringUnterminated,
    InvalidEscape,
    InvalidEscapeOct,
    InvalidEscapeOctOverflow,
    InvalidEscapeHex,
    InvalidEscapeControl,
    ShouldBePrimary,
    ShouldBeVariableName,
    ShouldBeRBracket,
    ShouldBeRBrace,
    ShouldBeBraceSepOrRBracket,
    ShouldBeRParen,
    ShouldBeCompound,
    ShouldBePipe,
    ShouldBeEqual,
    BothElementsAndPairs,
    ChainedAssignment,
    ShouldBeNewline,
    UnexpectedRune(char),
}

impl ParseErrorKind {
    /// Fixed description, empty for pure "should be" errors.
    pub fn text(self) -> &'static str {
        match self {
            ParseErrorKind::BadRedirSign => "bad redir sign",
            ParseErrorKind::StringUnterminated => "string not terminated",
            ParseErrorKind::InvalidEscape
            | ParseErrorKind::InvalidEscapeOct
            | ParseErrorKind::InvalidEscapeHex => "invalid escape sequence",
            ParseErrorKind::InvalidEscapeOctOverflow => "invalid octal escape sequence",
            ParseErrorKind::InvalidEscapeControl => "invalid control sequence",
            ParseErrorKind::BothElementsAndPairs => {
                "cannot contain both list elements and map pairs"
            }
            ParseErrorKind::ChainedAssignment => "chained assignment is not allowed",
            ParseErrorKind::UnexpectedRune(_) => "unexpected rune",
            _ => "",
        }
    }

    pub fn expected(self) -> &'static [&'static str] {
        match self {
            ParseErrorKind::ShouldBeForm => &["form"],
            ParseErrorKind::BadRedirSign => &["'<'", "'>'", "'>>'", "'<>'"],
            ParseErrorKind::ShouldBeFd => &["a composite term representing fd"],
            ParseErrorKind::ShouldBeFilename => &["a composite term representing filename"],
            ParseErrorKind::ShouldBeArray => &["spaced"],
            ParseErrorKind::InvalidEscapeOct => &["octal digit"],
            ParseErrorKind::InvalidEscapeOctOverflow => &["below 256"],
            ParseErrorKind::InvalidEscapeHex => &["hex digit"],
            ParseErrorKind::InvalidEscapeControl => &["a codepoint between 0x3F and 0x5F"],
            ParseErrorKind::ShouldBePrimary => {
                &["single-quoted string", "double-quoted string", "bareword"]
            }
            ParseErrorKind::ShouldBeVariableName => &["variable name"],
            ParseErrorKind::ShouldBeRBracket => &["']'"],
            ParseErrorKind::ShouldBeRBrace => &["'}'"],
            ParseErrorKind::ShouldBeBraceSepOrRBracket => &["','", "'}'"],
            ParseErrorKind::ShouldBeRParen => &["')'"],
            ParseErrorKind::ShouldBeCompound => &["compound"],
            ParseErrorKind::ShouldBePipe => &["'|'"],
            ParseErrorKind::ShouldBeEqual => &["'='"],
            ParseErrorKind::ShouldBeNewline => &["newline"],
            _ => &[],
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let ParseErrorKind::UnexpectedRune(c) = self {
            return write!(f, "{} {c:?}", self.text());
        }
        let text = self.text();
        let expected = self.expected();
        f.write_str(text)?;
        if expected.is_empty() {
            return Ok(());
        }
        if !text.is_empty() {
            f.write_str(", ")?;
        }
        f.write_str("should be ")?;
        f.write_str(&format_expected(expected))
    }
}

/// `a`, `a or b`, `a, b or c`.
pub fn format_expected(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}
