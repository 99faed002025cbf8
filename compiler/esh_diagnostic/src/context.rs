//! A span of a named source, and how to show it.

use std::fmt::Write as _;
use std::sync::Arc;

use esh_ir::Span;

use crate::span_utils::LineOffsetTable;

const CULPRIT_BEGIN: &str = "\x1b[1;4m";
const CULPRIT_END: &str = "\x1b[m";
const CULPRIT_PLACEHOLDER: &str = "^";

/// Where in which source something happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceContext {
    pub name: String,
    pub source: Arc<str>,
    pub span: Span,
}

/// The lines surrounding a [`SourceContext`], split around the span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Excerpt<'a> {
    /// Text between the start of the first line and the span.
    pub head: &'a str,
    /// Text of the span, minus one trailing newline.
    pub culprit: &'a str,
    /// Text between the span and the end of its last line. Empty when the
    /// culprit ended with a newline.
    pub tail: &'a str,
    /// 1-based line of the first culprit character.
    pub begin_line: u32,
    /// 1-based line of the last culprit character.
    pub end_line: u32,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: Arc<str>, span: Span) -> Self {
        SourceContext {
            name: name.into(),
            source,
            span,
        }
    }

    /// `None` if the span does not lie on character boundaries of the source.
    pub fn excerpt(&self) -> Option<Excerpt<'_>> {
        let range = self.span.to_range();
        let before = self.source.get(..range.start)?;
        let mut culprit = self.source.get(range.clone())?;
        let after = self.source.get(range.end..)?;

        let head = before.rfind('\n').map_or(before, |i| &before[i + 1..]);
        let begin_line = LineOffsetTable::build(&self.source).line_from_offset(self.span.start);

        let tail = if let Some(stripped) = culprit.strip_suffix('\n') {
            culprit = stripped;
            ""
        } else {
            after.split('\n').next().unwrap_or_default()
        };
        let extra_lines = culprit.matches('\n').count();
        let end_line = begin_line + u32::try_from(extra_lines).unwrap_or(u32::MAX - begin_line);

        Some(Excerpt {
            head,
            culprit,
            tail,
            begin_line,
            end_line,
        })
    }

    /// 1-based line and column where the span starts.
    pub fn line_col(&self) -> (u32, u32) {
        LineOffsetTable::build(&self.source).offset_to_line_col(&self.source, self.span.start)
    }

    /// `name:line:col:` for the start of the span.
    pub fn location(&self) -> Option<String> {
        self.excerpt()?;
        let (line, col) = self.line_col();
        Some(format!("{}:{line}:{col}:", self.name))
    }

    /// Location followed by the excerpt. Continuation lines of a multi-line
    /// culprit are aligned under the first one.
    pub fn pprint_compact(&self, indent: &str, colors: bool) -> String {
        let Some(location) = self.location() else {
            return self.invalid_position();
        };
        let desc = format!("{location} ");
        let desc_indent = " ".repeat(desc.chars().count());
        let source = self.relevant_source(&format!("{indent}{desc_indent}"), colors);
        desc + &source
    }

    fn invalid_position(&self) -> String {
        format!("{}, invalid position {}", self.name, self.span)
    }

    /// The excerpt with the culprit marked: underlined when `colors` is set,
    /// otherwise by a row of carets below the first culprit line.
    fn relevant_source(&self, indent: &str, colors: bool) -> String {
        let Some(excerpt) = self.excerpt() else {
            return String::new();
        };
        let culprit = if excerpt.culprit.is_empty() {
            CULPRIT_PLACEHOLDER
        } else {
            excerpt.culprit
        };

        let mut buf = String::from(excerpt.head);
        for (i, line) in culprit.split('\n').enumerate() {
            if i > 0 {
                buf.push('\n');
                buf.push_str(indent);
            }
            if colors {
                let _ = write!(buf, "{CULPRIT_BEGIN}{line}{CULPRIT_END}");
            } else {
                buf.push_str(line);
            }
        }
        buf.push_str(excerpt.tail);

        if !colors && !excerpt.culprit.is_empty() {
            let first = culprit.split('\n').next().unwrap_or_default();
            let _ = write!(
                buf,
                "\n{indent}{}{}",
                " ".repeat(excerpt.head.chars().count()),
                "^".repeat(first.chars().count().max(1))
            );
        }
        buf
    }
}
