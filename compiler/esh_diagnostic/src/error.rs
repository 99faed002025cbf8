//! Diagnostics and their aggregation.

use std::fmt;

use crate::SourceContext;

/// One diagnostic tied to a range of source code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{ty}: {} in {}: {message}", .context.span, .context.name)]
pub struct Error {
    /// Kind of diagnostic, like `parse error`.
    pub ty: &'static str,
    pub message: String,
    pub context: SourceContext,
    /// The error starts at the very end of the source, so more input might
    /// resolve it.
    pub partial: bool,
}

impl Error {
    /// Builds an error, deriving `partial` from where the span starts.
    pub fn new(ty: &'static str, message: impl Into<String>, context: SourceContext) -> Self {
        let partial = context.span.start as usize == context.source.len();
        Error {
            ty,
            message: message.into(),
            context,
            partial,
        }
    }

    /// Multi-line rendering: title line, then the source excerpt.
    pub fn show(&self, indent: &str, colors: bool) -> String {
        let title = capitalize(self.ty);
        let message = if colors {
            format!("\x1b[31;1m{}\x1b[m", self.message)
        } else {
            self.message.clone()
        };
        format!(
            "{title}: {message}\n{indent}{}",
            self.context.pprint_compact(indent, colors)
        )
    }
}

/// Every error one call produced, in the order they were found. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Errors {
    entries: Vec<Error>,
}

impl Errors {
    /// `None` when there is nothing to report.
    pub fn pack(entries: Vec<Error>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Errors { entries })
        }
    }

    #[inline]
    pub fn entries(&self) -> &[Error] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every error sits at end of input.
    ///
    /// An interactive reader uses this to decide between asking for another
    /// line and reporting the errors.
    pub fn all_partial(&self) -> bool {
        self.entries.iter().all(|e| e.partial)
    }

    pub fn show(&self, indent: &str, colors: bool) -> String {
        match self.entries.as_slice() {
            [only] => only.show(indent, colors),
            entries => {
                let first = &entries[0];
                let mut out = format!(
                    "Multiple {}s in {}:",
                    first.ty, first.context.name
                );
                let inner = format!("{indent}    ");
                for e in entries {
                    out.push('\n');
                    out.push_str(indent);
                    out.push_str("  ");
                    if colors {
                        out.push_str(&format!("\x1b[31;1m{}\x1b[m", e.message));
                    } else {
                        out.push_str(&e.message);
                    }
                    out.push('\n');
                    out.push_str(&inner);
                    out.push_str(&e.context.pprint_compact(&inner, colors));
                }
                out
            }
        }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entries.as_slice() {
            [only] => write!(f, "{only}"),
            entries => {
                let first = &entries[0];
                write!(f, "multiple {}s in {}: ", first.ty, first.context.name)?;
                for (i, e) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}: {}", e.context.span, e.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Errors {}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
