//! Source text handed to the parser.

use std::sync::Arc;

/// A piece of code together with the name used to describe it in errors.
///
/// The code is reference counted: every diagnostic produced for this source
/// keeps a handle to it instead of a copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Source {
    pub name: String,
    pub code: Arc<str>,
    /// Whether `name` is a file path rather than a label like `[tty]`.
    pub is_file: bool,
}

impl Source {
    /// Source that did not come from a file (`[tty]`, `[eval]`, ...).
    pub fn new(name: impl Into<String>, code: impl Into<Arc<str>>) -> Self {
        Source {
            name: name.into(),
            code: code.into(),
            is_file: false,
        }
    }

    /// Source read from the file at `path`.
    pub fn file(path: impl Into<String>, code: impl Into<Arc<str>>) -> Self {
        Source {
            is_file: true,
            ..Source::new(path, code)
        }
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}
