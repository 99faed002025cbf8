//! CLI commands.

mod check;
mod dump;
mod quote;

pub use check::{check_files, CheckReport};
pub use dump::{dump, DumpKind};
pub use quote::quote_args;

use esh_diagnostic::emitter::ColorMode;
use esh_ir::Source;

/// Failure to set up a command, reported before any parsing happens.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown color mode '{0}', expected auto, always or never")]
    BadColorMode(String),
}

/// Where the code of a `parse` or `tree` command comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    File(String),
    /// Code given with `-c`.
    Inline(String),
}

impl Input {
    /// `-c <code>` or `<file>`; `None` when neither is present.
    pub fn from_args(args: &[String]) -> Option<Self> {
        match args {
            [flag, code, ..] if flag == "-c" => Some(Input::Inline(code.clone())),
            [path, ..] if !path.starts_with('-') => Some(Input::File(path.clone())),
            _ => None,
        }
    }

    pub fn load(&self) -> Result<Source, CliError> {
        match self {
            Input::File(path) => read_source(path),
            Input::Inline(code) => Ok(Source::new("[-c]", code.as_str())),
        }
    }
}

/// Read a file as a [`Source`], mapping I/O failures to messages.
pub fn read_source(path: &str) -> Result<Source, CliError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Source::file(path, content)),
        Err(e) => Err(match e.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound(path.to_string()),
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied(path.to_string()),
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8(path.to_string()),
            _ => CliError::Io {
                path: path.to_string(),
                source: e,
            },
        }),
    }
}

/// Pull a `--color=<mode>` option out of `args`.
pub fn take_color_mode(args: &mut Vec<String>) -> Result<ColorMode, CliError> {
    let mut mode = ColorMode::Auto;
    let mut err = None;
    args.retain(|arg| {
        let Some(value) = arg.strip_prefix("--color=") else {
            return true;
        };
        match value {
            "auto" => mode = ColorMode::Auto,
            "always" => mode = ColorMode::Always,
            "never" => mode = ColorMode::Never,
            other => err = Some(CliError::BadColorMode(other.to_string())),
        }
        false
    });
    err.map_or(Ok(mode), Err)
}

#[cfg(test)]
mod tests;
