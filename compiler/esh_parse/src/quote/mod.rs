//! Turning arbitrary byte strings into source text.
//!
//! Every function here produces text that parses back, as a Primary, to the
//! exact input bytes. The lightest form that can hold the input wins:
//! bareword, then single quotes, then double quotes.

use std::fmt::Write;

use esh_ir::PrimaryType;

use crate::chars::{allowed_in_strict_bareword, allowed_in_variable_name, is_printable};
use crate::grammar::DOUBLE_ESCAPES;

/// Quote `s` as a bareword when possible.
pub fn quote(s: impl AsRef<[u8]>) -> String {
    quote_as(s, PrimaryType::Bareword).0
}

/// Quote `s` for use after `$`.
pub fn quote_variable_name(s: impl AsRef<[u8]>) -> String {
    let bytes = s.as_ref();
    if bytes.is_empty() {
        return "''".to_string();
    }
    match std::str::from_utf8(bytes) {
        Ok(name) if name.chars().all(allowed_in_variable_name) => name.to_string(),
        _ => quote_as(bytes, PrimaryType::SingleQuoted).0,
    }
}

/// Quote `s`, preferring the form `ty` asks for.
///
/// `Bareword` falls back to single quotes, and single quotes fall back to
/// double quotes when `s` is not printable UTF-8. `DoubleQuoted` is always
/// honored. Returns the text and the form actually used.
pub fn quote_as(s: impl AsRef<[u8]>, ty: PrimaryType) -> (String, PrimaryType) {
    let bytes = s.as_ref();
    if ty == PrimaryType::DoubleQuoted {
        return (quote_double(bytes), PrimaryType::DoubleQuoted);
    }
    let Ok(text) = std::str::from_utf8(bytes) else {
        return (quote_double(bytes), PrimaryType::DoubleQuoted);
    };
    if text.is_empty() {
        return ("''".to_string(), PrimaryType::SingleQuoted);
    }
    if !text.chars().all(is_printable) {
        return (quote_double(bytes), PrimaryType::DoubleQuoted);
    }
    if ty == PrimaryType::Bareword
        && !text.starts_with('~')
        && text.chars().all(allowed_in_strict_bareword)
    {
        return (text.to_string(), PrimaryType::Bareword);
    }
    (quote_single(text), PrimaryType::SingleQuoted)
}

fn quote_single(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

fn quote_double(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            if let Some(&(name, _)) = DOUBLE_ESCAPES.iter().find(|&&(_, ch)| ch == c) {
                out.push('\\');
                out.push(name);
            } else if is_printable(c) {
                out.push(c);
            } else {
                let cp = u32::from(c);
                // Writing to a String cannot fail.
                let _ = match cp {
                    0..=0x7F => write!(out, "\\x{cp:02x}"),
                    0x80..=0xFFFF => write!(out, "\\u{cp:04x}"),
                    _ => write!(out, "\\U{cp:08x}"),
                };
            }
        }
        for byte in chunk.invalid() {
            let _ = write!(out, "\\x{byte:02x}");
        }
    }
    out.push('"');
    out
}
