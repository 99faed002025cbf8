//! Quoted string bodies.
//!
//! Both readers start right after the opening quote and stop after the
//! closing one. They return raw bytes since `\xHH` and octal escapes can
//! spell out invalid UTF-8.

use esh_ir::Span;

use crate::error::ParseErrorKind;
use crate::parser::Parser;

/// `\a \b \f \n \r \t \v \\ \" \e` and the characters they stand for.
pub(crate) const DOUBLE_ESCAPES: [(char, char); 10] = [
    ('a', '\x07'),
    ('b', '\x08'),
    ('f', '\x0c'),
    ('n', '\n'),
    ('r', '\r'),
    ('t', '\t'),
    ('v', '\x0b'),
    ('\\', '\\'),
    ('"', '"'),
    ('e', '\x1b'),
];

fn push_char(buf: &mut Vec<u8>, c: char) {
    let mut utf8 = [0; 4];
    buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
}

impl Parser<'_> {
    /// `''` stands for one quote; nothing else is special.
    pub(super) fn single_quoted_inner(&mut self) -> Vec<u8> {
        let mut buf = Vec::new();
        loop {
            match self.scanner.next() {
                None => {
                    self.error(ParseErrorKind::StringUnterminated);
                    return buf;
                }
                Some('\'') if self.peek_is('\'') => {
                    self.scanner.next();
                    buf.push(b'\'');
                }
                Some('\'') => return buf,
                Some(c) => push_char(&mut buf, c),
            }
        }
    }

    pub(super) fn double_quoted_inner(&mut self) -> Vec<u8> {
        let mut buf = Vec::new();
        loop {
            match self.scanner.next() {
                None => {
                    self.error(ParseErrorKind::StringUnterminated);
                    return buf;
                }
                Some('"') => return buf,
                Some('\\') => self.escape(&mut buf),
                Some(c) => push_char(&mut buf, c),
            }
        }
    }

    /// One escape sequence after its backslash. Malformed sequences record
    /// an error and write nothing.
    #[allow(clippy::cast_possible_truncation)]
    fn escape(&mut self, buf: &mut Vec<u8>) {
        match self.scanner.next() {
            Some('c' | '^') => {
                let target = self.scanner.next();
                match target {
                    Some('?') => buf.push(0x7F),
                    Some(c @ '\x3F'..='\x5F') => buf.push(c as u8 - 0x40),
                    _ => {
                        self.scanner.backup();
                        self.error(ParseErrorKind::InvalidEscapeControl);
                        self.scanner.next();
                    }
                }
            }
            Some(kind @ ('x' | 'u' | 'U')) => {
                let digits = match kind {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let Some(value) = self.hex_digits(digits) else {
                    return;
                };
                if kind == 'x' {
                    buf.push(value as u8);
                } else {
                    push_char(buf, char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
            }
            Some(first @ '0'..='7') => {
                let start = self.offset() - 2;
                let mut value = first.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match self.scanner.next().and_then(|d| d.to_digit(8)) {
                        Some(d) => value = value * 8 + d,
                        None => {
                            self.scanner.backup();
                            self.error(ParseErrorKind::InvalidEscapeOct);
                            return;
                        }
                    }
                }
                match u8::try_from(value) {
                    Ok(byte) => buf.push(byte),
                    Err(_) => {
                        let span = Span::new(start, self.offset());
                        self.error_at(span, ParseErrorKind::InvalidEscapeOctOverflow);
                    }
                }
            }
            c => match DOUBLE_ESCAPES.iter().find(|(name, _)| Some(*name) == c) {
                Some(&(_, ch)) => push_char(buf, ch),
                None => {
                    self.scanner.backup();
                    self.error(ParseErrorKind::InvalidEscape);
                    self.scanner.next();
                }
            },
        }
    }

    fn hex_digits(&mut self, count: usize) -> Option<u32> {
        let mut value: u32 = 0;
        for _ in 0..count {
            match self.scanner.next().and_then(|c| c.to_digit(16)) {
                Some(d) => value = value.wrapping_mul(16).wrapping_add(d),
                None => {
                    self.scanner.backup();
                    self.error(ParseErrorKind::InvalidEscapeHex);
                    return None;
                }
            }
        }
        Some(value)
    }
}
