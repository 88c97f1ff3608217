//! Source bytes as scanner text.
//!
//! Comments and quoted strings may hold any byte. Elsewhere only ASCII is
//! valid, so each non-ASCII byte there is replaced by a marker that no
//! token starts with, and is reported when the scanner reaches it.

use std::borrow::Cow;

use crate::LexErrorKind;

/// Stand-in for a non-ASCII byte outside comments and strings.
const MARK: char = '\x7F';

#[derive(Clone, Copy, PartialEq, Eq)]
enum Context {
    Code,
    Comment,
    Quoted(u8),
}

pub(crate) struct Source<'a> {
    pub text: Cow<'a, str>,
    /// Offsets in `text` of each marker, with the byte it replaced.
    marks: Vec<(usize, u8)>,
}

impl<'a> Source<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        if src.is_ascii() {
            if let Ok(text) = std::str::from_utf8(src) {
                return Source {
                    text: Cow::Borrowed(text),
                    marks: Vec::new(),
                };
            }
        }

        let mut text = String::with_capacity(src.len());
        let mut marks = Vec::new();
        let mut context = Context::Code;
        let mut i = 0;
        while let Some(&c) = src.get(i) {
            if !c.is_ascii() {
                let run = src[i..].iter().take_while(|b| !b.is_ascii()).count();
                let bytes = &src[i..i + run];
                if context == Context::Code {
                    for &b in bytes {
                        marks.push((text.len(), b));
                        text.push(MARK);
                    }
                } else {
                    // Invalid UTF-8 becomes U+FFFD.
                    text.push_str(&String::from_utf8_lossy(bytes));
                }
                i += run;
                continue;
            }
            context = match (context, c) {
                (_, b'\n') => Context::Code,
                (Context::Code, b'/') if src.get(i + 1) == Some(&b'/') => Context::Comment,
                (Context::Code, b'"' | b'\'') => Context::Quoted(c),
                (Context::Quoted(q), c) if c == q => Context::Code,
                (context, _) => context,
            };
            text.push(char::from(c));
            i += 1;
        }
        Source {
            text: Cow::Owned(text),
            marks,
        }
    }

    /// The error for a byte at `offset` that starts no token.
    pub fn unrecognized(&self, offset: usize) -> LexErrorKind {
        if let Ok(k) = self.marks.binary_search_by_key(&offset, |&(at, _)| at) {
            return LexErrorKind::NonAsciiByte(self.marks[k].1);
        }
        let byte = self.text.as_bytes().get(offset).copied().unwrap_or(0);
        if byte.is_ascii() {
            LexErrorKind::UnrecognizedByte {
                byte,
                ch: char::from(byte),
            }
        } else {
            LexErrorKind::NonAsciiByte(byte)
        }
    }
}
