//! Lexer for Wuffs using logos with string interning.
//!
//! [`tokenize`] turns source bytes into a flat token list plus the `//`
//! comment text of every line. Spellings are interned into a caller-owned
//! [`TokenMap`], so files compiled together share one set of [`Id`]s.
//!
//! A newline after a token that can end a statement (a literal, an
//! identifier, a close bracket, `return`, `break` or `continue`) produces an
//! implicit `;` token on that line.

mod escape;
mod lex_error;
mod raw_token;
mod source;

use logos::Logos;
use tracing::debug;
use wuffs_ir::{Id, Token, TokenMap};

pub use escape::unescape;
pub use lex_error::{LexError, LexErrorKind};

use raw_token::RawToken;
use source::Source;

#[cfg(test)]
mod tests;

/// Longest identifier, numeric constant or quoted string, in bytes.
pub const MAX_TOKEN_SIZE: usize = 1023;

/// Highest line number a source file may reach.
pub const MAX_LINES: u32 = (1 << 20) - 1;

/// Output of [`tokenize`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    /// `comments[line]` is the `//` comment on that line, or `""`. The list
    /// stops at the last line with a comment.
    pub comments: Vec<String>,
}

/// Lex `src` into tokens, interning every spelling into `map`.
pub fn tokenize(map: &mut TokenMap, filename: &str, src: &[u8]) -> Result<Lexed, LexError> {
    let source = Source::new(src);

    let mut lexer = Lexer {
        map,
        lexed: Lexed::default(),
        line: 1,
        semicolon: None,
    };
    let result = lexer.run(&source);
    let line = lexer.line;
    match result {
        Ok(()) => {
            debug!(
                filename,
                tokens = lexer.lexed.tokens.len(),
                lines = line,
                "tokenized"
            );
            Ok(lexer.lexed)
        }
        Err(kind) => Err(LexError {
            kind,
            filename: filename.to_owned(),
            line,
        }),
    }
}

struct Lexer<'m> {
    map: &'m mut TokenMap,
    lexed: Lexed,
    line: u32,
    semicolon: Option<Id>,
}

impl Lexer<'_> {
    fn run(&mut self, source: &Source<'_>) -> Result<(), LexErrorKind> {
        let mut logos = RawToken::lexer(&source.text);

        while let Some(token_result) = logos.next() {
            let slice = logos.slice();

            match token_result {
                Ok(RawToken::Newline) => self.newline()?,
                Ok(RawToken::LineComment) => self.comment(slice),
                Ok(RawToken::DqQuote) => {
                    let len = scan_string(logos.remainder().as_bytes(), b'"')?;
                    logos.bump(len);
                    self.push_str(logos.slice())?;
                }
                Ok(RawToken::SqQuote) => {
                    let rest = logos.remainder().as_bytes();
                    let mut len = scan_string(rest, b'\'')?;
                    let has_endian = matches!(rest.get(len..len + 2), Some(b"be" | b"le"));
                    if has_endian {
                        len += 2;
                    }
                    logos.bump(len);
                    let s = logos.slice();
                    match unescape(s) {
                        None => return Err(LexErrorKind::InvalidSqString),
                        Some(bytes) if bytes.len() > 1 && !has_endian => {
                            return Err(LexErrorKind::MissingEndianSuffix);
                        }
                        Some(_) => {}
                    }
                    self.push_str(s)?;
                }
                Ok(RawToken::Ident) => {
                    if slice.len() > MAX_TOKEN_SIZE {
                        return Err(LexErrorKind::IdentTooLong);
                    }
                    self.push(slice)?;
                }
                Ok(RawToken::Decimal) => {
                    let b = slice.as_bytes();
                    if b.len() > 1 && b[0] == b'0' && b[1].is_ascii_digit() {
                        return Err(LexErrorKind::LegacyOctal);
                    }
                    self.push_number(slice)?;
                }
                Ok(RawToken::Hex) => {
                    if slice.len() == 2 {
                        return Err(LexErrorKind::InvalidNumericLiteral);
                    }
                    self.push_number(slice)?;
                }
                Ok(RawToken::Punct(key)) => {
                    // Every punctuation key is pre-interned.
                    let id = self.map.insert(slice)?;
                    debug_assert_eq!(id.key, key);
                    self.push_id(id);
                }
                Err(()) => return Err(source.unrecognized(logos.span().start)),
            }
        }
        Ok(())
    }

    fn newline(&mut self) -> Result<(), LexErrorKind> {
        if self
            .lexed
            .tokens
            .last()
            .is_some_and(|t| t.id.is_implicit_semicolon())
        {
            let semicolon = match self.semicolon {
                Some(id) => id,
                None => {
                    let id = self.map.insert(";")?;
                    self.semicolon = Some(id);
                    id
                }
            };
            self.push_id(semicolon);
        }
        if self.line == MAX_LINES {
            return Err(LexErrorKind::TooManyLines);
        }
        self.line += 1;
        Ok(())
    }

    fn comment(&mut self, text: &str) {
        let line = self.line as usize;
        let comments = &mut self.lexed.comments;
        if comments.len() <= line {
            comments.resize(line + 1, String::new());
        }
        comments[line] = text.to_owned();
    }

    fn push_str(&mut self, s: &str) -> Result<(), LexErrorKind> {
        if s.len() > MAX_TOKEN_SIZE {
            return Err(LexErrorKind::StringTooLong);
        }
        self.push(s)
    }

    fn push_number(&mut self, s: &str) -> Result<(), LexErrorKind> {
        if s.len() > MAX_TOKEN_SIZE {
            return Err(LexErrorKind::ConstantTooLong);
        }
        if !check_numeric_underscores(s.as_bytes()) {
            return Err(LexErrorKind::InvalidNumericLiteral);
        }
        self.push(s)
    }

    fn push(&mut self, s: &str) -> Result<(), LexErrorKind> {
        let id = self.map.insert(s)?;
        self.push_id(id);
        Ok(())
    }

    fn push_id(&mut self, id: Id) {
        self.lexed.tokens.push(Token::new(id, self.line));
    }
}

/// Length of a string body up to and including the closing `quote`.
fn scan_string(rest: &[u8], quote: u8) -> Result<usize, LexErrorKind> {
    let unterminated = LexErrorKind::UnterminatedString {
        quote: char::from(quote),
    };
    for (j, &c) in rest.iter().enumerate() {
        if c == quote {
            return Ok(j + 1);
        }
        match c {
            b'\\' if quote == b'"' => return Err(LexErrorKind::BackslashInDqString),
            b'\n' => return Err(unterminated),
            c if c < b' ' => return Err(LexErrorKind::ControlCharInString),
            _ => {}
        }
    }
    Err(unterminated)
}

/// Rejects consecutive or trailing underscores.
fn check_numeric_underscores(a: &[u8]) -> bool {
    let mut prev_underscore = false;
    for &c in a {
        let curr_underscore = c == b'_';
        if prev_underscore && curr_underscore {
            return false;
        }
        prev_underscore = curr_underscore;
    }
    !prev_underscore
}
