//! Recursive descent parser for Wuffs.
//!
//! [`parse`] turns one file's tokens into an owned [`File`] AST. Parsing is
//! strict: one token of lookahead, no backtracking and no error recovery, so
//! the first grammar or rule violation aborts the whole file.
//!
//! Besides the grammar, the parser enforces the rules that are decidable from
//! the token stream alone: assertion chain order, `var` placement, reserved
//! and double-underscore names, `packageid` validity and effect discipline.

mod cursor;
mod error;
mod grammar;

use std::rc::Rc;

use tracing::debug;
use wuffs_ir::ast::{Effect, Expr, File, Loc};
use wuffs_ir::{Id, Key, Token, TokenMap};

pub use error::{ParseError, ParseErrorKind};

use cursor::Cursor;

#[cfg(test)]
mod tests;

/// Rules the standard library relaxes for itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept built-in identifiers such as `u8` or `read_u8` as user names.
    pub allow_builtin_names: bool,
    /// Accept user names starting with `__`.
    pub allow_double_underscore_names: bool,
}

/// Parse a whole file.
pub fn parse(
    map: &TokenMap,
    filename: &str,
    tokens: &[Token],
    options: &ParseOptions,
) -> Result<File, ParseError> {
    let mut parser = Parser::new(map, filename, tokens, *options);
    let file = parser.parse_file()?;
    debug!(
        filename,
        tokens = tokens.len(),
        decls = file.decls.len(),
        "parsed"
    );
    Ok(file)
}

/// Parse a single expression, optionally followed by one `;`.
pub fn parse_expr(
    map: &TokenMap,
    filename: &str,
    tokens: &[Token],
    options: &ParseOptions,
) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(map, filename, tokens, *options);
    let expr = parser.parse_expr()?;
    parser.cursor.eat(Key::Semicolon);
    if !parser.cursor.is_at_end() {
        return Err(parser.expected("end of expression"));
    }
    Ok(expr)
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    filename: Rc<str>,
    options: ParseOptions,
    /// Effect of the function whose body is being parsed.
    func_effect: Effect,
    /// Set at the top of a function body, cleared by the first non-`var`.
    allow_var: bool,
    expr_depth: u32,
    type_depth: u32,
}

impl<'a> Parser<'a> {
    fn new(map: &'a TokenMap, filename: &str, tokens: &'a [Token], options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(map, tokens),
            filename: filename.into(),
            options,
            func_effect: Effect::Pure,
            allow_var: false,
            expr_depth: 0,
            type_depth: 0,
        }
    }

    fn loc(&self) -> Loc {
        Loc {
            filename: Rc::clone(&self.filename),
            line: self.cursor.line(),
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            filename: self.filename.to_string(),
            line: self.cursor.line(),
        }
    }

    /// An error naming what should have come instead of the current token.
    fn expected(&self, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        match self.cursor.peek() {
            Some(id) => self.error(ParseErrorKind::Expected {
                expected,
                got: self.cursor.str(id).to_owned(),
            }),
            None => self.error(ParseErrorKind::UnexpectedEof { expected }),
        }
    }

    /// Consume a token with this key or fail.
    fn expect(&mut self, key: Key) -> Result<Id, ParseError> {
        match self.cursor.peek() {
            Some(id) if id.key == key => {
                self.cursor.advance();
                Ok(id)
            }
            _ => Err(self.expected(describe(key))),
        }
    }

    /// Source text of an expression, for diagnostics.
    fn text(&self, expr: &Expr) -> String {
        expr.display(self.cursor.map()).to_string()
    }
}

/// How a key is named in "expected ..." messages.
fn describe(key: Key) -> String {
    match key {
        Key::Semicolon => r#"(implicit) ";""#.to_owned(),
        Key::Ident => "identifier".to_owned(),
        Key::DqStrLiteral | Key::SqStrLiteral => "string literal".to_owned(),
        Key::NumLiteral => "numeric literal".to_owned(),
        _ => match key.spelling() {
            Some(s) => format!("{s:?}"),
            None => format!("{key:?}"),
        },
    }
}
