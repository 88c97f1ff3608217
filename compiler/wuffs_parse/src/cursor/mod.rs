//! Token cursor for navigating the token stream.
//!
//! One token of lookahead. Past the last token every query sees "no token"
//! and [`Cursor::line`] keeps reporting the last line.

use wuffs_ir::{Id, Key, Token, TokenMap};

#[cfg(test)]
mod tests;

pub(crate) struct Cursor<'a> {
    map: &'a TokenMap,
    tokens: &'a [Token],
    pos: usize,
    last_line: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(map: &'a TokenMap, tokens: &'a [Token]) -> Self {
        Cursor {
            map,
            tokens,
            pos: 0,
            last_line: tokens.last().map_or(0, |t| t.line),
        }
    }

    pub(crate) fn map(&self) -> &'a TokenMap {
        self.map
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<Id> {
        self.tokens.get(self.pos).map(|t| t.id)
    }

    #[inline]
    pub(crate) fn peek_key(&self) -> Option<Key> {
        self.peek().map(|id| id.key)
    }

    #[inline]
    pub(crate) fn check(&self, key: Key) -> bool {
        self.peek_key() == Some(key)
    }

    /// Line of the current token, or of the last token at the end.
    pub(crate) fn line(&self) -> u32 {
        self.tokens.get(self.pos).map_or(self.last_line, |t| t.line)
    }

    /// Consume the current token.
    pub(crate) fn advance(&mut self) -> Option<Id> {
        let id = self.peek()?;
        self.pos += 1;
        Some(id)
    }

    /// Consume the current token if it has this key.
    pub(crate) fn eat(&mut self, key: Key) -> bool {
        if self.check(key) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn str(&self, id: Id) -> &'a str {
        self.map.str(id)
    }
}
