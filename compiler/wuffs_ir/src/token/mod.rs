//! Token types for the Wuffs lexer.

mod flags;
mod key;
mod map;
mod ops;

pub use flags::KeyFlags;
pub use key::Key;
pub use map::{InternError, TokenMap, BUILTIN_IDENTS, MAX_TOKENS};
pub use ops::{AssocOp, BinaryOp, UnaryOp};

use crate::Name;


/// Number of spellings every [`TokenMap`] pre-interns.
pub(crate) const BUILTIN_COUNT: usize = Key::FIXED.len() + BUILTIN_IDENTS.len();

/// An interned token: its lexical class and its exact spelling.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Id {
    pub key: Key,
    pub name: Name,
}

impl Id {
    #[inline]
    pub fn flags(self) -> KeyFlags {
        self.key.flags()
    }

    /// Whether this spelling was pre-interned: a keyword, operator,
    /// punctuation mark, built-in literal or built-in identifier.
    #[inline]
    pub fn is_builtin(self) -> bool {
        self.name.index() < BUILTIN_COUNT
    }

    pub fn is_literal(self) -> bool {
        self.flags().contains(KeyFlags::LITERAL)
    }

    pub fn is_num_literal(self) -> bool {
        self.flags().contains(KeyFlags::NUM_LITERAL)
    }

    pub fn is_str_literal(self) -> bool {
        self.flags().contains(KeyFlags::STR_LITERAL)
    }

    pub fn is_ident(self) -> bool {
        self.key == Key::Ident
    }

    pub fn is_open(self) -> bool {
        self.flags().contains(KeyFlags::OPEN)
    }

    pub fn is_close(self) -> bool {
        self.flags().contains(KeyFlags::CLOSE)
    }

    pub fn is_tight_left(self) -> bool {
        self.flags().contains(KeyFlags::TIGHT_LEFT)
    }

    pub fn is_tight_right(self) -> bool {
        self.flags().contains(KeyFlags::TIGHT_RIGHT)
    }

    pub fn is_implicit_semicolon(self) -> bool {
        self.flags().contains(KeyFlags::IMPLICIT_SEMICOLON)
    }

    pub fn is_assign(self) -> bool {
        self.flags().contains(KeyFlags::ASSIGN)
    }

    pub fn is_unary_op(self) -> bool {
        self.flags().contains(KeyFlags::UNARY)
    }

    pub fn is_binary_op(self) -> bool {
        self.flags().contains(KeyFlags::BINARY)
    }

    pub fn is_associative_op(self) -> bool {
        self.flags().contains(KeyFlags::ASSOCIATIVE)
    }

    pub fn unary_form(self) -> Option<UnaryOp> {
        self.key.unary_form()
    }

    pub fn binary_form(self) -> Option<BinaryOp> {
        self.key.binary_form()
    }

    pub fn associative_form(self) -> Option<AssocOp> {
        self.key.associative_form()
    }
}

/// A token and the 1-based source line it was seen on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub id: Id,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(id: Id, line: u32) -> Self {
        Token { id, line }
    }
}
