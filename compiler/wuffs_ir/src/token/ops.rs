//! Operator forms.
//!
//! One surface token can have several forms: `+` is a unary, a binary and
//! an associative operator. The parser picks the form from context and the
//! AST stores the form, never the token.

use super::Key;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    Ref,
    Deref,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Shl,
    Shr,
    BitAnd,
    BitAndNot,
    BitOr,
    BitXor,
    Mod,
    /// `~+`, addition modulo the operand type's range.
    ModAdd,
    NotEq,
    Less,
    LessEq,
    EqEq,
    GreaterEq,
    Greater,
    And,
    Or,
    /// `as`, whose right operand is a type.
    As,
}

/// Operators whose repeated application collapses into one N-ary node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssocOp {
    Add,
    Mul,
    BitAnd,
    BitOr,
    BitXor,
    And,
    Or,
}

impl UnaryOp {
    pub fn key(self) -> Key {
        match self {
            UnaryOp::Plus => Key::Plus,
            UnaryOp::Minus => Key::Minus,
            UnaryOp::Not => Key::Not,
            UnaryOp::Ref => Key::Ref,
            UnaryOp::Deref => Key::Deref,
        }
    }
}

impl BinaryOp {
    pub fn key(self) -> Key {
        match self {
            BinaryOp::Add => Key::Plus,
            BinaryOp::Sub => Key::Minus,
            BinaryOp::Mul => Key::Star,
            BinaryOp::Div => Key::Slash,
            BinaryOp::Shl => Key::ShiftL,
            BinaryOp::Shr => Key::ShiftR,
            BinaryOp::BitAnd => Key::Amp,
            BinaryOp::BitAndNot => Key::AmpHat,
            BinaryOp::BitOr => Key::Pipe,
            BinaryOp::BitXor => Key::Hat,
            BinaryOp::Mod => Key::Percent,
            BinaryOp::ModAdd => Key::TildePlus,
            BinaryOp::NotEq => Key::NotEq,
            BinaryOp::Less => Key::LessThan,
            BinaryOp::LessEq => Key::LessEq,
            BinaryOp::EqEq => Key::EqEq,
            BinaryOp::GreaterEq => Key::GreaterEq,
            BinaryOp::Greater => Key::GreaterThan,
            BinaryOp::And => Key::And,
            BinaryOp::Or => Key::Or,
            BinaryOp::As => Key::As,
        }
    }
}

impl AssocOp {
    pub fn key(self) -> Key {
        match self {
            AssocOp::Add => Key::Plus,
            AssocOp::Mul => Key::Star,
            AssocOp::BitAnd => Key::Amp,
            AssocOp::BitOr => Key::Pipe,
            AssocOp::BitXor => Key::Hat,
            AssocOp::And => Key::And,
            AssocOp::Or => Key::Or,
        }
    }
}
