//! The closed set of lexical classes.

use super::flags::KeyFlags;
use super::ops::{AssocOp, BinaryOp, UnaryOp};

/// Lexical class of a token.
///
/// Every punctuation mark, operator, keyword, type modifier and built-in
/// literal has its own key. Everything else is one of the four user
/// classes: [`Key::Ident`], [`Key::NumLiteral`], [`Key::DqStrLiteral`] and
/// [`Key::SqStrLiteral`]. Built-in identifiers such as `u8` or `this` are
/// [`Key::Ident`] too; they are told apart by their pre-interned
/// [`Name`](crate::Name).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Key {
    // Punctuation
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    Dot,
    DotDot,
    Comma,
    Exclam,
    Question,
    Colon,
    Semicolon,
    Dollar,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    ShiftLEq,
    ShiftREq,
    AmpEq,
    AmpHatEq,
    PipeEq,
    HatEq,
    PercentEq,
    TildePlusEq,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    ShiftL,
    ShiftR,
    Amp,
    AmpHat,
    Pipe,
    Hat,
    Percent,
    TildePlus,
    NotEq,
    LessThan,
    LessEq,
    EqEq,
    GreaterEq,
    GreaterThan,
    And,
    Or,
    Not,
    As,
    Ref,
    Deref,

    // Keywords
    Func,
    Assert,
    While,
    If,
    Else,
    Return,
    Break,
    Continue,
    Struct,
    Use,
    Var,
    Pre,
    Inv,
    Post,
    Via,
    Pub,
    Pri,
    Error,
    Suspension,
    PackageId,
    Const,
    Try,
    Iterate,
    Yield,

    // Type modifiers
    Array,
    Nptr,
    Ptr,
    Slice,

    // Built-in literals
    False,
    True,
    Zero,

    // User classes
    Ident,
    NumLiteral,
    DqStrLiteral,
    SqStrLiteral,
}

impl Key {
    /// Every key with a fixed spelling, in pre-interning order.
    pub const FIXED: [Key; 82] = [
        Key::OpenParen,
        Key::CloseParen,
        Key::OpenBracket,
        Key::CloseBracket,
        Key::OpenCurly,
        Key::CloseCurly,
        Key::Dot,
        Key::DotDot,
        Key::Comma,
        Key::Exclam,
        Key::Question,
        Key::Colon,
        Key::Semicolon,
        Key::Dollar,
        Key::Eq,
        Key::PlusEq,
        Key::MinusEq,
        Key::StarEq,
        Key::SlashEq,
        Key::ShiftLEq,
        Key::ShiftREq,
        Key::AmpEq,
        Key::AmpHatEq,
        Key::PipeEq,
        Key::HatEq,
        Key::PercentEq,
        Key::TildePlusEq,
        Key::Plus,
        Key::Minus,
        Key::Star,
        Key::Slash,
        Key::ShiftL,
        Key::ShiftR,
        Key::Amp,
        Key::AmpHat,
        Key::Pipe,
        Key::Hat,
        Key::Percent,
        Key::TildePlus,
        Key::NotEq,
        Key::LessThan,
        Key::LessEq,
        Key::EqEq,
        Key::GreaterEq,
        Key::GreaterThan,
        Key::And,
        Key::Or,
        Key::Not,
        Key::As,
        Key::Ref,
        Key::Deref,
        Key::Func,
        Key::Assert,
        Key::While,
        Key::If,
        Key::Else,
        Key::Return,
        Key::Break,
        Key::Continue,
        Key::Struct,
        Key::Use,
        Key::Var,
        Key::Pre,
        Key::Inv,
        Key::Post,
        Key::Via,
        Key::Pub,
        Key::Pri,
        Key::Error,
        Key::Suspension,
        Key::PackageId,
        Key::Const,
        Key::Try,
        Key::Iterate,
        Key::Yield,
        Key::Array,
        Key::Nptr,
        Key::Ptr,
        Key::Slice,
        Key::False,
        Key::True,
        Key::Zero,
    ];

    /// The fixed spelling of this key, or `None` for the user classes.
    pub const fn spelling(self) -> Option<&'static str> {
        let s = match self {
            Key::OpenParen => "(",
            Key::CloseParen => ")",
            Key::OpenBracket => "[",
            Key::CloseBracket => "]",
            Key::OpenCurly => "{",
            Key::CloseCurly => "}",
            Key::Dot => ".",
            Key::DotDot => "..",
            Key::Comma => ",",
            Key::Exclam => "!",
            Key::Question => "?",
            Key::Colon => ":",
            Key::Semicolon => ";",
            Key::Dollar => "$",

            Key::Eq => "=",
            Key::PlusEq => "+=",
            Key::MinusEq => "-=",
            Key::StarEq => "*=",
            Key::SlashEq => "/=",
            Key::ShiftLEq => "<<=",
            Key::ShiftREq => ">>=",
            Key::AmpEq => "&=",
            Key::AmpHatEq => "&^=",
            Key::PipeEq => "|=",
            Key::HatEq => "^=",
            Key::PercentEq => "%=",
            Key::TildePlusEq => "~+=",

            Key::Plus => "+",
            Key::Minus => "-",
            Key::Star => "*",
            Key::Slash => "/",
            Key::ShiftL => "<<",
            Key::ShiftR => ">>",
            Key::Amp => "&",
            Key::AmpHat => "&^",
            Key::Pipe => "|",
            Key::Hat => "^",
            Key::Percent => "%",
            Key::TildePlus => "~+",
            Key::NotEq => "!=",
            Key::LessThan => "<",
            Key::LessEq => "<=",
            Key::EqEq => "==",
            Key::GreaterEq => ">=",
            Key::GreaterThan => ">",
            Key::And => "and",
            Key::Or => "or",
            Key::Not => "not",
            Key::As => "as",
            Key::Ref => "ref",
            Key::Deref => "deref",

            Key::Func => "func",
            Key::Assert => "assert",
            Key::While => "while",
            Key::If => "if",
            Key::Else => "else",
            Key::Return => "return",
            Key::Break => "break",
            Key::Continue => "continue",
            Key::Struct => "struct",
            Key::Use => "use",
            Key::Var => "var",
            Key::Pre => "pre",
            Key::Inv => "inv",
            Key::Post => "post",
            Key::Via => "via",
            Key::Pub => "pub",
            Key::Pri => "pri",
            Key::Error => "error",
            Key::Suspension => "suspension",
            Key::PackageId => "packageid",
            Key::Const => "const",
            Key::Try => "try",
            Key::Iterate => "iterate",
            Key::Yield => "yield",

            Key::Array => "array",
            Key::Nptr => "nptr",
            Key::Ptr => "ptr",
            Key::Slice => "slice",

            Key::False => "false",
            Key::True => "true",
            Key::Zero => "0",

            Key::Ident | Key::NumLiteral | Key::DqStrLiteral | Key::SqStrLiteral => return None,
        };
        Some(s)
    }

    /// The static metadata of this key.
    pub fn flags(self) -> KeyFlags {
        let mut f = KeyFlags::empty();
        match self {
            Key::Ident => f |= KeyFlags::IDENT | KeyFlags::IMPLICIT_SEMICOLON,
            Key::False | Key::True => f |= KeyFlags::LITERAL | KeyFlags::IMPLICIT_SEMICOLON,
            Key::Zero | Key::NumLiteral => {
                f |= KeyFlags::LITERAL | KeyFlags::NUM_LITERAL | KeyFlags::IMPLICIT_SEMICOLON;
            }
            Key::DqStrLiteral | Key::SqStrLiteral => {
                f |= KeyFlags::LITERAL | KeyFlags::STR_LITERAL | KeyFlags::IMPLICIT_SEMICOLON;
            }
            _ => {}
        }

        match self {
            Key::OpenParen | Key::OpenBracket | Key::OpenCurly => f |= KeyFlags::OPEN,
            Key::CloseParen | Key::CloseBracket | Key::CloseCurly => {
                f |= KeyFlags::CLOSE | KeyFlags::IMPLICIT_SEMICOLON;
            }
            Key::Return | Key::Break | Key::Continue => f |= KeyFlags::IMPLICIT_SEMICOLON,
            _ => {}
        }

        if matches!(
            self,
            Key::CloseParen
                | Key::OpenBracket
                | Key::CloseBracket
                | Key::Dot
                | Key::DotDot
                | Key::Comma
                | Key::Exclam
                | Key::Question
                | Key::Colon
                | Key::Semicolon
        ) {
            f |= KeyFlags::TIGHT_LEFT;
        }
        if matches!(
            self,
            Key::OpenParen
                | Key::OpenBracket
                | Key::Dot
                | Key::DotDot
                | Key::Exclam
                | Key::Question
                | Key::Colon
                | Key::Dollar
        ) {
            f |= KeyFlags::TIGHT_RIGHT;
        }

        if matches!(
            self,
            Key::Eq
                | Key::PlusEq
                | Key::MinusEq
                | Key::StarEq
                | Key::SlashEq
                | Key::ShiftLEq
                | Key::ShiftREq
                | Key::AmpEq
                | Key::AmpHatEq
                | Key::PipeEq
                | Key::HatEq
                | Key::PercentEq
                | Key::TildePlusEq
        ) {
            f |= KeyFlags::ASSIGN;
        }

        if self.unary_form().is_some() {
            f |= KeyFlags::UNARY;
        }
        if self.is_operator() && self.binary_form().is_some() {
            f |= KeyFlags::BINARY;
        }
        if self.associative_form().is_some() {
            f |= KeyFlags::ASSOCIATIVE;
        }
        f
    }

    /// Whether this key is in the operator block (`+` through `deref`).
    fn is_operator(self) -> bool {
        Key::Plus <= self && self <= Key::Deref
    }

    pub fn unary_form(self) -> Option<UnaryOp> {
        Some(match self {
            Key::Plus => UnaryOp::Plus,
            Key::Minus => UnaryOp::Minus,
            Key::Not => UnaryOp::Not,
            Key::Ref => UnaryOp::Ref,
            Key::Deref => UnaryOp::Deref,
            _ => return None,
        })
    }

    /// The binary form of this key.
    ///
    /// Defined for binary operators and for op-assign keys, so `+=` maps to
    /// [`BinaryOp::Add`]. Plain `=` has no binary form.
    pub fn binary_form(self) -> Option<BinaryOp> {
        Some(match self {
            Key::Plus | Key::PlusEq => BinaryOp::Add,
            Key::Minus | Key::MinusEq => BinaryOp::Sub,
            Key::Star | Key::StarEq => BinaryOp::Mul,
            Key::Slash | Key::SlashEq => BinaryOp::Div,
            Key::ShiftL | Key::ShiftLEq => BinaryOp::Shl,
            Key::ShiftR | Key::ShiftREq => BinaryOp::Shr,
            Key::Amp | Key::AmpEq => BinaryOp::BitAnd,
            Key::AmpHat | Key::AmpHatEq => BinaryOp::BitAndNot,
            Key::Pipe | Key::PipeEq => BinaryOp::BitOr,
            Key::Hat | Key::HatEq => BinaryOp::BitXor,
            Key::Percent | Key::PercentEq => BinaryOp::Mod,
            Key::TildePlus | Key::TildePlusEq => BinaryOp::ModAdd,
            Key::NotEq => BinaryOp::NotEq,
            Key::LessThan => BinaryOp::Less,
            Key::LessEq => BinaryOp::LessEq,
            Key::EqEq => BinaryOp::EqEq,
            Key::GreaterEq => BinaryOp::GreaterEq,
            Key::GreaterThan => BinaryOp::Greater,
            Key::And => BinaryOp::And,
            Key::Or => BinaryOp::Or,
            Key::As => BinaryOp::As,
            _ => return None,
        })
    }

    pub fn associative_form(self) -> Option<AssocOp> {
        Some(match self {
            Key::Plus => AssocOp::Add,
            Key::Star => AssocOp::Mul,
            Key::Amp => AssocOp::BitAnd,
            Key::Pipe => AssocOp::BitOr,
            Key::Hat => AssocOp::BitXor,
            Key::And => AssocOp::And,
            Key::Or => AssocOp::Or,
            _ => return None,
        })
    }
}
