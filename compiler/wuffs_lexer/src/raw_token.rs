//! Raw tokenizer state machine.
//!
//! The `RawToken` enum is the logos-derived scanner output before interning.
//! Punctuation carries its [`Key`] directly. Quoted literals are only
//! recognized by their opening quote; the body is scanned by hand so that
//! each malformed string gets its own diagnostic.

use logos::Logos;
use wuffs_ir::Key;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[\x00-\x09\x0B-\x20]+")] // Every byte <= ' ' except '\n'
pub(crate) enum RawToken {
    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\"")]
    DqQuote,

    #[token("'")]
    SqQuote,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*")]
    Decimal,

    #[regex(r"0[xX][0-9A-Fa-f_]*")]
    Hex,

    #[token("(", |_| Key::OpenParen)]
    #[token(")", |_| Key::CloseParen)]
    #[token("[", |_| Key::OpenBracket)]
    #[token("]", |_| Key::CloseBracket)]
    #[token("{", |_| Key::OpenCurly)]
    #[token("}", |_| Key::CloseCurly)]
    #[token(".", |_| Key::Dot)]
    #[token("..", |_| Key::DotDot)]
    #[token(",", |_| Key::Comma)]
    #[token("!", |_| Key::Exclam)]
    #[token("?", |_| Key::Question)]
    #[token(":", |_| Key::Colon)]
    #[token(";", |_| Key::Semicolon)]
    #[token("$", |_| Key::Dollar)]
    #[token("=", |_| Key::Eq)]
    #[token("+=", |_| Key::PlusEq)]
    #[token("-=", |_| Key::MinusEq)]
    #[token("*=", |_| Key::StarEq)]
    #[token("/=", |_| Key::SlashEq)]
    #[token("<<=", |_| Key::ShiftLEq)]
    #[token(">>=", |_| Key::ShiftREq)]
    #[token("&=", |_| Key::AmpEq)]
    #[token("&^=", |_| Key::AmpHatEq)]
    #[token("|=", |_| Key::PipeEq)]
    #[token("^=", |_| Key::HatEq)]
    #[token("%=", |_| Key::PercentEq)]
    #[token("~+=", |_| Key::TildePlusEq)]
    #[token("+", |_| Key::Plus)]
    #[token("-", |_| Key::Minus)]
    #[token("*", |_| Key::Star)]
    #[token("/", |_| Key::Slash)]
    #[token("<<", |_| Key::ShiftL)]
    #[token(">>", |_| Key::ShiftR)]
    #[token("&", |_| Key::Amp)]
    #[token("&^", |_| Key::AmpHat)]
    #[token("|", |_| Key::Pipe)]
    #[token("^", |_| Key::Hat)]
    #[token("%", |_| Key::Percent)]
    #[token("~+", |_| Key::TildePlus)]
    #[token("!=", |_| Key::NotEq)]
    #[token("<", |_| Key::LessThan)]
    #[token("<=", |_| Key::LessEq)]
    #[token("==", |_| Key::EqEq)]
    #[token(">=", |_| Key::GreaterEq)]
    #[token(">", |_| Key::GreaterThan)]
    Punct(Key),
}
