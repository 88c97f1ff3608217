//! Lexer error types.

use wuffs_ir::InternError;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("token: {kind} at {filename}:{line}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub filename: String,
    pub line: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    // === String Errors ===
    #[error("backslash in \"-string")]
    BackslashInDqString,
    /// Newline or end of input before the closing quote.
    #[error("expected final {quote} in string")]
    UnterminatedString { quote: char },
    #[error("control character in string")]
    ControlCharInString,
    #[error("invalid '-string")]
    InvalidSqString,
    #[error("multi-byte '-string needs be or le suffix")]
    MissingEndianSuffix,
    #[error("string too long")]
    StringTooLong,

    // === Identifier and Numeric Errors ===
    #[error("identifier too long")]
    IdentTooLong,
    #[error("constant too long")]
    ConstantTooLong,
    /// `0` followed by another digit.
    #[error("legacy octal syntax")]
    LegacyOctal,
    /// Consecutive or trailing underscores, or `0x` without digits.
    #[error("invalid numeric literal")]
    InvalidNumericLiteral,

    // === Source Errors ===
    #[error("too many lines")]
    TooManyLines,
    #[error("unrecognized byte '\\x{byte:02X}' ({ch:?})")]
    UnrecognizedByte { byte: u8, ch: char },
    #[error("unrecognized non-ASCII byte '\\x{0:02X}'")]
    NonAsciiByte(u8),

    #[error(transparent)]
    Intern(#[from] InternError),
}
