//! Parse error types.
//!
//! The parser stops at the first error. A [`ParseError`] names what went
//! wrong and the line of the token the parser was looking at.

/// A parse error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("parse: {kind} at {filename}:{line}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub filename: String,
    pub line: u32,
}

/// What kind of parse error occurred.
///
/// Expressions and names are carried as their source text.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    // === Grammar Errors ===
    /// `expected` is already quoted where it names a token.
    #[error("expected {expected}, got {got:?}")]
    Expected { expected: String, got: String },
    #[error("expected {expected}")]
    UnexpectedEof { expected: String },
    #[error("unrecognized top level declaration")]
    UnrecognizedDecl,
    #[error("const {0:?} has no value")]
    ConstWithoutValue(String),
    #[error("dot followed by numeric literal")]
    DotNumLiteral,
    #[error("expression recursion depth too large")]
    ExprTooDeep,
    #[error("type expression recursion depth too large")]
    TypeExprTooDeep,

    // === Naming Errors ===
    #[error("built-in identifier {name:?} used for {what} name")]
    BuiltinName { what: &'static str, name: String },
    #[error("double-underscore {name:?} used for {what} name")]
    DoubleUnderscore { what: &'static str, name: String },
    #[error("invalid packageid {0}")]
    InvalidPackageId(String),

    // === Statement Errors ===
    #[error("assertion chain cannot contain \"assert\", only \"pre\", \"inv\" and \"post\"")]
    AssertInChain,
    #[error("assertion chain not in \"pre\", \"inv\", \"post\" order")]
    AssertOrder,
    #[error("var statement not at the top of a function")]
    VarNotAtTop,
    #[error("assignment LHS {0:?} is a literal")]
    LiteralAssignment(String),
    #[error("invalid assignment LHS {0:?}")]
    InvalidAssignment(String),

    // === Effect Errors ===
    /// `what` is the position, such as `"if-condition"`.
    #[error("{what} {expr:?} is not effect-free")]
    NotEffectFree { what: &'static str, expr: String },
    #[error("expression {0:?} has an effect-ful sub-expression")]
    SubExprEffect(String),
    #[error("value {value:?}'s effect {effect:?} is stronger than the func's effect {func_effect:?}")]
    EffectTooStrong {
        value: String,
        effect: &'static str,
        func_effect: &'static str,
    },
}
