//! AST node types.
//!
//! Every node owns its children. Nodes are built bottom-up by the parser and
//! not modified afterwards. Identifiers and literals are stored as [`Id`]s,
//! so rendering a node back to text needs the [`TokenMap`](crate::TokenMap)
//! that produced it.

mod display;
mod expr;
mod stmt;
mod types;

use std::rc::Rc;

use bitflags::bitflags;

use crate::Id;

pub use display::{ExprDisplay, TypeExprDisplay};
pub use expr::{Arg, Expr, ExprFlags, ExprKind};
pub use stmt::{
    Assert, AssertKind, Assign, Else, If, Jump, JumpKind, ReturnValue, Stmt, StmtKind, Var, While,
};
pub use types::{Refinement, TypeExpr};

#[cfg(test)]
mod tests;

/// Deepest expression nesting the parser accepts.
pub const MAX_EXPR_DEPTH: u32 = 255;

/// Deepest type-expression nesting the parser accepts.
pub const MAX_TYPE_EXPR_DEPTH: u32 = 63;

/// Source location for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub filename: Rc<str>,
    pub line: u32,
}

impl std::fmt::Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}

/// Side effects of a function or call, ordered `Pure < Impure < Suspendible`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord, Default)]
pub enum Effect {
    #[default]
    Pure,
    /// `!`
    Impure,
    /// `?`, which implies impure.
    Suspendible,
}

impl Effect {
    pub fn marker(self) -> &'static str {
        match self {
            Effect::Pure => "",
            Effect::Impure => "!",
            Effect::Suspendible => "?",
        }
    }
}

bitflags! {
    /// Declaration metadata set from keyword combinations.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct DeclFlags: u32 {
        /// `pub` rather than `pri`.
        const PUBLIC = 1 << 0;
        /// `name!`, or implied by `SUSPENDIBLE`.
        const IMPURE = 1 << 1;
        /// `name?`.
        const SUSPENDIBLE = 1 << 2;
    }
}

impl DeclFlags {
    pub fn from_effect(effect: Effect) -> Self {
        match effect {
            Effect::Pure => DeclFlags::empty(),
            Effect::Impure => DeclFlags::IMPURE,
            Effect::Suspendible => DeclFlags::IMPURE | DeclFlags::SUSPENDIBLE,
        }
    }

    pub fn effect(self) -> Effect {
        if self.contains(DeclFlags::SUSPENDIBLE) {
            Effect::Suspendible
        } else if self.contains(DeclFlags::IMPURE) {
            Effect::Impure
        } else {
            Effect::Pure
        }
    }
}

/// One parsed source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    pub filename: Rc<str>,
    pub decls: Vec<Decl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decl {
    PackageId(PackageId),
    Use(Use),
    Const(Const),
    Func(Func),
    Status(Status),
    Struct(Struct),
}

impl Decl {
    pub fn loc(&self) -> &Loc {
        match self {
            Decl::PackageId(d) => &d.loc,
            Decl::Use(d) => &d.loc,
            Decl::Const(d) => &d.loc,
            Decl::Func(d) => &d.loc,
            Decl::Status(d) => &d.loc,
            Decl::Struct(d) => &d.loc,
        }
    }
}

/// `packageid "abcd";`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageId {
    pub loc: Loc,
    /// The quoted string token.
    pub id: Id,
    /// The base-38 encoding of the four unquoted bytes.
    pub value: u32,
}

/// `use "path";`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Use {
    pub loc: Loc,
    pub path: Id,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Const {
    pub loc: Loc,
    pub flags: DeclFlags,
    pub name: Id,
    pub ty: TypeExpr,
    pub value: Expr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Func {
    pub loc: Loc,
    pub flags: DeclFlags,
    /// The `T` of `func T.name`.
    pub receiver: Option<Id>,
    pub name: Id,
    pub inputs: Vec<Field>,
    pub outputs: Vec<Field>,
    /// `pre*`, then `inv*`, then `post*`.
    pub asserts: Vec<Assert>,
    pub body: Vec<Stmt>,
}

impl Func {
    pub fn effect(&self) -> Effect {
        self.flags.effect()
    }

    pub fn is_public(&self) -> bool {
        self.flags.contains(DeclFlags::PUBLIC)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StatusKind {
    Error,
    Suspension,
}

/// `pub error "msg";` or `pri suspension "msg";`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub loc: Loc,
    pub flags: DeclFlags,
    pub kind: StatusKind,
    pub message: Id,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Struct {
    pub loc: Loc,
    pub flags: DeclFlags,
    pub name: Id,
    pub fields: Vec<Field>,
}

/// `name : ty`, in a struct body or a function signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub loc: Loc,
    pub name: Id,
    pub ty: TypeExpr,
}
