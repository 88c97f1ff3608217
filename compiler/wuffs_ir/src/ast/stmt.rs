//! Statement nodes.

use super::{Arg, Expr, Loc, StatusKind, TypeExpr};
use crate::{BinaryOp, Id};

/// A statement and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stmt {
    pub loc: Loc,
    pub kind: StmtKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StmtKind {
    Assert(Assert),
    Assign(Assign),
    Expr(Expr),
    If(If),
    Jump(Jump),
    Return(Option<ReturnValue>),
    Var(Var),
    While(While),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum AssertKind {
    Assert,
    Pre,
    Inv,
    Post,
}

/// `assert cond via "reason"(args)`, or a `pre`, `inv` or `post` clause.
///
/// The `via` reason and its arguments are carried opaquely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assert {
    pub kind: AssertKind,
    pub condition: Expr,
    pub reason: Option<Id>,
    pub args: Vec<Arg>,
}

/// `lhs = rhs` or `lhs op= rhs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assign {
    /// `None` for plain `=`.
    pub op: Option<BinaryOp>,
    pub lhs: Expr,
    pub rhs: Expr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct If {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    pub else_branch: Option<Else>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Else {
    If(Box<If>),
    Block(Vec<Stmt>),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum JumpKind {
    Break,
    Continue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jump {
    pub kind: JumpKind,
    pub label: Option<Id>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReturnValue {
    /// `return error "msg"` or `return suspension "msg"`.
    Status { kind: StatusKind, message: Id },
    Expr(Expr),
}

/// `var name : ty` with an optional initializer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Var {
    pub name: Id,
    pub ty: TypeExpr,
    pub value: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct While {
    pub label: Option<Id>,
    pub condition: Expr,
    pub asserts: Vec<Assert>,
    pub body: Vec<Stmt>,
}
