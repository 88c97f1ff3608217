//! Expression nodes.

use bitflags::bitflags;

use super::{Effect, TypeExpr};
use crate::{AssocOp, BinaryOp, Id, UnaryOp};

bitflags! {
    /// Effect metadata of an expression.
    ///
    /// `CALL_*` describe the node itself (`f!(x)` vs `f(x)`); `IMPURE` and
    /// `SUSPENDIBLE` hold for the node or any sub-expression.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ExprFlags: u32 {
        const IMPURE = 1 << 0;
        const SUSPENDIBLE = 1 << 1;
        const CALL_IMPURE = 1 << 2;
        const CALL_SUSPENDIBLE = 1 << 3;
    }
}

impl ExprFlags {
    const PROPAGATED: ExprFlags = ExprFlags::IMPURE.union(ExprFlags::SUSPENDIBLE);

    fn for_call(effect: Effect) -> Self {
        match effect {
            Effect::Pure => ExprFlags::empty(),
            Effect::Impure => ExprFlags::CALL_IMPURE | ExprFlags::IMPURE,
            Effect::Suspendible => ExprFlags::all(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub flags: ExprFlags,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    Ident(Id),
    Literal(Id),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `value as ty`.
    As {
        value: Box<Expr>,
        ty: Box<TypeExpr>,
    },
    /// Two or more operands joined by one associative operator.
    Associative {
        op: AssocOp,
        operands: Vec<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Arg>,
    },
    Index {
        base: Box<Expr>,
        index: Box<Expr>,
    },
    /// `base[lo:hi]`, either end optional.
    Slice {
        base: Box<Expr>,
        lo: Option<Box<Expr>>,
        hi: Option<Box<Expr>>,
    },
    Select {
        base: Box<Expr>,
        field: Id,
    },
    /// `$(a, b, c)`.
    List(Vec<Expr>),
}

/// A named argument, `name:value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arg {
    pub name: Id,
    pub value: Expr,
}

impl ExprKind {
    /// Direct sub-expressions in source order. Types are not included.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            ExprKind::Ident(_) | ExprKind::Literal(_) => Vec::new(),
            ExprKind::Unary { operand, .. } => vec![&**operand],
            ExprKind::Binary { lhs, rhs, .. } => vec![&**lhs, &**rhs],
            ExprKind::As { value, .. } => vec![&**value],
            ExprKind::Associative { operands, .. } | ExprKind::List(operands) => {
                operands.iter().collect()
            }
            ExprKind::Call { callee, args } => std::iter::once(&**callee)
                .chain(args.iter().map(|a| &a.value))
                .collect(),
            ExprKind::Index { base, index } => vec![&**base, &**index],
            ExprKind::Slice { base, lo, hi } => std::iter::once(&**base)
                .chain(lo.as_deref())
                .chain(hi.as_deref())
                .collect(),
            ExprKind::Select { base, .. } => vec![&**base],
        }
    }
}

impl Expr {
    fn new(kind: ExprKind, own: ExprFlags) -> Self {
        let flags = kind
            .children()
            .iter()
            .fold(own, |acc, e| acc | (e.flags & ExprFlags::PROPAGATED));
        Expr { kind, flags }
    }

    pub fn ident(id: Id) -> Self {
        Expr::new(ExprKind::Ident(id), ExprFlags::empty())
    }

    pub fn literal(id: Id) -> Self {
        Expr::new(ExprKind::Literal(id), ExprFlags::empty())
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            ExprFlags::empty(),
        )
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::new(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            ExprFlags::empty(),
        )
    }

    pub fn cast(value: Expr, ty: TypeExpr) -> Self {
        Expr::new(
            ExprKind::As {
                value: Box::new(value),
                ty: Box::new(ty),
            },
            ExprFlags::empty(),
        )
    }

    pub fn associative(op: AssocOp, operands: Vec<Expr>) -> Self {
        Expr::new(ExprKind::Associative { op, operands }, ExprFlags::empty())
    }

    pub fn call(callee: Expr, effect: Effect, args: Vec<Arg>) -> Self {
        Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            ExprFlags::for_call(effect),
        )
    }

    pub fn index(base: Expr, index: Expr) -> Self {
        Expr::new(
            ExprKind::Index {
                base: Box::new(base),
                index: Box::new(index),
            },
            ExprFlags::empty(),
        )
    }

    pub fn slice(base: Expr, lo: Option<Expr>, hi: Option<Expr>) -> Self {
        Expr::new(
            ExprKind::Slice {
                base: Box::new(base),
                lo: lo.map(Box::new),
                hi: hi.map(Box::new),
            },
            ExprFlags::empty(),
        )
    }

    pub fn select(base: Expr, field: Id) -> Self {
        Expr::new(
            ExprKind::Select {
                base: Box::new(base),
                field,
            },
            ExprFlags::empty(),
        )
    }

    pub fn list(items: Vec<Expr>) -> Self {
        Expr::new(ExprKind::List(items), ExprFlags::empty())
    }

    /// The strongest effect of this expression or any sub-expression.
    pub fn effect(&self) -> Effect {
        if self.flags.contains(ExprFlags::SUSPENDIBLE) {
            Effect::Suspendible
        } else if self.flags.contains(ExprFlags::IMPURE) {
            Effect::Impure
        } else {
            Effect::Pure
        }
    }

    /// The effect marker written on this node, `!` or `?` for calls.
    pub fn call_effect(&self) -> Effect {
        if self.flags.contains(ExprFlags::CALL_SUSPENDIBLE) {
            Effect::Suspendible
        } else if self.flags.contains(ExprFlags::CALL_IMPURE) {
            Effect::Impure
        } else {
            Effect::Pure
        }
    }

    pub fn is_pure(&self) -> bool {
        !self.flags.contains(ExprFlags::IMPURE)
    }
}
