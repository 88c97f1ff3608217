//! Type expressions.

use super::Expr;
use crate::Id;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    /// `pkg.name[lo..hi]`, the package and the refinement both optional.
    Named {
        pkg: Option<Id>,
        name: Id,
        refinement: Option<Refinement>,
    },
    Ptr(Box<TypeExpr>),
    Nptr(Box<TypeExpr>),
    Array {
        length: Box<Expr>,
        inner: Box<TypeExpr>,
    },
    Slice {
        inner: Box<TypeExpr>,
    },
}

/// A declared numeric range, `[lo..hi]`. Either end may be absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Refinement {
    pub lo: Option<Box<Expr>>,
    pub hi: Option<Box<Expr>>,
}

impl TypeExpr {
    pub fn named(name: Id) -> Self {
        TypeExpr::Named {
            pkg: None,
            name,
            refinement: None,
        }
    }

    /// The element or pointee type, if this is a decorated type.
    pub fn inner(&self) -> Option<&TypeExpr> {
        match self {
            TypeExpr::Named { .. } => None,
            TypeExpr::Ptr(inner) | TypeExpr::Nptr(inner) => Some(inner),
            TypeExpr::Array { inner, .. } | TypeExpr::Slice { inner } => Some(inner),
        }
    }
}
