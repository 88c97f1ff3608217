//! Textual rendering of expressions for diagnostics.
//!
//! Nested binary and associative expressions are parenthesized, so the
//! output re-parses to the same tree.

use std::fmt::{self, Write};

use super::{Expr, ExprKind, TypeExpr, MAX_EXPR_DEPTH, MAX_TYPE_EXPR_DEPTH};
use crate::{AssocOp, BinaryOp, TokenMap, UnaryOp};

/// Display adapter returned by [`Expr::display`].
pub struct ExprDisplay<'a> {
    expr: &'a Expr,
    map: &'a TokenMap,
}

/// Display adapter returned by [`TypeExpr::display`].
pub struct TypeExprDisplay<'a> {
    ty: &'a TypeExpr,
    map: &'a TokenMap,
}

impl Expr {
    pub fn display<'a>(&'a self, map: &'a TokenMap) -> ExprDisplay<'a> {
        ExprDisplay { expr: self, map }
    }
}

impl TypeExpr {
    pub fn display<'a>(&'a self, map: &'a TokenMap) -> TypeExprDisplay<'a> {
        TypeExprDisplay { ty: self, map }
    }
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self.map, self.expr, false, 0)
    }
}

impl fmt::Display for TypeExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_type(f, self.map, self.ty, 0)
    }
}

fn unary_str(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Plus => "+",
        UnaryOp::Minus => "-",
        UnaryOp::Not => "not ",
        UnaryOp::Ref => "ref ",
        UnaryOp::Deref => "deref ",
    }
}

fn binary_str(op: BinaryOp) -> &'static str {
    op.key().spelling().unwrap_or("?")
}

fn assoc_str(op: AssocOp) -> &'static str {
    op.key().spelling().unwrap_or("?")
}

fn write_expr(
    f: &mut fmt::Formatter<'_>,
    map: &TokenMap,
    e: &Expr,
    parenthesize: bool,
    depth: u32,
) -> fmt::Result {
    if depth > MAX_EXPR_DEPTH {
        return f.write_str("!expr_recursion_depth_too_large!");
    }
    let depth = depth + 1;

    match &e.kind {
        ExprKind::Ident(id) | ExprKind::Literal(id) => f.write_str(map.str(*id)),

        ExprKind::Unary { op, operand } => {
            f.write_str(unary_str(*op))?;
            write_expr(f, map, operand, true, depth)
        }

        ExprKind::Binary { op, lhs, rhs } => {
            if parenthesize {
                f.write_char('(')?;
            }
            write_expr(f, map, lhs, true, depth)?;
            write!(f, " {} ", binary_str(*op))?;
            write_expr(f, map, rhs, true, depth)?;
            if parenthesize {
                f.write_char(')')?;
            }
            Ok(())
        }

        ExprKind::As { value, ty } => {
            if parenthesize {
                f.write_char('(')?;
            }
            write_expr(f, map, value, true, depth)?;
            f.write_str(" as ")?;
            write_type(f, map, ty, 0)?;
            if parenthesize {
                f.write_char(')')?;
            }
            Ok(())
        }

        ExprKind::Associative { op, operands } => {
            if parenthesize {
                f.write_char('(')?;
            }
            for (i, o) in operands.iter().enumerate() {
                if i != 0 {
                    write!(f, " {} ", assoc_str(*op))?;
                }
                write_expr(f, map, o, true, depth)?;
            }
            if parenthesize {
                f.write_char(')')?;
            }
            Ok(())
        }

        ExprKind::Call { callee, args } => {
            write_expr(f, map, callee, true, depth)?;
            f.write_str(e.call_effect().marker())?;
            f.write_char('(')?;
            for (i, a) in args.iter().enumerate() {
                if i != 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}:", map.str(a.name))?;
                write_expr(f, map, &a.value, false, depth)?;
            }
            f.write_char(')')
        }

        ExprKind::Index { base, index } => {
            write_expr(f, map, base, true, depth)?;
            f.write_char('[')?;
            write_expr(f, map, index, false, depth)?;
            f.write_char(']')
        }

        ExprKind::Slice { base, lo, hi } => {
            write_expr(f, map, base, true, depth)?;
            f.write_char('[')?;
            if let Some(lo) = lo {
                write_expr(f, map, lo, false, depth)?;
            }
            f.write_char(':')?;
            if let Some(hi) = hi {
                write_expr(f, map, hi, false, depth)?;
            }
            f.write_char(']')
        }

        ExprKind::Select { base, field } => {
            write_expr(f, map, base, true, depth)?;
            write!(f, ".{}", map.str(*field))
        }

        ExprKind::List(items) => {
            f.write_str("$(")?;
            for (i, o) in items.iter().enumerate() {
                if i != 0 {
                    f.write_str(", ")?;
                }
                write_expr(f, map, o, false, depth)?;
            }
            f.write_char(')')
        }
    }
}

fn write_type(f: &mut fmt::Formatter<'_>, map: &TokenMap, t: &TypeExpr, depth: u32) -> fmt::Result {
    if depth > MAX_TYPE_EXPR_DEPTH {
        return f.write_str("!type_expr_recursion_depth_too_large!");
    }
    let depth = depth + 1;

    match t {
        TypeExpr::Named {
            pkg,
            name,
            refinement,
        } => {
            if let Some(pkg) = pkg {
                write!(f, "{}.", map.str(*pkg))?;
            }
            f.write_str(map.str(*name))?;
            if let Some(r) = refinement {
                f.write_char('[')?;
                if let Some(lo) = &r.lo {
                    write_expr(f, map, lo, false, 0)?;
                }
                f.write_str("..")?;
                if let Some(hi) = &r.hi {
                    write_expr(f, map, hi, false, 0)?;
                }
                f.write_char(']')?;
            }
            Ok(())
        }
        TypeExpr::Ptr(inner) => {
            f.write_str("ptr ")?;
            write_type(f, map, inner, depth)
        }
        TypeExpr::Nptr(inner) => {
            f.write_str("nptr ")?;
            write_type(f, map, inner, depth)
        }
        TypeExpr::Array { length, inner } => {
            f.write_str("array[")?;
            write_expr(f, map, length, false, 0)?;
            f.write_str("] ")?;
            write_type(f, map, inner, depth)
        }
        TypeExpr::Slice { inner } => {
            f.write_str("slice ")?;
            write_type(f, map, inner, depth)
        }
    }
}
