//! Type expression parsing.

use wuffs_ir::ast::{Refinement, TypeExpr, MAX_TYPE_EXPR_DEPTH};
use wuffs_ir::Key;

use super::Bracket;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `ptr T`, `nptr T`, `array[N] T`, `slice T` or `[pkg.]name[lo..hi]`.
    pub(crate) fn parse_type_expr(&mut self) -> Result<TypeExpr, ParseError> {
        if self.type_depth >= MAX_TYPE_EXPR_DEPTH {
            return Err(self.error(ParseErrorKind::TypeExprTooDeep));
        }
        self.type_depth += 1;
        let result = self.parse_type_expr_inner();
        self.type_depth -= 1;
        result
    }

    fn parse_type_expr_inner(&mut self) -> Result<TypeExpr, ParseError> {
        match self.cursor.peek_key() {
            Some(Key::Ptr) => {
                self.cursor.advance();
                Ok(TypeExpr::Ptr(Box::new(self.parse_type_expr()?)))
            }
            Some(Key::Nptr) => {
                self.cursor.advance();
                Ok(TypeExpr::Nptr(Box::new(self.parse_type_expr()?)))
            }
            Some(Key::Array) => {
                self.cursor.advance();
                self.expect(Key::OpenBracket)?;
                let length = self.parse_expr()?;
                self.expect(Key::CloseBracket)?;
                let inner = self.parse_type_expr()?;
                Ok(TypeExpr::Array {
                    length: Box::new(length),
                    inner: Box::new(inner),
                })
            }
            Some(Key::Slice) => {
                self.cursor.advance();
                Ok(TypeExpr::Slice {
                    inner: Box::new(self.parse_type_expr()?),
                })
            }
            _ => {
                let first = self.parse_ident()?;
                let (pkg, name) = if self.cursor.eat(Key::Dot) {
                    (Some(first), self.parse_ident()?)
                } else {
                    (None, first)
                };
                let refinement = if self.cursor.check(Key::OpenBracket) {
                    Some(self.parse_refinement()?)
                } else {
                    None
                };
                Ok(TypeExpr::Named {
                    pkg,
                    name,
                    refinement,
                })
            }
        }
    }

    /// `"[" expr? ".." expr? "]"`.
    fn parse_refinement(&mut self) -> Result<Refinement, ParseError> {
        match self.parse_bracket(Key::DotDot)? {
            Bracket::Range(lo, hi) => Ok(Refinement {
                lo: lo.map(Box::new),
                hi: hi.map(Box::new),
            }),
            // A refinement always has `..`.
            Bracket::Index(_) => Err(self.error(ParseErrorKind::Expected {
                expected: crate::describe(Key::DotDot),
                got: "]".to_owned(),
            })),
        }
    }
}
