//! Expression parsing.
//!
//! There is no precedence table. An expression is one operand, optionally
//! followed by one binary operator and its right operand. Mixing operators
//! needs parentheses, except that repeating the same associative operator
//! (`a + b + c`, `x and y and z`) collects one N-ary node.

use tracing::trace;
use wuffs_ir::ast::{Expr, MAX_EXPR_DEPTH};
use wuffs_ir::{BinaryOp, Key};

use super::Bracket;
use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an expression. Only the outermost node may have an effect.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr_inner()?;
        if expr.kind.children().iter().any(|c| !c.is_pure()) {
            return Err(self.error(ParseErrorKind::SubExprEffect(self.text(&expr))));
        }
        Ok(expr)
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_operand()?;
        let binary = self
            .cursor
            .peek()
            .filter(|id| id.is_binary_op())
            .and_then(|id| Some((id, id.binary_form()?)));
        let Some((op_id, op)) = binary else {
            return Ok(lhs);
        };
        self.cursor.advance();

        if op == BinaryOp::As {
            let ty = self.parse_type_expr()?;
            return Ok(Expr::cast(lhs, ty));
        }
        let rhs = self.parse_operand()?;

        let assoc = op_id.associative_form().filter(|_| self.cursor.check(op_id.key));
        let Some(assoc) = assoc else {
            return Ok(Expr::binary(op, lhs, rhs));
        };
        let mut operands = vec![lhs, rhs];
        while self.cursor.eat(op_id.key) {
            operands.push(self.parse_operand()?);
        }
        trace!(operands = operands.len(), "parse_expr -> Associative");
        Ok(Expr::associative(assoc, operands))
    }

    /// `unop operand`, a literal, `"(" expr ")"`, or an identifier followed
    /// by any number of call, index, slice and selector suffixes.
    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        if self.expr_depth >= MAX_EXPR_DEPTH {
            return Err(self.error(ParseErrorKind::ExprTooDeep));
        }
        self.expr_depth += 1;
        let result = self.parse_operand_inner();
        self.expr_depth -= 1;
        result
    }

    fn parse_operand_inner(&mut self) -> Result<Expr, ParseError> {
        let Some(id) = self.cursor.peek() else {
            return Err(self.expected("operand"));
        };

        if let Some(op) = id.unary_form() {
            self.cursor.advance();
            let operand = self.parse_operand()?;
            return Ok(Expr::unary(op, operand));
        }
        if id.is_literal() {
            self.cursor.advance();
            return Ok(Expr::literal(id));
        }
        if self.cursor.eat(Key::OpenParen) {
            let inner = self.parse_expr()?;
            self.expect(Key::CloseParen)?;
            return Ok(inner);
        }

        let mut lhs = Expr::ident(self.parse_ident()?);
        loop {
            match self.cursor.peek_key() {
                Some(Key::Exclam | Key::Question | Key::OpenParen) => {
                    let effect = self.parse_effect();
                    let args = self.parse_args()?;
                    lhs = Expr::call(lhs, effect, args);
                }
                Some(Key::OpenBracket) => {
                    lhs = match self.parse_bracket(Key::Colon)? {
                        Bracket::Index(index) => Expr::index(lhs, index),
                        Bracket::Range(lo, hi) => Expr::slice(lhs, lo, hi),
                    };
                }
                Some(Key::Dot) => {
                    self.cursor.advance();
                    if self.cursor.peek().is_some_and(|id| id.is_num_literal()) {
                        return Err(self.error(ParseErrorKind::DotNumLiteral));
                    }
                    let field = self.parse_ident()?;
                    lhs = Expr::select(lhs, field);
                }
                _ => return Ok(lhs),
            }
        }
    }
}
