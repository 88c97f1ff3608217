//! Statement and block parsing.

use tracing::trace;
use wuffs_ir::ast::{
    Assign, Else, Expr, ExprKind, If, Jump, JumpKind, ReturnValue, StatusKind, Stmt, StmtKind,
    Var, While,
};
use wuffs_ir::{Id, Key};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `"{" (stmt ";")* "}"`.
    pub(crate) fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(Key::OpenCurly)?;
        let mut block = Vec::new();
        loop {
            if self.cursor.eat(Key::CloseCurly) {
                return Ok(block);
            }
            if self.cursor.is_at_end() {
                return Err(self.expected(r#""}""#));
            }
            block.push(self.parse_stmt()?);
            self.expect(Key::Semicolon)?;
        }
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let loc = self.loc();
        let key = self.cursor.peek_key();
        trace!(line = loc.line, ?key, "parse_stmt");

        if key == Some(Key::Var) {
            if !self.allow_var {
                return Err(self.error(ParseErrorKind::VarNotAtTop));
            }
            self.cursor.advance();
            let kind = StmtKind::Var(self.parse_var()?);
            return Ok(Stmt { loc, kind });
        }
        self.allow_var = false;

        let kind = match key {
            Some(Key::Assert | Key::Pre | Key::Post) => StmtKind::Assert(self.parse_assert()?),

            Some(k @ (Key::Break | Key::Continue)) => {
                self.cursor.advance();
                let kind = if k == Key::Break {
                    JumpKind::Break
                } else {
                    JumpKind::Continue
                };
                let label = self.parse_label_ref()?;
                StmtKind::Jump(Jump { kind, label })
            }

            Some(Key::If) => StmtKind::If(self.parse_if()?),

            Some(Key::Return) => {
                self.cursor.advance();
                StmtKind::Return(self.parse_return_value()?)
            }

            Some(Key::While) => {
                self.cursor.advance();
                let label = if self.cursor.eat(Key::Colon) {
                    Some(self.parse_user_name("label")?)
                } else {
                    None
                };
                let condition = self.parse_expr()?;
                self.require_pure("while-condition", &condition)?;
                let asserts = self.parse_assert_chain()?;
                let body = self.parse_block()?;
                StmtKind::While(While {
                    label,
                    condition,
                    asserts,
                    body,
                })
            }

            _ => self.parse_assign()?,
        };
        Ok(Stmt { loc, kind })
    }

    /// `(":" IDENT)?` after `break` or `continue`.
    fn parse_label_ref(&mut self) -> Result<Option<Id>, ParseError> {
        if self.cursor.eat(Key::Colon) {
            Ok(Some(self.parse_ident()?))
        } else {
            Ok(None)
        }
    }

    /// `IDENT ":" type ("=" expr)?`, after the `var`.
    fn parse_var(&mut self) -> Result<Var, ParseError> {
        let name = self.parse_user_name("var")?;
        self.expect(Key::Colon)?;
        let ty = self.parse_type_expr()?;
        let value = if self.cursor.eat(Key::Eq) {
            let value = self.parse_expr()?;
            self.check_stmt_effect(&value)?;
            Some(value)
        } else {
            None
        };
        Ok(Var { name, ty, value })
    }

    /// `"if" expr block ("else" (if | block))?`.
    fn parse_if(&mut self) -> Result<If, ParseError> {
        self.expect(Key::If)?;
        let condition = self.parse_expr()?;
        self.require_pure("if-condition", &condition)?;
        let then_body = self.parse_block()?;
        let else_branch = if self.cursor.eat(Key::Else) {
            if self.cursor.check(Key::If) {
                Some(Else::If(Box::new(self.parse_if()?)))
            } else {
                Some(Else::Block(self.parse_block()?))
            }
        } else {
            None
        };
        Ok(If {
            condition,
            then_body,
            else_branch,
        })
    }

    /// Nothing before a `;`, `("error"|"suspension") DQSTR`, or an
    /// expression.
    fn parse_return_value(&mut self) -> Result<Option<ReturnValue>, ParseError> {
        let kind = match self.cursor.peek_key() {
            None | Some(Key::Semicolon) => return Ok(None),
            Some(Key::Error) => StatusKind::Error,
            Some(Key::Suspension) => StatusKind::Suspension,
            Some(_) => {
                let value = self.parse_expr()?;
                self.check_stmt_effect(&value)?;
                return Ok(Some(ReturnValue::Expr(value)));
            }
        };
        self.cursor.advance();
        let message = self.expect(Key::DqStrLiteral)?;
        Ok(Some(ReturnValue::Status { kind, message }))
    }

    /// `expr (assign-op expr)?`.
    fn parse_assign(&mut self) -> Result<StmtKind, ParseError> {
        let lhs = self.parse_expr()?;
        let Some(op_id) = self.cursor.peek().filter(|id| id.is_assign()) else {
            self.check_stmt_effect(&lhs)?;
            return Ok(StmtKind::Expr(lhs));
        };
        self.cursor.advance();

        self.require_pure("assignment LHS", &lhs)?;
        self.check_assign_target(&lhs)?;

        let rhs = self.parse_expr()?;
        self.check_stmt_effect(&rhs)?;
        Ok(StmtKind::Assign(Assign {
            op: op_id.binary_form(),
            lhs,
            rhs,
        }))
    }

    /// An assignment target is an identifier under any number of selectors
    /// and indexes.
    fn check_assign_target(&self, lhs: &Expr) -> Result<(), ParseError> {
        let mut target = lhs;
        loop {
            match &target.kind {
                ExprKind::Ident(_) => return Ok(()),
                ExprKind::Select { base, .. } | ExprKind::Index { base, .. } => target = base,
                ExprKind::Literal(_) => {
                    return Err(self.error(ParseErrorKind::LiteralAssignment(self.text(lhs))));
                }
                _ => return Err(self.error(ParseErrorKind::InvalidAssignment(self.text(lhs)))),
            }
        }
    }

    /// A statement may not have a stronger effect than its function.
    fn check_stmt_effect(&self, value: &Expr) -> Result<(), ParseError> {
        let effect = value.effect();
        if effect > self.func_effect {
            return Err(self.error(ParseErrorKind::EffectTooStrong {
                value: self.text(value),
                effect: effect.marker(),
                func_effect: self.func_effect.marker(),
            }));
        }
        Ok(())
    }
}
