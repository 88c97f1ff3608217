//! Grammar productions.
//!
//! Each submodule extends [`Parser`] with the productions for one part of
//! the language. This module holds the pieces they share: identifiers,
//! field and argument lists, and assertion chains.

mod decl;
mod expr;
mod stmt;
mod ty;

use wuffs_ir::ast::{Arg, Assert, AssertKind, Effect, Expr, Field};
use wuffs_ir::{Id, Key};

use crate::{ParseError, ParseErrorKind, Parser};

/// What sits between `[` and `]`.
pub(crate) enum Bracket {
    /// `"[" expr "]"`.
    Index(Expr),
    /// `"[" expr? sep expr? "]"`.
    Range(Option<Expr>, Option<Expr>),
}

impl Parser<'_> {
    pub(crate) fn parse_ident(&mut self) -> Result<Id, ParseError> {
        self.expect(Key::Ident)
    }

    /// An identifier that names something the user declares.
    ///
    /// `what` is used in the error message: `"func"`, `"field"` and so on.
    pub(crate) fn parse_user_name(&mut self, what: &'static str) -> Result<Id, ParseError> {
        let id = self.parse_ident()?;
        self.check_user_name(what, id)?;
        Ok(id)
    }

    pub(crate) fn check_user_name(&self, what: &'static str, id: Id) -> Result<(), ParseError> {
        let name = self.cursor.str(id);
        if !self.options.allow_builtin_names && id.is_builtin() {
            return Err(self.error(ParseErrorKind::BuiltinName {
                what,
                name: name.to_owned(),
            }));
        }
        if !self.options.allow_double_underscore_names && name.starts_with("__") {
            return Err(self.error(ParseErrorKind::DoubleUnderscore {
                what,
                name: name.to_owned(),
            }));
        }
        Ok(())
    }

    /// `!` or `?`, or nothing.
    pub(crate) fn parse_effect(&mut self) -> Effect {
        if self.cursor.eat(Key::Exclam) {
            Effect::Impure
        } else if self.cursor.eat(Key::Question) {
            Effect::Suspendible
        } else {
            Effect::Pure
        }
    }

    /// `"(" (elem ("," elem)*)? ")"`.
    fn parse_paren_list<T>(
        &mut self,
        mut elem: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        self.expect(Key::OpenParen)?;
        let mut items = Vec::new();
        if self.cursor.eat(Key::CloseParen) {
            return Ok(items);
        }
        loop {
            items.push(elem(self)?);
            if self.cursor.eat(Key::CloseParen) {
                return Ok(items);
            }
            if !self.cursor.eat(Key::Comma) {
                return Err(self.expected(r#""," or ")""#));
            }
        }
    }

    /// `"(" (IDENT ":" type ("," IDENT ":" type)*)? ")"`.
    pub(crate) fn parse_fields(&mut self) -> Result<Vec<Field>, ParseError> {
        self.parse_paren_list(|p| {
            let loc = p.loc();
            let name = p.parse_user_name("field")?;
            p.expect(Key::Colon)?;
            let ty = p.parse_type_expr()?;
            Ok(Field { loc, name, ty })
        })
    }

    /// `"(" (IDENT ":" expr ("," IDENT ":" expr)*)? ")"`, every value
    /// effect-free.
    pub(crate) fn parse_args(&mut self) -> Result<Vec<Arg>, ParseError> {
        self.parse_paren_list(|p| {
            let name = p.parse_ident()?;
            p.expect(Key::Colon)?;
            let value = p.parse_expr()?;
            p.require_pure("arg-value", &value)?;
            Ok(Arg { name, value })
        })
    }

    /// One `assert`, `pre`, `inv` or `post` clause with its optional
    /// `via "reason"(args)`.
    pub(crate) fn parse_assert(&mut self) -> Result<Assert, ParseError> {
        let kind = match self.cursor.peek_key() {
            Some(Key::Assert) => AssertKind::Assert,
            Some(Key::Pre) => AssertKind::Pre,
            Some(Key::Inv) => AssertKind::Inv,
            Some(Key::Post) => AssertKind::Post,
            _ => return Err(self.expected(r#""assert", "pre", "inv" or "post""#)),
        };
        self.cursor.advance();

        let condition = self.parse_expr()?;
        self.require_pure("assert-condition", &condition)?;

        let (reason, args) = if self.cursor.eat(Key::Via) {
            let reason = self.expect(Key::DqStrLiteral)?;
            (Some(reason), self.parse_args()?)
        } else {
            (None, Vec::new())
        };
        Ok(Assert {
            kind,
            condition,
            reason,
            args,
        })
    }

    /// `("," assert ("," assert)*)?` before a `{`, in `pre* inv* post*` order.
    pub(crate) fn parse_assert_chain(&mut self) -> Result<Vec<Assert>, ParseError> {
        let mut asserts = Vec::new();
        if !self.cursor.eat(Key::Comma) {
            return Ok(asserts);
        }
        loop {
            asserts.push(self.parse_assert()?);
            if self.cursor.check(Key::OpenCurly) {
                break;
            }
            if !self.cursor.eat(Key::Comma) {
                return Err(self.expected(r#""," or "{""#));
            }
        }
        self.check_assert_order(&asserts)?;
        Ok(asserts)
    }

    fn check_assert_order(&self, asserts: &[Assert]) -> Result<(), ParseError> {
        let mut prev = AssertKind::Pre;
        for a in asserts {
            if a.kind == AssertKind::Assert {
                return Err(self.error(ParseErrorKind::AssertInChain));
            }
            if a.kind < prev {
                return Err(self.error(ParseErrorKind::AssertOrder));
            }
            prev = a.kind;
        }
        Ok(())
    }

    /// Reject an expression with any effect. `what` names its position.
    pub(crate) fn require_pure(&self, what: &'static str, expr: &Expr) -> Result<(), ParseError> {
        if expr.is_pure() {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::NotEffectFree {
                what,
                expr: self.text(expr),
            }))
        }
    }

    /// `"[" expr? sep expr? "]"`, or the index form `"[" expr "]"`.
    ///
    /// Slices separate with `:` and refinements with `..`.
    pub(crate) fn parse_bracket(&mut self, sep: Key) -> Result<Bracket, ParseError> {
        self.expect(Key::OpenBracket)?;
        let lo = if self.cursor.check(sep) {
            None
        } else {
            let lo = self.parse_expr()?;
            if self.cursor.eat(Key::CloseBracket) {
                return Ok(Bracket::Index(lo));
            }
            Some(lo)
        };
        if !self.cursor.eat(sep) {
            return Err(self.expected(format!(r#"{} or "]""#, crate::describe(sep))));
        }
        let hi = if self.cursor.check(Key::CloseBracket) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(Key::CloseBracket)?;
        Ok(Bracket::Range(lo, hi))
    }
}
