//! Top-level declaration parsing.

use tracing::trace;
use wuffs_ir::ast::{
    Const, Decl, DeclFlags, Effect, Expr, File, Func, Loc, PackageId, Status, StatusKind, Struct,
    Use,
};
use wuffs_ir::{base38, Key};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_file(&mut self) -> Result<File, ParseError> {
        let mut decls = Vec::new();
        while !self.cursor.is_at_end() {
            decls.push(self.parse_decl()?);
        }
        Ok(File {
            filename: self.filename.clone(),
            decls,
        })
    }

    fn parse_decl(&mut self) -> Result<Decl, ParseError> {
        let loc = self.loc();
        let decl = match self.cursor.peek_key() {
            Some(Key::PackageId) => {
                self.cursor.advance();
                let id = self.expect(Key::DqStrLiteral)?;
                let text = self.cursor.str(id);
                let value = text
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .and_then(base38::encode)
                    .ok_or_else(|| self.error(ParseErrorKind::InvalidPackageId(text.to_owned())))?;
                Decl::PackageId(PackageId { loc, id, value })
            }

            Some(Key::Use) => {
                self.cursor.advance();
                let path = self.expect(Key::DqStrLiteral)?;
                Decl::Use(Use { loc, path })
            }

            Some(Key::Pub | Key::Pri) => {
                let mut flags = DeclFlags::empty();
                if self.cursor.eat(Key::Pub) {
                    flags |= DeclFlags::PUBLIC;
                } else {
                    self.cursor.advance();
                }
                match self.cursor.peek_key() {
                    Some(Key::Const) => {
                        self.cursor.advance();
                        Decl::Const(self.parse_const(loc, flags)?)
                    }
                    Some(Key::Func) => {
                        self.cursor.advance();
                        Decl::Func(self.parse_func(loc, flags)?)
                    }
                    Some(key @ (Key::Error | Key::Suspension)) => {
                        self.cursor.advance();
                        let kind = if key == Key::Error {
                            StatusKind::Error
                        } else {
                            StatusKind::Suspension
                        };
                        let message = self.expect(Key::DqStrLiteral)?;
                        Decl::Status(Status {
                            loc,
                            flags,
                            kind,
                            message,
                        })
                    }
                    Some(Key::Struct) => {
                        self.cursor.advance();
                        let name = self.parse_user_name("struct")?;
                        if self.cursor.eat(Key::Question) {
                            flags |= DeclFlags::from_effect(Effect::Suspendible);
                        }
                        let fields = self.parse_fields()?;
                        Decl::Struct(Struct {
                            loc,
                            flags,
                            name,
                            fields,
                        })
                    }
                    _ => return Err(self.error(ParseErrorKind::UnrecognizedDecl)),
                }
            }

            _ => return Err(self.error(ParseErrorKind::UnrecognizedDecl)),
        };
        self.expect(Key::Semicolon)?;
        Ok(decl)
    }

    /// `const NAME : type = (expr | list)`, after the `const`.
    fn parse_const(&mut self, loc: Loc, flags: DeclFlags) -> Result<Const, ParseError> {
        let name = self.parse_user_name("const")?;
        trace!(name = self.cursor.str(name), "parse_const");
        self.expect(Key::Colon)?;
        let ty = self.parse_type_expr()?;
        if !self.cursor.eat(Key::Eq) {
            return Err(self.error(ParseErrorKind::ConstWithoutValue(
                self.cursor.str(name).to_owned(),
            )));
        }
        let value = if self.cursor.check(Key::Dollar) {
            self.parse_list_expr()?
        } else {
            self.parse_expr()?
        };
        self.require_pure("const value", &value)?;
        Ok(Const {
            loc,
            flags,
            name,
            ty,
            value,
        })
    }

    /// `"$" "(" (element ("," element)*)? ")"`, where an element may itself
    /// be a list.
    fn parse_list_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect(Key::Dollar)?;
        let items = self.parse_paren_list(|p| {
            if p.cursor.check(Key::Dollar) {
                p.parse_list_expr()
            } else {
                p.parse_expr()
            }
        })?;
        Ok(Expr::list(items))
    }

    /// `[recv "."] name effect? fields fields asserts? block`, after the
    /// `func`.
    fn parse_func(&mut self, loc: Loc, mut flags: DeclFlags) -> Result<Func, ParseError> {
        let first = self.parse_ident()?;
        let (receiver, name) = if self.cursor.eat(Key::Dot) {
            (Some(first), self.parse_user_name("func")?)
        } else {
            self.check_user_name("func", first)?;
            (None, first)
        };
        trace!(name = self.cursor.str(name), line = loc.line, "parse_func");

        let effect = self.parse_effect();
        flags |= DeclFlags::from_effect(effect);
        let inputs = self.parse_fields()?;
        let outputs = self.parse_fields()?;
        let asserts = self.parse_assert_chain()?;

        self.func_effect = effect;
        self.allow_var = true;
        let body = self.parse_block();
        self.allow_var = false;
        self.func_effect = Effect::Pure;

        Ok(Func {
            loc,
            flags,
            receiver,
            name,
            inputs,
            outputs,
            asserts,
            body: body?,
        })
    }
}
