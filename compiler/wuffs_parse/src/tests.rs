#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use wuffs_ir::ast::{
    AssertKind, Decl, DeclFlags, Else, ExprKind, JumpKind, ReturnValue, StatusKind, StmtKind,
};
use wuffs_ir::{base38, AssocOp, BinaryOp};
use wuffs_lexer::tokenize;

use super::*;

const FILENAME: &str = "test.wuffs";

fn parse_with(src: &str, options: &ParseOptions) -> (TokenMap, Result<File, ParseError>) {
    let mut map = TokenMap::new();
    let tokens = tokenize(&mut map, FILENAME, src.as_bytes()).unwrap().tokens;
    let result = parse(&map, FILENAME, &tokens, options);
    (map, result)
}

fn parse_ok(src: &str) -> (TokenMap, File) {
    let (map, result) = parse_with(src, &ParseOptions::default());
    (map, result.unwrap())
}

fn parse_err(src: &str) -> ParseError {
    parse_with(src, &ParseOptions::default()).1.unwrap_err()
}

/// Error from a pure function whose body is `body`.
fn body_err(body: &str) -> ParseErrorKind {
    parse_err(&format!("pri func f()() {{\n{body}\n}}\n")).kind
}

fn expr_result(src: &str) -> (TokenMap, Result<Expr, ParseError>) {
    let mut map = TokenMap::new();
    let tokens = tokenize(&mut map, FILENAME, src.as_bytes()).unwrap().tokens;
    let result = parse_expr(&map, FILENAME, &tokens, &ParseOptions::default());
    (map, result)
}

fn round_trip(src: &str) -> String {
    let (map, result) = expr_result(src);
    result.unwrap().display(&map).to_string()
}

fn only_func(file: &File) -> &wuffs_ir::ast::Func {
    match file.decls.as_slice() {
        [Decl::Func(f)] => f,
        other => panic!("expected one func, got {other:?}"),
    }
}

// === Declarations ===

#[test]
fn test_func_signature() {
    let (map, file) = parse_ok(
        "pub func foo.bar!(x: u8, y: u32[..10])(z: u8), pre x < y, post z == 0 {\n\
         \tvar i : u32\n\
         \ti = x as u32\n\
         \treturn\n\
         }\n",
    );
    let f = only_func(&file);
    assert_eq!(f.receiver.map(|id| map.str(id)), Some("foo"));
    assert_eq!(map.str(f.name), "bar");
    assert_eq!(f.flags, DeclFlags::PUBLIC | DeclFlags::IMPURE);
    assert_eq!(f.effect(), Effect::Impure);
    assert_eq!(f.inputs.len(), 2);
    assert_eq!(f.outputs.len(), 1);
    assert_eq!(
        f.asserts.iter().map(|a| a.kind).collect::<Vec<_>>(),
        vec![AssertKind::Pre, AssertKind::Post]
    );
    assert_eq!(f.body.len(), 3);
    assert_eq!(f.body[0].loc.line, 2);
    assert!(matches!(f.body[0].kind, StmtKind::Var(_)));
    assert!(matches!(f.body[2].kind, StmtKind::Return(None)));
    assert_eq!(f.inputs[1].ty.display(&map).to_string(), "u32[..10]");
}

#[test]
fn test_other_decls() {
    let (map, file) = parse_ok(
        "packageid \"gif \"\n\
         use \"std/lzw\"\n\
         pub error \"bad header\"\n\
         pri suspension \"short read\"\n\
         pri const table : array[4] u8 = $(1, 2, 3, 4)\n\
         pub struct decoder?(width: u32, height: u32)\n",
    );
    assert_eq!(file.decls.len(), 6);
    assert_eq!(&*file.filename, FILENAME);

    let Decl::PackageId(pkg) = &file.decls[0] else {
        panic!("expected packageid");
    };
    assert_eq!(Some(pkg.value), base38::encode("gif "));

    let Decl::Use(u) = &file.decls[1] else {
        panic!("expected use");
    };
    assert_eq!(map.str(u.path), "\"std/lzw\"");

    let Decl::Status(err) = &file.decls[2] else {
        panic!("expected status");
    };
    assert_eq!(err.kind, StatusKind::Error);
    assert_eq!(err.flags, DeclFlags::PUBLIC);
    assert!(matches!(&file.decls[3], Decl::Status(s) if s.kind == StatusKind::Suspension));

    let Decl::Const(c) = &file.decls[4] else {
        panic!("expected const");
    };
    assert_eq!(c.value.display(&map).to_string(), "$(1, 2, 3, 4)");
    assert_eq!(c.ty.display(&map).to_string(), "array[4] u8");

    let Decl::Struct(s) = &file.decls[5] else {
        panic!("expected struct");
    };
    assert_eq!(
        s.flags,
        DeclFlags::PUBLIC | DeclFlags::IMPURE | DeclFlags::SUSPENDIBLE
    );
    assert_eq!(s.fields.len(), 2);
    assert_eq!(s.loc.line, 6);
}

#[test]
fn test_invalid_packageid() {
    assert_eq!(
        parse_err("packageid \"toolong\"\n").kind,
        ParseErrorKind::InvalidPackageId("\"toolong\"".to_owned())
    );
    assert!(matches!(
        parse_err("packageid \"AB  \"\n").kind,
        ParseErrorKind::InvalidPackageId(_)
    ));
}

#[test]
fn test_decl_errors() {
    assert_eq!(parse_err("func f()() {\n}\n").kind, ParseErrorKind::UnrecognizedDecl);
    assert_eq!(parse_err("pub use \"x\"\n").kind, ParseErrorKind::UnrecognizedDecl);
    assert_eq!(
        parse_err("pri const x : u8\n").kind,
        ParseErrorKind::ConstWithoutValue("x".to_owned())
    );
}

// === Assertion Chains ===

#[test]
fn test_assertion_order_accepted() {
    let (_, file) = parse_ok("pri func f()(), pre a, pre b, inv c, post d, post e {\n}\n");
    assert_eq!(
        only_func(&file).asserts.iter().map(|a| a.kind).collect::<Vec<_>>(),
        vec![
            AssertKind::Pre,
            AssertKind::Pre,
            AssertKind::Inv,
            AssertKind::Post,
            AssertKind::Post
        ]
    );
}

#[test]
fn test_assertion_order_rejected() {
    assert_eq!(
        parse_err("pri func f()(), post a, pre b {\n}\n").kind,
        ParseErrorKind::AssertOrder
    );
    assert_eq!(
        parse_err("pri func f()(), inv a, pre b {\n}\n").kind,
        ParseErrorKind::AssertOrder
    );
    assert_eq!(
        parse_err("pri func f()(), pre a, assert b {\n}\n").kind,
        ParseErrorKind::AssertInChain
    );
    assert_eq!(
        body_err("while x, post a, inv b {\n}"),
        ParseErrorKind::AssertOrder
    );
}

#[test]
fn test_via_clause() {
    let (map, file) = parse_ok(
        "pri func f()() {\n\tassert x < y via \"a < b: a < c; c <= b\"(c: z)\n}\n",
    );
    let StmtKind::Assert(a) = &only_func(&file).body[0].kind else {
        panic!("expected assert");
    };
    assert_eq!(a.kind, AssertKind::Assert);
    assert_eq!(a.reason.map(|id| map.str(id)), Some("\"a < b: a < c; c <= b\""));
    assert_eq!(a.args.len(), 1);
    assert_eq!(map.str(a.args[0].name), "c");
}

// === Statements ===

#[test]
fn test_statements() {
    let (map, file) = parse_ok(
        "pri func f!(n: u32)() {\n\
         \tvar i : u32 = 0\n\
         \twhile:outer i < n, inv i <= n {\n\
         \t\tif i == 3 {\n\
         \t\t\tbreak:outer\n\
         \t\t} else if i == 4 {\n\
         \t\t\tcontinue\n\
         \t\t} else {\n\
         \t\t\ti += 1\n\
         \t\t}\n\
         \t}\n\
         \treturn error \"oops\"\n\
         }\n",
    );
    let f = only_func(&file);
    assert_eq!(f.body.len(), 3);

    let StmtKind::Var(var) = &f.body[0].kind else {
        panic!("expected var");
    };
    assert_eq!(map.str(var.name), "i");
    assert!(var.value.is_some());

    assert_eq!(f.body[1].loc.line, 3);
    let StmtKind::While(w) = &f.body[1].kind else {
        panic!("expected while");
    };
    assert_eq!(w.label.map(|id| map.str(id)), Some("outer"));
    assert_eq!(w.asserts.len(), 1);
    assert_eq!(w.condition.display(&map).to_string(), "i < n");

    let [stmt] = w.body.as_slice() else {
        panic!("expected one statement in the loop");
    };
    let StmtKind::If(outer_if) = &stmt.kind else {
        panic!("expected if");
    };
    let StmtKind::Jump(jump) = &outer_if.then_body[0].kind else {
        panic!("expected break");
    };
    assert_eq!(jump.kind, JumpKind::Break);
    assert_eq!(jump.label.map(|id| map.str(id)), Some("outer"));

    let Some(Else::If(else_if)) = &outer_if.else_branch else {
        panic!("expected else if");
    };
    assert!(matches!(
        &else_if.then_body[0].kind,
        StmtKind::Jump(j) if j.kind == JumpKind::Continue && j.label.is_none()
    ));
    let Some(Else::Block(else_body)) = &else_if.else_branch else {
        panic!("expected else block");
    };
    let StmtKind::Assign(assign) = &else_body[0].kind else {
        panic!("expected assignment");
    };
    assert_eq!(assign.op, Some(BinaryOp::Add));

    assert!(matches!(
        &f.body[2].kind,
        StmtKind::Return(Some(ReturnValue::Status { kind: StatusKind::Error, .. }))
    ));
}

#[test]
fn test_var_placement() {
    let (_, file) = parse_ok("pri func f()() {\n\tvar a : u8\n\tvar b : u8\n\ta = b\n}\n");
    assert_eq!(only_func(&file).body.len(), 3);

    assert_eq!(body_err("x = 1\nvar y : u8"), ParseErrorKind::VarNotAtTop);
    assert_eq!(body_err("if true {\nvar y : u8\n}"), ParseErrorKind::VarNotAtTop);
}

#[test]
fn test_assignment_targets() {
    let (_, file) = parse_ok("pri func f()() {\n\ta.b[i] += 1\n\tx = y\n}\n");
    let f = only_func(&file);
    assert!(matches!(&f.body[0].kind, StmtKind::Assign(a) if a.op == Some(BinaryOp::Add)));
    assert!(matches!(&f.body[1].kind, StmtKind::Assign(a) if a.op.is_none()));

    assert_eq!(
        body_err("1 = x"),
        ParseErrorKind::LiteralAssignment("1".to_owned())
    );
    assert_eq!(
        body_err("x[i:] = y"),
        ParseErrorKind::InvalidAssignment("x[i:]".to_owned())
    );
    assert_eq!(
        body_err("(a + b) = c"),
        ParseErrorKind::InvalidAssignment("a + b".to_owned())
    );
}

// === Effects ===

#[test]
fn test_statement_effect_bounded_by_func() {
    assert_eq!(
        body_err("g!()"),
        ParseErrorKind::EffectTooStrong {
            value: "g!()".to_owned(),
            effect: "!",
            func_effect: "",
        }
    );
    parse_ok("pri func f!()() {\n\tg!()\n\tx = h!()\n}\n");
    parse_ok("pri func f?()() {\n\tg!()\n\tx = h?()\n}\n");
    assert!(matches!(
        parse_err("pri func f!()() {\n\tg?()\n}\n").kind,
        ParseErrorKind::EffectTooStrong { effect: "?", func_effect: "!", .. }
    ));
}

#[test]
fn test_effect_free_positions() {
    assert_eq!(
        body_err("if g!() {\n}"),
        ParseErrorKind::NotEffectFree {
            what: "if-condition",
            expr: "g!()".to_owned(),
        }
    );
    assert!(matches!(
        body_err("while g!() {\n}"),
        ParseErrorKind::NotEffectFree { what: "while-condition", .. }
    ));
    assert!(matches!(
        body_err("assert g!()"),
        ParseErrorKind::NotEffectFree { what: "assert-condition", .. }
    ));
    assert!(matches!(
        body_err("h(a: g!())"),
        ParseErrorKind::NotEffectFree { what: "arg-value", .. }
    ));
    assert!(matches!(
        body_err("g!() = 1"),
        ParseErrorKind::NotEffectFree { what: "assignment LHS", .. }
    ));
    assert_eq!(
        body_err("x = g!() + 1"),
        ParseErrorKind::SubExprEffect("g!() + 1".to_owned())
    );
}

// === Names ===

#[test]
fn test_builtin_names() {
    assert_eq!(
        parse_err("pri struct u8()\n").kind,
        ParseErrorKind::BuiltinName {
            what: "struct",
            name: "u8".to_owned(),
        }
    );
    assert!(matches!(
        parse_err("pri func f(this: u8)() {\n}\n").kind,
        ParseErrorKind::BuiltinName { what: "field", .. }
    ));
    assert!(matches!(
        body_err("var status : u8"),
        ParseErrorKind::BuiltinName { what: "var", .. }
    ));

    let options = ParseOptions {
        allow_builtin_names: true,
        ..ParseOptions::default()
    };
    assert!(parse_with("pri struct u8()\n", &options).1.is_ok());
    // A receiver names an existing struct, so only the method is checked.
    assert_eq!(parse_ok("pri func io_reader.f()() {\n}\n").1.decls.len(), 1);
}

#[test]
fn test_double_underscore_names() {
    assert_eq!(
        parse_err("pri func __f()() {\n}\n").kind,
        ParseErrorKind::DoubleUnderscore {
            what: "func",
            name: "__f".to_owned(),
        }
    );
    let options = ParseOptions {
        allow_double_underscore_names: true,
        ..ParseOptions::default()
    };
    assert!(parse_with("pri func __f()() {\n}\n", &options).1.is_ok());
    assert_eq!(parse_ok("pri func _f()() {\n}\n").1.decls.len(), 1);
}

// === Error Reporting ===

#[test]
fn test_expected_error_display() {
    let err = parse_err("\n\nuse std\n");
    assert_eq!(
        err.kind,
        ParseErrorKind::Expected {
            expected: "string literal".to_owned(),
            got: "std".to_owned(),
        }
    );
    assert_eq!(err.line, 3);
    assert_eq!(
        err.to_string(),
        "parse: expected string literal, got \"std\" at test.wuffs:3"
    );

    let err = parse_err("pri error \"a\" \"b\"\n");
    assert_eq!(
        err.to_string(),
        r#"parse: expected (implicit) ";", got "\"b\"" at test.wuffs:1"#
    );
}

#[test]
fn test_unexpected_eof() {
    let err = parse_err("pri func f()() {\n");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedEof {
            expected: r#""}""#.to_owned(),
        }
    );
    assert_eq!(err.line, 1);
}

#[test]
fn test_empty_file() {
    let (_, file) = parse_ok("");
    assert!(file.decls.is_empty());
    let (_, file) = parse_ok("// only a comment\n");
    assert!(file.decls.is_empty());
}

// === Expressions ===

#[test]
fn test_expr_round_trip() {
    assert_eq!(round_trip("x and (y < z)"), "x and (y < z)");
    assert_eq!(round_trip("f(a: i, b: j)"), "f(a:i, b:j)");
    assert_eq!(round_trip("x[i:j]"), "x[i:j]");
    assert_eq!(round_trip("x[:]"), "x[:]");
    assert_eq!(round_trip("x[i]"), "x[i]");
    assert_eq!(round_trip("x as u8"), "x as u8");
    assert_eq!(round_trip("-(a + b)"), "-(a + b)");
    assert_eq!(round_trip("not this.done"), "not this.done");
    assert_eq!(round_trip("this.src.read_u8?()"), "this.src.read_u8?()");
    assert_eq!(round_trip("(((x)))"), "x");
}

#[test]
fn test_slice_and_refinement_brackets() {
    assert_eq!(round_trip("x[:j]"), "x[:j]");
    assert!(matches!(
        expr_result("x[i]").1.unwrap().kind,
        ExprKind::Index { .. }
    ));
    assert_eq!(
        expr_result("x[i j]").1.unwrap_err().kind,
        ParseErrorKind::Expected {
            expected: r#"":" or "]""#.to_owned(),
            got: "j".to_owned(),
        }
    );

    let (map, file) = parse_ok("pri struct s(a: u32[1..], b: u8[..], c: u64[0..7])
");
    let Decl::Struct(s) = &file.decls[0] else {
        panic!("expected a struct, got {:?}", file.decls[0]);
    };
    let types: Vec<String> = s.fields.iter().map(|f| f.ty.display(&map).to_string()).collect();
    assert_eq!(types, ["u32[1..]", "u8[..]", "u64[0..7]"]);

    // A refinement has no index form.
    assert_eq!(
        parse_err("pri struct s(a: u32[5])\n").kind,
        ParseErrorKind::Expected {
            expected: r#"".."""#.to_owned(),
            got: "]".to_owned(),
        }
    );
    assert_eq!(
        parse_err("pri struct s(a: u32[1 5])\n").kind,
        ParseErrorKind::Expected {
            expected: r#"".." or "]""#.to_owned(),
            got: "5".to_owned(),
        }
    );
}

#[test]
fn test_associative_chains() {
    let (_, result) = expr_result("a + b + c + d");
    let e = result.unwrap();
    let ExprKind::Associative { op, operands } = &e.kind else {
        panic!("expected an associative node, got {e:?}");
    };
    assert_eq!(*op, AssocOp::Add);
    assert_eq!(operands.len(), 4);

    let (_, result) = expr_result("a - b");
    assert!(matches!(
        result.unwrap().kind,
        ExprKind::Binary { op: BinaryOp::Sub, .. }
    ));

    // A non-associative operator never chains.
    let (_, result) = expr_result("a - b - c");
    assert!(matches!(
        result.unwrap_err().kind,
        ParseErrorKind::Expected { got, .. } if got == "-"
    ));
}

#[test]
fn test_mixed_operators_need_parens() {
    let (_, result) = expr_result("a + b * c");
    assert_eq!(
        result.unwrap_err().kind,
        ParseErrorKind::Expected {
            expected: "end of expression".to_owned(),
            got: "*".to_owned(),
        }
    );
    assert_eq!(round_trip("a + (b * c)"), "a + (b * c)");
}

#[test]
fn test_dot_num_literal() {
    let (_, result) = expr_result("x.0");
    assert_eq!(result.unwrap_err().kind, ParseErrorKind::DotNumLiteral);
}

#[test]
fn test_depth_limits() {
    // Unoptimized frames are large, so recurse to the limit on a roomy stack.
    let deep = std::thread::Builder::new()
        .stack_size(32 << 20)
        .spawn(|| {
            let deep = format!("{}x{}", "(".repeat(300), ")".repeat(300));
            expr_result(&deep).1.unwrap_err().kind
        })
        .unwrap()
        .join()
        .unwrap();
    assert_eq!(deep, ParseErrorKind::ExprTooDeep);

    let shallow = format!("{}x{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(round_trip(&shallow), "x");

    let deep_type = format!("pri struct s(x: {}u8)\n", "ptr ".repeat(70));
    assert_eq!(parse_err(&deep_type).kind, ParseErrorKind::TypeExprTooDeep);

    let ok_type = format!("pri struct s(x: {}u8)\n", "ptr ".repeat(40));
    parse_ok(&ok_type);
}
