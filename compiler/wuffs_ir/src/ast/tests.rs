#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;
use crate::{AssocOp, BinaryOp, TokenMap, UnaryOp};

fn ident(map: &mut TokenMap, s: &str) -> Expr {
    Expr::ident(map.insert(s).unwrap())
}

fn lit(map: &mut TokenMap, s: &str) -> Expr {
    Expr::literal(map.insert(s).unwrap())
}

#[test]
fn test_call_flags_propagate_to_parents() {
    let mut map = TokenMap::new();
    let f = ident(&mut map, "f");
    let call = Expr::call(f, Effect::Suspendible, Vec::new());
    assert_eq!(call.flags, ExprFlags::all());
    assert_eq!(call.call_effect(), Effect::Suspendible);

    let sum = Expr::binary(BinaryOp::Add, call, lit(&mut map, "1"));
    assert_eq!(sum.flags, ExprFlags::IMPURE | ExprFlags::SUSPENDIBLE);
    assert_eq!(sum.effect(), Effect::Suspendible);
    assert_eq!(sum.call_effect(), Effect::Pure);
    assert!(!sum.is_pure());
}

#[test]
fn test_pure_call_stays_pure() {
    let mut map = TokenMap::new();
    let x = ident(&mut map, "x");
    let arg = Arg {
        name: map.insert("a").unwrap(),
        value: x,
    };
    let g = ident(&mut map, "g");
    let call = Expr::call(g, Effect::Pure, vec![arg]);
    assert!(call.is_pure());
    assert_eq!(call.effect(), Effect::Pure);
}

#[test]
fn test_impure_argument_taints_call() {
    let mut map = TokenMap::new();
    let h = ident(&mut map, "h");
    let inner = Expr::call(h, Effect::Impure, Vec::new());
    let arg = Arg {
        name: map.insert("a").unwrap(),
        value: inner,
    };
    let g = ident(&mut map, "g");
    let outer = Expr::call(g, Effect::Pure, vec![arg]);
    assert_eq!(outer.effect(), Effect::Impure);
    assert_eq!(outer.call_effect(), Effect::Pure);
}

#[test]
fn test_display_operators() {
    let mut map = TokenMap::new();
    let x = ident(&mut map, "x");
    let y = ident(&mut map, "y");
    let z = ident(&mut map, "z");
    let lt = Expr::binary(BinaryOp::Less, y, z);
    let and = Expr::binary(BinaryOp::And, x, lt);
    assert_eq!(and.display(&map).to_string(), "x and (y < z)");

    let a = ident(&mut map, "a");
    let b = ident(&mut map, "b");
    let c = ident(&mut map, "c");
    let sum = Expr::associative(AssocOp::Add, vec![a, b, c]);
    let neg = Expr::unary(UnaryOp::Minus, sum);
    assert_eq!(neg.display(&map).to_string(), "-(a + b + c)");

    let n = ident(&mut map, "n");
    let not = Expr::unary(UnaryOp::Not, n);
    assert_eq!(not.display(&map).to_string(), "not n");
}

#[test]
fn test_display_suffixes() {
    let mut map = TokenMap::new();
    let x = ident(&mut map, "x");
    let i = ident(&mut map, "i");
    let j = ident(&mut map, "j");
    let sliced = Expr::slice(x, Some(i), None);
    let selected = Expr::select(sliced, map.insert("len").unwrap());
    assert_eq!(selected.display(&map).to_string(), "x[i:].len");

    let f = ident(&mut map, "f");
    let call = Expr::call(
        f,
        Effect::Impure,
        vec![Arg {
            name: map.insert("a").unwrap(),
            value: j,
        }],
    );
    let k = ident(&mut map, "k");
    let indexed = Expr::index(call, k);
    assert_eq!(indexed.display(&map).to_string(), "f!(a:j)[k]");

    let items = vec![lit(&mut map, "1"), lit(&mut map, "2")];
    assert_eq!(Expr::list(items).display(&map).to_string(), "$(1, 2)");
}

#[test]
fn test_display_types() {
    let mut map = TokenMap::new();
    let u8_id = map.insert("u8").unwrap();
    let pkg = map.insert("base").unwrap();
    let refined = TypeExpr::Named {
        pkg: Some(pkg),
        name: u8_id,
        refinement: Some(Refinement {
            lo: None,
            hi: Some(Box::new(lit(&mut map, "7"))),
        }),
    };
    let ty = TypeExpr::Array {
        length: Box::new(lit(&mut map, "4")),
        inner: Box::new(TypeExpr::Ptr(Box::new(refined))),
    };
    assert_eq!(ty.display(&map).to_string(), "array[4] ptr base.u8[..7]");

    let x = ident(&mut map, "x");
    let cast = Expr::cast(x, TypeExpr::named(u8_id));
    assert_eq!(cast.display(&map).to_string(), "x as u8");
}

#[test]
fn test_display_depth_guard() {
    let mut map = TokenMap::new();
    let mut e = ident(&mut map, "x");
    for _ in 0..=MAX_EXPR_DEPTH + 1 {
        e = Expr::unary(UnaryOp::Minus, e);
    }
    assert!(e.display(&map).to_string().ends_with("!expr_recursion_depth_too_large!"));
}

#[test]
fn test_decl_flags_effect() {
    assert_eq!(DeclFlags::from_effect(Effect::Suspendible).effect(), Effect::Suspendible);
    assert!(DeclFlags::from_effect(Effect::Suspendible).contains(DeclFlags::IMPURE));
    assert_eq!(DeclFlags::PUBLIC.effect(), Effect::Pure);
    assert!(Effect::Pure < Effect::Impure && Effect::Impure < Effect::Suspendible);
}

#[test]
fn test_loc_display() {
    let loc = Loc {
        filename: "a.wuffs".into(),
        line: 12,
    };
    assert_eq!(loc.to_string(), "a.wuffs:12");
}
