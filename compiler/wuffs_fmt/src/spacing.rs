//! Inter-token spacing.
//!
//! A space separates two tokens unless the left one is tight-right or the
//! right one is tight-left. Two tokens are context dependent and decided by
//! looking at the token before them:
//!
//! - `(` is tight-left after a call-like token (`f(x)`, `f?(x)`) but not
//!   elsewhere (`a * (b + c)`).
//! - `+` and `-` are tight-right when they look unary (`-x`, `f(-1)`) and
//!   spaced when they look binary (`a - b`).

use wuffs_ir::{Id, Key};

/// Whether a space goes between `prev` and `id`.
///
/// `prev_is_tight_right` is the value [`is_tight_right`] returned for
/// `prev`.
pub(crate) fn needs_space(prev: Option<Id>, prev_is_tight_right: bool, id: Id) -> bool {
    let Some(prev) = prev else {
        return false;
    };
    let spaced = prev.key == Key::Eq || (!prev_is_tight_right && !id.is_tight_left());
    spaced && !(id.key == Key::OpenParen && is_call_like(prev))
}

/// Whether `id`, following `prev`, binds tightly to the token after it.
pub(crate) fn is_tight_right(prev: Option<Id>, id: Id) -> bool {
    match prev {
        Some(prev) if id.is_unary_op() && id.is_binary_op() => !is_operand_end(prev),
        _ => id.is_tight_right(),
    }
}

/// A token that can end an operand.
fn is_operand_end(id: Id) -> bool {
    id.is_close() || id.is_ident() || id.is_literal()
}

/// A token that a `(` hugs.
fn is_call_like(id: Id) -> bool {
    id.is_close() || id.is_ident() || id.is_str_literal() || id.key == Key::Question
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use wuffs_ir::TokenMap;

    use super::*;

    fn id(map: &mut TokenMap, s: &str) -> Id {
        map.insert(s).unwrap()
    }

    #[test]
    fn test_paren_after_call_like_tokens() {
        let mut map = TokenMap::new();
        let open = id(&mut map, "(");
        for s in ["f", ")", "]", "?", "\"s\""] {
            let prev = id(&mut map, s);
            assert!(!needs_space(Some(prev), false, open), "after {s}");
        }
        let star = id(&mut map, "*");
        assert!(needs_space(Some(star), false, open));
    }

    #[test]
    fn test_minus_looks_unary_or_binary() {
        let mut map = TokenMap::new();
        let minus = id(&mut map, "-");
        let x = id(&mut map, "x");
        let open = id(&mut map, "(");
        let eq = id(&mut map, "=");
        assert!(!is_tight_right(Some(x), minus));
        assert!(is_tight_right(Some(open), minus));
        assert!(is_tight_right(Some(eq), minus));
        // The first token on a line uses the static flag.
        assert!(!is_tight_right(None, minus));
    }

    #[test]
    fn test_tight_left_and_eq() {
        let mut map = TokenMap::new();
        let x = id(&mut map, "x");
        let comma = id(&mut map, ",");
        let eq = id(&mut map, "=");
        let close = id(&mut map, ")");
        assert!(!needs_space(Some(x), false, comma));
        assert!(needs_space(Some(comma), false, x));
        assert!(needs_space(Some(eq), false, close));
        assert!(!needs_space(None, false, x));
    }
}
