#![allow(clippy::unwrap_used, clippy::expect_used)]

use wuffs_lexer::tokenize;

use super::*;

fn lexed(src: &str) -> (TokenMap, Vec<Token>) {
    let mut map = TokenMap::new();
    let tokens = tokenize(&mut map, "test.wuffs", src.as_bytes())
        .unwrap()
        .tokens;
    (map, tokens)
}

#[test]
fn test_cursor_navigation() {
    let (map, tokens) = lexed("var x : u8");
    let mut cursor = Cursor::new(&map, &tokens);

    assert!(cursor.check(Key::Var));
    assert!(!cursor.is_at_end());
    assert!(!cursor.eat(Key::Ident));
    assert!(cursor.eat(Key::Var));

    let x = cursor.advance().unwrap();
    assert_eq!(cursor.str(x), "x");
    assert!(cursor.eat(Key::Colon));
    assert_eq!(cursor.peek_key(), Some(Key::Ident));
    cursor.advance();

    assert!(cursor.is_at_end());
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.advance(), None);
}

#[test]
fn test_line_tracks_current_token() {
    let (map, tokens) = lexed("a\nb\n\nc");
    let mut cursor = Cursor::new(&map, &tokens);
    assert_eq!(cursor.line(), 1);
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.line(), 2);
    while cursor.advance().is_some() {}
    assert_eq!(cursor.line(), 4);
}

#[test]
fn test_empty_stream() {
    let map = TokenMap::new();
    let cursor = Cursor::new(&map, &[]);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.line(), 0);
}
