#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use wuffs_ir::Key;

use super::*;

fn lex(src: &str) -> (TokenMap, Lexed) {
    let mut map = TokenMap::new();
    let lexed = tokenize(&mut map, "test.wuffs", src.as_bytes()).unwrap();
    (map, lexed)
}

fn spellings(map: &TokenMap, lexed: &Lexed) -> Vec<String> {
    lexed.tokens.iter().map(|t| map.str(t.id).to_owned()).collect()
}

fn lex_err(src: &[u8]) -> LexError {
    let mut map = TokenMap::new();
    tokenize(&mut map, "test.wuffs", src).unwrap_err()
}

#[test]
fn test_basic_tokens() {
    let (map, lexed) = lex("pri func foo.bar!(x: u8) {}");
    assert_eq!(
        spellings(&map, &lexed),
        vec!["pri", "func", "foo", ".", "bar", "!", "(", "x", ":", "u8", ")", "{", "}"]
    );
    assert_eq!(lexed.tokens[0].id.key, Key::Pri);
    assert_eq!(lexed.tokens[2].id.key, Key::Ident);
}

#[test]
fn test_longest_match_operators() {
    let (map, lexed) = lex("a <<= b &^ c ~+= d .. e != f");
    assert_eq!(
        spellings(&map, &lexed),
        vec!["a", "<<=", "b", "&^", "c", "~+=", "d", "..", "e", "!=", "f"]
    );
}

#[test]
fn test_implicit_semicolons() {
    let (map, lexed) = lex("x = y\nreturn\nf(\na)\n{\n}\n");
    assert_eq!(
        spellings(&map, &lexed),
        vec!["x", "=", "y", ";", "return", ";", "f", "(", "a", ")", ";", "{", "}", ";"]
    );
    let lines: Vec<u32> = lexed.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 1, 1, 2, 2, 3, 3, 4, 4, 4, 5, 6, 6]);
}

#[test]
fn test_comments_by_line() {
    let (map, lexed) = lex("// one\nx\n\ny  // four\n");
    assert_eq!(spellings(&map, &lexed), vec!["x", ";", "y", ";"]);
    assert_eq!(
        lexed.comments,
        vec![
            String::new(),
            "// one".to_owned(),
            String::new(),
            String::new(),
            "// four".to_owned()
        ]
    );
}

#[test]
fn test_numbers() {
    let (map, lexed) = lex("0 12 1_000 0x1F 0XAB_cd");
    assert_eq!(spellings(&map, &lexed), vec!["0", "12", "1_000", "0x1F", "0XAB_cd"]);
    assert_eq!(lexed.tokens[0].id.key, Key::Zero);
    assert!(lexed.tokens.iter().all(|t| t.id.is_num_literal()));
}

#[test]
fn test_number_errors() {
    assert_eq!(lex_err(b"012").kind, LexErrorKind::LegacyOctal);
    assert_eq!(lex_err(b"1__0").kind, LexErrorKind::InvalidNumericLiteral);
    assert_eq!(lex_err(b"10_").kind, LexErrorKind::InvalidNumericLiteral);
    assert_eq!(lex_err(b"0x").kind, LexErrorKind::InvalidNumericLiteral);
}

#[test]
fn test_strings() {
    let (map, lexed) = lex(r#"use "std/gif" 'a' '\x01\x02'be"#);
    assert_eq!(spellings(&map, &lexed), vec!["use", "\"std/gif\"", "'a'", r"'\x01\x02'be"]);
    assert_eq!(lexed.tokens[1].id.key, Key::DqStrLiteral);
    assert_eq!(lexed.tokens[3].id.key, Key::SqStrLiteral);
}

#[test]
fn test_string_errors() {
    assert_eq!(lex_err(br#""a\"b""#).kind, LexErrorKind::BackslashInDqString);
    assert_eq!(
        lex_err(b"\"abc\nx\"").kind,
        LexErrorKind::UnterminatedString { quote: '"' }
    );
    assert_eq!(
        lex_err(b"'abc").kind,
        LexErrorKind::UnterminatedString { quote: '\'' }
    );
    assert_eq!(lex_err(b"\"a\x01\"").kind, LexErrorKind::ControlCharInString);
    assert_eq!(lex_err(br"'\q'").kind, LexErrorKind::InvalidSqString);
    assert_eq!(lex_err(b"'ab'").kind, LexErrorKind::MissingEndianSuffix);
}

#[test]
fn test_token_size_limits() {
    let ident = "a".repeat(MAX_TOKEN_SIZE);
    let (_, lexed) = lex(&ident);
    assert_eq!(lexed.tokens.len(), 1);

    let too_long = "a".repeat(MAX_TOKEN_SIZE + 1);
    assert_eq!(lex_err(too_long.as_bytes()).kind, LexErrorKind::IdentTooLong);

    let number = "1".repeat(MAX_TOKEN_SIZE + 1);
    assert_eq!(lex_err(number.as_bytes()).kind, LexErrorKind::ConstantTooLong);

    let string = format!("\"{}\"", "s".repeat(MAX_TOKEN_SIZE));
    assert_eq!(lex_err(string.as_bytes()).kind, LexErrorKind::StringTooLong);
}

#[test]
fn test_unrecognized_bytes() {
    let err = lex_err(b"x\n#");
    assert_eq!(err.kind, LexErrorKind::UnrecognizedByte { byte: b'#', ch: '#' });
    assert_eq!(err.line, 2);
    assert_eq!(err.to_string(), "token: unrecognized byte '\\x23' ('#') at test.wuffs:2");

    assert_eq!(lex_err("é".as_bytes()).kind, LexErrorKind::NonAsciiByte(0xC3));
    assert_eq!(lex_err(b"a\n\n\xFF").line, 3);
    assert_eq!(lex_err(b"\xFF").kind, LexErrorKind::NonAsciiByte(0xFF));
}

#[test]
fn test_non_ascii_in_comments_and_strings() {
    let mut map = TokenMap::new();
    let lexed = tokenize(&mut map, "test.wuffs", b"// caf\xE9\nx = 1\n").unwrap();
    assert_eq!(spellings(&map, &lexed), vec!["x", "=", "1", ";"]);
    assert_eq!(lexed.tokens[0].line, 2);
    assert_eq!(lexed.comments[1], "// caf\u{FFFD}");

    let lexed = tokenize(&mut map, "test.wuffs", "x = 1  // naïve\n".as_bytes()).unwrap();
    assert_eq!(lexed.comments[1], "// naïve");

    let lexed = tokenize(&mut map, "test.wuffs", b"\"\xFFok\" // '\n").unwrap();
    assert_eq!(spellings(&map, &lexed), vec!["\"\u{FFFD}ok\"", ";"]);

    // Outside them, the first non-ASCII byte is still an error.
    let err = lex_err(b"// \xE9\n\"\xE9\" \xE9\n");
    assert_eq!(err.kind, LexErrorKind::NonAsciiByte(0xE9));
    assert_eq!(err.line, 2);
    assert_eq!(lex_err("x = \"é\" é".as_bytes()).kind, LexErrorKind::NonAsciiByte(0xC3));
}

#[test]
fn test_errors_keep_source_order() {
    assert_eq!(lex_err(b"# \xFF").kind, LexErrorKind::UnrecognizedByte { byte: b'#', ch: '#' });
    assert_eq!(lex_err(b"\x7F").kind, LexErrorKind::UnrecognizedByte { byte: 0x7F, ch: '\x7F' });
}

#[test]
fn test_error_display() {
    let err = lex_err(b"\n\n012");
    assert_eq!(err.to_string(), "token: legacy octal syntax at test.wuffs:3");
}

#[test]
fn test_shared_map_across_files() {
    let mut map = TokenMap::new();
    let a = tokenize(&mut map, "a.wuffs", b"foo bar").unwrap();
    let b = tokenize(&mut map, "b.wuffs", b"bar foo").unwrap();
    assert_eq!(a.tokens[0].id, b.tokens[1].id);
    assert_eq!(a.tokens[1].id, b.tokens[0].id);
}
