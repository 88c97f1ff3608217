//! Escape sequence processing for quoted literals.
//!
//! Recognized escapes: `\"`, `\'`, `\/`, `\0`, `\?`, `\\`, `\a`, `\b`, `\e`,
//! `\f`, `\n`, `\r`, `\t`, `\v`, `\xHH`, `\uHHHH` and `\UHHHHHHHH`.

/// Resolve a single escape character to its byte.
#[inline]
fn resolve_escape(c: u8) -> Option<u8> {
    Some(match c {
        b'"' => b'"',
        b'\'' => b'\'',
        b'/' => b'/',
        b'0' => 0x00,
        b'?' => b'?',
        b'\\' => b'\\',
        b'a' => 0x07,
        b'b' => 0x08,
        b'e' => 0x1B,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'v' => 0x0B,
        _ => return None,
    })
}

fn unhex(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |acc, &c| {
        let d = char::from(c).to_digit(16)?;
        Some((acc << 4) | d)
    })
}

/// Strips the quotes, and a `be` or `le` suffix on `'`-strings.
fn strip_quotes(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    if b.len() < 2 {
        return None;
    }
    match b[0] {
        b'"' if b[b.len() - 1] == b'"' => Some(&s[1..s.len() - 1]),
        b'\'' if b[b.len() - 1] == b'\'' => Some(&s[1..s.len() - 1]),
        b'\'' if b.len() >= 4 && (s.ends_with("'be") || s.ends_with("'le")) => {
            Some(&s[1..s.len() - 3])
        }
        _ => None,
    }
}

/// Unescape a quoted literal, quotes included, into its bytes.
///
/// Returns `None` if `s` is not quoted or holds an invalid escape.
pub fn unescape(s: &str) -> Option<Vec<u8>> {
    let body = strip_quotes(s)?.as_bytes();

    let mut out = Vec::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        if body[i] != b'\\' {
            out.push(body[i]);
            i += 1;
            continue;
        }
        let next = *body.get(i + 1)?;
        if let Some(b) = resolve_escape(next) {
            out.push(b);
            i += 2;
            continue;
        }
        let width = match next {
            b'x' => 2,
            b'u' => 4,
            b'U' => 8,
            _ => return None,
        };
        let digits = body.get(i + 2..i + 2 + width)?;
        let u = unhex(digits)?;
        if width == 2 {
            // `u` has at most 8 bits here.
            out.push(u8::try_from(u).ok()?);
        } else {
            let c = char::from_u32(u)?;
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
        i += 2 + width;
    }
    Some(out)
}
