//! Numeric literal regrouping.

/// Append `s` with its digits regrouped: hexadecimal in fours after a `0x`
/// prefix, decimal in sixes, letters uppercased. Existing underscores are
/// dropped first.
pub(crate) fn append_num(buf: &mut String, s: &str) {
    let (digits, group_len) = match s.as_bytes() {
        [b'0', b'x' | b'X', ..] => {
            buf.push_str("0x");
            (&s[2..], 4)
        }
        _ => (s, 6),
    };

    let count = digits.bytes().filter(|&c| c != b'_').count();
    let mut until_group = match count % group_len {
        0 => group_len,
        n => n,
    };

    for c in digits.bytes().filter(|&c| c != b'_') {
        if until_group > 0 {
            until_group -= 1;
        } else {
            until_group = group_len - 1;
            buf.push('_');
        }
        buf.push(char::from(c.to_ascii_uppercase()));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::append_num;

    fn num(s: &str) -> String {
        let mut buf = String::new();
        append_num(&mut buf, s);
        buf
    }

    #[test]
    fn test_decimal_groups_of_six() {
        assert_eq!(num("1"), "1");
        assert_eq!(num("123456"), "123456");
        assert_eq!(num("1234567"), "1_234567");
        assert_eq!(num("1_2_3_4_5_6_7"), "1_234567");
        assert_eq!(num("1234567890123"), "1_234567_890123");
    }

    #[test]
    fn test_hex_groups_of_four() {
        assert_eq!(num("0xff"), "0xFF");
        assert_eq!(num("0XABCD"), "0xABCD");
        assert_eq!(num("0x12345"), "0x1_2345");
        assert_eq!(num("0xdead_beef"), "0xDEAD_BEEF");
        assert_eq!(num("0x1_0000_0000"), "0x1_0000_0000");
    }
}
