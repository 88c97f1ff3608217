//! Base-38 packing of four-byte package identifiers.
//!
//! The alphabet is `' '`, `'0'..='9'`, `'?'` and `'a'..='z'`, valued 0
//! through 37 in that order. A four-byte string packs into a `u32` no
//! greater than [`MAX`], so it fits in [`MAX_BITS`] bits.

/// The largest encoded value, for `"zzzz"`.
pub const MAX: u32 = 38 * 38 * 38 * 38 - 1;

/// Bits needed to hold any encoded value.
pub const MAX_BITS: u32 = 21;

const ALPHABET: &[u8; 38] = b" 0123456789?abcdefghijklmnopqrstuvwxyz";

fn digit(c: u8) -> Option<u32> {
    let d = match c {
        b' ' => 0,
        b'0'..=b'9' => c - b'0' + 1,
        b'?' => 11,
        b'a'..=b'z' => c - b'a' + 12,
        _ => return None,
    };
    Some(u32::from(d))
}

/// Encodes exactly four alphabet bytes. `"    "` maps to zero.
pub fn encode(s: &str) -> Option<u32> {
    let bytes: &[u8; 4] = s.as_bytes().try_into().ok()?;
    bytes
        .iter()
        .try_fold(0u32, |acc, &c| Some(acc * 38 + digit(c)?))
}

/// Inverts [`encode`] for values up to [`MAX`].
pub fn decode(mut u: u32) -> Option<String> {
    if u > MAX {
        return None;
    }
    let mut out = [b' '; 4];
    for slot in out.iter_mut().rev() {
        *slot = ALPHABET[(u % 38) as usize];
        u /= 38;
    }
    Some(out.iter().map(|&c| char::from(c)).collect())
}
