//! The per-compilation intern table.

use rustc_hash::FxHashMap;

use super::{Id, Key, BUILTIN_COUNT};
use crate::Name;

/// Maximum number of distinct spellings in one map.
pub const MAX_TOKENS: usize = (1 << 20) - 1;

/// Built-in identifiers, pre-interned after the fixed-spelling keys.
pub const BUILTIN_IDENTS: [&str; 53] = [
    "_",
    "this",
    "in",
    "out",
    "SLICE",
    "base",
    // Numeric types
    "i8",
    "i16",
    "i32",
    "i64",
    "u8",
    "u16",
    "u32",
    "u64",
    "bool",
    // I/O types
    "io_reader",
    "io_writer",
    "status",
    "image_config",
    // I/O methods
    "mark",
    "read_u8",
    "read_u16be",
    "read_u16le",
    "read_u32be",
    "read_u32le",
    "read_u64be",
    "read_u64le",
    "since_mark",
    "write_u8",
    "write_u16be",
    "write_u16le",
    "write_u32be",
    "write_u32le",
    "write_u64be",
    "write_u64le",
    // Status and slice methods
    "is_error",
    "is_ok",
    "is_suspension",
    "copy_from_history32",
    "copy_from_reader32",
    "copy_from_slice",
    "copy_from_slice32",
    "skip32",
    "skip64",
    "length",
    "available",
    "prefix",
    "suffix",
    "limit",
    "low_bits",
    "high_bits",
    "unread_u8",
    "is_marked",
];

/// Error when interning a spelling fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    #[error("too many distinct tokens")]
    TooManyTokens,
}

/// Intern table mapping spellings to [`Id`]s.
///
/// Identical spellings always map to the same `Id` for the lifetime of a
/// map. The table only grows. Writers take `&mut self`, so one map is never
/// mutated by two callers at once.
pub struct TokenMap {
    by_name: FxHashMap<Box<str>, Id>,
    by_id: Vec<Box<str>>,
}

impl TokenMap {
    /// Create a map holding every built-in spelling.
    pub fn new() -> Self {
        let mut map = TokenMap {
            by_name: FxHashMap::default(),
            by_id: Vec::with_capacity(BUILTIN_COUNT * 2),
        };
        for key in Key::FIXED {
            if let Some(s) = key.spelling() {
                map.push(s, key);
            }
        }
        for s in BUILTIN_IDENTS {
            map.push(s, Key::Ident);
        }
        map
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "len is bounded by MAX_TOKENS"
    )]
    fn push(&mut self, s: &str, key: Key) -> Id {
        let id = Id {
            key,
            name: Name::from_raw(self.by_id.len() as u32),
        };
        self.by_name.insert(s.into(), id);
        self.by_id.push(s.into());
        id
    }

    /// Intern `s`, returning its existing `Id` if it was seen before.
    ///
    /// A new spelling gets its key from its first byte: a digit makes a
    /// numeric literal, a quote a string literal, anything else an
    /// identifier.
    pub fn insert(&mut self, s: &str) -> Result<Id, InternError> {
        if let Some(&id) = self.by_name.get(s) {
            return Ok(id);
        }
        if self.by_id.len() >= MAX_TOKENS {
            return Err(InternError::TooManyTokens);
        }
        let key = match s.as_bytes().first() {
            Some(b'0'..=b'9') => Key::NumLiteral,
            Some(b'"') => Key::DqStrLiteral,
            Some(b'\'') => Key::SqStrLiteral,
            _ => Key::Ident,
        };
        Ok(self.push(s, key))
    }

    pub fn by_name(&self, s: &str) -> Option<Id> {
        self.by_name.get(s).copied()
    }

    /// The spelling of `id`, or `""` if `id` came from another map.
    pub fn str(&self, id: Id) -> &str {
        self.by_id.get(id.name.index()).map_or("", |s| &**s)
    }

    /// Number of interned spellings, built-ins included.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for TokenMap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokenMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenMap")
            .field("len", &self.by_id.len())
            .finish_non_exhaustive()
    }
}
