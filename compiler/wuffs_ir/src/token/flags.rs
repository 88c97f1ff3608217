//! Static token metadata.

use bitflags::bitflags;

bitflags! {
    /// Properties of a [`Key`](super::Key), computed by
    /// [`Key::flags`](super::Key::flags).
    ///
    /// The spacing flags drive the renderer: no space is printed after a
    /// tight-right token or before a tight-left one.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct KeyFlags: u32 {
        // === Classes ===

        const LITERAL = 1 << 0;
        const NUM_LITERAL = 1 << 1;
        const STR_LITERAL = 1 << 2;
        const IDENT = 1 << 3;

        // === Brackets ===

        /// `(`, `[` or `{`.
        const OPEN = 1 << 4;
        /// `)`, `]` or `}`.
        const CLOSE = 1 << 5;

        // === Layout ===

        /// No space before this token.
        const TIGHT_LEFT = 1 << 8;
        /// No space after this token.
        const TIGHT_RIGHT = 1 << 9;
        /// A newline after this token ends the statement.
        const IMPLICIT_SEMICOLON = 1 << 10;

        // === Operators ===

        /// `=` and the op-assign keys.
        const ASSIGN = 1 << 16;
        const UNARY = 1 << 17;
        const BINARY = 1 << 18;
        const ASSOCIATIVE = 1 << 19;
    }
}
