//! Column alignment for runs of `var`, `const` and struct-field lines.
//!
//! ```text
//! var a      : u8
//! var length : u32
//! ```

use wuffs_ir::{Key, Token, TokenMap};

pub(crate) fn find_colon(line: &[Token]) -> Option<usize> {
    line.iter().position(|t| t.id.key == Key::Colon)
}

/// Longest name before the `:` in `line` and in the run of directly
/// following lines whose `:` sits at the same token index.
///
/// `remaining` holds the tokens after `line`.
pub(crate) fn measure_var_name_length(map: &TokenMap, line: &[Token], remaining: &[Token]) -> usize {
    let Some(colon) = find_colon(line).filter(|&x| x > 0) else {
        return 0;
    };

    let mut line_number = line[0].line;
    let mut length = map.str(line[colon - 1].id).len();
    let mut remaining = remaining;
    while remaining.len() > colon
        && remaining[0].line == line_number + 1
        && remaining[colon].line == line_number + 1
        && remaining[colon].id.key == Key::Colon
    {
        line_number = remaining[0].line;
        length = length.max(map.str(remaining[colon - 1].id).len());

        remaining = &remaining[colon + 1..];
        let rest_of_line = remaining
            .iter()
            .position(|t| t.line != line_number)
            .unwrap_or(remaining.len());
        remaining = &remaining[rest_of_line..];
    }
    length
}
