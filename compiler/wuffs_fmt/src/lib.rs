//! Wuffs Formatter
//!
//! Renders a token stream back to canonical source text. The formatter works
//! on tokens rather than the AST, which keeps every comment and blank line in
//! place and makes formatting independent of whether the file type-checks.
//!
//! # Rules
//!
//! - One output line per source line; trailing `;` tokens are dropped.
//! - Runs of blank lines collapse to one.
//! - Indentation is one tab per open `{`. A line that starts with a close
//!   token is outdented, and a line continuing an unfinished statement is
//!   indented one extra level.
//! - Consecutive `var`, `const` and struct-field lines align their `:`.
//! - Numeric literals are regrouped with `_` and uppercased.
//!
//! Rendering is idempotent: rendering the re-lexed output of [`render`]
//! reproduces that output.
//!
//! # Modules
//!
//! - `render`: the line loop and indentation
//! - `spacing`: when a space separates two tokens
//! - `align`: the `:` column of declaration runs
//! - `number`: numeric literal regrouping

mod align;
mod number;
mod render;
mod spacing;

use std::io;

pub use render::{render, MAX_INDENT};

use wuffs_ir::{Token, TokenMap};

/// An error that stopped rendering. The sink may already hold partial
/// output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render: too many \"{{\" tokens")]
    TooManyOpenCurlies,
    #[error("render: too many \"}}\" tokens")]
    TooManyCloseCurlies,
    #[error("render: {0}")]
    Io(#[from] io::Error),
}

/// Render into a fresh string.
pub fn render_to_string(
    map: &TokenMap,
    tokens: &[Token],
    comments: &[String],
) -> Result<String, RenderError> {
    let mut out = Vec::new();
    render(&mut out, map, tokens, comments)?;
    // Every byte written is copied from an interned `&str` or is ASCII.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
