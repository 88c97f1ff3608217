//! Wuffs compiler driver.
//!
//! Ties the front end together for the tools built on it:
//!
//! - [`format_source`] and [`needs_reformat`] back the formatter.
//! - [`parse_source`] lexes and parses one file.
//! - [`combine_sources`] produces the canonical combined source of a
//!   package, the input handed to code generators.
//!
//! All entry points take the caller's [`TokenMap`], so files of one package
//! share identifiers.

use std::sync::Once;

use tracing::debug;
use wuffs_fmt::{render, render_to_string, RenderError};
use wuffs_ir::ast::File;
use wuffs_ir::TokenMap;
use wuffs_lexer::{tokenize, LexError};
use wuffs_parse::{parse, ParseError, ParseOptions};


/// A failure in any front-end stage.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=wuffs_parse=trace`
/// and similar; set `WUFFS_LOG_TREE` for indented span trees.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let tree = std::env::var_os("WUFFS_LOG_TREE").is_some();
            let flat = (!tree).then(|| fmt::layer().with_target(true).with_level(true));
            let tree = tree.then(|| tracing_tree::HierarchicalLayer::new(2).with_targets(true));
            tracing_subscriber::registry()
                .with(flat)
                .with(tree)
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Lex and parse one file.
pub fn parse_source(
    map: &mut TokenMap,
    filename: &str,
    src: &[u8],
    options: &ParseOptions,
) -> Result<File, DriverError> {
    let lexed = tokenize(map, filename, src)?;
    Ok(parse(map, filename, &lexed.tokens, options)?)
}

/// Canonical formatting of one file.
///
/// The file must parse. Double-underscore names are accepted so that
/// generated and internal files can be formatted too.
pub fn format_source(map: &mut TokenMap, filename: &str, src: &[u8]) -> Result<String, DriverError> {
    let lexed = tokenize(map, filename, src)?;
    parse(map, filename, &lexed.tokens, &format_options())?;
    let out = render_to_string(map, &lexed.tokens, &lexed.comments)?;
    debug!(filename, bytes = out.len(), "formatted");
    Ok(out)
}

/// Whether formatting would change `src`.
pub fn needs_reformat(map: &mut TokenMap, filename: &str, src: &[u8]) -> Result<bool, DriverError> {
    Ok(format_source(map, filename, src)?.as_bytes() != src)
}

/// Parse every file and concatenate their canonical renderings, without
/// comments, in the given order.
pub fn combine_sources(map: &mut TokenMap, files: &[(&str, &[u8])]) -> Result<String, DriverError> {
    let mut out = Vec::new();
    for &(filename, src) in files {
        let lexed = tokenize(map, filename, src)?;
        parse(map, filename, &lexed.tokens, &ParseOptions::default())?;
        render(&mut out, map, &lexed.tokens, &[])?;
    }
    debug!(files = files.len(), bytes = out.len(), "combined");
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn format_options() -> ParseOptions {
    ParseOptions {
        allow_double_underscore_names: true,
        ..ParseOptions::default()
    }
}
