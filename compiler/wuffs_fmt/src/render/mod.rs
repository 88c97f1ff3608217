//! The line-by-line rendering loop.

use std::io::Write;

use tracing::debug;
use wuffs_ir::{Id, Key, Token, TokenMap};

use crate::align::{find_colon, measure_var_name_length};
use crate::number::append_num;
use crate::spacing::{is_tight_right, needs_space};
use crate::RenderError;


/// Deepest `{` nesting the renderer accepts.
pub const MAX_INDENT: usize = 0xFFFF;

/// Render `tokens` as canonical source text.
///
/// `comments[line]` is the `//` comment on that source line, as produced by
/// the lexer. Comment-only lines are re-emitted at the indentation of the
/// code that follows them; trailing comments stay on their line.
pub fn render<W: Write>(
    w: &mut W,
    map: &TokenMap,
    tokens: &[Token],
    comments: &[String],
) -> Result<(), RenderError> {
    let Some(first) = tokens.first() else {
        return Ok(());
    };
    let mut renderer = Renderer {
        w,
        map,
        comments,
        buf: String::with_capacity(1024),
        indent: 0,
        comment_line: 0,
        in_struct: false,
        var_name_length: 0,
        prev_line: first.line.saturating_sub(1),
        prev_line_hanging: false,
    };
    renderer.run(tokens)?;
    debug!(tokens = tokens.len(), "rendered");
    Ok(())
}

struct Renderer<'a, W> {
    w: &'a mut W,
    map: &'a TokenMap,
    comments: &'a [String],
    /// The output line being built.
    buf: String,
    indent: usize,
    /// Next source line whose comment has not been emitted.
    comment_line: u32,
    /// Whether the last `pub`/`pri` line opened a struct.
    in_struct: bool,
    /// Padding target for the current run of aligned lines, or 0.
    var_name_length: usize,
    /// Last source line that produced output.
    prev_line: u32,
    /// Whether the previous line ended mid-statement.
    prev_line_hanging: bool,
}

impl<W: Write> Renderer<'_, W> {
    fn run(&mut self, mut rest: &[Token]) -> Result<(), RenderError> {
        while let Some(first) = rest.first() {
            let line = first.line;
            let n = rest
                .iter()
                .position(|t| t.line != line)
                .unwrap_or(rest.len());
            let (line_tokens, tail) = rest.split_at(n);
            rest = tail;
            self.render_line(line, line_tokens, rest)?;
        }
        self.trailing_comments()
    }

    fn render_line(
        &mut self,
        line: u32,
        tokens: &[Token],
        rest: &[Token],
    ) -> Result<(), RenderError> {
        let comment_indent = self.indent + usize::from(self.prev_line_hanging);
        self.leading_comments(line, comment_indent)?;

        // Strip trailing semicolons. A line without one continues onto the
        // next line.
        let hanging = self.prev_line_hanging;
        self.prev_line_hanging = true;
        let mut tokens = tokens;
        while let [init @ .., last] = tokens {
            if last.id.key != Key::Semicolon {
                break;
            }
            self.prev_line_hanging = false;
            tokens = init;
        }
        let Some(first) = tokens.first() else {
            return Ok(());
        };

        if self.prev_line + 1 < line {
            self.w.write_all(b"\n")?;
            self.var_name_length = 0;
        }

        self.buf.clear();
        let tabs = if first.id.is_close() {
            self.indent.saturating_sub(1)
        } else if hanging && first.id.key != Key::OpenCurly {
            self.indent + 1
        } else {
            self.indent
        };
        append_tabs(&mut self.buf, tabs);

        let tokens = self.align(tokens, rest);
        self.render_tokens(tokens)?;

        append_comment(&mut self.buf, self.comments, line, None);
        self.buf.push('\n');
        self.w.write_all(self.buf.as_bytes())?;

        self.comment_line = line + 1;
        self.prev_line = line;
        if tokens.last().is_some_and(|t| t.id.key == Key::OpenCurly) {
            self.prev_line_hanging = false;
        }
        Ok(())
    }

    /// Emit the comment-only lines before `line`.
    fn leading_comments(&mut self, line: u32, indent: usize) -> Result<(), RenderError> {
        while self.comment_line < line {
            if self.emit_comment_line(indent)? {
                self.var_name_length = 0;
            }
            self.comment_line += 1;
        }
        Ok(())
    }

    /// Emit comments after the last token.
    fn trailing_comments(&mut self) -> Result<(), RenderError> {
        while (self.comment_line as usize) < self.comments.len() {
            self.emit_comment_line(self.indent)?;
            self.comment_line += 1;
        }
        Ok(())
    }

    /// Emit the comment on `self.comment_line` as a line of its own,
    /// preceded by a blank line if there was a gap. Returns whether there
    /// was a comment.
    fn emit_comment_line(&mut self, indent: usize) -> Result<bool, RenderError> {
        self.buf.clear();
        append_comment(&mut self.buf, self.comments, self.comment_line, Some(indent));
        if self.buf.is_empty() {
            return Ok(false);
        }
        if self.comment_line > self.prev_line + 1 {
            self.w.write_all(b"\n")?;
        }
        self.buf.push('\n');
        self.w.write_all(self.buf.as_bytes())?;
        self.prev_line = self.comment_line;
        Ok(true)
    }

    /// Apply or update the alignment of declaration runs, returning the
    /// tokens still to be rendered.
    fn align<'t>(&mut self, tokens: &'t [Token], rest: &[Token]) -> &'t [Token] {
        let [t0, t1, _, ..] = tokens else {
            self.var_name_length = 0;
            return tokens;
        };
        let (k0, k1) = (t0.id.key, t1.id.key);
        if matches!(k0, Key::Pub | Key::Pri) {
            self.in_struct = k1 == Key::Struct;
            if k1 != Key::Const {
                self.var_name_length = 0;
            }
        }
        if !(k1 == Key::Const || k0 == Key::Var || self.in_struct) {
            self.var_name_length = 0;
            return tokens;
        }

        if self.var_name_length == 0 {
            self.var_name_length = measure_var_name_length(self.map, tokens, rest);
        }
        let Some(colon) = find_colon(tokens) else {
            return tokens;
        };
        let mut name = "";
        for t in &tokens[..colon] {
            name = self.map.str(t.id);
            self.buf.push_str(name);
            self.buf.push(' ');
        }
        for _ in name.len()..self.var_name_length {
            self.buf.push(' ');
        }
        &tokens[colon..]
    }

    fn render_tokens(&mut self, tokens: &[Token]) -> Result<(), RenderError> {
        let mut prev: Option<Id> = None;
        let mut prev_is_tight_right = false;
        for t in tokens {
            let id = t.id;
            if needs_space(prev, prev_is_tight_right, id) {
                self.buf.push(' ');
            }

            let s = self.map.str(id);
            if s.as_bytes().first().is_some_and(u8::is_ascii_digit) {
                append_num(&mut self.buf, s);
            } else {
                self.buf.push_str(s);
            }

            match id.key {
                Key::OpenCurly => {
                    if self.indent == MAX_INDENT {
                        return Err(RenderError::TooManyOpenCurlies);
                    }
                    self.indent += 1;
                }
                Key::CloseCurly => {
                    if self.indent == 0 {
                        return Err(RenderError::TooManyCloseCurlies);
                    }
                    self.indent -= 1;
                }
                _ => {}
            }

            prev_is_tight_right = is_tight_right(prev, id);
            prev = Some(id);
        }
        Ok(())
    }
}

/// Append a comment with its trailing spaces removed. With `indent`, the
/// comment is a line of its own; without, it trails code.
fn append_comment(buf: &mut String, comments: &[String], line: u32, indent: Option<usize>) {
    let Some(comment) = comments.get(line as usize).filter(|c| !c.is_empty()) else {
        return;
    };
    match indent {
        Some(n) => append_tabs(buf, n),
        None => buf.push_str("  "),
    }
    buf.push_str(comment.trim_end_matches(' '));
}

fn append_tabs(buf: &mut String, n: usize) {
    for _ in 0..n {
        buf.push('\t');
    }
}
