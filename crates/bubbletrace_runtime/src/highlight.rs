//! Input highlighting for the REPL.

use std::borrow::Cow;

use crate::command::NAMES;

const COMMAND: &str = "\x1b[32m";
const UNKNOWN: &str = "\x1b[31m";
const NUMBER: &str = "\x1b[35m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Highlighter for REPL command lines.
///
/// The leading word is green when it names a command and red otherwise.
/// Numbers are magenta and list separators dim.
#[derive(Debug, Default)]
pub struct CommandHighlighter;

impl CommandHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.char_indices().peekable();
        let mut seen_word = false;

        while let Some((start, c)) = chars.next() {
            match c {
                c if c.is_whitespace() => result.push(c),

                ',' | '\u{FF0C}' => {
                    result.push_str(DIM);
                    result.push(c);
                    result.push_str(RESET);
                }

                c if c.is_ascii_digit() || c == '-' || c == '+' => {
                    result.push_str(NUMBER);
                    result.push(c);
                    while let Some(&(_, next)) = chars.peek() {
                        if !next.is_ascii_digit() {
                            break;
                        }
                        result.push(next);
                        chars.next();
                    }
                    result.push_str(RESET);
                    seen_word = true;
                }

                _ => {
                    let mut end = start + c.len_utf8();
                    while let Some(&(i, next)) = chars.peek() {
                        if next.is_whitespace() || next == ',' || next == '\u{FF0C}' {
                            break;
                        }
                        end = i + next.len_utf8();
                        chars.next();
                    }
                    let word = &line[start..end];

                    if seen_word {
                        result.push_str(word);
                    } else {
                        let known = NAMES.iter().any(|n| n.eq_ignore_ascii_case(word));
                        result.push_str(if known { COMMAND } else { UNKNOWN });
                        result.push_str(word);
                        result.push_str(RESET);
                    }
                    seen_word = true;
                }
            }
        }

        Cow::Owned(result)
    }
}
