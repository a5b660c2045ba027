//! Translation file parser.
//!
//! A translation file is a list of `key = "text";` entries. Whitespace is
//! free-form, `//` starts a line comment, and strings accept the `\"`, `\\`,
//! `\n` and `\t` escapes.

use std::collections::BTreeSet;

use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::error::ParseError;

/// Parses a translation file into `(key, text)` pairs in file order.
///
/// Duplicate keys are rejected so a typo cannot silently shadow an earlier
/// translation.
pub fn parse_translations(input: &str) -> Result<Vec<(String, String)>, ParseError> {
    let mut remaining = input;
    let mut entries = Vec::new();
    let mut seen = BTreeSet::new();

    loop {
        // Comments and whitespace cannot fail to parse.
        let _ = skip_ws_and_comments(&mut remaining);
        if remaining.is_empty() {
            return Ok(entries);
        }

        let start = remaining;
        match entry(&mut remaining) {
            Ok((key, text)) => {
                if !seen.insert(key.clone()) {
                    let (line, column) = calculate_position(input, start);
                    return Err(ParseError::DuplicateKey { key, line, column });
                }
                entries.push((key, text));
            }
            Err(_) => {
                let (line, column) = calculate_position(input, remaining);
                let found = remaining
                    .chars()
                    .next()
                    .map_or_else(|| "end of input".to_string(), |c| format!("'{c}'"));
                return Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("expected `key = \"text\";`, found {found}"),
                });
            }
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = original.get(..consumed).unwrap_or(original);
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse one `key = "text";` entry.
fn entry(input: &mut &str) -> ModalResult<(String, String)> {
    let key = key(input)?;
    ws(input)?;
    '='.parse_next(input)?;
    ws(input)?;
    let text = quoted(input)?;
    ws(input)?;
    ';'.parse_next(input)?;
    Ok((key.to_string(), text))
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)
}

/// Optional whitespace between the tokens of an entry.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Lookup keys: ASCII alphanumerics plus `_`, `.` and `-`.
fn key<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
    })
    .parse_next(input)
}

/// Parse a quoted string: "content"
fn quoted(input: &mut &str) -> ModalResult<String> {
    delimited('"', repeat(0.., string_char), '"').parse_next(input)
}

fn string_char(input: &mut &str) -> ModalResult<char> {
    alt((escape_sequence, none_of(['"', '\\', '\n']))).parse_next(input)
}

fn escape_sequence(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        alt((
            '"'.value('"'),
            '\\'.value('\\'),
            'n'.value('\n'),
            't'.value('\t'),
        )),
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::calculate_position;

    #[test]
    fn position_counts_lines_and_columns() {
        let input = "a = \"x\";\nbad";
        let remaining = &input[9..];
        assert_eq!(calculate_position(input, remaining), (2, 1));
    }

    #[test]
    fn position_on_first_line_is_one_based() {
        assert_eq!(calculate_position("abc", "c"), (1, 3));
    }
}
