//! Miette diagnostics for cardset errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use cardset::localize::ParseError;
use cardset::LoadError;
use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for translation file parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cardset::strings))]
pub struct StringsDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl StringsDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let help = match err {
            ParseError::Syntax { .. } => {
                Some("entries have the form `key = \"text\";`".to_string())
            }
            ParseError::DuplicateKey { .. } => {
                Some("remove or rename one of the definitions".to_string())
            }
        };

        StringsDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (byte_offset(content, line, column), 1).into(),
            message: err.to_string(),
            help,
        }
    }
}

/// Convert a 1-based line and column to a byte offset, clamped to the
/// content so miette never renders out of bounds.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);
    offset.min(content.len())
}

/// Convert a load failure into a report.
pub fn load_error(err: LoadError) -> Report {
    miette!("{}", err)
}

#[cfg(test)]
mod tests {
    use super::byte_offset;

    #[test]
    fn byte_offset_counts_previous_lines() {
        let content = "a = \"x\";\nbroken";
        assert_eq!(byte_offset(content, 1, 1), 0);
        assert_eq!(byte_offset(content, 2, 1), 9);
        assert_eq!(byte_offset(content, 2, 3), 11);
    }

    #[test]
    fn byte_offset_is_clamped() {
        assert_eq!(byte_offset("abc", 4, 10), 3);
    }
}
