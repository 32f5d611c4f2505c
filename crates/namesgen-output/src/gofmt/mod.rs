//! Go source formatting for generated constant files.
//!
//! Covers the part of Go that generated constant files use: comments, the
//! package clause and `const` declarations (single or grouped) whose values
//! are string literals, integer literals or identifiers. Output follows gofmt
//! layout: tab indentation, `=` aligned across consecutive specs, trailing
//! comments aligned, blank lines collapsed, one trailing newline.
//!
//! Anything outside that subset, or any syntax error, is a [`FormatError`]
//! with the position of the offending token.

mod lexer;
mod parser;
mod printer;

pub(crate) use lexer::is_print;

use thiserror::Error;

/// Syntax error found while formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct FormatError {
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    pub message: String,
}

impl FormatError {
    pub(crate) fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

/// Validates `source` and returns it in canonical layout.
///
/// Formatting is idempotent: formatting the output again returns it unchanged.
pub fn format_source(source: &str) -> Result<String, FormatError> {
    let tokens = lexer::tokenize(source)?;
    let file = parser::parse(&tokens)?;
    Ok(printer::print(&file))
}

/// Returns true if `name` is a Go identifier that is not a keyword.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    lexer::is_letter(first)
        && chars.all(|c| lexer::is_letter(c) || lexer::is_digit(c))
        && lexer::keyword(name).is_none()
}
