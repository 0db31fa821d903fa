//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across this crate, or that certain
//! utilities convert their errors to.

use std::{error, fmt, result};

use crate::ast::TokenKind;

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For parsing, for instance, the
/// context string is populated with a snippet of the source text, while schema-aware utilities
/// populate only the message.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) location: Option<Location>,
    pub(crate) context: Option<String>,
    pub(crate) kind: ErrorKind,
}

/// Classification of an [Error].
///
/// Lexing failures are kept apart from general syntax errors so that callers may react to
/// malformed source text without matching on messages.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A byte appeared in the source text that can't start any token.
    UnknownCharacter,
    /// A string literal ran into a line terminator or the end of the source text.
    UnterminatedString,
    /// A string literal contained a malformed escape sequence.
    BadEscape,
    /// The parser hit a token that none of the expected alternatives match.
    UnexpectedToken,
    /// An error raised outside of lexing and parsing, e.g. by schema-aware printing.
    GraphQL,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, kind: Option<ErrorKind>) -> Self {
        Self {
            message: message.into(),
            location: None,
            context: None,
            kind: kind.unwrap_or(ErrorKind::GraphQL),
        }
    }

    /// Create a new Error with a main message, a source location, and a context string.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        location: Option<Location>,
        context: S,
        kind: Option<ErrorKind>,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            context: Some(context.into()),
            kind: kind.unwrap_or(ErrorKind::GraphQL),
        }
    }

    /// Create a syntax error for an unexpected token, carrying a source snippet as context.
    pub(crate) fn unexpected_token(
        source: &str,
        expected: &[TokenKind],
        found: TokenKind,
        text: &str,
        location: Location,
    ) -> Self {
        let mut message = String::new();
        message.push_str("Expected ");
        for (index, kind) in expected.iter().enumerate() {
            if index > 0 {
                message.push_str(if index + 1 == expected.len() {
                    " or "
                } else {
                    ", "
                });
            }
            message.push_str(kind.describe());
        }
        if expected.is_empty() {
            message.push_str("end of input");
        }
        message.push_str(", found ");
        message.push_str(found.describe());
        if found.has_text() && !text.is_empty() {
            message.push_str(" \"");
            message.push_str(text);
            message.push('"');
        }
        let width = if text.is_empty() { 1 } else { text.chars().count() };
        Self {
            message,
            context: Some(print_span(source, location.line, location.column, width)),
            location: Some(location),
            kind: ErrorKind::UnexpectedToken,
        }
    }

    /// Create a lexing error at a given source position.
    pub(crate) fn lexing(
        source: &str,
        message: String,
        location: Location,
        width: usize,
        kind: ErrorKind,
    ) -> Self {
        Self {
            message,
            context: Some(print_span(source, location.line, location.column, width.max(1))),
            location: Some(location),
            kind,
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the location of the current error.
    pub fn location(&self) -> &Option<Location> {
        &self.location
    }

    /// Returns the classification of the current error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.kind {
            ErrorKind::GraphQL => format!("GraphQL Error: {}", self.message),
            _ => format!("Syntax Error: {}", self.message),
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

/// A 1-indexed line and column position in the source text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// Renders the offending line with its surrounding lines, prefixed with line numbers, and an
/// underline caret below the offending columns.
pub(crate) fn print_span(source: &str, line: usize, column: usize, width: usize) -> String {
    let mut out = String::new();
    let first_line = line.saturating_sub(1).max(1);
    let last_line = line + 1;
    let line_num_pad = last_line.to_string().len();

    for (index, text) in source.lines().enumerate() {
        let line_num = index + 1;
        if line_num < first_line {
            continue;
        } else if line_num > last_line {
            break;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let num = line_num.to_string();
        out.push_str(&" ".repeat(line_num_pad - num.len()));
        out.push_str(&num);
        out.push_str(" | ");
        out.push_str(text);
        if line_num == line {
            out.push('\n');
            out.push_str(&" ".repeat(line_num_pad));
            out.push_str(" | ");
            out.push_str(&" ".repeat(column.saturating_sub(1)));
            out.push_str(&"^".repeat(width));
        }
    }

    out
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

impl From<fmt::Error> for Error {
    fn from(_error: fmt::Error) -> Self {
        Error::new("Error while writing to output buffer", None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn print_without_context() {
        let error = Error::new("Something went wrong", None);
        assert_eq!(error.print(false), "GraphQL Error: Something went wrong");
        assert_eq!(error.print(true), "GraphQL Error: Something went wrong");
    }

    #[test]
    fn span_underlines_offending_columns() {
        let source = "{\n  field(x: )\n}";
        let snippet = print_span(source, 2, 12, 1);
        assert_eq!(
            snippet,
            indoc! {"
                 1 | {
                 2 |   field(x: )
                   |            ^
                 3 | }"}
        );
    }

    #[test]
    fn span_on_first_line() {
        let snippet = print_span("query !", 1, 7, 1);
        assert_eq!(
            snippet,
            indoc! {"
                 1 | query !
                   |       ^"}
        );
    }

    #[test]
    fn unexpected_token_message_lists_alternatives() {
        let error = Error::unexpected_token(
            "{ field",
            &[TokenKind::BraceClose, TokenKind::Spread],
            TokenKind::End,
            "",
            Location { line: 1, column: 8 },
        );
        assert_eq!(error.kind(), &ErrorKind::UnexpectedToken);
        assert_eq!(
            error.message(),
            "Expected \"}\" or \"...\", found end of input"
        );
    }
}
