//! Error types for encoding, decoding and addressing query trees.
//!
//! Building, rendering and querying nodes never fails. Errors only arise at the edges: when a
//! tree is read from or written to its structured encoding, or when a node path is parsed.

use std::io;

use thiserror::Error;

/// A structured-encoding decode failure with position information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.format_with_context())]
pub struct DecodeError {
    /// Error message, without position suffix.
    pub message: String,
    /// 1-based line in the input where the error was detected.
    pub line: usize,
    /// 1-based column in the input where the error was detected.
    pub column: usize,
    /// The offending input line, if available.
    pub source_line: Option<String>,
}

impl DecodeError {
    /// Builds a decode error from a JSON error, capturing the offending line of `input`.
    pub(crate) fn from_json(err: &serde_json::Error, input: &str) -> Self {
        let line = err.line();
        let column = err.column();
        let full = err.to_string();
        let suffix = format!(" at line {line} column {column}");
        let message = full.strip_suffix(&suffix).unwrap_or(&full).to_string();
        let source_line = line
            .checked_sub(1)
            .and_then(|idx| input.lines().nth(idx))
            .map(str::to_string);
        Self {
            message,
            line,
            column,
            source_line,
        }
    }

    /// Formats the error with the offending line and a position indicator.
    pub fn format_with_context(&self) -> String {
        let mut result = format!(
            "invalid query encoding: {} (line {}, column {})",
            self.message, self.line, self.column
        );
        if let Some(src) = &self.source_line {
            let offset = self.column.saturating_sub(1).min(src.len());
            result.push_str(&format!("\n  {src}\n  {}^", " ".repeat(offset)));
        }
        result
    }
}

/// Errors from reading or writing the structured encoding.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input is not a valid encoded query tree.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A tree could not be serialized.
    #[error("failed to encode query: {0}")]
    Encode(#[source] serde_json::Error),

    /// A tree nests deeper than its encoding could be decoded again.
    #[error("query too deep to encode: JSON nesting {nesting} exceeds limit {limit}")]
    TooDeep {
        /// Nesting the encoding would need.
        nesting: usize,
        /// Maximum supported nesting.
        limit: usize,
    },

    /// The input could not be read.
    #[error("failed to read query input: {0}")]
    Io(#[from] io::Error),
}

/// Errors from parsing a dotted node path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A segment is not a non-negative integer.
    #[error("invalid segment '{segment}' in node path '{path}'")]
    InvalidSegment {
        /// The full path text.
        path: String,
        /// The offending segment.
        segment: String,
    },
}
