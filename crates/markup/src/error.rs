//! Error types for color markup compilation.

use thiserror::Error;

/// Errors that can occur when compiling color markup.
///
/// Every variant is fatal to the compile call that produced it: no partial
/// output is returned alongside the error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A character inside a group (or a bare one-character group) has no
    /// entry in the symbol table.
    #[error("unrecognized markup character: {0:?}")]
    UnrecognizedMarkupCharacter(char),

    /// Input ended before the group opened at this byte offset was closed.
    #[error("unterminated markup group starting at position {0}")]
    UnterminatedGroup(usize),

    /// Input ended immediately after the escape character at this byte offset.
    #[error("dangling escape character at position {0}")]
    DanglingEscape(usize),
}
