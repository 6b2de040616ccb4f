//! Configurable entry point for markup compilation.

use crate::error::MarkupError;
use crate::parser::compile_with;
use crate::sgr::{ESCAPE, Sgr};

/// A markup compiler with a configurable escape character.
///
/// # Examples
///
/// ```
/// use markup::Compiler;
///
/// let compiler = Compiler::new();
/// assert_eq!(compiler.compile("@r!").unwrap(), "\x1b[0;31;49m!");
///
/// let percent = Compiler::new().with_escape('%');
/// assert_eq!(percent.compile("100%% @r").unwrap(), "100% @r");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compiler {
    escape: char,
}

impl Default for Compiler {
    fn default() -> Self {
        Self { escape: ESCAPE }
    }
}

impl Compiler {
    /// Create a compiler using the default `@` escape character.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `escape` to introduce markup instead of `@`.
    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    /// The character that introduces markup.
    pub fn escape(&self) -> char {
        self.escape
    }

    /// Replace all markup in `source` with escape sequences.
    pub fn compile(&self, source: &str) -> Result<String, MarkupError> {
        compile_with(source, self.escape)
    }

    /// Render the interior of one markup group as an escape sequence.
    pub fn resolve_group(&self, group: &str) -> Result<String, MarkupError> {
        Sgr::from_group(group).map(|sgr| sgr.to_string())
    }
}

/// Compile `source` with the default `@` escape character.
///
/// # Examples
///
/// ```
/// assert_eq!(markup::compile("@{bK}x").unwrap(), "\x1b[0;34;40mx");
/// assert_eq!(markup::compile("@@").unwrap(), "@");
/// ```
pub fn compile(source: &str) -> Result<String, MarkupError> {
    Compiler::default().compile(source)
}

/// Render the interior of one markup group, e.g. `rK`, as an escape sequence.
pub fn resolve_group(group: &str) -> Result<String, MarkupError> {
    Compiler::default().resolve_group(group)
}
