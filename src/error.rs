use thiserror::Error;

pub use markup::MarkupError;

/// Errors raised while interpolating a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template placeholder refers to missing argument {0}")]
    MissingArgument(usize),

    #[error("Unmatched brace at position {0}")]
    UnmatchedBrace(usize),

    #[error("Invalid placeholder at position {0}")]
    InvalidPlaceholder(usize),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
