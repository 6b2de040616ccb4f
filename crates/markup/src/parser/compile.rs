//! Single-pass markup compiler.
//!
//! Folds the scanner's tokens into an output string, replacing each group
//! with its rendered SGR sequence.

use crate::error::MarkupError;
use crate::sgr::Sgr;

use super::scanner::{Scanner, Token};

/// Compile `input` using `escape` as the markup escape character.
///
/// Any error aborts the whole call; no partial output is returned.
///
/// # Examples
///
/// ```
/// use markup::parser::compile_with;
///
/// assert_eq!(compile_with("%r", '%').unwrap(), "\x1b[0;31;49m");
/// ```
pub fn compile_with(input: &str, escape: char) -> Result<String, MarkupError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let mut output = String::with_capacity(input.len());
    for token in Scanner::with_escape(input, escape) {
        match token {
            Ok(Token::Text(text)) => output.push_str(text),
            Ok(Token::Literal(c)) => output.push(c),
            Ok(Token::Group(group)) => {
                let sgr = Sgr::from_group(group).inspect_err(|err| {
                    log::debug!("failed to compile {:?}: {}", input, err);
                })?;
                output.push_str(&sgr.to_string());
            }
            Err(err) => {
                log::debug!("failed to compile {:?}: {}", input, err);
                return Err(err);
            }
        }
    }

    log::trace!("compiled {} bytes into {} bytes", input.len(), output.len());
    Ok(output)
}
