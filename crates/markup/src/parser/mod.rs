//! Parser for color markup.
//!
//! This module contains the scanner and the single-pass compiler built on it.

mod compile;
mod scanner;

pub use compile::compile_with;
pub use scanner::{Scanner, Token};
