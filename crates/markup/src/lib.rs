//! Compiler for `@`-style color markup.
//!
//! This crate rewrites inline color markup embedded in ordinary strings into
//! ANSI SGR escape sequences, e.g. `@rHello` into `ESC[0;31;49mHello`.
//!
//! # Overview
//!
//! - `@X` - one markup character, e.g. `@r` for a red foreground
//! - `@{XYZ}` - several markup characters combined into one sequence
//! - `@@` - a literal `@`
//!
//! Each group renders as `ESC[{attr};{fg};{bg}m`, starting from `0;39;49`.
//! When a group holds several characters for the same slot, the last one wins.
//!
//! | chars | codes | meaning |
//! |---|---|---|
//! | `\| ! . / _ ^ & ? -` | 0-8 | reset, bold, dim, italic, underline, blink, fast blink, reverse, hide |
//! | `k r g y b m c w d` | 30-37, 39 | foreground black ... white, default |
//! | `K R G Y B M C W D` | 40-47, 49 | background black ... white, default |
//!
//! No reset is appended by the compiler; see [`RESET`].
//!
//! # Usage
//!
//! ```
//! use markup::{compile, MarkupError, RESET};
//!
//! let colored = compile("@{!rW}alert@| normal").unwrap();
//! assert_eq!(colored, "\x1b[1;31;47malert\x1b[0;39;49m normal");
//! assert_eq!(RESET, "\x1b[0m");
//!
//! assert_eq!(compile("@x"), Err(MarkupError::UnrecognizedMarkupCharacter('x')));
//! ```

pub mod compiler;
pub mod error;
pub mod parser;
pub mod sgr;
pub mod symbol;

// Re-export main types at crate root
pub use compiler::{Compiler, compile, resolve_group};
pub use error::MarkupError;
pub use sgr::{ESCAPE, RESET, Sgr};
pub use symbol::Slot;
