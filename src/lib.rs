//! Print and format strings with inline `@`-style color markup.
//!
//! Text arguments are compiled by the [`markup`] crate before they reach
//! the output, and every call ends with a single [`RESET`] so colors never
//! leak past it.
//!
//! ```
//! use atcolor::{csprint, sprintf};
//!
//! let line = csprint!("@{!rK}error:@| disk ", 97, "% full");
//! assert_eq!(line, "\x1b[1;31;40merror:\x1b[0;39;49m disk 97% full\x1b[0m");
//!
//! let line = sprintf("@g{}@| of {}", &[&3, &5]);
//! assert_eq!(line, "\x1b[0;32;49m3\x1b[0;39;49m of 5\x1b[0m");
//! ```
//!
//! # Error policy
//!
//! The free functions that write to stdout or a writer return errors
//! ([`ErrorPolicy::Propagate`]). The `sprint*` functions return a plain
//! `String` and emit text that fails to compile as-is
//! ([`ErrorPolicy::PassThrough`]). Build a [`Printer`] to choose otherwise.

pub mod error;
pub mod printer;
pub mod template;
pub mod value;

use std::fmt::Display;
use std::io::Write;

pub use error::{Error, MarkupError, Result, TemplateError};
pub use markup::{Compiler, ESCAPE, RESET, Sgr, compile, resolve_group};
pub use printer::{ErrorPolicy, Printer};
pub use value::Value;

fn strict() -> Printer {
    Printer::new()
}

fn lenient() -> Printer {
    Printer::new().with_policy(ErrorPolicy::PassThrough)
}

/// Like `print!`, with markup compiled and a reset appended.
pub fn print(args: &[Value<'_>]) -> Result<usize> {
    strict().print(args)
}

/// Like `println!`: operands separated by spaces, newline at the end.
pub fn println(args: &[Value<'_>]) -> Result<usize> {
    strict().println(args)
}

/// Fill a template and print it. Only the template is compiled.
pub fn printf(format: &str, args: &[&dyn Display]) -> Result<usize> {
    strict().printf(format, args)
}

pub fn fprint<W: Write>(writer: &mut W, args: &[Value<'_>]) -> Result<usize> {
    strict().fprint(writer, args)
}

pub fn fprintln<W: Write>(writer: &mut W, args: &[Value<'_>]) -> Result<usize> {
    strict().fprintln(writer, args)
}

pub fn fprintf<W: Write>(writer: &mut W, format: &str, args: &[&dyn Display]) -> Result<usize> {
    strict().fprintf(writer, format, args)
}

/// Render to a `String`. Text that fails to compile is kept uncompiled.
pub fn sprint(args: &[Value<'_>]) -> String {
    lenient().render_lossy(args)
}

/// Render a line to a `String`. Text that fails to compile is kept uncompiled.
pub fn sprintln(args: &[Value<'_>]) -> String {
    lenient().render_line_lossy(args)
}

/// Fill a template into a `String`.
///
/// A template that fails to compile is interpolated uncompiled. When the
/// placeholders cannot be filled, the template is returned unfilled.
pub fn sprintf(format: &str, args: &[&dyn Display]) -> String {
    let printer = lenient();
    printer.render_template(format, args).unwrap_or_else(|err| {
        log::warn!("sprintf returned an unfilled template: {}", err);
        printer
            .compile_lossy(&format!("{format}{RESET}"))
            .into_owned()
    })
}

/// Print heterogeneous arguments with markup compiled.
///
/// ```no_run
/// atcolor::cprint!("@gready ", 3, " jobs").unwrap();
/// ```
#[macro_export]
macro_rules! cprint {
    ($($arg:expr),* $(,)?) => {
        $crate::print(&[$($crate::Value::from($arg)),*])
    };
}

/// Print heterogeneous arguments separated by spaces, then a newline.
#[macro_export]
macro_rules! cprintln {
    ($($arg:expr),* $(,)?) => {
        $crate::println(&[$($crate::Value::from($arg)),*])
    };
}

/// Render heterogeneous arguments to a `String`.
#[macro_export]
macro_rules! csprint {
    ($($arg:expr),* $(,)?) => {
        $crate::sprint(&[$($crate::Value::from($arg)),*])
    };
}

/// Fill a markup template with displayable arguments into a `String`.
///
/// ```
/// let s = atcolor::cformat!("@r{}", "hot");
/// assert_eq!(s, "\x1b[0;31;49mhot\x1b[0m");
/// ```
#[macro_export]
macro_rules! cformat {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::sprintf($format, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
