//! Compile-then-print output routines.
//!
//! A [`Printer`] compiles the text arguments of a call, appends the reset
//! sequence and routes the result to stdout, an arbitrary writer or a
//! `String`.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use markup::{Compiler, RESET};

use crate::error::Result;
use crate::template::interpolate;
use crate::value::Value;

/// What to do when a text argument fails to compile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the call and return the markup error.
    #[default]
    Propagate,
    /// Emit the offending text uncompiled and log a warning.
    PassThrough,
}

/// A compiled operand ready for joining.
struct Operand<'v> {
    text: Cow<'v, str>,
    is_text: bool,
}

impl<'v> Operand<'v> {
    fn text(text: Cow<'v, str>) -> Self {
        Self {
            text,
            is_text: true,
        }
    }

    fn other(rendered: String) -> Self {
        Self {
            text: Cow::Owned(rendered),
            is_text: false,
        }
    }
}

fn join(operands: &[Operand<'_>]) -> String {
    let mut output = String::new();
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 && !operand.is_text && !operands[i - 1].is_text {
            output.push(' ');
        }
        output.push_str(&operand.text);
    }
    output
}

fn join_line(operands: &[Operand<'_>]) -> String {
    let mut output = operands
        .iter()
        .map(|operand| operand.text.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    output.push('\n');
    output
}

/// Compiles markup in its arguments and writes the result.
///
/// Every call ends its output with exactly one [`RESET`].
///
/// # Examples
///
/// ```
/// use atcolor::{ErrorPolicy, Printer, Value};
///
/// let printer = Printer::new();
/// let out = printer.render(&[Value::from("@rred "), Value::from(42)]).unwrap();
/// assert_eq!(out, "\x1b[0;31;49mred 42\x1b[0m");
///
/// let lenient = Printer::new().with_policy(ErrorPolicy::PassThrough);
/// assert_eq!(lenient.render(&[Value::from("@x")]).unwrap(), "@x\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Printer {
    compiler: Compiler,
    policy: ErrorPolicy,
}

impl Printer {
    /// Create a printer with the `@` escape and [`ErrorPolicy::Propagate`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `escape` to introduce markup instead of `@`.
    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.compiler = self.compiler.with_escape(escape);
        self
    }

    /// Set the policy for markup errors.
    #[must_use]
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    /// Compile one string, applying the error policy.
    pub fn compile<'t>(&self, text: &'t str) -> Result<Cow<'t, str>> {
        match self.policy {
            ErrorPolicy::Propagate => Ok(Cow::Owned(self.compiler.compile(text)?)),
            ErrorPolicy::PassThrough => Ok(self.compile_lossy(text)),
        }
    }

    /// Compile one string, keeping it uncompiled on error whatever the policy.
    pub fn compile_lossy<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.compiler.compile(text) {
            Ok(compiled) => Cow::Owned(compiled),
            Err(err) => {
                log::warn!("passing {:?} through uncompiled: {}", text, err);
                Cow::Borrowed(text)
            }
        }
    }

    /// Compile the text operands and append the reset operand.
    fn operands<'v>(&self, args: &'v [Value<'_>]) -> Result<Vec<Operand<'v>>> {
        let mut operands = Vec::with_capacity(args.len() + 1);
        for arg in args {
            let operand = match arg {
                Value::Text(text) => Operand::text(self.compile(text)?),
                Value::Other(other) => Operand::other(other.to_string()),
            };
            operands.push(operand);
        }
        operands.push(Operand::text(Cow::Borrowed(RESET)));
        Ok(operands)
    }

    /// Like `operands`, but text that fails to compile is kept as-is.
    fn lossy_operands<'v>(&self, args: &'v [Value<'_>]) -> Vec<Operand<'v>> {
        args.iter()
            .map(|arg| match arg {
                Value::Text(text) => Operand::text(self.compile_lossy(text)),
                Value::Other(other) => Operand::other(other.to_string()),
            })
            .chain(std::iter::once(Operand::text(Cow::Borrowed(RESET))))
            .collect()
    }

    /// Join arguments, spacing two adjacent operands only when neither is text.
    pub fn render(&self, args: &[Value<'_>]) -> Result<String> {
        Ok(join(&self.operands(args)?))
    }

    /// Join arguments with single spaces and end with a newline.
    pub fn render_line(&self, args: &[Value<'_>]) -> Result<String> {
        Ok(join_line(&self.operands(args)?))
    }

    /// [`render`](Self::render) that never fails: text with bad markup is
    /// emitted uncompiled, regardless of the configured policy.
    pub fn render_lossy(&self, args: &[Value<'_>]) -> String {
        join(&self.lossy_operands(args))
    }

    /// [`render_line`](Self::render_line) that never fails.
    pub fn render_line_lossy(&self, args: &[Value<'_>]) -> String {
        join_line(&self.lossy_operands(args))
    }

    /// Compile `format` with the reset appended, then fill its placeholders.
    ///
    /// Only the template is compiled; `args` are inserted verbatim.
    pub fn render_template(&self, format: &str, args: &[&dyn fmt::Display]) -> Result<String> {
        let source = format!("{format}{RESET}");
        let compiled = self.compile(&source)?;
        Ok(interpolate(&compiled, args)?)
    }

    /// Write to stdout; returns the number of bytes written.
    pub fn print(&self, args: &[Value<'_>]) -> Result<usize> {
        self.fprint(&mut io::stdout().lock(), args)
    }

    /// Write to stdout with spaces and a trailing newline.
    pub fn println(&self, args: &[Value<'_>]) -> Result<usize> {
        self.fprintln(&mut io::stdout().lock(), args)
    }

    /// Write a filled template to stdout.
    pub fn printf(&self, format: &str, args: &[&dyn fmt::Display]) -> Result<usize> {
        self.fprintf(&mut io::stdout().lock(), format, args)
    }

    pub fn fprint<W: Write>(&self, writer: &mut W, args: &[Value<'_>]) -> Result<usize> {
        let output = self.render(args)?;
        write_all(writer, &output)
    }

    pub fn fprintln<W: Write>(&self, writer: &mut W, args: &[Value<'_>]) -> Result<usize> {
        let output = self.render_line(args)?;
        write_all(writer, &output)
    }

    pub fn fprintf<W: Write>(
        &self,
        writer: &mut W,
        format: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<usize> {
        let output = self.render_template(format, args)?;
        write_all(writer, &output)
    }
}

fn write_all<W: Write>(writer: &mut W, output: &str) -> Result<usize> {
    writer.write_all(output.as_bytes())?;
    writer.flush()?;
    Ok(output.len())
}
