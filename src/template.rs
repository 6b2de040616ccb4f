//! Placeholder interpolation for printf-style output.
//!
//! Templates use `{}` for the next positional argument, `{N}` for argument
//! `N`, and `{{` / `}}` for literal braces. Unused arguments are ignored.

use std::fmt;

use crate::error::TemplateError;

/// Substitute `args` into the placeholders of `template`.
///
/// Arguments are formatted with their `Display` impl and inserted as-is.
///
/// # Examples
///
/// ```
/// use atcolor::template::interpolate;
///
/// let out = interpolate("{} of {} ({1} total) {{ok}}", &[&3, &"10"]).unwrap();
/// assert_eq!(out, "3 of 10 (10 total) {ok}");
/// ```
pub fn interpolate(template: &str, args: &[&dyn fmt::Display]) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(template.len());
    let mut next_positional = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                chars.next();
                output.push('{');
            }
            '{' => {
                let rest = &template[pos + 1..];
                let close = rest.find('}').ok_or(TemplateError::UnmatchedBrace(pos))?;
                let body = &rest[..close];

                let index = if body.is_empty() {
                    next_positional += 1;
                    next_positional - 1
                } else {
                    body.parse::<usize>()
                        .map_err(|_| TemplateError::InvalidPlaceholder(pos))?
                };
                let arg = args.get(index).ok_or(TemplateError::MissingArgument(index))?;
                output.push_str(&arg.to_string());

                // Skip the placeholder body and the closing brace.
                let end = pos + 1 + close;
                while let Some(&(at, _)) = chars.peek() {
                    if at > end {
                        break;
                    }
                    chars.next();
                }
            }
            '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                chars.next();
                output.push('}');
            }
            '}' => return Err(TemplateError::UnmatchedBrace(pos)),
            _ => output.push(c),
        }
    }

    Ok(output)
}
