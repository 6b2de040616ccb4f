//! SGR (Select Graphic Rendition) triples.

use std::fmt;

use crate::error::MarkupError;
use crate::symbol::{self, Slot};

/// Escape sequence that restores the default terminal rendition.
pub const RESET: &str = "\x1b[0m";

/// Default character that introduces markup.
pub const ESCAPE: char = '@';

/// One attribute, one foreground and one background code.
///
/// Renders as `ESC[{attr};{fg};{bg}m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sgr {
    pub attr: u8,
    pub fg: u8,
    pub bg: u8,
}

impl Default for Sgr {
    fn default() -> Self {
        Self {
            attr: 0,
            fg: 39,
            bg: 49,
        }
    }
}

impl Sgr {
    /// Create a triple with the default attribute and colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a code into the slot its range selects.
    ///
    /// A later code overwrites an earlier one in the same slot. Codes outside
    /// the known ranges are ignored.
    pub fn apply(&mut self, code: u8) {
        match Slot::of(code) {
            Some(Slot::Attribute) => self.attr = code,
            Some(Slot::Foreground) => self.fg = code,
            Some(Slot::Background) => self.bg = code,
            None => {}
        }
    }

    /// Resolve the interior of one markup group (no delimiters).
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::Sgr;
    ///
    /// let sgr = Sgr::from_group("bK").unwrap();
    /// assert_eq!(sgr.to_string(), "\x1b[0;34;40m");
    /// ```
    pub fn from_group(group: &str) -> Result<Self, MarkupError> {
        let mut sgr = Self::default();
        for ch in group.chars() {
            let code =
                symbol::resolve(ch).ok_or(MarkupError::UnrecognizedMarkupCharacter(ch))?;
            sgr.apply(code);
        }
        log::trace!("resolved group {:?} to {}", group, sgr.codes());
        Ok(sgr)
    }

    /// The codes without the surrounding escape, e.g. `0;31;49`.
    pub fn codes(&self) -> String {
        format!("{};{};{}", self.attr, self.fg, self.bg)
    }
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{};{};{}m", self.attr, self.fg, self.bg)
    }
}
