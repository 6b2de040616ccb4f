//! The markup symbol table.
//!
//! Each recognized markup character maps to exactly one SGR code. Codes fall
//! into three disjoint ranges:
//!
//! ```text
//! | ! . / _ ^ & ? -      attributes   0..=8
//! k r g y b m c w d      foreground  30..=39
//! K R G Y B M C W D      background  40..=49
//! ```
//!
//! The table is built at compile time and never mutated, so it can be read
//! from any number of threads without synchronization.

use phf::phf_map;

/// Map of markup characters to their SGR codes.
static SYMBOLS: phf::Map<char, u8> = phf_map! {
    // Attributes
    '|' => 0,  // reset style
    '!' => 1,  // bold
    '.' => 2,  // dim
    '/' => 3,  // italic
    '_' => 4,  // underline
    '^' => 5,  // blink
    '&' => 6,  // fast blink
    '?' => 7,  // reverse fg/bg
    '-' => 8,  // hide

    // Foreground
    'k' => 30,
    'r' => 31,
    'g' => 32,
    'y' => 33,
    'b' => 34,
    'm' => 35,
    'c' => 36,
    'w' => 37,
    'd' => 39,

    // Background
    'K' => 40,
    'R' => 41,
    'G' => 42,
    'Y' => 43,
    'B' => 44,
    'M' => 45,
    'C' => 46,
    'W' => 47,
    'D' => 49,
};

/// The slot of an SGR triple that a code writes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Text attribute, codes `0..=8`.
    Attribute,
    /// Foreground color, codes `30..=39`.
    Foreground,
    /// Background color, codes `40..=49`.
    Background,
}

impl Slot {
    /// Classify a code by its numeric range.
    ///
    /// Returns `None` for codes outside the three known ranges.
    pub fn of(code: u8) -> Option<Slot> {
        match code {
            0..=8 => Some(Slot::Attribute),
            30..=39 => Some(Slot::Foreground),
            40..=49 => Some(Slot::Background),
            _ => None,
        }
    }
}

/// Look up the SGR code for a markup character.
///
/// # Examples
///
/// ```
/// use markup::symbol::resolve;
///
/// assert_eq!(resolve('r'), Some(31));
/// assert_eq!(resolve('K'), Some(40));
/// assert_eq!(resolve('x'), None);
/// ```
pub fn resolve(ch: char) -> Option<u8> {
    SYMBOLS.get(&ch).copied()
}

/// Iterate over every `(character, code)` entry in the table.
///
/// Iteration order is unspecified.
pub fn symbols() -> impl Iterator<Item = (char, u8)> {
    SYMBOLS.entries().map(|(ch, code)| (*ch, *code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_attributes() {
        assert_eq!(resolve('|'), Some(0));
        assert_eq!(resolve('!'), Some(1));
        assert_eq!(resolve('-'), Some(8));
    }

    #[test]
    fn resolve_default_colors() {
        assert_eq!(resolve('d'), Some(39));
        assert_eq!(resolve('D'), Some(49));
    }

    #[test]
    fn resolve_unknown() {
        assert_eq!(resolve('x'), None);
        assert_eq!(resolve('@'), None);
        assert_eq!(resolve('{'), None);
    }

    #[test]
    fn every_code_has_a_slot() {
        for (ch, code) in symbols() {
            assert!(Slot::of(code).is_some(), "{ch:?} maps to unclassified {code}");
        }
    }

    #[test]
    fn slot_boundaries() {
        assert_eq!(Slot::of(8), Some(Slot::Attribute));
        assert_eq!(Slot::of(9), None);
        assert_eq!(Slot::of(29), None);
        assert_eq!(Slot::of(30), Some(Slot::Foreground));
        assert_eq!(Slot::of(39), Some(Slot::Foreground));
        assert_eq!(Slot::of(40), Some(Slot::Background));
        assert_eq!(Slot::of(49), Some(Slot::Background));
        assert_eq!(Slot::of(50), None);
    }
}
