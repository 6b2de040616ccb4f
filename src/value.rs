//! Tagged argument values for the print functions.
//!
//! Only [`Value::Text`] is compiled as markup; everything else is formatted
//! with its `Display` impl and passed through untouched.

use std::borrow::Cow;
use std::fmt;

/// One argument to a print call.
pub enum Value<'a> {
    /// A string, eligible for markup compilation.
    Text(Cow<'a, str>),
    /// Any other displayable value.
    Other(Box<dyn fmt::Display + 'a>),
}

impl<'a> Value<'a> {
    /// Wrap an arbitrary displayable value. It will not be compiled, even if
    /// it renders as text containing markup.
    pub fn display<T: fmt::Display + 'a>(value: T) -> Self {
        Value::Other(Box::new(value))
    }

    /// Returns true for values eligible for compilation.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Other(other) => f.debug_tuple("Other").field(&other.to_string()).finish(),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Value::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(text: &'a String) -> Self {
        Value::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(text: String) -> Self {
        Value::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Value::Text(text)
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Value::display(value)
                }
            }
        )*
    };
}

impl_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_text() {
        let owned = String::from("@r");
        assert!(Value::from("@r").is_text());
        assert!(Value::from(&owned).is_text());
        assert!(Value::from(owned.clone()).is_text());
    }

    #[test]
    fn everything_else_is_other() {
        assert!(!Value::from(42).is_text());
        assert!(!Value::from(1.5).is_text());
        assert!(!Value::from('@').is_text());
        assert!(!Value::from(true).is_text());
        assert!(!Value::display("@r").is_text());
    }

    #[test]
    fn debug_shows_rendered_other() {
        assert_eq!(format!("{:?}", Value::from(7u8)), r#"Other("7")"#);
        assert_eq!(format!("{:?}", Value::from("x")), r#"Text("x")"#);
    }
}
