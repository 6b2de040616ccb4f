//! Scanner for color markup.
//!
//! Splits input text into a stream of tokens in a single left-to-right pass.

use crate::error::MarkupError;
use crate::sgr::ESCAPE;

/// Opens a multi-character group after the escape character.
const GROUP_OPEN: char = '{';
/// Closes a multi-character group.
const GROUP_CLOSE: char = '}';

/// A token produced by the scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text, copied verbatim.
    Text(&'a str),
    /// A doubled escape character, standing for one literal escape character.
    Literal(char),
    /// The interior of a markup group: `rK` for `@{rK}`, `r` for `@r`.
    Group(&'a str),
}

/// Scanner state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Copying text, watching for the escape character.
    Normal,
    /// Just consumed the escape character at this byte offset.
    InEscape(usize),
}

/// Outcome of a single state transition.
#[derive(Debug, PartialEq)]
enum Step<'a> {
    /// The transition produced a token (or a fatal error).
    Emit(Result<Token<'a>, MarkupError>),
    /// The state changed without producing a token.
    Shift,
    /// End of input in `Normal`.
    Done,
}

/// Scanner for color markup text.
///
/// # Examples
///
/// ```
/// use markup::parser::{Scanner, Token};
///
/// let tokens: Vec<_> = Scanner::new("@{rK}hi@@").collect::<Result<_, _>>().unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::Group("rK"), Token::Text("hi"), Token::Literal('@')]
/// );
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    state: State,
    escape: char,
}

impl<'a> Scanner<'a> {
    /// Create a scanner using the default `@` escape character.
    pub fn new(input: &'a str) -> Self {
        Self::with_escape(input, ESCAPE)
    }

    /// Create a scanner with a custom escape character.
    pub fn with_escape(input: &'a str, escape: char) -> Self {
        Self {
            input,
            pos: 0,
            state: State::Normal,
            escape,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Stop scanning; the iterator yields nothing after an error.
    fn fail(&mut self, err: MarkupError) -> Result<Token<'a>, MarkupError> {
        self.pos = self.input.len();
        self.state = State::Normal;
        Err(err)
    }

    /// Consume text up to the next escape character or end of input.
    fn consume_text(&mut self) -> Token<'a> {
        let start = self.pos;
        let end = self
            .remaining()
            .find(self.escape)
            .map_or(self.input.len(), |i| start + i);
        self.pos = end;
        Token::Text(&self.input[start..end])
    }

    /// Consume the unit following an escape character.
    fn consume_escape(&mut self, escape_at: usize) -> Result<Token<'a>, MarkupError> {
        self.state = State::Normal;
        let unit_start = self.pos;

        match self.advance() {
            None => self.fail(MarkupError::DanglingEscape(escape_at)),
            Some(c) if c == self.escape => Ok(Token::Literal(c)),
            Some(GROUP_OPEN) => {
                let content_start = self.pos;
                match self.remaining().find(GROUP_CLOSE) {
                    Some(i) => {
                        let content_end = content_start + i;
                        self.pos = content_end + GROUP_CLOSE.len_utf8();
                        Ok(Token::Group(&self.input[content_start..content_end]))
                    }
                    None => self.fail(MarkupError::UnterminatedGroup(escape_at)),
                }
            }
            Some(_) => Ok(Token::Group(&self.input[unit_start..self.pos])),
        }
    }

    /// Run one transition of the state machine.
    ///
    /// `Normal` either emits a run of text or moves to `InEscape` on the
    /// escape character. `InEscape` resolves the following unit and moves
    /// back to `Normal`.
    fn step(&mut self) -> Step<'a> {
        match self.state {
            State::Normal => match self.peek() {
                None => Step::Done,
                Some(c) if c == self.escape => {
                    let at = self.pos;
                    self.advance();
                    self.state = State::InEscape(at);
                    Step::Shift
                }
                Some(_) => Step::Emit(Ok(self.consume_text())),
            },
            State::InEscape(at) => Step::Emit(self.consume_escape(at)),
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                Step::Emit(item) => return Some(item),
                Step::Shift => {}
                Step::Done => return None,
            }
        }
    }
}
