use std::fmt;
use std::num::NonZeroU8;

/// A digit that can be entered in a cell of the board.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).unwrap()
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Parses a digit from its character form. Returns `None` for anything
    /// outside `'1'..='9'`.
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).and_then(|digit| Self::new_checked(digit as u8))
    }

    /// Returns an iterator over all digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the number contained within as `usize`, offset by `-1`. Guarantees that the numbering starts from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
