//! The machine alphabet and the [`Letter`] value type.
//!
//! Every component indexes into the same immutable [`ALPHABET`] table.
//! A [`Letter`] is only ever constructed from a valid alphabet position, so
//! lookups keyed by it cannot go out of range.

use std::fmt;

use crate::error::{Error, Result};

/// Number of letters handled by the machine.
pub const ALPHABET_LEN: usize = 26;

/// The standard alphabet, position `i` holding the `i`-th letter.
pub const ALPHABET: [u8; ALPHABET_LEN] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One letter of the machine alphabet, stored as its position `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Converts an uppercase `A..=Z` character into a letter.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCharacter`] for anything else, including
    /// lowercase letters, digits, punctuation and whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Letter;
    ///
    /// assert_eq!(Letter::from_char('C').unwrap().index(), 2);
    /// assert!(Letter::from_char('c').is_err());
    /// ```
    pub fn from_char(character: char) -> Result<Self> {
        if character.is_ascii_uppercase() {
            Ok(Letter(character as u8 - b'A'))
        } else {
            Err(Error::InvalidCharacter { character })
        }
    }

    /// Returns the letter at `index`, or `None` if `index >= 26`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    /// Letter at `index` reduced modulo 26.
    pub(crate) fn wrapping(index: usize) -> Self {
        Letter((index % ALPHABET_LEN) as u8)
    }

    /// Position of the letter in the standard alphabet.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter as an uppercase character.
    pub fn to_char(self) -> char {
        ALPHABET[self.index()] as char
    }

    /// Iterates `A..=Z` in alphabet order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;

    fn try_from(character: char) -> Result<Self> {
        Letter::from_char(character)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
