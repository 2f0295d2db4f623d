//! RotorWiring: a fixed permutation of the alphabet.
//!
//! A rotor holds no position of its own. The caller supplies the rotational
//! offset on every lookup, which is how [`RotorBank`](crate::RotorBank)
//! drives several rotors from one odometer counter.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::{ConfigError, Result};

/// Immutable rotor wiring mapping alphabet position `i` to `wiring[i]`.
///
/// The inverse table is computed once at construction so the backward
/// lookup is as cheap as the forward one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RotorWiring {
    forward: [Letter; ALPHABET_LEN],
    inverse: [usize; ALPHABET_LEN],
}

impl RotorWiring {
    /// Builds a rotor from a 26-letter wiring string.
    ///
    /// Lowercase letters are normalized to uppercase.
    ///
    /// # Parameters
    /// - `wiring`: the letters reached from `A`, `B`, ... `Z` in order.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the string is not 26 characters long,
    /// contains a non-letter, or repeats a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::RotorWiring;
    ///
    /// let rotor = RotorWiring::new("DMTWSILRUYQNKFEJCAZBPGXOHV").unwrap();
    /// assert_eq!(rotor.to_string(), "DMTWSILRUYQNKFEJCAZBPGXOHV");
    ///
    /// assert!(RotorWiring::new("ABC").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self> {
        let len = wiring.chars().count();
        if len != ALPHABET_LEN {
            return Err(ConfigError::WiringLength { len }.into());
        }

        let mut forward = [Letter::wrapping(0); ALPHABET_LEN];
        let mut inverse = [usize::MAX; ALPHABET_LEN];
        for (position, character) in wiring.chars().enumerate() {
            let upper = character.to_ascii_uppercase();
            let letter = Letter::from_char(upper)
                .map_err(|_| ConfigError::WiringCharacter { character })?;
            if inverse[letter.index()] != usize::MAX {
                return Err(ConfigError::WiringNotPermutation { letter: upper }.into());
            }
            forward[position] = letter;
            inverse[letter.index()] = position;
        }

        Ok(RotorWiring { forward, inverse })
    }

    /// Maps a letter entering the rotor, which is turned by `offset`.
    ///
    /// Returns `wiring[(index(letter) + offset) mod 26]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Letter, RotorWiring};
    ///
    /// let rotor = RotorWiring::new("DMTWSILRUYQNKFEJCAZBPGXOHV").unwrap();
    /// let a = Letter::from_char('A').unwrap();
    /// assert_eq!(rotor.map_forward(a, 0).to_char(), 'D');
    /// assert_eq!(rotor.map_forward(a, 1).to_char(), 'M');
    /// ```
    pub fn map_forward(&self, letter: Letter, offset: usize) -> Letter {
        self.forward[(letter.index() + offset % ALPHABET_LEN) % ALPHABET_LEN]
    }

    /// Maps a letter leaving the rotor on the return path.
    ///
    /// Exact inverse of [`map_forward`](Self::map_forward) for the same
    /// offset: finds the wiring position of `letter` and steps back by
    /// `offset` in the standard alphabet.
    pub fn map_backward(&self, letter: Letter, offset: usize) -> Letter {
        let position = self.inverse[letter.index()];
        Letter::wrapping(position + ALPHABET_LEN - offset % ALPHABET_LEN)
    }

    /// The wiring letters in alphabet order.
    pub fn as_letters(&self) -> &[Letter; ALPHABET_LEN] {
        &self.forward
    }
}

impl FromStr for RotorWiring {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        RotorWiring::new(s)
    }
}

impl fmt::Display for RotorWiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.forward {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
