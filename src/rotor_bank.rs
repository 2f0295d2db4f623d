//! RotorBank: the stateful rotor pass.
//!
//! A bank chains N [`RotorWiring`]s behind one odometer counter. Each
//! processed letter advances the counter first, splits it into one base-26
//! digit per rotor (rotor 0 gets the least significant digit), then runs
//!
//! ```text
//! letter → rotor[0] → … → rotor[N-1] → reflector → rotor[N-1]⁻¹ → … → rotor[0]⁻¹
//! ```
//!
//! with every rotor turned by its own digit in both directions.

use tracing::{debug, trace};

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::{ConfigError, Result};
use crate::rotor::RotorWiring;

/// Largest bank whose period `26^N` still fits in a `u64`.
pub const MAX_ROTORS: usize = 13;

/// Positions moved by the fixed reflector.
const REFLECTOR_SHIFT: usize = 13;

/// Fixed reflector: shifts a letter half way round the alphabet.
///
/// Applying it twice returns the original letter.
pub fn reflect(letter: Letter) -> Letter {
    Letter::wrapping(letter.index() + REFLECTOR_SHIFT)
}

/// Ordered rotors driven by a single odometer offset.
///
/// The offset is private and only [`process_letter`](Self::process_letter)
/// changes it, which keeps it below [`period`](Self::period) at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorBank {
    rotors: Vec<RotorWiring>,
    /// `place_values[k] == 26^k`.
    place_values: Vec<u64>,
    period: u64,
    offset: u64,
}

impl RotorBank {
    /// Creates a bank from rotors in signal order and a starting offset.
    ///
    /// # Parameters
    /// - `rotors`: the rotors, first one nearest the plugboard.
    /// - `offset`: the starting counter value, usually 0. Any value at or
    ///   above `26^N` behaves like `26^N - 1`: the first letter wraps the
    ///   odometer and is processed at offset 0.
    ///
    /// # Errors
    /// - [`ConfigError::NoRotors`] if `rotors` is empty.
    /// - [`ConfigError::TooManyRotors`] if there are more than [`MAX_ROTORS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{RotorBank, RotorWiring};
    ///
    /// let rotors = vec![
    ///     RotorWiring::new("DMTWSILRUYQNKFEJCAZBPGXOHV").unwrap(),
    ///     RotorWiring::new("HQZGPJTMOBLNCIFDYAWVEUSRKX").unwrap(),
    ///     RotorWiring::new("UQNTLSZFMREHDPXKIBVYGJCWOA").unwrap(),
    /// ];
    /// let mut bank = RotorBank::new(rotors, 0).unwrap();
    /// assert_eq!(bank.process_message("HELLO").unwrap(), "UCCUY");
    /// ```
    pub fn new(rotors: Vec<RotorWiring>, offset: u64) -> Result<Self> {
        if rotors.is_empty() {
            return Err(ConfigError::NoRotors.into());
        }
        if rotors.len() > MAX_ROTORS {
            return Err(ConfigError::TooManyRotors {
                count: rotors.len(),
                max: MAX_ROTORS,
            }
            .into());
        }

        let mut place_values = Vec::with_capacity(rotors.len());
        let mut place = 1u64;
        for _ in 0..rotors.len() {
            place_values.push(place);
            place *= ALPHABET_LEN as u64;
        }
        let period = place;

        let offset = offset.min(period - 1);

        debug!(rotors = rotors.len(), period, offset, "rotor bank created");
        Ok(RotorBank {
            rotors,
            place_values,
            period,
            offset,
        })
    }

    /// Current odometer value.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Number of odometer states, `26^N`.
    pub fn period(&self) -> u64 {
        self.period
    }

    /// Number of rotors.
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Always `false`; a bank holds at least one rotor.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    /// The rotors in signal order.
    pub fn rotors(&self) -> &[RotorWiring] {
        &self.rotors
    }

    /// Per-rotor digits of the current offset, rotor 0 first.
    pub fn positions(&self) -> Vec<usize> {
        (0..self.rotors.len()).map(|k| self.digit(k)).collect()
    }

    /// Base-26 digit `k` of the offset.
    fn digit(&self, k: usize) -> usize {
        ((self.offset / self.place_values[k]) % ALPHABET_LEN as u64) as usize
    }

    /// Advances the odometer by one, wrapping to 0 at the period.
    fn advance(&mut self) {
        self.offset += 1;
        if self.offset >= self.period {
            debug!(period = self.period, "rotor bank offset wrapped");
            self.offset = 0;
        }
    }

    /// Enciphers validated letters in order, one offset step each.
    pub(crate) fn encipher_all<'a>(
        &'a mut self,
        letters: impl IntoIterator<Item = Letter> + 'a,
    ) -> impl Iterator<Item = Letter> + 'a {
        letters.into_iter().map(move |letter| self.encipher(letter))
    }

    /// Enciphers one already-validated letter, advancing the offset.
    pub(crate) fn encipher(&mut self, input: Letter) -> Letter {
        self.advance();

        let mut letter = input;
        for (k, rotor) in self.rotors.iter().enumerate() {
            letter = rotor.map_forward(letter, self.digit(k));
        }

        letter = reflect(letter);

        for (k, rotor) in self.rotors.iter().enumerate().rev() {
            letter = rotor.map_backward(letter, self.digit(k));
        }

        trace!(%input, output = %letter, offset = self.offset, "letter enciphered");
        letter
    }

    /// Enciphers one character.
    ///
    /// The offset advances before the letter is encoded, so on a fresh bank
    /// the first letter is processed at offset 1.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCharacter`](crate::Error::InvalidCharacter) if
    /// `character` is not in `A..=Z`. The offset is left untouched in that case.
    pub fn process_letter(&mut self, character: char) -> Result<char> {
        let letter = Letter::from_char(character)?;
        Ok(self.encipher(letter).to_char())
    }

    /// Enciphers a message one character at a time, in order.
    ///
    /// # Errors
    /// Stops at the first character outside `A..=Z` and returns
    /// [`Error::InvalidCharacter`](crate::Error::InvalidCharacter). Characters
    /// before it have already advanced the offset.
    pub fn process_message(&mut self, text: &str) -> Result<String> {
        let mut output = String::with_capacity(text.len());
        for character in text.chars() {
            output.push(self.process_letter(character)?);
        }
        Ok(output)
    }
}
