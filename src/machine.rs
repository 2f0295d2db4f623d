//! CipherMachine: plugboard, rotor bank, plugboard.
//!
//! The machine owns its plugboard and rotor bank outright. Enciphering and
//! deciphering are the same operation: a second machine built with the same
//! settings turns ciphertext back into plaintext.

use tracing::debug;

use crate::alphabet::Letter;
use crate::config::MachineConfig;
use crate::error::Result;
use crate::plugboard::{PlugPair, Plugboard};
use crate::rotor_bank::RotorBank;

/// Rotor cipher machine.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{CipherMachine, RotorBank, RotorWiring};
///
/// let rotors = || {
///     let wirings = [
///         "DMTWSILRUYQNKFEJCAZBPGXOHV",
///         "HQZGPJTMOBLNCIFDYAWVEUSRKX",
///         "UQNTLSZFMREHDPXKIBVYGJCWOA",
///     ];
///     let rotors = wirings.iter().map(|w| RotorWiring::new(w).unwrap()).collect();
///     RotorBank::new(rotors, 0).unwrap()
/// };
///
/// let mut encoder = CipherMachine::with_plug_strs(&["AB", "CD"], rotors()).unwrap();
/// let ciphertext = encoder.process("HELLO").unwrap();
/// assert_eq!(ciphertext, "UDDUY");
///
/// let mut decoder = CipherMachine::with_plug_strs(&["AB", "CD"], rotors()).unwrap();
/// assert_eq!(decoder.process(&ciphertext).unwrap(), "HELLO");
/// ```
#[derive(Debug, Clone)]
pub struct CipherMachine {
    plugboard: Plugboard,
    rotors: RotorBank,
}

impl CipherMachine {
    /// Creates a machine from plug pairs and a rotor bank.
    ///
    /// # Errors
    /// Returns [`ConfigError`](crate::ConfigError) if the plug pairs are
    /// invalid.
    pub fn new(plugs: &[PlugPair], rotors: RotorBank) -> Result<Self> {
        let plugboard = Plugboard::new(plugs)?;
        Ok(Self::assemble(plugboard, rotors))
    }

    /// Creates a machine from plug strings such as `"AB"`.
    ///
    /// # Errors
    /// Returns [`ConfigError`](crate::ConfigError) if a plug string is
    /// malformed or the set of pairs is invalid.
    pub fn with_plug_strs<S: AsRef<str>>(plugs: &[S], rotors: RotorBank) -> Result<Self> {
        let plugboard = Plugboard::from_strs(plugs)?;
        Ok(Self::assemble(plugboard, rotors))
    }

    /// Builds a machine from a deserialized configuration.
    pub fn from_config(config: &MachineConfig) -> Result<Self> {
        config.build()
    }

    fn assemble(plugboard: Plugboard, rotors: RotorBank) -> Self {
        debug!(
            plugs = plugboard.pairs().len(),
            rotors = rotors.len(),
            offset = rotors.offset(),
            "cipher machine assembled"
        );
        CipherMachine { plugboard, rotors }
    }

    /// Enciphers (or deciphers) a message.
    ///
    /// The whole message goes through the plugboard before the rotor bank
    /// sees any of it, so a bad character is reported before the offset
    /// moves.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCharacter`](crate::Error::InvalidCharacter)
    /// for the first character outside `A..=Z`.
    pub fn process(&mut self, message: &str) -> Result<String> {
        let plugged = message
            .chars()
            .map(|c| Letter::from_char(c).map(|l| self.plugboard.apply(l)))
            .collect::<Result<Vec<Letter>>>()?;

        let plugboard = &self.plugboard;
        Ok(self
            .rotors
            .encipher_all(plugged)
            .map(|l| plugboard.apply(l).to_char())
            .collect())
    }

    /// Enciphers a single character, advancing the rotor bank by one.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCharacter`](crate::Error::InvalidCharacter)
    /// if `character` is outside `A..=Z`.
    pub fn process_letter(&mut self, character: char) -> Result<char> {
        let letter = self.plugboard.apply(Letter::from_char(character)?);
        let letter = self.rotors.encipher(letter);
        Ok(self.plugboard.apply(letter).to_char())
    }

    /// The plugboard used on both sides of the rotor bank.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// The rotor bank, for reading its current offset and positions.
    pub fn rotor_bank(&self) -> &RotorBank {
        &self.rotors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, Error};
    use crate::rotor::RotorWiring;

    fn rotors() -> RotorBank {
        let wirings = [
            "DMTWSILRUYQNKFEJCAZBPGXOHV",
            "HQZGPJTMOBLNCIFDYAWVEUSRKX",
            "UQNTLSZFMREHDPXKIBVYGJCWOA",
        ];
        let rotors = wirings
            .iter()
            .map(|w| RotorWiring::new(w).unwrap())
            .collect();
        RotorBank::new(rotors, 0).unwrap()
    }

    #[test]
    fn test_process_message() {
        let mut machine = CipherMachine::with_plug_strs(&["AB", "CD"], rotors()).unwrap();
        assert_eq!(machine.process("HELLO").unwrap(), "UDDUY");
        assert_eq!(machine.rotor_bank().offset(), 5);
    }

    #[test]
    fn test_no_plugs_matches_bare_bank() {
        let mut machine = CipherMachine::new(&[], rotors()).unwrap();
        assert_eq!(machine.process("HELLO").unwrap(), "UCCUY");
    }

    #[test]
    fn test_process_letter_matches_process() {
        let mut by_message = CipherMachine::with_plug_strs(&["AB", "CD"], rotors()).unwrap();
        let mut by_letter = CipherMachine::with_plug_strs(&["AB", "CD"], rotors()).unwrap();
        let expected = by_message.process("ATTACKATDAWN").unwrap();
        let actual: String = "ATTACKATDAWN"
            .chars()
            .map(|c| by_letter.process_letter(c).unwrap())
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_round_trip_with_full_plugboard() {
        let plugs = ["QW", "ER", "TY", "UI", "OP", "AS", "DF", "GH", "JK", "LZ"];
        let mut encoder = CipherMachine::with_plug_strs(&plugs, rotors()).unwrap();
        let mut decoder = CipherMachine::with_plug_strs(&plugs, rotors()).unwrap();
        let cipher = encoder.process("THEQUICKBROWNFOX").unwrap();
        assert_eq!(cipher, "YYQGRDHONVSHTKEY");
        assert_eq!(decoder.process(&cipher).unwrap(), "THEQUICKBROWNFOX");
    }

    #[test]
    fn test_invalid_plugs() {
        let result = CipherMachine::with_plug_strs(&["AB", "AA"], rotors());
        assert!(matches!(
            result,
            Err(Error::Configuration(ConfigError::DuplicatePlugLetter { .. }))
        ));
    }

    #[test]
    fn test_invalid_character_leaves_offset() {
        let mut machine = CipherMachine::with_plug_strs(&["AB"], rotors()).unwrap();
        assert_eq!(
            machine.process("HELLO!"),
            Err(Error::InvalidCharacter { character: '!' })
        );
        assert_eq!(machine.rotor_bank().offset(), 0);
    }

    #[test]
    fn test_process_matches_plugboard_around_bare_bank() {
        let mut machine = CipherMachine::with_plug_strs(&["AB", "CD"], rotors()).unwrap();
        let mut bare = rotors();
        let board = machine.plugboard().clone();
        let plug = |text: &str| -> String {
            text.chars()
                .map(|c| board.apply(Letter::from_char(c).unwrap()).to_char())
                .collect()
        };
        let message = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let expected = plug(&bare.process_message(&plug(message)).unwrap());
        assert_eq!(machine.process(message).unwrap(), expected);
        assert_eq!(machine.rotor_bank().offset(), bare.offset());
    }

    #[test]
    fn test_empty_message() {
        let mut machine = CipherMachine::new(&[], rotors()).unwrap();
        assert_eq!(machine.process("").unwrap(), "");
        assert_eq!(machine.rotor_bank().offset(), 0);
    }
}
