//! Error types for the rotorcrypt library.
//!
//! Two failure domains exist: construction-time configuration problems and
//! characters outside the machine alphabet met while processing a message.
//! Neither is transient; the caller fixes its input and tries again.

use thiserror::Error;

/// Errors produced by the rotorcrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Plugboard, rotor wiring or rotor bank settings are invalid.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// A character outside `A..=Z` was given to the machine.
    #[error("invalid character {character:?}: only uppercase A-Z is supported")]
    InvalidCharacter { character: char },
}

/// Construction-time configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// More than the allowed number of plug pairs.
    #[error("too many plug pairs: {count} given, at most {max} allowed")]
    TooManyPlugs { count: usize, max: usize },

    /// A plug pair is not exactly two distinct letters.
    #[error("malformed plug pair {pair:?}: expected two distinct letters")]
    MalformedPlug { pair: String },

    /// A letter is plugged more than once across the plugboard.
    #[error("letter {letter} appears in more than one plug pair")]
    DuplicatePlugLetter { letter: char },

    /// A rotor wiring does not have 26 letters.
    #[error("rotor wiring must have 26 letters, got {len}")]
    WiringLength { len: usize },

    /// A rotor wiring contains something other than a letter.
    #[error("rotor wiring contains invalid character {character:?}")]
    WiringCharacter { character: char },

    /// A rotor wiring names the same letter twice.
    #[error("rotor wiring is not a permutation: {letter} appears more than once")]
    WiringNotPermutation { letter: char },

    /// A rotor bank needs at least one rotor.
    #[error("rotor bank needs at least one rotor")]
    NoRotors,

    /// The odometer period `26^N` does not fit the offset counter.
    #[error("rotor bank supports at most {max} rotors, got {count}")]
    TooManyRotors { count: usize, max: usize },
}

/// Type alias for `Result` with the crate [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
