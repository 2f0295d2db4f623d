//! Plugboard: the symmetric letter-pair substitution.
//!
//! The plugboard sits on both sides of the rotor bank. Because every pair
//! swaps its two letters, the lookup table is its own inverse and a single
//! table serves the way in and the way out.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{Letter, ALPHABET_LEN};
use crate::error::{ConfigError, Error, Result};

/// Maximum number of plug pairs on one plugboard.
pub const MAX_PLUGS: usize = 10;

/// Two distinct letters wired together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlugPair {
    left: Letter,
    right: Letter,
}

impl PlugPair {
    /// Wires `left` to `right`.
    ///
    /// # Errors
    /// Returns [`ConfigError::DuplicatePlugLetter`] if both letters are the same.
    pub fn new(left: Letter, right: Letter) -> Result<Self> {
        if left == right {
            return Err(ConfigError::DuplicatePlugLetter {
                letter: left.to_char(),
            }
            .into());
        }
        Ok(PlugPair { left, right })
    }

    /// First letter of the pair.
    pub fn left(&self) -> Letter {
        self.left
    }

    /// Second letter of the pair.
    pub fn right(&self) -> Letter {
        self.right
    }
}

impl FromStr for PlugPair {
    type Err = Error;

    /// Parses a two-letter string such as `"AB"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || ConfigError::MalformedPlug {
            pair: s.to_string(),
        };
        let mut chars = s.chars().map(|c| c.to_ascii_uppercase());
        let (left, right) = match (chars.next(), chars.next(), chars.next()) {
            (Some(l), Some(r), None) => (l, r),
            _ => return Err(malformed().into()),
        };
        let left = Letter::from_char(left).map_err(|_| malformed())?;
        let right = Letter::from_char(right).map_err(|_| malformed())?;
        PlugPair::new(left, right)
    }
}

impl fmt::Display for PlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.left, self.right)
    }
}

/// Involutive substitution built from validated plug pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    map: [Letter; ALPHABET_LEN],
    pairs: Vec<PlugPair>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// A plugboard with no cables: every letter maps to itself.
    pub fn identity() -> Self {
        let mut map = [Letter::wrapping(0); ALPHABET_LEN];
        for letter in Letter::all() {
            map[letter.index()] = letter;
        }
        Plugboard {
            map,
            pairs: Vec::new(),
        }
    }

    /// Builds a plugboard from plug pairs.
    ///
    /// # Errors
    /// - [`ConfigError::TooManyPlugs`] for more than [`MAX_PLUGS`] pairs.
    /// - [`ConfigError::DuplicatePlugLetter`] if a letter appears in two pairs.
    pub fn new(pairs: &[PlugPair]) -> Result<Self> {
        Self::validate(pairs)?;

        let mut board = Self::identity();
        for pair in pairs {
            board.map[pair.left.index()] = pair.right;
            board.map[pair.right.index()] = pair.left;
        }
        board.pairs = pairs.to_vec();
        Ok(board)
    }

    /// Parses and builds a plugboard from strings such as `["AB", "CD"]`.
    ///
    /// # Errors
    /// Any [`ConfigError`] from parsing a pair or from [`Plugboard::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Plugboard;
    ///
    /// assert!(Plugboard::from_strs(&["AB", "CD"]).is_ok());
    /// assert!(Plugboard::from_strs(&["AB", "AA"]).is_err());
    /// ```
    pub fn from_strs<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        if pairs.len() > MAX_PLUGS {
            return Err(ConfigError::TooManyPlugs {
                count: pairs.len(),
                max: MAX_PLUGS,
            }
            .into());
        }
        let parsed = pairs
            .iter()
            .map(|p| p.as_ref().parse())
            .collect::<Result<Vec<PlugPair>>>()?;
        Self::new(&parsed)
    }

    /// Checks the pair count and that no letter is plugged twice.
    pub fn validate(pairs: &[PlugPair]) -> Result<()> {
        if pairs.len() > MAX_PLUGS {
            return Err(ConfigError::TooManyPlugs {
                count: pairs.len(),
                max: MAX_PLUGS,
            }
            .into());
        }

        let mut seen = [false; ALPHABET_LEN];
        for letter in pairs.iter().flat_map(|p| [p.left, p.right]) {
            if seen[letter.index()] {
                return Err(ConfigError::DuplicatePlugLetter {
                    letter: letter.to_char(),
                }
                .into());
            }
            seen[letter.index()] = true;
        }
        Ok(())
    }

    /// Substitutes one letter.
    pub fn apply(&self, letter: Letter) -> Letter {
        self.map[letter.index()]
    }

    /// The pairs this plugboard was built from.
    pub fn pairs(&self) -> &[PlugPair] {
        &self.pairs
    }
}
