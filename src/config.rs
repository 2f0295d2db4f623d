//! Machine settings as a serializable option set.
//!
//! ```
//! use rotorcrypt::MachineConfig;
//!
//! let config = MachineConfig {
//!     rotors: vec![
//!         "DMTWSILRUYQNKFEJCAZBPGXOHV".into(),
//!         "HQZGPJTMOBLNCIFDYAWVEUSRKX".into(),
//!         "UQNTLSZFMREHDPXKIBVYGJCWOA".into(),
//!     ],
//!     offset: 0,
//!     plugs: vec!["AB".into(), "CD".into()],
//! };
//! let mut machine = config.build().unwrap();
//! assert_eq!(machine.process("HELLO").unwrap(), "UDDUY");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::machine::CipherMachine;
use crate::rotor::RotorWiring;
use crate::rotor_bank::RotorBank;

/// Settings needed to build a [`CipherMachine`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor wirings in signal order, 26 letters each.
    pub rotors: Vec<String>,
    /// Starting odometer value.
    #[serde(default)]
    pub offset: u64,
    /// Plug pairs such as `"AB"`.
    #[serde(default)]
    pub plugs: Vec<String>,
}

impl MachineConfig {
    /// Validates the settings and builds a fresh rotor bank.
    ///
    /// # Errors
    /// Returns [`ConfigError`](crate::ConfigError) for any invalid wiring,
    /// rotor count, offset or plug pair.
    pub fn rotor_bank(&self) -> Result<RotorBank> {
        let rotors = self
            .rotors
            .iter()
            .map(|w| RotorWiring::new(w))
            .collect::<Result<Vec<_>>>()?;
        RotorBank::new(rotors, self.offset)
    }

    /// Validates the settings and builds a machine.
    ///
    /// Every call returns an independent machine at the configured offset,
    /// so the same config builds a matching encoder and decoder.
    ///
    /// # Errors
    /// Returns [`ConfigError`](crate::ConfigError) for any invalid setting.
    pub fn build(&self) -> Result<CipherMachine> {
        let rotors = self.rotor_bank()?;
        CipherMachine::with_plug_strs(&self.plugs, rotors)
    }
}
