//! Rotor cipher machine engine.
//!
//! rotorcrypt simulates an electromechanical rotor cipher: a plugboard
//! substitution wrapped around a bank of rotors and a fixed reflector. The
//! rotor bank advances an odometer counter on every letter, so the same
//! plaintext letter enciphers differently at each position in the message.
//!
//! # Architecture
//!
//! ```text
//! RotorWiring   (fixed alphabet permutation, no state)
//!     ↕ N rotors driven by one base-26 odometer
//! RotorBank     (forward pass → reflector → backward pass)
//!     ↕ wrapped on both sides by
//! Plugboard     (involutive pair substitution)
//!     ↓
//! CipherMachine (plugboard → rotor bank → plugboard)
//! ```
//!
//! Stepping is a flat counter, not notch driven: rotor `k` sits at digit `k`
//! of the offset written in base 26.
//!
//! # Examples
//!
//! Encipher with one machine, decipher with a second one set up the same way:
//!
//! ```
//! use rotorcrypt::{CipherMachine, RotorBank, RotorWiring};
//!
//! fn machine() -> CipherMachine {
//!     let rotors = ["DMTWSILRUYQNKFEJCAZBPGXOHV", "HQZGPJTMOBLNCIFDYAWVEUSRKX"]
//!         .iter()
//!         .map(|w| RotorWiring::new(w).unwrap())
//!         .collect();
//!     let bank = RotorBank::new(rotors, 0).unwrap();
//!     CipherMachine::with_plug_strs(&["QZ", "MK"], bank).unwrap()
//! }
//!
//! let mut encoder = machine();
//! let ciphertext = encoder.process("WEATHERREPORT").unwrap();
//! assert_ne!(ciphertext, "WEATHERREPORT");
//!
//! let mut decoder = machine();
//! assert_eq!(decoder.process(&ciphertext).unwrap(), "WEATHERREPORT");
//! ```
//!
//! Only uppercase `A..=Z` is accepted:
//!
//! ```
//! use rotorcrypt::{Error, RotorBank, RotorWiring};
//!
//! let rotor = RotorWiring::new("DMTWSILRUYQNKFEJCAZBPGXOHV").unwrap();
//! let mut bank = RotorBank::new(vec![rotor], 0).unwrap();
//! assert_eq!(
//!     bank.process_message("hello"),
//!     Err(Error::InvalidCharacter { character: 'h' })
//! );
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod config;
mod machine;
mod plugboard;
mod rotor;
mod rotor_bank;

pub use alphabet::{Letter, ALPHABET, ALPHABET_LEN};
pub use config::MachineConfig;
pub use error::{ConfigError, Error, Result};
pub use machine::CipherMachine;
pub use plugboard::{PlugPair, Plugboard, MAX_PLUGS};
pub use rotor::RotorWiring;
pub use rotor_bank::{reflect, RotorBank, MAX_ROTORS};
