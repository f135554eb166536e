//! Error types for the rotorcrypt library.

use std::fmt;

/// Errors produced by the rotorcrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorCryptError {
    /// Number of initial positions does not match the rotor count.
    PositionCountMismatch,
    /// A rotor position is outside the valid range [1, 26].
    PositionOutOfRange,
    /// A plugboard index is outside the valid range [1, 26].
    PlugOutOfRange,
    /// A letter is wired by more than one plugboard pair.
    DuplicatePlug,
    /// A message character is outside the supported alphabet `a`-`z`.
    UnsupportedCharacter(char),
}

impl fmt::Display for RotorCryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotorCryptError::PositionCountMismatch => {
                write!(f, "Number of rotor positions does not match the rotor count")
            }
            RotorCryptError::PositionOutOfRange => {
                write!(f, "Rotor position is outside the valid range [1, 26]")
            }
            RotorCryptError::PlugOutOfRange => {
                write!(f, "Plugboard index is outside the valid range [1, 26]")
            }
            RotorCryptError::DuplicatePlug => {
                write!(f, "A letter is wired by more than one plugboard pair")
            }
            RotorCryptError::UnsupportedCharacter(c) => {
                write!(f, "Character {:?} is outside the supported alphabet a-z", c)
            }
        }
    }
}

impl std::error::Error for RotorCryptError {}
