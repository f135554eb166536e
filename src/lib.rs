//! Rotor-based polyalphabetic substitution cipher engine.
//!
//! Models an electromechanical rotor machine: every plaintext letter is
//! driven through a plugboard, a stack of rotating permutation rotors, a
//! reflector, and the rotor stack again in reverse, while an
//! odometer-style stepping mechanism advances the rotor positions after
//! each character so the substitution varies over time.
//!
//! # Architecture
//!
//! ```text
//! Rotor        (atomic unit — random alphabet bijection + derived inverse,
//!               looked up from either side under a rotational offset)
//!     ↑ stacked, rotor 0 rightmost and fastest
//! RotorMachine (orchestrator — plugboard + rotor stack + additive
//!               reflector + odometer stepping)
//! ```
//!
//! The rotors, plugboard and reflector offset are fixed at construction
//! and constitute the key. The rotor positions are the only mutable
//! state; both `encrypt` and `decrypt` advance them once per character,
//! and a receiver resets them to the agreed initial values before
//! decoding.
//!
//! # Examples
//!
//! Encrypt and decrypt with a single machine:
//!
//! ```
//! use rotorcrypt::{Plugboard, RotorMachine};
//!
//! let mut rng = rand::thread_rng();
//! let plugboard = Plugboard::new(&[(1, 5)]).unwrap();
//! let mut machine = RotorMachine::new(&mut rng, plugboard, &[1, 1, 1], 3).unwrap();
//!
//! let ciphertext = machine.encrypt("attackatdawn").unwrap();
//! assert_eq!(ciphertext.len(), "attackatdawn".len());
//!
//! // Re-synchronize before decoding.
//! machine.reset_positions(&[1, 1, 1]).unwrap();
//! assert_eq!(machine.decrypt(&ciphertext).unwrap(), "attackatdawn");
//! ```
//!
//! Sender and receiver sharing the key explicitly:
//!
//! ```
//! use rotorcrypt::{Plugboard, Rotor, RotorMachine};
//!
//! let mut rng = rand::thread_rng();
//! let rotors: Vec<Rotor> = (0..2).map(|_| Rotor::new(&mut rng)).collect();
//!
//! let mut sender =
//!     RotorMachine::with_rotors(rotors.clone(), Plugboard::empty(), &[3, 20], 1).unwrap();
//! let mut receiver =
//!     RotorMachine::with_rotors(rotors, Plugboard::empty(), &[3, 20], 1).unwrap();
//!
//! let ciphertext = sender.encrypt("meetmeatnoon").unwrap();
//! assert_eq!(receiver.decrypt(&ciphertext).unwrap(), "meetmeatnoon");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod machine;
mod plugboard;
mod rotor;

pub use machine::RotorMachine;
pub use plugboard::Plugboard;
pub use rotor::Rotor;
