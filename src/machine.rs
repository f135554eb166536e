//! RotorMachine: the full transformation pipeline and stepping mechanism.
//!
//! Owns a plugboard, an ordered stack of rotors with mutable rotational
//! positions, and a reflector offset. `encrypt` and `decrypt` drive every
//! character through the same physical path (plugboard, rotor stack
//! right-to-left, reflector, rotor stack left-to-right, plugboard) and
//! advance the rotor positions identically after each character. The sign
//! of the reflector step is the only difference between the two.
//!
//! The rotors, plugboard and reflector offset are fixed at construction
//! and constitute the key; the position vector is the only mutable state.

use std::fmt;

use rand::Rng;

use crate::alphabet::{self, RADIX};
use crate::error::RotorCryptError;
use crate::plugboard::Plugboard;
use crate::rotor::Rotor;

/// Default reflector offset.
const DEFAULT_REFLECTOR_OFFSET: i32 = 1;

/// Rotor cipher machine: plugboard, rotor stack, reflector, odometer.
///
/// Rotor 0 is the rightmost, fastest rotor: it advances on every
/// character, carrying into its left neighbours odometer-style. Both
/// [`encrypt`](Self::encrypt) and [`decrypt`](Self::decrypt) mutate the
/// position vector, so a receiver must
/// [`reset_positions`](Self::reset_positions) to the agreed initial
/// values before decoding an independent message.
#[derive(Debug)]
pub struct RotorMachine {
    plugboard: Plugboard,
    rotors: Vec<Rotor>,
    positions: Vec<u8>,
    reflector_offset: i32,
}

impl RotorMachine {
    /// Creates a machine with freshly generated rotors and the default
    /// reflector offset of 1.
    ///
    /// Each rotor is an independent uniformly random permutation drawn
    /// from `rng`. The initial positions are copied in; later mutation of
    /// the caller's slice has no effect on the machine.
    ///
    /// # Parameters
    /// - `rng`: Random source for rotor generation. Seed it explicitly
    ///   for a reproducible machine.
    /// - `plugboard`: Letter-swap wiring applied at entry and exit.
    /// - `initial_positions`: One position in [1, 26] per rotor.
    /// - `num_rotors`: Number of rotors to generate.
    ///
    /// # Errors
    /// - [`RotorCryptError::PositionCountMismatch`] if
    ///   `initial_positions.len() != num_rotors`.
    /// - [`RotorCryptError::PositionOutOfRange`] if a position is outside
    ///   [1, 26].
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Plugboard, RotorMachine};
    ///
    /// let mut rng = rand::thread_rng();
    /// let mut machine = RotorMachine::new(&mut rng, Plugboard::empty(), &[1, 14, 7], 3).unwrap();
    ///
    /// let ciphertext = machine.encrypt("attackatdawn").unwrap();
    /// machine.reset_positions(&[1, 14, 7]).unwrap();
    /// assert_eq!(machine.decrypt(&ciphertext).unwrap(), "attackatdawn");
    /// ```
    ///
    /// ```
    /// use rotorcrypt::{Plugboard, RotorMachine};
    ///
    /// let mut rng = rand::thread_rng();
    /// let result = RotorMachine::new(&mut rng, Plugboard::empty(), &[1, 1], 3);
    /// assert!(result.is_err());
    /// ```
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        plugboard: Plugboard,
        initial_positions: &[u8],
        num_rotors: usize,
    ) -> Result<Self, RotorCryptError> {
        Self::with_reflector_offset(
            rng,
            plugboard,
            initial_positions,
            num_rotors,
            DEFAULT_REFLECTOR_OFFSET,
        )
    }

    /// Creates a machine with freshly generated rotors and an explicit
    /// reflector offset.
    ///
    /// The reflector is an additive cyclic shift, not an involutive
    /// wiring; `encrypt` applies `+reflector_offset` and `decrypt`
    /// applies `-reflector_offset`.
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn with_reflector_offset<R: Rng + ?Sized>(
        rng: &mut R,
        plugboard: Plugboard,
        initial_positions: &[u8],
        num_rotors: usize,
        reflector_offset: i32,
    ) -> Result<Self, RotorCryptError> {
        Self::validate_positions(initial_positions, num_rotors)?;
        let mut rotors = Vec::with_capacity(num_rotors);
        for _ in 0..num_rotors {
            rotors.push(Rotor::new(rng));
        }
        Self::with_rotors(rotors, plugboard, initial_positions, reflector_offset)
    }

    /// Creates a machine from explicit rotors.
    ///
    /// Sender and receiver must hold identical rotors, plugboard and
    /// reflector offset for `decrypt` to invert `encrypt`; this
    /// constructor is how the second machine is built from the first
    /// machine's [`rotors`](Self::rotors).
    ///
    /// # Errors
    /// - [`RotorCryptError::PositionCountMismatch`] if
    ///   `initial_positions.len() != rotors.len()`.
    /// - [`RotorCryptError::PositionOutOfRange`] if a position is outside
    ///   [1, 26].
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Plugboard, Rotor, RotorMachine};
    ///
    /// let mut rng = rand::thread_rng();
    /// let rotors: Vec<Rotor> = (0..2).map(|_| Rotor::new(&mut rng)).collect();
    ///
    /// let mut sender =
    ///     RotorMachine::with_rotors(rotors.clone(), Plugboard::empty(), &[3, 20], 1).unwrap();
    /// let mut receiver =
    ///     RotorMachine::with_rotors(rotors, Plugboard::empty(), &[3, 20], 1).unwrap();
    ///
    /// let ciphertext = sender.encrypt("meetmeatnoon").unwrap();
    /// assert_eq!(receiver.decrypt(&ciphertext).unwrap(), "meetmeatnoon");
    /// ```
    pub fn with_rotors(
        rotors: Vec<Rotor>,
        plugboard: Plugboard,
        initial_positions: &[u8],
        reflector_offset: i32,
    ) -> Result<Self, RotorCryptError> {
        Self::validate_positions(initial_positions, rotors.len())?;
        Ok(RotorMachine {
            plugboard,
            rotors,
            positions: initial_positions.to_vec(),
            reflector_offset,
        })
    }

    /// Encrypts a message over the alphabet `a`-`z`.
    ///
    /// Advances the rotor positions once per character as a side effect.
    /// The output has the same length as the input.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::UnsupportedCharacter`] if the message
    /// contains anything outside `a`..=`z`. The whole message is
    /// validated before any character is processed, so a failed call
    /// leaves the positions untouched.
    pub fn encrypt(&mut self, plaintext: &str) -> Result<String, RotorCryptError> {
        self.transform(plaintext, self.reflector_offset)
    }

    /// Decrypts a message over the alphabet `a`-`z`.
    ///
    /// Drives every character through the same physical path as
    /// [`encrypt`](Self::encrypt) and advances the positions identically;
    /// only the sign of the reflector step differs. The positions must
    /// first be reset to the values the sender started from.
    ///
    /// # Errors
    /// Same as [`encrypt`](Self::encrypt).
    pub fn decrypt(&mut self, ciphertext: &str) -> Result<String, RotorCryptError> {
        self.transform(ciphertext, -self.reflector_offset)
    }

    /// Re-synchronizes the rotor positions, e.g. before decoding an
    /// independent message.
    ///
    /// # Errors
    /// Same validation as construction: one position in [1, 26] per
    /// rotor. On error the current positions are left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Plugboard, RotorMachine};
    ///
    /// let mut rng = rand::thread_rng();
    /// let mut machine = RotorMachine::new(&mut rng, Plugboard::empty(), &[5, 9], 2).unwrap();
    /// machine.encrypt("somemessage").unwrap();
    ///
    /// machine.reset_positions(&[5, 9]).unwrap();
    /// assert_eq!(machine.positions(), &[5, 9]);
    /// ```
    pub fn reset_positions(&mut self, new_positions: &[u8]) -> Result<(), RotorCryptError> {
        Self::validate_positions(new_positions, self.rotors.len())?;
        self.positions = new_positions.to_vec();
        Ok(())
    }

    /// Current rotor positions, rotor 0 first.
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    /// The rotor stack, rotor 0 (rightmost, fastest) first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Number of rotors in the stack.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// The additive reflector offset.
    pub fn reflector_offset(&self) -> i32 {
        self.reflector_offset
    }

    /// Shared encrypt/decrypt path; `reflector_step` carries the sign.
    fn transform(
        &mut self,
        message: &str,
        reflector_step: i32,
    ) -> Result<String, RotorCryptError> {
        // Validate the whole message up front so a rejected character
        // leaves the rotor positions untouched.
        let indices = message
            .chars()
            .map(alphabet::index_of)
            .collect::<Result<Vec<u8>, _>>()?;

        let mut output = String::with_capacity(indices.len());
        for index in indices {
            let substituted = self.transform_index(index, reflector_step);
            output.push(alphabet::letter_of(substituted));
        }
        Ok(output)
    }

    /// Drives one alphabet index through the full physical path, then
    /// advances the rotor positions.
    fn transform_index(&mut self, index: u8, reflector_step: i32) -> u8 {
        let mut index = self.plugboard.substitute(index);

        for (rotor, &pos) in self.rotors.iter().zip(&self.positions) {
            index = rotor.from_right(index, pos);
        }

        index = alphabet::wrap_add(index, reflector_step);

        // The backward pass reads the same positions the forward pass
        // consumed; positions never change mid-character.
        for (rotor, &pos) in self.rotors.iter().zip(&self.positions).rev() {
            index = rotor.from_left(index, pos);
        }

        let index = self.plugboard.substitute(index);
        self.advance_positions();
        index
    }

    /// Odometer step: rotor 0 always advances; a wrap carries leftward
    /// until a rotor absorbs it. A carry off the end of the stack is
    /// dropped.
    fn advance_positions(&mut self) {
        for pos in self.positions.iter_mut() {
            if *pos < RADIX {
                *pos += 1;
                return;
            }
            *pos = 1;
        }
    }

    fn validate_positions(positions: &[u8], num_rotors: usize) -> Result<(), RotorCryptError> {
        if positions.len() != num_rotors {
            return Err(RotorCryptError::PositionCountMismatch);
        }
        if positions.iter().any(|pos| !(1..=RADIX).contains(pos)) {
            return Err(RotorCryptError::PositionOutOfRange);
        }
        Ok(())
    }
}

impl fmt::Display for RotorMachine {
    /// Formats the machine configuration: plugboard wires, rotor wirings,
    /// current positions and reflector offset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "plugboard: {}", self.plugboard)?;
        for (i, rotor) in self.rotors.iter().enumerate() {
            writeln!(f, "rotor {}: {}", i, rotor)?;
        }
        writeln!(f, "positions: {:?}", self.positions)?;
        write!(f, "reflector offset: {}", self.reflector_offset)
    }
}
