//! Rotor: a fixed random permutation of the alphabet plus its inverse.
//!
//! Each rotor is an independently generated bijection over the alphabet
//! index space [1, 26]. The forward table is sampled uniformly at
//! construction from an injected random source; the backward table is
//! its exact inverse, derived once and never recomputed. Both tables are
//! immutable for the lifetime of the rotor. The rotational position is
//! supplied at lookup time by the machine that owns the rotor.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::{self, RADIX};

/// A fixed random permutation of the alphabet index space, traversable
/// from either side under a rotational offset.
///
/// Invariant: `left_map[right_map[x]] == x` and `right_map[left_map[x]] == x`
/// for every `x` in [1, 26], from construction until drop.
#[derive(Debug, Clone)]
pub struct Rotor {
    right_map: [u8; RADIX as usize],
    left_map: [u8; RADIX as usize],
}

impl Rotor {
    /// Generates a fresh rotor from the given random source.
    ///
    /// The forward wiring is a uniformly random bijection: each of the 26
    /// destinations is used exactly once. The backward wiring is derived
    /// from it, not sampled independently.
    ///
    /// # Parameters
    /// - `rng`: Random source. Seed it explicitly for deterministic rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Rotor;
    ///
    /// let rotor = Rotor::new(&mut rand::thread_rng());
    /// for x in 1..=26 {
    ///     assert_eq!(rotor.from_left(rotor.from_right(x, 7), 7), x);
    /// }
    /// ```
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut right_map = [0u8; RADIX as usize];
        for (i, dest) in right_map.iter_mut().enumerate() {
            *dest = i as u8 + 1;
        }
        right_map.shuffle(rng);

        let mut left_map = [0u8; RADIX as usize];
        for (i, &dest) in right_map.iter().enumerate() {
            left_map[dest as usize - 1] = i as u8 + 1;
        }

        Rotor {
            right_map,
            left_map,
        }
    }

    /// Maps an index entering from the right side of the rotor, offset by
    /// the rotor's current rotational position.
    ///
    /// # Parameters
    /// - `x`: Alphabet index in [1, 26].
    /// - `pos`: Rotational position in [1, 26].
    pub fn from_right(&self, x: u8, pos: u8) -> u8 {
        self.right_map[alphabet::wrap_add(pos, x as i32) as usize - 1]
    }

    /// Maps an index returning through the left side of the rotor.
    ///
    /// Exact inverse of [`from_right`](Self::from_right) for the same
    /// `pos`: `from_left(from_right(x, pos), pos) == x`.
    pub fn from_left(&self, x: u8, pos: u8) -> u8 {
        alphabet::wrap_add(self.left_map[x as usize - 1], -(pos as i32))
    }
}

impl fmt::Display for Rotor {
    /// Formats the rotor as its forward wiring string, the destinations
    /// of 'a' through 'z' in order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wiring: String = self
            .right_map
            .iter()
            .map(|&dest| alphabet::letter_of(dest))
            .collect();
        f.write_str(&wiring)
    }
}
