//! Plugboard: involutive letter-pair substitution.
//!
//! Models the swap wires applied before the rotor stack and again after
//! it. Each pair wires two letters to each other, so the mapping is an
//! involution: applying it twice is the identity, and the entry and exit
//! passes of the pipeline use the same table.

use std::fmt;

use crate::alphabet::{self, RADIX};
use crate::error::RotorCryptError;

/// Involutive letter-swap mapping over the alphabet index space.
///
/// Unplugged letters map to themselves.
#[derive(Debug, Clone)]
pub struct Plugboard {
    wiring: [u8; RADIX as usize],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Plugboard {
    /// Builds a plugboard from alphabet-index pairs.
    ///
    /// Each pair `(a, b)` wires `a` to `b` and `b` to `a`. A self-pair
    /// `(a, a)` is accepted and equivalent to no plug.
    ///
    /// # Errors
    /// - [`RotorCryptError::PlugOutOfRange`] if an index is outside [1, 26].
    /// - [`RotorCryptError::DuplicatePlug`] if a letter appears in more
    ///   than one pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Plugboard;
    ///
    /// // a <-> e
    /// let board = Plugboard::new(&[(1, 5)]).unwrap();
    /// assert_eq!(board.substitute(1), 5);
    /// assert_eq!(board.substitute(5), 1);
    /// assert_eq!(board.substitute(2), 2);
    /// ```
    ///
    /// ```
    /// use rotorcrypt::Plugboard;
    ///
    /// // 'a' cannot be wired to both 'e' and 'k'.
    /// assert!(Plugboard::new(&[(1, 5), (1, 11)]).is_err());
    /// ```
    pub fn new(pairs: &[(u8, u8)]) -> Result<Self, RotorCryptError> {
        let mut board = Self::empty();
        for &(a, b) in pairs {
            if !(1..=RADIX).contains(&a) || !(1..=RADIX).contains(&b) {
                return Err(RotorCryptError::PlugOutOfRange);
            }
            // A letter already rewired by an earlier pair cannot be wired again.
            if board.wiring[a as usize - 1] != a || board.wiring[b as usize - 1] != b {
                return Err(RotorCryptError::DuplicatePlug);
            }
            board.wiring[a as usize - 1] = b;
            board.wiring[b as usize - 1] = a;
        }
        Ok(board)
    }

    /// The identity plugboard, with no wires installed.
    pub fn empty() -> Self {
        let mut wiring = [0u8; RADIX as usize];
        for (i, slot) in wiring.iter_mut().enumerate() {
            *slot = i as u8 + 1;
        }
        Plugboard { wiring }
    }

    /// Applies the swap to an alphabet index in [1, 26].
    ///
    /// Identity for unplugged letters. Self-inverse:
    /// `substitute(substitute(x)) == x`.
    pub fn substitute(&self, x: u8) -> u8 {
        debug_assert!((1..=RADIX).contains(&x));
        self.wiring[x as usize - 1]
    }
}

impl fmt::Display for Plugboard {
    /// Formats the installed wires as letter pairs, or `-` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &dest) in self.wiring.iter().enumerate() {
            let src = i as u8 + 1;
            if dest > src {
                if !first {
                    f.write_str(" ")?;
                }
                write!(
                    f,
                    "{}{}",
                    alphabet::letter_of(src),
                    alphabet::letter_of(dest)
                )?;
                first = false;
            }
        }
        if first {
            f.write_str("-")?;
        }
        Ok(())
    }
}
