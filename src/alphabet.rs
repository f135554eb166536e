//! 1-based alphabet index arithmetic.
//!
//! Every cipher stage operates on alphabet indices in [1, 26], with
//! `1 = 'a'` and `26 = 'z'`. Characters are converted to and from this
//! space only at the encrypt/decrypt boundary.

use crate::error::RotorCryptError;

/// Number of letters in the supported alphabet.
pub const RADIX: u8 = 26;

/// Adds `b` to `a` on the 1-based cyclic alphabet.
///
/// Wraps in both directions: `wrap_add(1, -1) == 26` and
/// `wrap_add(26, 1) == 1`.
///
/// # Parameters
/// - `a`: Alphabet index in [1, 26].
/// - `b`: Offset, may be negative or larger than the alphabet.
///
/// # Examples
///
/// ```
/// use rotorcrypt::alphabet::wrap_add;
///
/// assert_eq!(wrap_add(1, -1), 26);
/// assert_eq!(wrap_add(26, 1), 1);
/// assert_eq!(wrap_add(5, 3), 8);
/// ```
pub fn wrap_add(a: u8, b: i32) -> u8 {
    ((a as i32 - 1 + b).rem_euclid(RADIX as i32) + 1) as u8
}

/// Converts a lowercase ASCII letter to its alphabet index.
///
/// # Errors
/// Returns [`RotorCryptError::UnsupportedCharacter`] for any character
/// outside `a`..=`z`.
pub fn index_of(c: char) -> Result<u8, RotorCryptError> {
    if c.is_ascii_lowercase() {
        Ok(c as u8 - b'a' + 1)
    } else {
        Err(RotorCryptError::UnsupportedCharacter(c))
    }
}

/// Converts an alphabet index back to its lowercase letter.
///
/// The index must be in [1, 26]; every index produced by the cipher
/// stages is.
pub fn letter_of(index: u8) -> char {
    debug_assert!((1..=RADIX).contains(&index));
    (b'a' + index - 1) as char
}
