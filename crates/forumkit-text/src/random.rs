//! Random string generation.

use rand::RngExt;

/// Alphabet used by [`random_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Digits `0-9`.
    Numeric,
    /// Lowercase letters `a-z`.
    Letters,
    /// Lowercase letters and digits.
    Mixed,
}

impl Charset {
    fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Numeric => b"0123456789",
            Self::Letters => b"abcdefghijklmnopqrstuvwxyz",
            Self::Mixed => b"abcdefghijklmnopqrstuvwxyz1234567890",
        }
    }
}

/// Generate a random string of `len` characters drawn from `charset`.
///
/// Suitable for file names, short tokens and test fixtures. Not a
/// password generator: the alphabet is small and lowercase only.
#[must_use]
pub fn random_string(len: usize, charset: Charset) -> String {
    let alphabet = charset.alphabet();
    let mut rng = rand::rng();

    (0..len)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}
