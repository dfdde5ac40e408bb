//! Random identifiers drawn uniformly from an alphabet.
//!
//! Selection masks each random byte down to the smallest `2^k - 1` covering the alphabet and
//! rejects values past its end. Taking `byte % alphabet_len` instead would favour the leading
//! symbols whenever the alphabet length does not divide 256.

use tracing::trace;

use crate::error::{Error, Result};
use crate::random::random_bytes;

/// URL-safe alphabet of 64 symbols used by [`random_id`].
pub const URL_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Alphanumeric alphabet of 62 symbols used by [`random_alpha`].
pub const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of identifiers produced by [`random_id`].
pub const DEFAULT_ID_LEN: usize = 21;

const MAX_ALPHABET_LEN: usize = 256;

/// Reusable generator of `size`-character identifiers over a fixed alphabet.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    symbols: Vec<char>,
    size: usize,
    mask: usize,
    step: usize,
}

impl IdGenerator {
    /// Build a generator. The alphabet must contain between 1 and 256 characters; duplicate
    /// characters are not removed and would be drawn proportionally more often.
    pub fn new(alphabet: &str, size: usize) -> Result<Self> {
        let symbols: Vec<char> = alphabet.chars().collect();
        let len = symbols.len();

        if !(1..=MAX_ALPHABET_LEN).contains(&len) {
            return Err(Error::InvalidAlphabet(len));
        }

        let mask = (2usize << (usize::BITS - 1 - ((len - 1) | 1).leading_zeros())) - 1;

        // Over-draw by 60% so a single batch of bytes usually suffices despite rejections
        let step = ((1.6 * mask as f64 * size as f64) / len as f64).ceil() as usize;

        Ok(IdGenerator {
            symbols,
            size,
            mask,
            step: step.max(1),
        })
    }

    pub fn alphabet_len(&self) -> usize {
        self.symbols.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Generate a fresh identifier.
    pub fn generate(&self) -> Result<String> {
        let mut id = String::with_capacity(self.size);
        let mut produced = 0;

        while produced < self.size {
            let bytes = random_bytes(self.step)?;
            trace!("drew {} bytes for identifier", bytes.len());

            for byte in bytes {
                if let Some(&symbol) = self.symbols.get(byte as usize & self.mask) {
                    id.push(symbol);
                    produced += 1;

                    if produced == self.size {
                        break;
                    }
                }
            }
        }

        Ok(id)
    }
}

/// A 21 character URL-safe identifier.
pub fn random_id() -> Result<String> {
    random_string(URL_ALPHABET, DEFAULT_ID_LEN)
}

/// `len` characters sampled uniformly from `alphabet`.
pub fn random_string(alphabet: &str, len: usize) -> Result<String> {
    IdGenerator::new(alphabet, len)?.generate()
}

/// `len` alphanumeric characters.
pub fn random_alpha(len: usize) -> Result<String> {
    random_string(ALPHANUMERIC, len)
}
