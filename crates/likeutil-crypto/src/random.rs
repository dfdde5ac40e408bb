//! Uniform random values derived from the system CSPRNG.

use data_encoding::HEXLOWER;

use crate::error::{Error, Result};

/// Bits of precision in an `f64` mantissa. Only this many high bits of a random `u64` survive
/// the conversion to a float in [0, 1).
const FLOAT_PRECISION_BITS: u32 = f64::MANTISSA_DIGITS;

/// Fill `buf` with cryptographically secure random bytes.
pub fn fill(buf: &mut [u8]) -> Result<()> {
    aws_lc_rs::rand::fill(buf).map_err(|_| Error::EntropyUnavailable)
}

/// Generate `len` cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    fill(&mut buf)?;
    Ok(buf)
}

/// Generate a fixed-size array of cryptographically secure random bytes
pub fn random_array<const N: usize>() -> Result<[u8; N]> {
    let mut val = [0u8; N];
    fill(&mut val)?;
    Ok(val)
}

/// `len` random bytes rendered as lowercase hex (`2 * len` characters).
pub fn random_hex(len: usize) -> Result<String> {
    Ok(HEXLOWER.encode(&random_bytes(len)?))
}

/// A uniformly distributed float in [0, 1).
///
/// Eight random bytes are read as a big-endian `u64` and divided by 2^64. The value is first
/// truncated to its top 53 bits so the division is exact; without this, rounding of values
/// close to 2^64 would yield exactly `1.0`.
pub fn random_float() -> Result<f64> {
    let bytes = random_array::<8>()?;
    Ok(unit_float(u64::from_be_bytes(bytes)))
}

/// A uniformly distributed integer in `[min, max)`, computed as
/// `floor(random_float() * (max - min) + min)`.
///
/// Returns [`Error::InvalidRange`] when `max <= min`.
pub fn random_int(min: i64, max: i64) -> Result<i64> {
    if max <= min {
        return Err(Error::InvalidRange { min, max });
    }

    let span = max.abs_diff(min);
    let offset = scale(random_float()?, span);

    Ok(min.saturating_add_unsigned(offset))
}

fn unit_float(value: u64) -> f64 {
    let shift = u64::BITS - FLOAT_PRECISION_BITS;
    (value >> shift) as f64 / (1u64 << FLOAT_PRECISION_BITS) as f64
}

// `span as f64` rounds for spans above 2^53, so the product may land on `span` itself.
fn scale(unit: f64, span: u64) -> u64 {
    let offset = (unit * span as f64).floor() as u64;
    offset.min(span - 1)
}
