//! Salted scrypt password hashes encoded as a single base64 token.
//!
//! A token is `base64(salt || key)`: 16 random salt bytes followed by the 64-byte scrypt output,
//! 80 bytes in all (108 base64 characters). Verifying a secret re-derives the key using the salt
//! carried in the stored token and compares the two tokens.
//!
//! ```no_run
//! use likeutil_crypto::password::PasswordCodec;
//!
//! let codec = PasswordCodec::default();
//! let stored = codec.hash("hwy123").unwrap();
//!
//! assert!(codec.verify("hwy123", &stored).unwrap());
//! assert!(!codec.verify("hwy124", &stored).unwrap());
//! ```

use aws_lc_rs::constant_time::verify_slices_are_equal;
use data_encoding::BASE64;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::random::random_array;

/// Length of the random salt at the start of a token
pub const SALT_LEN: usize = 16;

/// Length of the derived key following the salt
pub const KEY_LEN: usize = 64;

/// Decoded length of a complete token
pub const CREDENTIAL_LEN: usize = SALT_LEN + KEY_LEN;

/// scrypt cost parameters.
///
/// These are pinned rather than taken from the scrypt crate's recommendations so that stored
/// tokens keep verifying across dependency upgrades. The defaults are N = 2^14, r = 8, p = 1 with
/// a 32 MiB memory ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordParams {
    /// log2 of the CPU/memory cost N
    pub log_n: u8,
    /// Block size
    pub r: u32,
    /// Parallelization
    pub p: u32,
    /// Upper bound in bytes on the working memory a derivation may request
    pub max_memory: u64,
}

impl PasswordParams {
    pub const DEFAULT_LOG_N: u8 = 14;
    pub const DEFAULT_R: u32 = 8;
    pub const DEFAULT_P: u32 = 1;
    pub const DEFAULT_MAX_MEMORY: u64 = 32 * 1024 * 1024;

    /// Bytes of working memory scrypt needs for these parameters: `128 * r * (N + p + 2)`.
    pub fn required_memory(&self) -> Option<u64> {
        let n = 1u64.checked_shl(self.log_n as u32)?;
        128u64
            .checked_mul(self.r as u64)?
            .checked_mul(n.checked_add(self.p as u64)?.checked_add(2)?)
    }

    fn to_scrypt(self) -> Result<scrypt::Params> {
        match self.required_memory() {
            Some(required) if required <= self.max_memory => {}
            Some(required) => {
                return Err(Error::KeyDerivationFailed(format!(
                    "memory limit exceeded: {required} bytes needed, {} allowed",
                    self.max_memory
                )));
            }
            None => {
                return Err(Error::KeyDerivationFailed(
                    "memory requirement overflows".to_string(),
                ));
            }
        }

        scrypt::Params::new(self.log_n, self.r, self.p, KEY_LEN)
            .map_err(|e| Error::KeyDerivationFailed(format!("invalid scrypt parameters: {e}")))
    }
}

impl Default for PasswordParams {
    fn default() -> Self {
        PasswordParams {
            log_n: Self::DEFAULT_LOG_N,
            r: Self::DEFAULT_R,
            p: Self::DEFAULT_P,
            max_memory: Self::DEFAULT_MAX_MEMORY,
        }
    }
}

/// Produces and checks password tokens with a fixed set of [`PasswordParams`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordCodec {
    params: PasswordParams,
}

impl PasswordCodec {
    /// Create a codec, rejecting parameters that scrypt cannot run with.
    pub fn new(params: PasswordParams) -> Result<Self> {
        params.to_scrypt()?;
        Ok(PasswordCodec { params })
    }

    pub fn params(&self) -> &PasswordParams {
        &self.params
    }

    /// Hash `secret` under a fresh random salt.
    pub fn hash(&self, secret: impl AsRef<[u8]>) -> Result<String> {
        let salt = random_array::<SALT_LEN>()?;
        self.encode(secret.as_ref(), &salt)
    }

    /// Recompute the token for `secret` using the salt embedded in `stored`.
    ///
    /// The result equals `stored` exactly when `secret` is the secret that produced it. Prefer
    /// [`PasswordCodec::verify`], which performs that comparison in constant time.
    pub fn rehash(&self, secret: impl AsRef<[u8]>, stored: &str) -> Result<String> {
        let salt = extract_salt(stored)?;
        self.encode(secret.as_ref(), &salt)
    }

    /// True if `secret` produced `stored`.
    pub fn verify(&self, secret: impl AsRef<[u8]>, stored: &str) -> Result<bool> {
        let candidate = self.rehash(secret, stored)?;
        Ok(verify_slices_are_equal(candidate.as_bytes(), stored.as_bytes()).is_ok())
    }

    /// The raw 64-byte scrypt output for `secret` and `salt`.
    pub fn derive(&self, secret: &[u8], salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
        derive_key(secret, salt, &self.params)
    }

    fn encode(&self, secret: &[u8], salt: &[u8; SALT_LEN]) -> Result<String> {
        let key = self.derive(secret, salt)?;

        let mut credential = Zeroizing::new(Vec::with_capacity(CREDENTIAL_LEN));
        credential.extend_from_slice(salt);
        credential.extend_from_slice(&key[..]);

        Ok(BASE64.encode(&credential))
    }
}

#[cfg(feature = "async")]
impl PasswordCodec {
    /// [`PasswordCodec::hash`] on tokio's blocking thread pool.
    pub async fn hash_async(&self, secret: String) -> Result<String> {
        let codec = *self;
        tokio::task::spawn_blocking(move || codec.hash(secret))
            .await
            .map_err(|e| Error::Join(e.to_string()))?
    }

    /// [`PasswordCodec::verify`] on tokio's blocking thread pool.
    pub async fn verify_async(&self, secret: String, stored: String) -> Result<bool> {
        let codec = *self;
        tokio::task::spawn_blocking(move || codec.verify(secret, &stored))
            .await
            .map_err(|e| Error::Join(e.to_string()))?
    }
}

/// Hash `secret` with the default parameters.
pub fn hash_password(secret: &str) -> Result<String> {
    PasswordCodec::default().hash(secret)
}

/// Recompute the token for `secret` using the salt embedded in `stored`, default parameters.
pub fn rehash_password(secret: &str, stored: &str) -> Result<String> {
    PasswordCodec::default().rehash(secret, stored)
}

/// Check `secret` against `stored` with the default parameters.
pub fn verify_password(secret: &str, stored: &str) -> Result<bool> {
    PasswordCodec::default().verify(secret, stored)
}

/// The first [`SALT_LEN`] bytes of a decoded token.
pub fn extract_salt(stored: &str) -> Result<[u8; SALT_LEN]> {
    let decoded = Zeroizing::new(
        BASE64
            .decode(stored.as_bytes())
            .map_err(|e| Error::MalformedCredential(e.to_string()))?,
    );

    if decoded.len() < SALT_LEN {
        return Err(Error::MalformedCredential(format!(
            "decodes to {} bytes, at least {SALT_LEN} needed",
            decoded.len()
        )));
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&decoded[..SALT_LEN]);
    Ok(salt)
}

fn derive_key(
    secret: &[u8],
    salt: &[u8],
    params: &PasswordParams,
) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    let scrypt_params = params.to_scrypt()?;

    debug!(
        "deriving scrypt key: log_n={}, r={}, p={}",
        params.log_n, params.r, params.p
    );

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    scrypt::scrypt(secret, salt, &scrypt_params, &mut key[..])
        .map_err(|e| Error::KeyDerivationFailed(e.to_string()))?;

    Ok(key)
}
