use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("system entropy source is unavailable")]
    EntropyUnavailable,

    #[error("key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("malformed credential: {0}")]
    MalformedCredential(String),

    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: i64, max: i64 },

    #[error("alphabet must hold between 1 and 256 symbols, got {0}")]
    InvalidAlphabet(usize),

    #[error("unsupported hash algorithm: '{0}'")]
    UnsupportedAlgorithm(String),

    #[error("background task failed: {0}")]
    Join(String),
}

