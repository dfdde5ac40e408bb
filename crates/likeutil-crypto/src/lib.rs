//! Cryptographic helpers: secure random values, unbiased identifiers, message digests and
//! salted scrypt password hashes.
//!
//! All randomness comes from the operating system backed generator in `aws-lc-rs`. Nothing in
//! this crate keeps state between calls.

#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod id;
pub mod password;
pub mod random;

pub use error::{Error, Result};
pub use hash::{HashAlgorithm, create_hash, create_hmac};
pub use id::{random_alpha, random_id, random_string};
pub use password::{PasswordCodec, PasswordParams, hash_password, rehash_password, verify_password};
pub use random::{random_array, random_bytes, random_float, random_hex, random_int};
