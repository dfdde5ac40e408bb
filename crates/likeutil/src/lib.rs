//! Each utility area lives in its own crate; this crate gathers them under one namespace.
//!
//! ```no_run
//! use likeutil::{crypto, network};
//!
//! let token = crypto::hash_password("hwy123").unwrap();
//! assert!(crypto::verify_password("hwy123", &token).unwrap());
//!
//! assert_eq!(network::ip2int("127.0.0.1").unwrap(), 2130706433);
//! ```

#![forbid(unsafe_code)]

pub mod args;
pub mod cli;

pub use likeutil_crypto as crypto;
pub use likeutil_date as date;
pub use likeutil_error as error;
pub use likeutil_network as network;
pub use likeutil_others as others;
