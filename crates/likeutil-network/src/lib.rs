//! IPv4 address/integer conversion and a pass-through HTTP client.

#![forbid(unsafe_code)]

pub mod error;
pub mod ip;
#[cfg(feature = "request")]
pub mod request;

pub use error::{Error, Result};
pub use ip::{int2ip, ip2int};
