//! Epoch clocks and localized date formatting.

#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod format;

pub use clock::{ClockSource, millis, seconds};
pub use error::{Error, Result};
pub use format::{DateFormat, Locale};
