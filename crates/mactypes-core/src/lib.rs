//! Value wrappers for Apple Event descriptor types that have no native Rust
//! counterpart: filesystem aliases, file URLs, and unit measurements.
//!
//! Alias and file URL wrappers are generic over [`descriptor::AeDesc`], the
//! descriptor protocol supplied by an Apple Event binding.
//! [`descriptor::PosixDesc`] stands in for it on other platforms.
//!
//! All path strings are UTF-8.

pub mod config;
pub mod logging;

pub mod coerce;
pub mod descriptor;
pub mod error;
pub mod file;
pub mod file_url_codec;
pub mod units;

pub use error::{MacTypesError, Result};
pub use file::{Alias, FileUrl};
pub use units::Units;
