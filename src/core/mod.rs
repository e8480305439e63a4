//! This is the core module. It exports the rank values
//! and the error type shared by the rest of the crate.

/// value.rs has the thirteen card ranks.
mod value;
/// Re-export Value and the rank index helpers.
pub use self::value::{rank_index, Value, NUM_VALUES};

/// Errors for parsing ranges and cell codes.
mod error;
/// Export `RangeError`
pub use self::error::RangeError;
