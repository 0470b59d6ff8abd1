//! Individual value generators.
//!
//! Each module produces one kind of fake value from an injected RNG.
//! Time-based generators take the reference time explicitly instead of
//! reading the clock, so output is reproducible.

pub mod identifier;
pub mod internet;
pub mod numeric;
pub mod person;
pub mod sampling;
pub mod status;
pub mod timestamp;
