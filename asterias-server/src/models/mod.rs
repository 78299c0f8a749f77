//! Domain models with validation at construction
//!
//! Form input is coerced exactly once, when building `StarfishFields`.
//! Invalid input returns ValidationError, not panic.

pub mod starfish;
pub mod validation;

pub use starfish::{Starfish, StarfishFields, StarfishForm};
pub use validation::ValidationError;
