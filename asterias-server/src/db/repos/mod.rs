//! Repository layer

pub mod starfish;

pub use starfish::{DbError, StarfishRepo};
