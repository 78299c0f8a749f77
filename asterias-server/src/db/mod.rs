//! Database layer
//!
//! SQLite access split into pool construction, schema setup, and the
//! repository that owns the queries.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::{DbError, StarfishRepo};
