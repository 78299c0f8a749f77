//! asterias-server: a starfish registry over HTTP
//!
//! Server-rendered CRUD pages backed by a SQLite file that is created on
//! first start, plus a JSON listing endpoint for scripts and tests.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ServerConfig, ServerError};
