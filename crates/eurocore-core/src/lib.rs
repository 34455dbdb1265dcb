//! Core types for the eurocore client.
//!
//! Wire DTOs, the error taxonomy, configuration and logging live here. The HTTP
//! client itself lives in `eurocore-client` so this crate stays transport-agnostic.

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;

pub use errors::{Error, Result};
