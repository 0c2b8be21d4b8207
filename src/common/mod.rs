//! Common utilities shared between the harness and encoder binaries

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
