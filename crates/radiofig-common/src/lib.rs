//! # radiofig common
//!
//! Shared error type, logging setup, and common types for radiofig.
//!
//! This crate provides the foundational types and utilities used across
//! all other crates in the radiofig workspace.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{FigureError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use types::*;
pub use utils::*;
