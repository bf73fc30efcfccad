//! # radiofig
//!
//! Command line generator for the figures of the amateur-radio exam study
//! guide.
//!
//! This is the main binary crate: it parses the command line, applies the
//! plotting style, and runs every selected diagram under the error-wrapped
//! runner.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;
pub mod runner;

pub use app::*;
pub use cli::*;
pub use error::*;
pub use runner::*;
