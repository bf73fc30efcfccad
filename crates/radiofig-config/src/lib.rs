//! # radiofig config
//!
//! Typed plotting style configuration for radiofig.
//!
//! This crate provides the built-in style defaults, override merging and
//! validation, and the process-wide style cache read by the renderers.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use defaults::*;
pub use schema::*;
pub use validator::*;
