//! # radiofig graphs
//!
//! Figure rendering and saving for the study-guide diagrams.
//!
//! This crate resolves output paths under the images root, renders figures
//! with plotters (tight-cropped PNG or SVG), provides drawing primitives for
//! block diagrams, and registers the concrete diagram generators.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod chart;
pub mod diagrams;
pub mod draw;
pub mod manager;
pub mod palette;
pub mod paths;
pub mod render;
pub mod saver;
pub mod signals;
pub mod traits;

pub use chart::{Annotation, LineChart, Series, StackedCharts};
pub use manager::*;
pub use paths::*;
pub use render::RenderContext;
pub use saver::*;
pub use traits::*;
