//! Figure and diagram trait definitions.

use crate::render::RenderContext;
use crate::saver::FigureSaver;
use plotters::coord::Shift;
use plotters::prelude::*;
use radiofig_common::Result;
use std::path::PathBuf;

/// An in-memory drawing that can be rendered onto any plotters backend.
pub trait Figure {
    /// Figure size in inches as `(width, height)`.
    fn size_inches(&self) -> (f64, f64);

    /// Draws the figure onto `root`, which is already filled with the
    /// figure background.
    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static;
}

/// A named generator producing one or more saved figures.
pub trait Diagram: Send + Sync {
    /// Gets the name of this diagram, as accepted on the command line.
    fn name(&self) -> &'static str;

    /// Gets a one-line description of this diagram.
    fn description(&self) -> &'static str;

    /// Renders and saves every figure of this diagram, returning the paths written.
    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>>;
}
