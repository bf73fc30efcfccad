//! Render context shared by every drawing call.

use plotters::prelude::*;
use radiofig_common::points_to_pixels;
use radiofig_config::StyleConfig;
use std::sync::Arc;

/// Font family used for ordinary text.
pub const SANS_SERIF: &str = "sans-serif";
/// Font family used for fixed-width glyphs.
pub const MONOSPACE: &str = "monospace";

/// Style and resolution a figure is drawn with.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Effective plotting style.
    pub style: Arc<StyleConfig>,
    /// Output resolution in dots per inch.
    pub dpi: u32,
}

impl RenderContext {
    /// Creates a context from an explicit style.
    pub fn new(style: Arc<StyleConfig>, dpi: u32) -> Self {
        Self { style, dpi }
    }

    /// Converts a length in points to pixels.
    pub fn px(&self, points: f64) -> f64 {
        points_to_pixels(points, self.dpi)
    }

    /// Converts a line width in points to a whole pixel stroke, at least 1.
    pub fn stroke(&self, points: f64) -> u32 {
        self.px(points).round().max(1.0) as u32
    }

    /// Font of `points` size in the given family.
    pub fn font(&self, family: &'static str, points: f64) -> FontDesc<'static> {
        (family, self.px(points)).into_font()
    }

    /// Font for axis titles.
    pub fn title_font(&self) -> FontDesc<'static> {
        self.font(SANS_SERIF, self.style.title_size)
    }

    /// Font for axis labels.
    pub fn label_font(&self) -> FontDesc<'static> {
        self.font(SANS_SERIF, self.style.label_size)
    }

    /// Figure background color.
    pub fn figure_background(&self) -> RGBColor {
        self.style.figure_facecolor.into()
    }

    /// Plot-area background color.
    pub fn axes_background(&self) -> RGBColor {
        self.style.axes_facecolor.into()
    }
}
