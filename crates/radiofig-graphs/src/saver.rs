//! Figure saving with tight bounding-box cropping.
//!
//! PNG figures are rasterized into memory, cropped to the non-background
//! content plus a small pad, and then encoded. SVG figures are written as
//! drawn.

use crate::paths::OutputLayout;
use crate::render::RenderContext;
use crate::traits::Figure;
use plotters::prelude::*;
use radiofig_common::{inches_to_pixels, Category, FigureError, Result, Rgb};
use radiofig_config::{current_style, StyleConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Resolution used when none is given.
pub const DEFAULT_DPI: u32 = 150;

/// Padding kept around the content when cropping, in inches.
pub const TIGHT_PAD_INCHES: f64 = 0.1;

/// Output encodings, chosen from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Cropped bitmap.
    Png,
    /// Uncropped vector drawing.
    Svg,
}

impl ImageFormat {
    /// Detects the format from a filename's extension, ignoring case.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(FigureError::validation_field(
                format!("unsupported image format for '{filename}', expected .png or .svg"),
                "filename",
            )),
        }
    }
}

/// Options for a single save.
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Output resolution.
    pub dpi: u32,
    /// Background override; the style's figure background otherwise.
    pub facecolor: Option<Rgb>,
    /// Style override; the process-wide style otherwise.
    pub style: Option<Arc<StyleConfig>>,
}

impl SaveOptions {
    /// Sets the resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Sets the background color.
    pub fn with_facecolor(mut self, facecolor: Rgb) -> Self {
        self.facecolor = Some(facecolor);
        self
    }

    /// Draws with `style` instead of the process-wide style.
    pub fn with_style(mut self, style: Arc<StyleConfig>) -> Self {
        self.style = Some(style);
        self
    }
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            facecolor: None,
            style: None,
        }
    }
}

/// Pixel rectangle with exclusive right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelBounds {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Finds the box around every pixel differing from `background`, grown by
/// `pad` on each side and clamped to the image.
///
/// Returns `None` when the image holds nothing but background.
pub fn tight_bounds(
    pixels: &[u8],
    width: u32,
    height: u32,
    background: [u8; 3],
    pad: u32,
) -> Option<PixelBounds> {
    if width == 0 || height == 0 {
        return None;
    }

    let stride = width as usize;
    let mut found: Option<(u32, u32, u32, u32)> = None;
    for (index, pixel) in pixels.chunks_exact(3).enumerate() {
        if pixel == &background[..] {
            continue;
        }
        let x = (index % stride) as u32;
        let y = (index / stride) as u32;
        found = Some(match found {
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            None => (x, y, x, y),
        });
    }

    found.map(|(x0, y0, x1, y1)| PixelBounds {
        left: x0.saturating_sub(pad),
        top: y0.saturating_sub(pad),
        right: x1.saturating_add(1).saturating_add(pad).min(width),
        bottom: y1.saturating_add(1).saturating_add(pad).min(height),
    })
}

/// Copies the RGB pixels inside `bounds` out of an image `width` pixels wide.
pub fn crop_pixels(pixels: &[u8], width: u32, bounds: &PixelBounds) -> Vec<u8> {
    let stride = width as usize * 3;
    let left = bounds.left as usize * 3;
    let right = bounds.right as usize * 3;

    let mut cropped =
        Vec::with_capacity(bounds.width() as usize * bounds.height() as usize * 3);
    for y in bounds.top..bounds.bottom {
        let row = y as usize * stride;
        cropped.extend_from_slice(&pixels[row + left..row + right]);
    }
    cropped
}

/// Renders `figure` and writes it to `<layout root>/<category>/<filename>`.
///
/// The figure is consumed and released once written. Returns the path.
pub fn save_figure<F: Figure>(
    figure: F,
    layout: &OutputLayout,
    category: &Category,
    filename: &str,
    options: &SaveOptions,
) -> Result<PathBuf> {
    if options.dpi == 0 {
        return Err(FigureError::validation_field("dpi must be positive", "dpi"));
    }
    let format = ImageFormat::from_filename(filename)?;

    let (width_in, height_in) = figure.size_inches();
    if !(width_in.is_finite() && height_in.is_finite() && width_in > 0.0 && height_in > 0.0) {
        return Err(FigureError::validation_field(
            format!("figure size must be positive, got {width_in}x{height_in} in"),
            "size",
        ));
    }

    let path = layout.image_path(category, filename)?;
    let style = options.style.clone().unwrap_or_else(current_style);
    let ctx = RenderContext::new(style, options.dpi);
    let background = options
        .facecolor
        .map_or_else(|| ctx.figure_background(), RGBColor::from);
    let size = (
        inches_to_pixels(width_in, options.dpi),
        inches_to_pixels(height_in, options.dpi),
    );

    debug!(
        path = %path.display(),
        width = size.0,
        height = size.1,
        dpi = options.dpi,
        "Rendering figure"
    );

    match format {
        ImageFormat::Png => write_png(&figure, &ctx, background, size, &path)?,
        ImageFormat::Svg => write_svg(&figure, &ctx, background, size, &path)?,
    }
    drop(figure);

    info!("Salvato: {}", path.display());
    Ok(path)
}

fn write_png<F: Figure>(
    figure: &F,
    ctx: &RenderContext,
    background: RGBColor,
    (width, height): (u32, u32),
    path: &Path,
) -> Result<()> {
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&background)?;
        figure.draw(&root, ctx)?;
        root.present()?;
    }

    let pad = inches_to_pixels(TIGHT_PAD_INCHES, ctx.dpi);
    let bounds = tight_bounds(
        &buffer,
        width,
        height,
        [background.0, background.1, background.2],
        pad,
    );
    let (pixels, width, height) = match bounds {
        Some(bounds) => (
            crop_pixels(&buffer, width, &bounds),
            bounds.width(),
            bounds.height(),
        ),
        None => (buffer, width, height),
    };

    image::save_buffer_with_format(
        path,
        &pixels,
        width,
        height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

fn write_svg<F: Figure>(
    figure: &F,
    ctx: &RenderContext,
    background: RGBColor,
    size: (u32, u32),
    path: &Path,
) -> Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&background)?;
    figure.draw(&root, ctx)?;
    root.present()?;
    Ok(())
}

/// Saves figures below one layout with fixed options.
#[derive(Debug, Clone, Default)]
pub struct FigureSaver {
    layout: OutputLayout,
    options: SaveOptions,
}

impl FigureSaver {
    /// Creates a saver.
    pub fn new(layout: OutputLayout, options: SaveOptions) -> Self {
        Self { layout, options }
    }

    /// The output layout.
    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// The save options.
    pub fn options(&self) -> &SaveOptions {
        &self.options
    }

    /// A copy of this saver that paints every figure on `facecolor`.
    pub fn with_facecolor(&self, facecolor: Rgb) -> Self {
        Self {
            layout: self.layout.clone(),
            options: self.options.clone().with_facecolor(facecolor),
        }
    }

    /// Saves `figure` as `filename` under `category`.
    pub fn save<F: Figure>(
        &self,
        figure: F,
        category: impl Into<Category>,
        filename: &str,
    ) -> Result<PathBuf> {
        save_figure(
            figure,
            &self.layout,
            &category.into(),
            filename,
            &self.options,
        )
    }
}
