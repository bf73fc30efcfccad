//! Drawing primitives for block diagrams, tables and annotations.
//!
//! Everything here draws on a [`Canvas`]: a drawing area with a plain
//! floating-point coordinate system. Positions are given in canvas units;
//! sizes of strokes, fonts, arrow heads and swatches are given in points so
//! they scale with the output resolution.

use crate::palette;
use crate::render::{RenderContext, MONOSPACE, SANS_SERIF};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use radiofig_common::{Result, Rgb};
use std::ops::Range;

/// A drawing area addressed in floating-point canvas units.
pub type Canvas<DB> = DrawingArea<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Line height as a multiple of the font size.
const LINE_SPACING: f64 = 1.2;

/// Maps `area` onto the canvas range `x` by `y`, with `y` growing upwards.
pub fn logical_canvas<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    x: Range<f64>,
    y: Range<f64>,
) -> Canvas<DB> {
    let (x_pixels, y_pixels) = area.get_pixel_range();
    // Pixel rows grow downwards, so the last row carries `y.start`.
    let x_pixels = x_pixels.start..(x_pixels.end - 1);
    let y_pixels = (y_pixels.end - 1)..y_pixels.start;
    area.apply_coord_spec(Cartesian2d::<RangedCoordf64, RangedCoordf64>::new(
        x,
        y,
        (x_pixels, y_pixels),
    ))
}

/// Splits a bold title off the top of `root` and returns the area below it.
pub fn titled_area<DB>(
    root: &DrawingArea<DB, Shift>,
    ctx: &RenderContext,
    title: &str,
    points: f64,
) -> Result<DrawingArea<DB, Shift>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style = ctx
        .font(SANS_SERIF, points)
        .style(FontStyle::Bold)
        .color(&RGBColor::from(palette::text::LABEL));
    Ok(root.titled(title, style)?)
}

/// Font, weight and color of a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFormat {
    pub points: f64,
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
    pub family: &'static str,
}

impl TextFormat {
    pub fn new(points: f64, color: Rgb) -> Self {
        Self {
            points,
            color,
            bold: false,
            italic: false,
            family: SANS_SERIF,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn monospace(mut self) -> Self {
        self.family = MONOSPACE;
        self
    }

    /// Builds the plotters text style, anchored at `pos`.
    pub fn style(&self, ctx: &RenderContext, pos: Pos) -> TextStyle<'static> {
        let font = ctx.font(self.family, self.points);
        let font = if self.bold {
            font.style(FontStyle::Bold)
        } else if self.italic {
            font.style(FontStyle::Italic)
        } else {
            font
        };
        font.color(&RGBColor::from(self.color)).pos(pos)
    }

    fn line_height(&self, ctx: &RenderContext) -> f64 {
        ctx.px(self.points) * LINE_SPACING
    }
}

/// Draws possibly multi-line `text` centered on `at`.
pub fn draw_text<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    at: (f64, f64),
    text: &str,
    text_format: &TextFormat,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    draw_text_anchored(canvas, ctx, at, text, text_format, HPos::Center)
}

fn draw_text_anchored<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    at: (f64, f64),
    text: &str,
    text_format: &TextFormat,
    hpos: HPos,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style = text_format.style(ctx, Pos::new(hpos, VPos::Center));
    let lines: Vec<&str> = text.lines().collect();
    let middle = (lines.len() as f64 - 1.0) / 2.0;
    let line_height = text_format.line_height(ctx);

    for (index, line) in lines.iter().enumerate() {
        let dy = ((index as f64 - middle) * line_height).round() as i32;
        canvas.draw(&(EmptyElement::at(at) + Text::new(line.to_string(), (0, dy), style.clone())))?;
    }
    Ok(())
}

/// Draws a filled rectangle between two corners with an optional border.
pub fn draw_box<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    corner: (f64, f64),
    opposite: (f64, f64),
    fill: Rgb,
    border: Option<(Rgb, f64)>,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    canvas.draw(&Rectangle::new(
        [corner, opposite],
        RGBColor::from(fill).filled(),
    ))?;
    if let Some((color, width_pt)) = border {
        canvas.draw(&Rectangle::new(
            [corner, opposite],
            RGBColor::from(color).stroke_width(ctx.stroke(width_pt)),
        ))?;
    }
    Ok(())
}

/// Appearance of a shadowed block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStyle {
    pub fill: Rgb,
    pub border: Rgb,
    pub shadow: Rgb,
    pub border_pt: f64,
    /// Shadow displacement towards the lower right, in points.
    pub shadow_pt: f64,
    pub label_pt: f64,
}

impl BlockStyle {
    pub fn filled(fill: Rgb) -> Self {
        Self {
            fill,
            ..Self::default()
        }
    }
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            fill: Rgb::WHITE,
            border: palette::block::BORDER,
            shadow: palette::block::SHADOW,
            border_pt: 1.5,
            shadow_pt: 2.0,
            label_pt: 10.0,
        }
    }
}

/// Draws a block centered on `center` with a drop shadow, a bold label and
/// an optional smaller sublabel underneath.
pub fn draw_block_with_shadow<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    center: (f64, f64),
    size: (f64, f64),
    label: &str,
    sublabel: Option<&str>,
    style: &BlockStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (x, y) = center;
    let (half_w, half_h) = (size.0 / 2.0, size.1 / 2.0);
    let top_left = (x - half_w, y + half_h);
    let (left, top) = canvas.map_coordinate(&top_left);
    let (right, bottom) = canvas.map_coordinate(&(x + half_w, y - half_h));
    let (width, height) = (right - left, bottom - top);
    let offset = ctx.px(style.shadow_pt).round() as i32;

    canvas.draw(
        &(EmptyElement::at(top_left)
            + Rectangle::new(
                [(offset, offset), (width + offset, height + offset)],
                RGBColor::from(style.shadow).filled(),
            )),
    )?;
    draw_box(
        canvas,
        ctx,
        top_left,
        (x + half_w, y - half_h),
        style.fill,
        Some((style.border, style.border_pt)),
    )?;

    let label_spec = TextFormat::new(style.label_pt, palette::text::LABEL).bold();
    match sublabel {
        Some(sublabel) => {
            let sub_spec = TextFormat::new(style.label_pt - 2.0, palette::text::SUBLABEL);
            let shift = size.1 * 0.15;
            draw_text(canvas, ctx, (x, y + shift), label, &label_spec)?;
            draw_text(canvas, ctx, (x, y - shift), sublabel, &sub_spec)?;
        }
        None => draw_text(canvas, ctx, center, label, &label_spec)?,
    }
    Ok(())
}

/// Arrow color and proportions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowStyle {
    pub color: Rgb,
    pub width_pt: f64,
    /// Length of the head, in points.
    pub head_pt: f64,
}

impl ArrowStyle {
    pub fn colored(color: Rgb) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            color: palette::scientific::PRIMARY,
            width_pt: 2.0,
            head_pt: 8.0,
        }
    }
}

/// Draws a straight arrow from `from` with its head at `to`.
pub fn draw_arrow<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    from: (f64, f64),
    to: (f64, f64),
    style: &ArrowStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let color = RGBColor::from(style.color);
    canvas.draw(&PathElement::new(
        vec![from, to],
        color.stroke_width(ctx.stroke(style.width_pt)),
    ))?;

    let Some((direction, length)) = pixel_direction(canvas, from, to) else {
        return Ok(());
    };
    let head = arrow_head(direction, ctx.px(style.head_pt).min(length));
    canvas.draw(&(EmptyElement::at(to) + Polygon::new(head.to_vec(), color.filled())))?;
    Ok(())
}

/// Draws an arrow along the curve of [`bent_path`].
pub fn draw_curved_arrow<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    from: (f64, f64),
    to: (f64, f64),
    bend: f64,
    style: &ArrowStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let points = bent_path(from, to, bend, 24);
    let color = RGBColor::from(style.color);
    canvas.draw(&PathElement::new(
        points.clone(),
        color.stroke_width(ctx.stroke(style.width_pt)),
    ))?;

    let Some((chord_direction, chord)) = pixel_direction(canvas, from, to) else {
        return Ok(());
    };
    let before = points[points.len() - 2];
    let direction = pixel_direction(canvas, before, to).map_or(chord_direction, |(unit, _)| unit);
    let head = arrow_head(direction, ctx.px(style.head_pt).min(chord));
    canvas.draw(&(EmptyElement::at(to) + Polygon::new(head.to_vec(), color.filled())))?;
    Ok(())
}

/// Unit vector and length, in pixels, from `from` to `to`; `None` when
/// both land on the same pixel.
fn pixel_direction<DB: DrawingBackend>(
    canvas: &Canvas<DB>,
    from: (f64, f64),
    to: (f64, f64),
) -> Option<((f64, f64), f64)> {
    let (from_x, from_y) = canvas.map_coordinate(&from);
    let (to_x, to_y) = canvas.map_coordinate(&to);
    let (dx, dy) = (f64::from(to_x - from_x), f64::from(to_y - from_y));
    let length = dx.hypot(dy);
    (length >= 1.0).then(|| ((dx / length, dy / length), length))
}

/// Samples the quadratic curve from `from` to `to` whose control point sits
/// `bend` chord lengths to the right of the midpoint; negative bends curve
/// to the left.
pub fn bent_path(from: (f64, f64), to: (f64, f64), bend: f64, samples: usize) -> Vec<(f64, f64)> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let control = (
        (from.0 + to.0) / 2.0 + bend * dy,
        (from.1 + to.1) / 2.0 - bend * dx,
    );
    let steps = samples.max(2) - 1;
    (0..=steps)
        .map(|step| {
            let t = step as f64 / steps as f64;
            let u = 1.0 - t;
            (
                u * u * from.0 + 2.0 * u * t * control.0 + t * t * to.0,
                u * u * from.1 + 2.0 * u * t * control.1 + t * t * to.1,
            )
        })
        .collect()
}

/// Head triangle for an arrow pointing along the unit vector `direction`,
/// as pixel offsets from the tip.
fn arrow_head(direction: (f64, f64), length: f64) -> [(i32, i32); 3] {
    let (ux, uy) = direction;
    let half = length / 2.0;
    let (bx, by) = (-ux * length, -uy * length);
    [
        (0, 0),
        ((bx - uy * half).round() as i32, (by + ux * half).round() as i32),
        ((bx + uy * half).round() as i32, (by - ux * half).round() as i32),
    ]
}

/// Draws a double-headed arrow between `a` and `b`, as used for distances.
pub fn draw_double_arrow<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    a: (f64, f64),
    b: (f64, f64),
    style: &ArrowStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let middle = ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0);
    draw_arrow(canvas, ctx, middle, a, style)?;
    draw_arrow(canvas, ctx, middle, b, style)
}

/// Color, width and dash pattern of a plain line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width_pt: f64,
    pub dashed: bool,
}

impl Stroke {
    pub fn solid(color: Rgb, width_pt: f64) -> Self {
        Self {
            color,
            width_pt,
            dashed: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

/// Draws a polyline through `points`.
pub fn draw_path<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    points: &[(f64, f64)],
    stroke: &Stroke,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style = RGBColor::from(stroke.color).stroke_width(ctx.stroke(stroke.width_pt));
    if stroke.dashed {
        let dash = ctx.px(3.7 * stroke.width_pt.max(1.0)).round() as i32;
        let gap = ctx.px(1.6 * stroke.width_pt.max(1.0)).round() as i32;
        canvas.draw(&DashedPathElement::new(
            points.iter().copied(),
            dash.max(1),
            gap.max(1),
            style,
        ))?;
    } else {
        canvas.draw(&PathElement::new(points.to_vec(), style))?;
    }
    Ok(())
}

/// Fills the polygon through `points` with `fill` at opacity `alpha`.
pub fn draw_region<DB>(
    canvas: &Canvas<DB>,
    points: &[(f64, f64)],
    fill: Rgb,
    alpha: f64,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    canvas.draw(&Polygon::new(
        points.to_vec(),
        RGBColor::from(fill).mix(alpha).filled(),
    ))?;
    Ok(())
}

/// Corners of the axis-aligned rectangle spanning `x` by `y`, for [`draw_region`].
pub fn rectangle(x: Range<f64>, y: Range<f64>) -> [(f64, f64); 4] {
    [
        (x.start, y.start),
        (x.end, y.start),
        (x.end, y.end),
        (x.start, y.end),
    ]
}

/// Samples the arc of `radius` around `center` between the angles in
/// `radians`, stretching x by `x_scale`.
pub fn arc_points(
    center: (f64, f64),
    radius: f64,
    x_scale: f64,
    radians: Range<f64>,
    samples: usize,
) -> Vec<(f64, f64)> {
    let steps = samples.max(2) - 1;
    (0..=steps)
        .map(|step| {
            let theta = radians.start + (radians.end - radians.start) * step as f64 / steps as f64;
            (
                center.0 + radius * theta.cos() * x_scale,
                center.1 + radius * theta.sin(),
            )
        })
        .collect()
}

/// Point marker shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Dot,
    Square,
    Star,
    Cross,
}

/// Draws a `marker` of `size_pt` diameter centered on `at`.
pub fn draw_marker<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    at: (f64, f64),
    marker: Marker,
    size_pt: f64,
    color: Rgb,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let color = RGBColor::from(color);
    let radius = (ctx.px(size_pt) / 2.0).max(1.0);
    let r = radius.round() as i32;
    match marker {
        Marker::Dot => canvas.draw(&Circle::new(at, r, color.filled()))?,
        Marker::Square => {
            canvas.draw(&(EmptyElement::at(at) + Rectangle::new([(-r, -r), (r, r)], color.filled())))?
        }
        Marker::Star => canvas.draw(
            &(EmptyElement::at(at) + Polygon::new(star_outline(radius).to_vec(), color.filled())),
        )?,
        Marker::Cross => {
            let style = color.stroke_width(ctx.stroke(size_pt / 5.0));
            canvas.draw(&(EmptyElement::at(at) + PathElement::new(vec![(-r, -r), (r, r)], style)))?;
            canvas.draw(&(EmptyElement::at(at) + PathElement::new(vec![(-r, r), (r, -r)], style)))?;
        }
    }
    Ok(())
}

/// Five-pointed star of outer `radius` pixels, first point straight up.
fn star_outline(radius: f64) -> [(i32, i32); 10] {
    let mut outline = [(0, 0); 10];
    for (index, point) in outline.iter_mut().enumerate() {
        let r = if index % 2 == 0 { radius } else { radius * 0.4 };
        let theta = std::f64::consts::PI * index as f64 / 5.0;
        *point = ((r * theta.sin()).round() as i32, (-r * theta.cos()).round() as i32);
    }
    outline
}

/// Draws `text` centered on `center` inside a bordered box sized to fit it.
pub fn draw_info_box<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    center: (f64, f64),
    text: &str,
    text_format: &TextFormat,
    border: Rgb,
    fill: Rgb,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let style = text_format.style(ctx, Pos::new(HPos::Center, VPos::Center));
    let mut text_width = 0u32;
    let mut line_count = 0usize;
    for line in text.lines() {
        let (width, _) = canvas.estimate_text_size(line, &style)?;
        text_width = text_width.max(width);
        line_count += 1;
    }

    let pad = ctx.px(6.0);
    let half_w = (f64::from(text_width) / 2.0 + pad).round() as i32;
    let half_h = (line_count as f64 * text_format.line_height(ctx) / 2.0 + pad).round() as i32;
    let corners = [(-half_w, -half_h), (half_w, half_h)];

    canvas.draw(&(EmptyElement::at(center) + Rectangle::new(corners, RGBColor::from(fill).filled())))?;
    canvas.draw(
        &(EmptyElement::at(center)
            + Rectangle::new(corners, RGBColor::from(border).stroke_width(ctx.stroke(1.5)))),
    )?;
    draw_text(canvas, ctx, center, text, text_format)
}

/// One swatch of a horizontal legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendItem<'a> {
    pub label: &'a str,
    pub color: Rgb,
}

/// Draws a one-row legend titled "Legenda:" whose first swatch sits at
/// `origin`; following swatches are `spacing` canvas units apart.
pub fn draw_legend<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    origin: (f64, f64),
    spacing: f64,
    items: &[LegendItem<'_>],
    points: f64,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let title = TextFormat::new(points, palette::text::LABEL).bold();
    let gap = ctx.px(points * 0.6).round() as i32;
    canvas.draw(
        &(EmptyElement::at(origin)
            + Text::new(
                "Legenda:",
                (-gap, 0),
                title.style(ctx, Pos::new(HPos::Right, VPos::Center)),
            )),
    )?;

    let swatch = ctx.px(points).round() as i32;
    let label = TextFormat::new(points, palette::text::LABEL);
    for (index, item) in items.iter().enumerate() {
        let at = (origin.0 + spacing * index as f64, origin.1);
        let corners = [(0, -swatch / 2), (swatch, swatch / 2)];
        canvas.draw(
            &(EmptyElement::at(at) + Rectangle::new(corners, RGBColor::from(item.color).filled())),
        )?;
        canvas.draw(
            &(EmptyElement::at(at)
                + Rectangle::new(
                    corners,
                    RGBColor::from(palette::block::BORDER).stroke_width(1),
                )),
        )?;
        canvas.draw(
            &(EmptyElement::at(at)
                + Text::new(
                    item.label.to_string(),
                    (swatch + gap / 2, 0),
                    label.style(ctx, Pos::new(HPos::Left, VPos::Center)),
                )),
        )?;
    }
    Ok(())
}

/// Draws left-aligned text starting at `at`.
pub fn draw_text_left<DB>(
    canvas: &Canvas<DB>,
    ctx: &RenderContext,
    at: (f64, f64),
    text: &str,
    text_format: &TextFormat,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    draw_text_anchored(canvas, ctx, at, text, text_format, HPos::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiofig_config::StyleConfig;
    use std::sync::Arc;

    fn context() -> RenderContext {
        RenderContext::new(Arc::new(StyleConfig::default()), 100)
    }

    #[test]
    fn test_arrow_head_points_back_from_tip() {
        let head = arrow_head((1.0, 0.0), 10.0);
        assert_eq!(head, [(0, 0), (-10, 5), (-10, -5)]);

        let head = arrow_head((0.0, -1.0), 8.0);
        assert_eq!(head, [(0, 0), (4, 8), (-4, 8)]);
    }

    #[test]
    fn test_logical_canvas_maps_corners() {
        let mut buffer = vec![0u8; 200 * 100 * 3];
        let root = BitMapBackend::with_buffer(&mut buffer, (200, 100)).into_drawing_area();
        let canvas = logical_canvas(&root, 0.0..10.0, 0.0..5.0);

        let (x0, y0) = canvas.map_coordinate(&(0.0, 0.0));
        let (x1, y1) = canvas.map_coordinate(&(10.0, 5.0));
        assert!(x0 <= 1 && y0 >= 98, "origin at ({x0}, {y0})");
        assert!(x1 >= 198 && y1 <= 1, "far corner at ({x1}, {y1})");
    }

    #[test]
    fn test_box_and_arrow_draw_without_text() {
        let ctx = context();
        let mut buffer = vec![255u8; 100 * 100 * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (100, 100)).into_drawing_area();
            let canvas = logical_canvas(&root, 0.0..1.0, 0.0..1.0);
            draw_box(
                &canvas,
                &ctx,
                (0.1, 0.9),
                (0.3, 0.7),
                Rgb(255, 0, 0),
                Some((Rgb::BLACK, 1.0)),
            )
            .unwrap();
            draw_arrow(&canvas, &ctx, (0.5, 0.2), (0.9, 0.2), &ArrowStyle::default()).unwrap();
            root.present().unwrap();
        }

        let pixel = |x: usize, y: usize| {
            let offset = (y * 100 + x) * 3;
            [buffer[offset], buffer[offset + 1], buffer[offset + 2]]
        };
        assert_eq!(pixel(20, 20), [255, 0, 0]);
        assert!((74..86).any(|y| pixel(70, y) == [0x3b, 0x82, 0xf6]));
        assert_eq!(pixel(50, 50), [255, 255, 255]);
    }

    #[test]
    fn test_arc_points_follow_the_circle() {
        let points = arc_points((50.0, -45.0), 50.0, 1.0, 0.0..std::f64::consts::PI, 101);
        assert_eq!(points.len(), 101);
        let (x, y) = points[0];
        assert!((x - 100.0).abs() < 1e-9 && (y + 45.0).abs() < 1e-9);
        let (x, y) = points[50];
        assert!((x - 50.0).abs() < 1e-9 && (y - 5.0).abs() < 1e-9);

        let stretched = arc_points((0.0, 0.0), 2.0, 3.0, 0.0..1.0, 2);
        assert_eq!(stretched.len(), 2);
        assert!((stretched[0].0 - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_star_points_up() {
        let star = star_outline(10.0);
        assert_eq!(star[0], (0, -10));
        assert!(star.iter().all(|&(x, y)| x * x + y * y <= 121));
        assert_eq!(star[5], (0, 4));
    }

    #[test]
    fn test_translucent_region_blends_with_background() {
        let mut buffer = vec![255u8; 50 * 50 * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (50, 50)).into_drawing_area();
            let canvas = logical_canvas(&root, 0.0..1.0, 0.0..1.0);
            draw_region(&canvas, &rectangle(0.0..1.0, 0.0..0.5), Rgb(0, 0, 255), 0.5).unwrap();
            draw_path(
                &canvas,
                &context(),
                &[(0.0, 0.8), (1.0, 0.8)],
                &Stroke::solid(Rgb::BLACK, 1.0).dashed(),
            )
            .unwrap();
            root.present().unwrap();
        }

        let offset = (40 * 50 + 25) * 3;
        let lower = &buffer[offset..offset + 3];
        assert!(lower[0] > 100 && lower[0] < 160, "{lower:?}");
        assert_eq!(lower[2], 255);
        let offset = (5 * 50 + 25) * 3;
        assert_eq!(&buffer[offset..offset + 3], &[255, 255, 255]);
    }

    #[test]
    fn test_bent_path_bows_to_the_right() {
        let points = bent_path((0.0, 0.0), (10.0, 0.0), 0.2, 11);
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], (0.0, 0.0));
        assert_eq!(points[10], (10.0, 0.0));
        // Control point at (5, -2); the curve peaks halfway towards it.
        assert!((points[5].0 - 5.0).abs() < 1e-12);
        assert!((points[5].1 + 1.0).abs() < 1e-12);

        let straight = bent_path((0.0, 0.0), (4.0, 4.0), 0.0, 5);
        assert!(straight.iter().all(|(x, y)| (x - y).abs() < 1e-12));
    }
}
