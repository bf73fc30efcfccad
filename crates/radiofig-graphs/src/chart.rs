//! Line charts built on the plotters chart builder.

use crate::draw::{
    draw_arrow, draw_marker, draw_region, draw_text_left, rectangle, ArrowStyle, Marker, TextFormat,
};
use crate::render::{RenderContext, SANS_SERIF};
use crate::traits::Figure;
use plotters::coord::Shift;
use plotters::prelude::*;
use radiofig_common::{Result, Rgb};
use std::ops::Range;

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub points: Vec<(f64, f64)>,
    pub color: Rgb,
    pub width_pt: f64,
    /// Legend entry; unlabelled series stay out of the legend.
    pub label: Option<String>,
    /// Marker drawn on every point.
    pub marker: Option<Marker>,
}

impl Series {
    pub fn new(points: Vec<(f64, f64)>, color: Rgb) -> Self {
        Self {
            points,
            color,
            width_pt: 1.5,
            label: None,
            marker: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_width(mut self, width_pt: f64) -> Self {
        self.width_pt = width_pt;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }
}

/// A translucent vertical band, such as day or night hours.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub x: Range<f64>,
    pub color: Rgb,
    pub alpha: f64,
}

/// Text placed in data coordinates, optionally with an arrow to a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub at: (f64, f64),
    pub color: Rgb,
    pub arrow_to: Option<(f64, f64)>,
}

impl Annotation {
    pub fn new(text: impl Into<String>, at: (f64, f64), color: Rgb) -> Self {
        Self {
            text: text.into(),
            at,
            color,
            arrow_to: None,
        }
    }

    pub fn pointing_to(mut self, target: (f64, f64)) -> Self {
        self.arrow_to = Some(target);
        self
    }
}

/// A titled chart of one or more line series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub size: (f64, f64),
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
    pub spans: Vec<Span>,
    pub x_range: Option<Range<f64>>,
    pub y_range: Option<Range<f64>>,
    /// Number of y tick labels, plotters' choice otherwise.
    pub y_ticks: Option<usize>,
    /// Draw thin black lines through `y = 0` and `x = 0`.
    pub zero_lines: (bool, bool),
}

impl LineChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            size: (8.0, 6.0),
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
            annotations: Vec::new(),
            spans: Vec::new(),
            x_range: None,
            y_range: None,
            y_ticks: None,
            zero_lines: (false, false),
        }
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = (width, height);
        self
    }

    pub fn labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn span(mut self, x: Range<f64>, color: Rgb, alpha: f64) -> Self {
        self.spans.push(Span { x, color, alpha });
        self
    }

    pub fn x_range(mut self, range: Range<f64>) -> Self {
        self.x_range = Some(range);
        self
    }

    pub fn y_range(mut self, range: Range<f64>) -> Self {
        self.y_range = Some(range);
        self
    }

    pub fn y_ticks(mut self, count: usize) -> Self {
        self.y_ticks = Some(count);
        self
    }

    pub fn zero_lines(mut self, horizontal: bool, vertical: bool) -> Self {
        self.zero_lines = (horizontal, vertical);
        self
    }

    /// Axis ranges: explicit ranges when set, otherwise the data extent
    /// padded by 5% on each side.
    pub fn data_ranges(&self) -> (Range<f64>, Range<f64>) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for &(x, y) in self.series.iter().flat_map(|series| &series.points) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        let x_range = self
            .x_range
            .clone()
            .unwrap_or_else(|| padded(x_min, x_max));
        let y_range = self
            .y_range
            .clone()
            .unwrap_or_else(|| padded(y_min, y_max));
        (x_range, y_range)
    }

    /// Draws the chart filling `area`.
    pub fn draw_on<DB>(&self, area: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let (x_range, y_range) = self.data_ranges();

        let mut builder = ChartBuilder::on(area);
        builder
            .margin(ctx.px(10.0).round() as u32)
            .x_label_area_size(ctx.px(3.0 * ctx.style.label_size).round() as u32)
            .y_label_area_size(ctx.px(5.0 * ctx.style.label_size).round() as u32);
        if !self.title.is_empty() {
            builder.caption(&self.title, ctx.title_font());
        }
        let mut chart = builder.build_cartesian_2d(x_range.clone(), y_range.clone())?;
        chart.plotting_area().fill(&ctx.axes_background())?;

        {
            let mut mesh = chart.configure_mesh();
            mesh.x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .label_style(ctx.font(SANS_SERIF, ctx.style.font_size))
                .axis_desc_style(ctx.label_font())
                .bold_line_style(BLACK.mix(ctx.style.grid_alpha).stroke_width(1))
                .light_line_style(WHITE.mix(0.0));
            if let Some(count) = self.y_ticks {
                mesh.y_labels(count);
            }
            if !ctx.style.grid {
                mesh.disable_mesh();
            }
            mesh.draw()?;
        }

        for span in &self.spans {
            draw_region(
                chart.plotting_area(),
                &rectangle(span.x.clone(), y_range.clone()),
                span.color,
                span.alpha,
            )?;
        }

        let axis_style = BLACK.stroke_width(ctx.stroke(0.5));
        if self.zero_lines.0 {
            chart.draw_series(LineSeries::new(
                vec![(x_range.start, 0.0), (x_range.end, 0.0)],
                axis_style,
            ))?;
        }
        if self.zero_lines.1 {
            chart.draw_series(LineSeries::new(
                vec![(0.0, y_range.start), (0.0, y_range.end)],
                axis_style,
            ))?;
        }

        let legend_length = ctx.px(20.0).round() as i32;
        for series in &self.series {
            let style = RGBColor::from(series.color).stroke_width(ctx.stroke(series.width_pt));
            let drawn = chart.draw_series(LineSeries::new(series.points.iter().copied(), style))?;
            if let Some(label) = &series.label {
                drawn.label(label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + legend_length, y)], style)
                });
            }
            if let Some(marker) = series.marker {
                for &point in &series.points {
                    draw_marker(
                        chart.plotting_area(),
                        ctx,
                        point,
                        marker,
                        series.width_pt * 2.5,
                        series.color,
                    )?;
                }
            }
        }

        for annotation in &self.annotations {
            let canvas = chart.plotting_area();
            if let Some(target) = annotation.arrow_to {
                draw_arrow(
                    canvas,
                    ctx,
                    annotation.at,
                    target,
                    &ArrowStyle {
                        color: annotation.color,
                        width_pt: 1.0,
                        head_pt: 6.0,
                    },
                )?;
            }
            let text_format = TextFormat::new(ctx.style.font_size, annotation.color);
            draw_text_left(canvas, ctx, annotation.at, &annotation.text, &text_format)?;
        }

        if self.series.iter().any(|series| series.label.is_some()) {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .label_font(ctx.font(SANS_SERIF, ctx.style.font_size))
                .draw()?;
        }

        Ok(())
    }
}

impl Figure for LineChart {
    fn size_inches(&self) -> (f64, f64) {
        self.size
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        self.draw_on(root, ctx)
    }
}

/// Charts stacked vertically in equal panels.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedCharts {
    pub size: (f64, f64),
    pub panels: Vec<LineChart>,
}

impl Figure for StackedCharts {
    fn size_inches(&self) -> (f64, f64) {
        self.size
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let areas = root.split_evenly((self.panels.len().max(1), 1));
        for (panel, area) in self.panels.iter().zip(&areas) {
            panel.draw_on(area, ctx)?;
        }
        Ok(())
    }
}

fn padded(min: f64, max: f64) -> Range<f64> {
    if !(min.is_finite() && max.is_finite()) {
        return 0.0..1.0;
    }
    let span = max - min;
    if span == 0.0 {
        let half = if min == 0.0 { 1.0 } else { min.abs() * 0.5 };
        return (min - half)..(max + half);
    }
    let pad = span * 0.05;
    (min - pad)..(max + pad)
}
