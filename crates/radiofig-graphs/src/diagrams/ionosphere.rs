//! Ionospheric propagation figures for chapter 7: the layers, the skip
//! zone, the daily MUF swing, the critical angle and multi-hop paths.

use crate::chart::{Annotation, LineChart, Series};
use crate::draw::{
    arc_points, draw_arrow, draw_curved_arrow, draw_double_arrow, draw_info_box, draw_legend,
    draw_marker, draw_path, draw_region, draw_text, draw_text_left, logical_canvas, rectangle,
    titled_area, ArrowStyle, Canvas, LegendItem, Marker, Stroke, TextFormat,
};
use crate::palette::{background, line, scientific, text, tint};
use crate::render::{RenderContext, SANS_SERIF};
use crate::saver::FigureSaver;
use crate::traits::{Diagram, Figure};
use plotters::coord::Shift;
use plotters::prelude::*;
use radiofig_common::{Category, Result, Rgb};
use std::f64::consts::PI;
use std::path::PathBuf;

const EARTH: Rgb = Rgb::from_hex(0x8b4513);
const EARTH_EDGE: Rgb = Rgb::from_hex(0xa52a2a);
const IONOSPHERE: Rgb = Rgb::from_hex(0xff6347);
const DARK_RED: Rgb = Rgb::from_hex(0x8b0000);
const GRAY: Rgb = Rgb::from_hex(0x808080);
const SUN: Rgb = Rgb::from_hex(0xffff00);
const SUN_EDGE: Rgb = Rgb::from_hex(0xffa500);
const NIGHT: Rgb = Rgb::from_hex(0x00008b);

/// One atmospheric layer, between two altitudes in km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    pub bottom_km: f64,
    pub top_km: f64,
    pub color: Rgb,
    pub alpha: f64,
}

const fn layer(name: &'static str, bottom_km: f64, top_km: f64, color: u32, alpha: f64) -> Layer {
    Layer {
        name,
        bottom_km,
        top_km,
        color: Rgb::from_hex(color),
        alpha,
    }
}

/// Layers from the ground up.
pub const LAYERS: [Layer; 6] = [
    layer("Troposfera", 0.0, 12.0, 0x87ceeb, 0.4),
    layer("Stratosfera", 12.0, 50.0, 0xe0e0e0, 0.3),
    layer("Strato D", 60.0, 90.0, 0xffd700, 0.5),
    layer("Strato E", 90.0, 150.0, 0xffa500, 0.5),
    layer("Strato F1", 150.0, 250.0, 0xff6347, 0.5),
    layer("Strato F2", 250.0, 400.0, 0xdc143c, 0.5),
];

const ALTITUDE_MARKS: [f64; 6] = [0.0, 60.0, 90.0, 150.0, 250.0, 400.0];

/// What each ionospheric layer does, keyed by the altitude of its note.
const LAYER_NOTES: [(f64, &str, usize); 4] = [
    (75.0, "Assorbe onde corte\n(solo diurno)", 2),
    (120.0, "Riflessioni sporadiche Es\nVHF occasionale", 3),
    (200.0, "HF regolare\n(solo diurno)", 4),
    (325.0, "DX HF mondiale\n(giorno e notte)", 5),
];

/// Amateur HF bands as `(MHz, name)`.
pub const HF_BANDS: [(f64, &str); 8] = [
    (3.5, "80m"),
    (7.0, "40m"),
    (10.1, "30m"),
    (14.0, "20m"),
    (18.0, "17m"),
    (21.0, "15m"),
    (24.9, "12m"),
    (28.0, "10m"),
];

/// Highest band drawn on the MUF chart.
const MUF_BAND_LIMIT_MHZ: f64 = 22.0;

/// Typical summer F2 MUF in MHz at local `hour`.
pub fn summer_muf(hour: f64) -> f64 {
    let daytime = if (6.0..=18.0).contains(&hour) { 1.0 } else { 0.3 };
    (12.0 + 8.0 * (PI * (hour - 6.0) / 12.0).sin() * daytime).max(5.0)
}

/// Typical winter F2 MUF in MHz at local `hour`.
pub fn winter_muf(hour: f64) -> f64 {
    let daytime = if (7.0..=17.0).contains(&hour) { 1.0 } else { 0.4 };
    (8.0 + 5.0 * (PI * (hour - 7.0) / 10.0).sin() * daytime).max(4.0)
}

fn hourly(muf: fn(f64) -> f64) -> Vec<(f64, f64)> {
    (0..=24)
        .map(|hour| (f64::from(hour), muf(f64::from(hour))))
        .collect()
}

/// Daily MUF curves for summer and winter against the HF bands.
pub fn muf_chart() -> LineChart {
    let title = "Variazione Giornaliera della MUF (Frequenza Massima Utilizzabile)";
    let mut chart = LineChart::new(title)
        .size(12.0, 6.0)
        .labels("Ora locale", "MUF (MHz)")
        .x_range(0.0..24.0)
        .y_range(0.0..30.0)
        .span(6.0..18.0, SUN, 0.1)
        .span(0.0..6.0, NIGHT, 0.1)
        .span(18.0..24.0, NIGHT, 0.1);

    for (mhz, band) in HF_BANDS.iter().filter(|(mhz, _)| *mhz <= MUF_BAND_LIMIT_MHZ) {
        chart = chart
            .series(Series::new(vec![(0.0, *mhz), (24.0, *mhz)], GRAY).with_width(0.8))
            .annotation(Annotation::new(*band, (22.9, mhz + 0.7), GRAY));
    }

    chart
        .series(
            Series::new(hourly(summer_muf), line::RED)
                .with_width(2.5)
                .with_marker(Marker::Dot)
                .with_label("Estate (alta attività solare)"),
        )
        .series(
            Series::new(hourly(winter_muf), line::BLUE)
                .with_width(2.5)
                .with_marker(Marker::Square)
                .with_label("Inverno (bassa attività solare)"),
        )
        .annotation(
            Annotation::new("MUF massima\n(pomeriggio)", (16.0, 23.0), text::LABEL)
                .pointing_to((14.0, 20.0)),
        )
        .annotation(
            Annotation::new("MUF minima\n(pre-alba)", (2.0, 8.0), text::LABEL)
                .pointing_to((5.0, 5.0)),
        )
}

/// Ground and ionosphere reflection points of a three-hop path, TX first.
pub fn hop_path() -> [(f64, f64); 7] {
    [
        (5.0, 2.0),
        (20.0, 13.0),
        (35.0, 2.0),
        (50.0, 13.0),
        (65.0, 2.0),
        (80.0, 13.0),
        (95.0, 2.0),
    ]
}

/// Closes `outline` down to `floor`, giving a polygon for the ground below it.
fn ground_polygon(outline: &[(f64, f64)], floor: f64) -> Vec<(f64, f64)> {
    let mut polygon = outline.to_vec();
    if let (Some(&(first, _)), Some(&(last, _))) = (outline.first(), outline.last()) {
        polygon.push((last, floor));
        polygon.push((first, floor));
    }
    polygon
}

/// `outline` followed by itself raised by `thickness`, in reverse: a band polygon.
fn band_polygon(outline: &[(f64, f64)], thickness: f64) -> Vec<(f64, f64)> {
    outline
        .iter()
        .copied()
        .chain(outline.iter().rev().map(|&(x, y)| (x, y + thickness)))
        .collect()
}

fn clamp_above(points: Vec<(f64, f64)>, floor: f64) -> Vec<(f64, f64)> {
    points.into_iter().map(|(x, y)| (x, y.max(floor))).collect()
}

fn bold(points: f64, color: Rgb) -> TextFormat {
    TextFormat::new(points, color).bold()
}

fn mast<DB>(canvas: &Canvas<DB>, ctx: &RenderContext, x: f64, base: f64, top: f64) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    draw_path(canvas, ctx, &[(x, base), (x, top)], &Stroke::solid(Rgb::BLACK, 3.0))?;
    draw_path(canvas, ctx, &[(x - 2.0, top), (x + 2.0, top)], &Stroke::solid(Rgb::BLACK, 2.0))
}

/// Cross-section of the atmosphere with the ionospheric layers.
pub struct IonosphereLayers;

impl Figure for IonosphereLayers {
    fn size_inches(&self) -> (f64, f64) {
        (12.0, 8.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let body = titled_area(root, ctx, "Strati Ionosferici e Loro Caratteristiche", 14.0)?;
        let mut chart = ChartBuilder::on(&body)
            .margin(ctx.px(10.0).round() as u32)
            .y_label_area_size(ctx.px(5.0 * ctx.style.label_size).round() as u32)
            .build_cartesian_2d(-0.5..14.0, -30.0..480.0)?;
        chart
            .configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .y_desc("Altitudine (km)")
            .label_style(ctx.font(SANS_SERIF, ctx.style.font_size))
            .axis_desc_style(ctx.label_font().style(FontStyle::Bold))
            .draw()?;
        let canvas = chart.plotting_area();

        for layer in &LAYERS {
            let corners = rectangle(0.0..10.0, layer.bottom_km..layer.top_km);
            draw_region(canvas, &corners, layer.color, layer.alpha)?;
            let mut outline = corners.to_vec();
            outline.push(corners[0]);
            draw_path(canvas, ctx, &outline, &Stroke::solid(Rgb::BLACK, 1.0))?;
            let middle = (layer.bottom_km + layer.top_km) / 2.0;
            draw_text(canvas, ctx, (5.0, middle), layer.name, &bold(12.0, text::LABEL))?;
        }

        draw_region(canvas, &rectangle(0.0..10.0, -20.0..0.0), EARTH, 0.7)?;
        draw_text(canvas, ctx, (5.0, -10.0), "TERRA", &bold(12.0, Rgb::WHITE))?;

        let mark = Stroke::solid(GRAY, 1.0).dashed();
        for altitude in ALTITUDE_MARKS {
            draw_path(canvas, ctx, &[(0.0, altitude), (10.0, altitude)], &mark)?;
            draw_text_left(
                canvas,
                ctx,
                (10.2, altitude),
                &format!("{altitude:.0} km"),
                &TextFormat::new(10.0, text::LABEL),
            )?;
        }

        let pointer = ArrowStyle {
            color: GRAY,
            width_pt: 1.0,
            head_pt: 6.0,
        };
        for (altitude, note, index) in LAYER_NOTES {
            let color = LAYERS[index].color;
            draw_arrow(canvas, ctx, (11.5, altitude), (10.05, altitude), &pointer)?;
            draw_info_box(
                canvas,
                ctx,
                (12.75, altitude),
                note,
                &TextFormat::new(9.0, text::LABEL),
                color,
                tint(color, 0.3),
            )?;
        }

        let sun_radius = ctx.px(15.0).round() as i32;
        canvas.draw(&Circle::new((9.0, 450.0), sun_radius, RGBColor::from(SUN).filled()))?;
        canvas.draw(&Circle::new(
            (9.0, 450.0),
            sun_radius,
            RGBColor::from(SUN_EDGE).stroke_width(ctx.stroke(2.0)),
        ))?;
        draw_arrow(canvas, ctx, (7.4, 425.0), (8.6, 440.0), &ArrowStyle::colored(SUN_EDGE))?;
        draw_text(
            canvas,
            ctx,
            (7.0, 412.0),
            "Radiazione UV\nionizza gli strati",
            &TextFormat::new(9.0, text::LABEL),
        )?;
        Ok(())
    }
}

/// Ground wave against sky wave, with the silent skip zone between them.
pub struct SkipZone;

impl Figure for SkipZone {
    fn size_inches(&self) -> (f64, f64) {
        (14.0, 6.8)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let body = titled_area(root, ctx, "Zona di Skip: Onda di Terra vs Onda Spaziale", 14.0)?;
        let canvas = logical_canvas(&body, 0.0..100.0, -10.0..35.0);
        let sweep = -0.3..PI + 0.3;

        let earth = clamp_above(arc_points((50.0, -45.0), 50.0, 1.0, sweep.clone(), 100), -10.0);
        draw_region(&canvas, &ground_polygon(&earth, -10.0), EARTH, 0.6)?;
        draw_path(&canvas, ctx, &earth, &Stroke::solid(EARTH_EDGE, 2.0))?;

        let ionosphere = clamp_above(arc_points((50.0, -45.0), 70.0, 1.0, sweep, 100), -10.0);
        draw_region(&canvas, &band_polygon(&ionosphere, 8.0), IONOSPHERE, 0.3)?;
        draw_path(&canvas, ctx, &ionosphere, &Stroke::solid(line::RED, 2.0).dashed())?;
        draw_text(&canvas, ctx, (50.0, 30.0), "IONOSFERA (Strato F)", &bold(11.0, DARK_RED))?;

        mast(&canvas, ctx, 15.0, 6.0, 12.0)?;
        draw_text(&canvas, ctx, (15.0, 14.0), "TX", &bold(10.0, text::LABEL))?;

        let ground_wave: Vec<(f64, f64)> = (0..50)
            .map(|step| {
                let x = 15.0 + 20.0 * f64::from(step) / 49.0;
                (x, 5.0 + 2.0 * (-0.1 * (x - 15.0)).exp())
            })
            .collect();
        draw_path(&canvas, ctx, &ground_wave, &Stroke::solid(line::GREEN, 2.5))?;
        draw_arrow(&canvas, ctx, (25.0, 6.0), (35.0, 5.5), &ArrowStyle::colored(line::GREEN))?;

        let sky = ArrowStyle::colored(line::BLUE);
        draw_curved_arrow(&canvas, ctx, (15.0, 10.0), (40.0, 22.0), -0.2, &sky)?;
        draw_curved_arrow(&canvas, ctx, (40.0, 22.0), (70.0, 6.0), -0.2, &sky)?;
        draw_marker(&canvas, ctx, (40.0, 23.0), Marker::Star, 15.0, line::RED)?;

        draw_region(&canvas, &rectangle(35.0..70.0, 5.0..8.0), line::RED, 0.3)?;
        draw_text(
            &canvas,
            ctx,
            (52.5, 2.0),
            "ZONA DI SKIP\n(nessun segnale)",
            &bold(10.0, DARK_RED),
        )?;

        for (x, color, label, format) in [
            (30.0, line::GREEN, "RX1", TextFormat::new(9.0, line::GREEN)),
            (52.0, line::RED, "X", bold(12.0, line::RED)),
            (72.0, line::BLUE, "RX2", TextFormat::new(9.0, line::BLUE)),
        ] {
            draw_path(&canvas, ctx, &[(x, 5.0), (x, 9.0)], &Stroke::solid(color, 2.0))?;
            draw_text(&canvas, ctx, (x, 10.0), label, &format)?;
        }

        for (at, target, note, color) in [
            ((28.0, -3.0), (30.0, 5.0), "Ricezione\nonda di terra", line::GREEN),
            ((78.0, -3.0), (72.0, 5.0), "Ricezione\nonda spaziale", line::BLUE),
        ] {
            let pointer = ArrowStyle {
                color,
                width_pt: 1.0,
                head_pt: 6.0,
            };
            draw_arrow(&canvas, ctx, (at.0, at.1 + 1.5), target, &pointer)?;
            draw_text(&canvas, ctx, at, note, &TextFormat::new(9.0, color))?;
        }

        let distance = ArrowStyle {
            color: GRAY,
            width_pt: 1.0,
            head_pt: 6.0,
        };
        draw_double_arrow(&canvas, ctx, (15.0, 1.0), (35.0, 1.0), &distance)?;
        draw_text(&canvas, ctx, (22.0, -0.5), "~200 km", &TextFormat::new(9.0, GRAY))?;
        draw_double_arrow(&canvas, ctx, (35.0, 1.0), (70.0, 1.0), &distance)?;
        draw_text(&canvas, ctx, (52.5, -0.5), "Skip ~500-2000 km", &TextFormat::new(9.0, GRAY))?;

        draw_legend(
            &canvas,
            ctx,
            (40.0, -8.0),
            18.0,
            &[
                LegendItem {
                    label: "Onda di terra",
                    color: line::GREEN,
                },
                LegendItem {
                    label: "Onda spaziale (ionosferica)",
                    color: line::BLUE,
                },
            ],
            10.0,
        )?;
        Ok(())
    }
}

/// Rays below, at and above the critical angle.
pub struct CriticalAngle;

impl Figure for CriticalAngle {
    fn size_inches(&self) -> (f64, f64) {
        (12.0, 8.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let body = titled_area(root, ctx, "Angolo Critico e Rifrazione Ionosferica", 14.0)?;
        let canvas = logical_canvas(&body, 0.0..100.0, -8.0..55.0);

        draw_region(&canvas, &rectangle(0.0..100.0, -5.0..0.0), EARTH, 0.5)?;
        draw_path(&canvas, ctx, &[(0.0, 0.0), (100.0, 0.0)], &Stroke::solid(EARTH_EDGE, 2.0))?;
        draw_text(&canvas, ctx, (50.0, -2.5), "TERRA", &bold(11.0, Rgb::WHITE))?;

        draw_region(&canvas, &rectangle(0.0..100.0, 40.0..45.0), IONOSPHERE, 0.4)?;
        draw_path(
            &canvas,
            ctx,
            &[(0.0, 40.0), (100.0, 40.0)],
            &Stroke::solid(line::RED, 2.0).dashed(),
        )?;
        draw_text(&canvas, ctx, (85.0, 42.5), "IONOSFERA", &bold(11.0, DARK_RED))?;

        mast(&canvas, ctx, 10.0, 0.0, 5.0)?;
        draw_text(&canvas, ctx, (10.0, 7.0), "TX", &bold(10.0, text::LABEL))?;

        let escaping = ArrowStyle::colored(line::RED);
        draw_arrow(&canvas, ctx, (10.0, 5.0), (10.0, 40.0), &escaping)?;
        draw_path(
            &canvas,
            ctx,
            &[(10.0, 40.0), (10.0, 52.0)],
            &Stroke::solid(line::RED, 2.0).dashed(),
        )?;
        draw_arrow(&canvas, ctx, (10.0, 52.0), (10.0, 55.0), &escaping)?;
        draw_text_left(
            &canvas,
            ctx,
            (12.0, 25.0),
            "f > fc\n(attraversa)",
            &TextFormat::new(9.0, line::RED),
        )?;

        for (apex, landing, color) in [
            ((35.0, 40.0), (60.0, 5.0), scientific::HIGHLIGHT),
            ((50.0, 40.0), (90.0, 5.0), line::GREEN),
        ] {
            let ray = ArrowStyle::colored(color);
            draw_arrow(&canvas, ctx, (10.0, 5.0), apex, &ray)?;
            draw_arrow(&canvas, ctx, apex, landing, &ray)?;
            draw_marker(&canvas, ctx, apex, Marker::Dot, 10.0, color)?;
        }
        draw_text(&canvas, ctx, (35.0, 43.0), "θc", &bold(11.0, scientific::HIGHLIGHT))?;
        draw_text_left(
            &canvas,
            ctx,
            (55.0, 25.0),
            "f < MUF\n(riflesso)",
            &TextFormat::new(9.0, line::GREEN),
        )?;

        let critical = arc_points((10.0, 5.0), 5.0, 1.0, PI / 3.0..PI / 2.0, 20);
        draw_path(&canvas, ctx, &critical, &Stroke::solid(scientific::HIGHLIGHT, 2.0))?;
        draw_text_left(
            &canvas,
            ctx,
            (13.0, 12.0),
            "θc",
            &TextFormat::new(10.0, scientific::HIGHLIGHT),
        )?;
        let lower = arc_points((10.0, 5.0), 7.5, 1.0, PI / 6.0..PI / 2.0, 30);
        draw_path(&canvas, ctx, &lower, &Stroke::solid(line::GREEN, 2.0))?;
        draw_text_left(
            &canvas,
            ctx,
            (18.0, 14.0),
            "θ < θc",
            &TextFormat::new(9.0, line::GREEN),
        )?;

        draw_info_box(
            &canvas,
            ctx,
            (84.0, 22.0),
            "Formule:\n\nfc = 9√N  (MHz)\n\nMUF = fc / cos(θ)\n\nθc = angolo critico",
            &TextFormat::new(10.0, text::LABEL).monospace(),
            scientific::NEUTRAL,
            background::LIGHT_YELLOW,
        )?;

        draw_legend(
            &canvas,
            ctx,
            (20.0, -6.5),
            27.0,
            &[
                LegendItem {
                    label: "f > fc (attraversa ionosfera)",
                    color: line::RED,
                },
                LegendItem {
                    label: "f = MUF (angolo critico θc)",
                    color: scientific::HIGHLIGHT,
                },
                LegendItem {
                    label: "f < MUF (riflessione)",
                    color: line::GREEN,
                },
            ],
            9.0,
        )?;
        Ok(())
    }
}

/// A DX path bouncing three times between ground and ionosphere.
pub struct MultiHop;

impl Figure for MultiHop {
    fn size_inches(&self) -> (f64, f64) {
        (14.0, 5.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let body = titled_area(root, ctx, "Comunicazioni DX Mondiali via Salti Multipli", 14.0)?;
        let canvas = logical_canvas(&body, -5.0..105.0, -10.0..20.0);
        let sweep = -0.1..PI + 0.1;

        let earth = clamp_above(arc_points((50.0, -28.0), 30.0, 3.0, sweep.clone(), 100), -10.0);
        draw_region(&canvas, &ground_polygon(&earth, -5.0), EARTH, 0.5)?;
        draw_path(&canvas, ctx, &earth, &Stroke::solid(EARTH_EDGE, 2.0))?;

        let ionosphere = clamp_above(arc_points((50.0, -28.0), 40.0, 3.0, sweep, 100), -10.0);
        draw_region(&canvas, &band_polygon(&ionosphere, 3.0), IONOSPHERE, 0.3)?;
        draw_path(&canvas, ctx, &ionosphere, &Stroke::solid(line::RED, 2.0).dashed())?;

        let hops = hop_path();
        let path = ArrowStyle::colored(line::BLUE);
        for (index, pair) in hops.windows(2).enumerate() {
            let bend = if index % 2 == 0 { -0.3 } else { 0.3 };
            draw_curved_arrow(&canvas, ctx, pair[0], pair[1], bend, &path)?;
        }

        let last = hops.len() - 1;
        for (index, &(x, y)) in hops.iter().enumerate() {
            if y > 5.0 {
                draw_marker(&canvas, ctx, (x, y), Marker::Star, 12.0, line::RED)?;
            } else if index == 0 || index == last {
                let label = if index == 0 { "TX" } else { "RX" };
                draw_path(&canvas, ctx, &[(x, y), (x, y + 3.0)], &Stroke::solid(Rgb::BLACK, 3.0))?;
                draw_text(&canvas, ctx, (x, y + 5.0), label, &bold(11.0, text::LABEL))?;
            } else {
                draw_marker(&canvas, ctx, (x, y), Marker::Dot, 6.0, Rgb::BLACK)?;
            }
        }

        for (x, label) in [(27.0, "1° hop"), (57.0, "2° hop"), (87.0, "3° hop")] {
            draw_text(&canvas, ctx, (x, 8.0), label, &TextFormat::new(9.0, line::BLUE))?;
        }

        let distance = ArrowStyle {
            color: GRAY,
            width_pt: 1.5,
            head_pt: 7.0,
        };
        draw_double_arrow(&canvas, ctx, (5.0, -1.0), (95.0, -1.0), &distance)?;
        draw_text(
            &canvas,
            ctx,
            (50.0, -3.0),
            "Distanza totale: ~6000-10000 km (DX mondiale)",
            &TextFormat::new(10.0, GRAY),
        )?;
        draw_text(&canvas, ctx, (50.0, 15.0), "IONOSFERA", &bold(11.0, DARK_RED))?;
        draw_text(&canvas, ctx, (50.0, -6.0), "Propagazione Multi-Hop HF", &bold(12.0, text::LABEL))?;
        Ok(())
    }
}

/// Saves the five propagation figures of chapter 7.
pub struct Propagation;

impl Diagram for Propagation {
    fn name(&self) -> &'static str {
        "propagazione"
    }

    fn description(&self) -> &'static str {
        "Ionospheric layers, skip zone, daily MUF, critical angle and multi-hop paths"
    }

    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        let saver = saver.with_facecolor(Rgb::WHITE);
        Ok(vec![
            saver.save(IonosphereLayers, Category::PROPAGAZIONE, "strati_ionosferici.png")?,
            saver.save(SkipZone, Category::PROPAGAZIONE, "zona_skip.png")?,
            saver.save(muf_chart(), Category::PROPAGAZIONE, "muf_giornaliero.png")?,
            saver.save(CriticalAngle, Category::PROPAGAZIONE, "angolo_critico.png")?,
            saver.save(MultiHop, Category::PROPAGAZIONE, "propagazione_multihop.png")?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_are_stacked_upwards() {
        for layer in &LAYERS {
            assert!(layer.bottom_km < layer.top_km, "{}", layer.name);
        }
        for pair in LAYERS.windows(2) {
            assert!(pair[0].top_km <= pair[1].bottom_km);
        }
        for (_, _, index) in LAYER_NOTES {
            assert!(LAYERS[index].name.starts_with("Strato"));
        }
    }

    #[test]
    fn test_muf_follows_the_sun() {
        assert!((summer_muf(12.0) - 20.0).abs() < 1e-9);
        assert!((winter_muf(12.0) - 13.0).abs() < 1e-9);
        // Night time swing is damped.
        assert!((summer_muf(0.0) - 9.6).abs() < 1e-9);
        for hour in 0..=24 {
            let hour = f64::from(hour);
            assert!(summer_muf(hour) >= 5.0);
            assert!(winter_muf(hour) >= 4.0);
            assert!(summer_muf(hour) >= winter_muf(hour), "hour {hour}");
        }
    }

    #[test]
    fn test_muf_chart_contents() {
        let chart = muf_chart();
        // Six band lines up to 15m plus the two seasons.
        assert_eq!(chart.series.len(), 8);
        let seasons: Vec<_> = chart.series.iter().filter_map(|s| s.label.as_deref()).collect();
        assert_eq!(seasons.len(), 2);
        assert_eq!(chart.series[6].points.len(), 25);
        assert_eq!(chart.spans.len(), 3);
        assert_eq!(chart.data_ranges(), (0.0..24.0, 0.0..30.0));
    }

    #[test]
    fn test_hops_alternate_between_ground_and_sky() {
        let hops = hop_path();
        assert_eq!(hops[0].0, 5.0);
        assert_eq!(hops[6].0, 95.0);
        for (index, (_, y)) in hops.iter().enumerate() {
            assert_eq!(*y > 5.0, index % 2 == 1);
        }
    }

    #[test]
    fn test_band_and_ground_polygons() {
        let outline = [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)];
        let band = band_polygon(&outline, 3.0);
        assert_eq!(band.len(), 6);
        assert_eq!(band[3], (2.0, 3.0));
        assert_eq!(band[5], (0.0, 3.0));

        let ground = ground_polygon(&outline, -5.0);
        assert_eq!(&ground[3..], &[(2.0, -5.0), (0.0, -5.0)]);
        assert!(ground_polygon(&[], 0.0).is_empty());
    }
}
