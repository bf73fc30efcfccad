//! Interference suppression figures for chapter 9.

use crate::draw::{
    arc_points, draw_arrow, draw_box, draw_curved_arrow, draw_info_box, draw_path, draw_region,
    draw_text, draw_text_left, logical_canvas, rectangle, titled_area, ArrowStyle, Stroke,
    TextFormat,
};
use crate::palette::{background, line, scientific, text};
use crate::render::RenderContext;
use crate::saver::FigureSaver;
use crate::traits::{Diagram, Figure};
use plotters::coord::Shift;
use plotters::prelude::*;
use radiofig_common::{Category, Result, Rgb};
use std::f64::consts::PI;
use std::path::PathBuf;

const FERRITE: Rgb = Rgb::from_hex(0x808080);
const TOROID: Rgb = Rgb::from_hex(0x696969);
const SHIELD: Rgb = Rgb::from_hex(0xc0c0c0);
const DARK_GREEN: Rgb = Rgb::from_hex(0x006400);
const CIRCUIT: Rgb = Rgb::from_hex(0xadd8e6);
const RESIDUE: Rgb = Rgb::from_hex(0xffc0cb);
const INDUCTOR: Rgb = Rgb::from_hex(0xa52a2a);
const GRAY: Rgb = Rgb::from_hex(0x808080);

/// Heights of the incoming field arrows hitting the shield.
pub fn field_lines() -> [f64; 5] {
    let mut lines = [0.0; 5];
    for (index, y) in lines.iter_mut().enumerate() {
        *y = 4.0 + index as f64 * 0.8 - 1.6;
    }
    lines
}

/// Bulleted lines of a note box, after its heading.
pub fn bulleted(heading: Option<&str>, items: &[&str]) -> String {
    heading
        .into_iter()
        .map(str::to_string)
        .chain(items.iter().map(|item| format!("• {item}")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn small(points: f64) -> TextFormat {
    TextFormat::new(points, text::LABEL)
}

/// Clip-on and toroidal ferrites choking common-mode current on a cable.
pub struct FerriteChoke;

impl Figure for FerriteChoke {
    fn size_inches(&self) -> (f64, f64) {
        (12.0, 6.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let body = titled_area(
            root,
            ctx,
            "Applicazione Ferrite per Soppressione Disturbi di Modo Comune",
            12.0,
        )?;
        let canvas = logical_canvas(&body, 0.0..12.0, 0.0..5.5);

        draw_path(&canvas, ctx, &[(1.0, 3.0), (11.0, 3.0)], &Stroke::solid(line::BLUE, 8.0))?;
        draw_text(
            &canvas,
            ctx,
            (6.0, 2.2),
            "Cavo coassiale / USB / alimentazione",
            &small(10.0),
        )?;

        draw_box(&canvas, ctx, (3.0, 2.3), (4.5, 3.7), FERRITE, Some((Rgb::BLACK, 2.0)))?;
        draw_text(
            &canvas,
            ctx,
            (3.75, 3.0),
            "Ferrite\nClip-on",
            &TextFormat::new(9.0, Rgb::WHITE).bold(),
        )?;

        let toroid = arc_points((7.5, 3.0), 0.8, 1.0, 0.0..2.0 * PI, 64);
        draw_region(&canvas, &toroid, TOROID, 1.0)?;
        draw_path(&canvas, ctx, &toroid, &Stroke::solid(Rgb::BLACK, 2.0))?;
        draw_path(
            &canvas,
            ctx,
            &[(6.5, 3.3), (7.0, 3.6), (7.5, 3.3), (8.0, 3.6), (8.5, 3.3)],
            &Stroke::solid(line::BLUE, 4.0),
        )?;
        draw_text(&canvas, ctx, (7.5, 1.8), "Toroide\n(più spire)", &small(9.0))?;

        draw_info_box(
            &canvas,
            ctx,
            (3.75, 4.15),
            "Z = jωL",
            &small(10.0),
            scientific::NEUTRAL,
            background::LIGHT_YELLOW,
        )?;
        draw_text(
            &canvas,
            ctx,
            (3.75, 4.9),
            "Impedenza aumenta\ncon frequenza",
            &small(9.0).italic(),
        )?;

        for (from, to, note, color) in [
            (1.5, 2.5, "I_cm\n(disturbo)", scientific::ACCENT),
            (9.0, 10.0, "I_cm\nattenuata", scientific::SECONDARY),
        ] {
            draw_arrow(&canvas, ctx, (from, 3.8), (to, 3.8), &ArrowStyle::colored(color))?;
            draw_text(&canvas, ctx, ((from + to) / 2.0, 4.35), note, &TextFormat::new(8.0, color))?;
        }

        draw_info_box(
            &canvas,
            ctx,
            (3.0, 0.8),
            &bulleted(
                None,
                &[
                    "Cavi USB: elimina RFI da PC",
                    "Cavi alimentazione: blocca RF",
                    "Cavi antenna: modo comune",
                ],
            ),
            &small(9.0),
            scientific::NEUTRAL,
            background::LIGHT_BLUE,
        )?;
        Ok(())
    }
}

/// How a metal shield reflects, absorbs and passes an external field.
pub struct EmiShielding;

impl Figure for EmiShielding {
    fn size_inches(&self) -> (f64, f64) {
        (14.0, 9.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let body = titled_area(root, ctx, "Principi della Schermatura EMI", 14.0)?;
        let canvas = logical_canvas(&body, -0.5..13.0, -0.5..8.0);

        let incoming = ArrowStyle {
            width_pt: 1.5,
            ..ArrowStyle::colored(line::RED)
        };
        for y in field_lines() {
            draw_curved_arrow(&canvas, ctx, (0.5, y), (3.0, y), 0.1, &incoming)?;
        }
        draw_text(
            &canvas,
            ctx,
            (0.5, 6.3),
            "Campo EM\nesterno\n(disturbo)",
            &TextFormat::new(10.0, line::RED),
        )?;

        let protected = rectangle(3.5..8.5, 1.5..6.5);
        draw_region(&canvas, &protected, background::LIGHT_GREEN, 1.0)?;
        let mut outline = protected.to_vec();
        outline.push(protected[0]);
        draw_path(&canvas, ctx, &outline, &Stroke::solid(line::GREEN, 2.0))?;
        draw_text(
            &canvas,
            ctx,
            (6.0, 5.8),
            "AREA\nPROTETTA",
            &TextFormat::new(14.0, DARK_GREEN).bold(),
        )?;

        draw_box(&canvas, ctx, (3.0, 1.0), (3.3, 7.0), SHIELD, Some((Rgb::BLACK, 3.0)))?;
        draw_text(
            &canvas,
            ctx,
            (3.15, 7.6),
            "SCHERMO\nMETALLICO",
            &small(10.0).bold(),
        )?;

        draw_box(&canvas, ctx, (4.9, 2.9), (7.1, 5.1), CIRCUIT, Some((line::BLUE, 2.0)))?;
        draw_text(&canvas, ctx, (6.0, 4.0), "Circuito\nSensibile", &small(10.0))?;

        let reflected = ArrowStyle {
            width_pt: 1.5,
            ..ArrowStyle::colored(scientific::HIGHLIGHT)
        };
        for index in 0..3 {
            let y = 3.5 + f64::from(index) * 0.8;
            draw_curved_arrow(&canvas, ctx, (2.8, y), (1.5, y), -0.2, &reflected)?;
        }
        draw_text(
            &canvas,
            ctx,
            (1.5, 1.9),
            "Riflesso\n~80%",
            &TextFormat::new(9.0, scientific::HIGHLIGHT),
        )?;
        draw_text(&canvas, ctx, (2.2, 0.5), "Assorbito\n~15%", &TextFormat::new(9.0, GRAY))?;

        let residue = ArrowStyle {
            color: RESIDUE,
            width_pt: 1.0,
            head_pt: 6.0,
        };
        draw_arrow(&canvas, ctx, (3.5, 4.0), (4.5, 4.0), &residue)?;
        draw_text(&canvas, ctx, (4.0, 4.6), "~5%\nresiduo", &TextFormat::new(8.0, GRAY))?;

        let earth = Stroke::solid(Rgb::BLACK, 2.0);
        for segment in [
            [(3.15, 1.0), (3.15, 0.3)],
            [(2.9, 0.3), (3.4, 0.3)],
            [(3.0, 0.1), (3.3, 0.1)],
            [(3.1, -0.1), (3.2, -0.1)],
        ] {
            draw_path(&canvas, ctx, &segment, &earth)?;
        }
        draw_text_left(&canvas, ctx, (3.7, 0.0), "Terra", &small(9.0))?;

        draw_info_box(
            &canvas,
            ctx,
            (11.3, 5.6),
            "Attenuazione schermo:\n\nSE = R + A + B  (dB)\n\nR = riflessione\nA = assorbimento\nB = multi-riflessione",
            &small(10.0).monospace(),
            scientific::NEUTRAL,
            background::LIGHT_YELLOW,
        )?;
        draw_info_box(
            &canvas,
            ctx,
            (11.3, 1.8),
            &bulleted(
                Some("Materiali tipici:"),
                &[
                    "Rame: 60-100 dB",
                    "Alluminio: 50-80 dB",
                    "Acciaio: 40-60 dB",
                    "Mu-metal: campo H",
                ],
            ),
            &small(9.0),
            scientific::NEUTRAL,
            background::LIGHT_SLATE,
        )?;
        Ok(())
    }
}

/// Functional view of a mains EMI filter.
pub struct MainsFilter;

impl Figure for MainsFilter {
    fn size_inches(&self) -> (f64, f64) {
        (14.0, 8.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let body = titled_area(root, ctx, "Filtro EMI di Rete - Vista Funzionale", 14.0)?;
        let canvas = logical_canvas(&body, 0.0..13.0, 0.0..7.0);

        draw_box(
            &canvas,
            ctx,
            (2.0, 2.0),
            (10.0, 6.0),
            background::LIGHT_YELLOW,
            Some((Rgb::BLACK, 2.0)),
        )?;
        draw_text(&canvas, ctx, (6.0, 6.3), "FILTRO EMI DI RETE", &small(12.0).bold())?;

        let choke = arc_points((4.0, 4.0), 0.5, 1.0, 0.0..2.0 * PI, 48);
        draw_region(&canvas, &choke, INDUCTOR, 1.0)?;
        draw_path(&canvas, ctx, &choke, &Stroke::solid(Rgb::BLACK, 1.0))?;
        draw_text(&canvas, ctx, (4.0, 4.0), "L", &TextFormat::new(10.0, Rgb::WHITE).bold())?;
        draw_text(&canvas, ctx, (4.0, 3.0), "Induttore\nmodo comune", &small(8.0))?;

        for (x, fill, symbol, note) in [
            (5.5, line::BLUE, "Cx", "Cond. X\n(L-N)"),
            (7.5, line::GREEN, "Cy", "Cond. Y\n(L/N-PE)"),
        ] {
            draw_box(&canvas, ctx, (x, 3.5), (x + 0.3, 4.5), fill, Some((Rgb::BLACK, 1.0)))?;
            draw_text(&canvas, ctx, (x + 0.15, 4.0), symbol, &TextFormat::new(8.0, Rgb::WHITE))?;
            draw_text(&canvas, ctx, (x + 0.15, 3.0), note, &small(8.0))?;
        }

        let wire = ArrowStyle {
            color: Rgb::BLACK,
            width_pt: 2.0,
            head_pt: 8.0,
        };
        for y in [5.0, 3.0] {
            draw_arrow(&canvas, ctx, (0.5, y), (2.0, y), &wire)?;
            draw_arrow(&canvas, ctx, (10.0, y), (11.5, y), &wire)?;
        }
        draw_text_left(&canvas, ctx, (0.3, 5.3), "L (Fase)", &small(9.0))?;
        draw_text_left(&canvas, ctx, (0.3, 2.7), "N (Neutro)", &small(9.0))?;
        draw_text(
            &canvas,
            ctx,
            (1.2, 4.0),
            "230V AC\n+ disturbi",
            &TextFormat::new(9.0, line::RED),
        )?;
        draw_text_left(&canvas, ctx, (11.7, 5.3), "L", &small(9.0))?;
        draw_text_left(&canvas, ctx, (11.7, 2.7), "N", &small(9.0))?;
        draw_text(
            &canvas,
            ctx,
            (10.8, 4.0),
            "230V AC\nfiltrata",
            &TextFormat::new(9.0, line::GREEN),
        )?;

        draw_path(&canvas, ctx, &[(6.0, 2.0), (6.0, 1.0)], &Stroke::solid(line::GREEN, 2.0))?;
        draw_text(&canvas, ctx, (6.0, 0.7), "PE (Terra)", &TextFormat::new(9.0, line::GREEN))?;

        draw_info_box(
            &canvas,
            ctx,
            (2.0, 0.95),
            &bulleted(
                Some("Specifiche tipiche:"),
                &[
                    "Attenuazione: 40-60 dB",
                    "Frequenza: 150 kHz - 30 MHz",
                    "Corrente max: 1-16 A",
                    "Tensione: 250V AC",
                ],
            ),
            &small(9.0),
            scientific::NEUTRAL,
            background::LIGHT_BLUE,
        )?;
        Ok(())
    }
}

/// Saves the interference suppression figures of chapter 9.
pub struct Interference;

impl Diagram for Interference {
    fn name(&self) -> &'static str {
        "disturbi"
    }

    fn description(&self) -> &'static str {
        "Ferrite chokes, EMI shielding and the mains EMI filter"
    }

    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        let saver = saver.with_facecolor(Rgb::WHITE);
        Ok(vec![
            saver.save(FerriteChoke, Category::DISTURBI, "ferrite_cavo.png")?,
            saver.save(EmiShielding, Category::DISTURBI, "schermatura_emi.png")?,
            saver.save(MainsFilter, Category::DISTURBI, "filtro_rete_funzionale.png")?,
        ])
    }
}
