//! Block diagrams of CW, SSB and FM transmitters.

use crate::draw::{
    draw_arrow, draw_block_with_shadow, draw_info_box, draw_legend, logical_canvas, titled_area,
    ArrowStyle, BlockStyle, LegendItem, TextFormat,
};
use crate::palette::{self, block};
use crate::render::RenderContext;
use crate::saver::FigureSaver;
use crate::traits::{Diagram, Figure};
use plotters::coord::Shift;
use plotters::prelude::*;
use radiofig_common::{Category, Result, Rgb};
use std::path::PathBuf;

/// A stage box, positioned by its lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: &'static str,
    pub fill: Rgb,
}

const fn stage(x: f64, y: f64, width: f64, height: f64, label: &'static str, fill: Rgb) -> Stage {
    Stage {
        x,
        y,
        width,
        height,
        label,
        fill,
    }
}

impl Stage {
    fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Signal path segment, drawn as an arrow from the first point to the second.
pub type Link = ((f64, f64), (f64, f64));

const LEGEND: [LegendItem<'static>; 5] = [
    LegendItem {
        label: "Oscillatore",
        color: block::OSCILLATOR,
    },
    LegendItem {
        label: "Modulazione",
        color: block::MIXER,
    },
    LegendItem {
        label: "Amplificatore",
        color: block::AMPLIFIER,
    },
    LegendItem {
        label: "Filtro",
        color: block::FILTER,
    },
    LegendItem {
        label: "Audio / Controllo",
        color: block::CONTROL,
    },
];

/// One transmitter block diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct TransmitterDiagram {
    pub title: &'static str,
    pub note: &'static str,
    pub width_in: f64,
    pub stages: Vec<Stage>,
    pub links: Vec<Link>,
}

impl TransmitterDiagram {
    pub fn cw() -> Self {
        Self {
            title: "Schema a Blocchi Trasmettitore CW (A1A)",
            note: "A1A: portante interrotta\ndalla manipolazione Morse",
            width_in: 14.0,
            stages: vec![
                stage(0.5, 0.5, 1.5, 1.0, "Oscillatore\nCW", block::OSCILLATOR),
                stage(2.5, 0.5, 1.5, 1.0, "Chiave\nElettronica", block::MIXER),
                stage(4.5, 0.5, 1.5, 1.0, "Buffer\nAmp", block::AMPLIFIER),
                stage(6.5, 0.5, 1.5, 1.0, "Filtro\nPassa-Banda", block::FILTER),
                stage(8.5, 0.5, 1.5, 1.0, "Amp\nPotenza", block::AMPLIFIER),
                stage(10.5, 0.5, 1.5, 1.0, "Antenna", block::OUTPUT),
                stage(2.5, 2.0, 1.5, 0.8, "Manipolazione\nMorse", block::CONTROL),
            ],
            links: vec![
                ((2.0, 1.0), (2.5, 1.0)),
                ((4.0, 1.0), (4.5, 1.0)),
                ((6.0, 1.0), (6.5, 1.0)),
                ((8.0, 1.0), (8.5, 1.0)),
                ((10.0, 1.0), (10.5, 1.0)),
                ((4.0, 2.4), (4.0, 1.5)),
                ((4.0, 1.5), (2.5, 1.5)),
            ],
        }
    }

    pub fn ssb() -> Self {
        Self {
            title: "Schema a Blocchi Trasmettitore SSB (J3E)",
            note: "J3E: portante soppressa,\nuna sola banda laterale",
            width_in: 18.0,
            stages: vec![
                stage(0.5, 0.5, 1.2, 1.0, "Oscillatore\nPortante", block::OSCILLATOR),
                stage(2.2, 0.5, 1.2, 1.0, "Modulatore\nBilanciato", block::MIXER),
                stage(3.9, 0.5, 1.2, 1.0, "Filtro\nLaterale", block::FILTER),
                stage(5.6, 0.5, 1.2, 1.0, "Amp\nLineare", block::AMPLIFIER),
                stage(7.3, 0.5, 1.2, 1.0, "Filtro\nUscita", block::FILTER),
                stage(9.0, 0.5, 1.2, 1.0, "Amp\nPotenza", block::AMPLIFIER),
                stage(10.7, 0.5, 1.2, 1.0, "Antenna", block::OUTPUT),
                stage(2.2, 2.0, 1.2, 0.8, "Audio\n300-3400Hz", block::AUDIO),
            ],
            links: vec![
                ((1.7, 1.0), (2.2, 1.0)),
                ((3.5, 1.0), (3.9, 1.0)),
                ((5.2, 1.0), (5.6, 1.0)),
                ((6.9, 1.0), (7.3, 1.0)),
                ((8.6, 1.0), (9.0, 1.0)),
                ((10.3, 1.0), (10.7, 1.0)),
                ((12.0, 1.0), (13.0, 1.0)),
                ((3.5, 2.4), (3.5, 1.5)),
                ((3.5, 1.5), (2.2, 1.5)),
            ],
        }
    }

    pub fn fm() -> Self {
        Self {
            title: "Schema a Blocchi Trasmettitore FM (F3E)",
            note: "F3E: la frequenza della portante\nsegue il segnale audio",
            width_in: 18.0,
            stages: vec![
                stage(0.5, 0.5, 1.2, 1.0, "Oscillatore\nFM", block::OSCILLATOR),
                stage(2.2, 0.5, 1.2, 1.0, "Modulatore\nFrequenza", block::MIXER),
                stage(3.9, 0.5, 1.2, 1.0, "Amp\nRF", block::AMPLIFIER),
                stage(5.6, 0.5, 1.2, 1.0, "Moltiplicatore", block::MIXER),
                stage(7.3, 0.5, 1.2, 1.0, "Filtro\nPassa-Banda", block::FILTER),
                stage(9.0, 0.5, 1.2, 1.0, "Amp\nPotenza", block::AMPLIFIER),
                stage(10.7, 0.5, 1.2, 1.0, "Antenna", block::OUTPUT),
                stage(2.2, 2.0, 1.2, 0.8, "Audio\n50-15kHz", block::AUDIO),
                stage(2.2, -1.0, 1.2, 0.8, "Pre-Enfasi", block::FILTER),
            ],
            links: vec![
                ((1.7, 1.0), (2.2, 1.0)),
                ((3.5, 1.0), (3.9, 1.0)),
                ((5.2, 1.0), (5.6, 1.0)),
                ((6.9, 1.0), (7.3, 1.0)),
                ((8.6, 1.0), (9.0, 1.0)),
                ((10.3, 1.0), (10.7, 1.0)),
                ((12.0, 1.0), (13.0, 1.0)),
                ((3.5, 2.4), (3.5, 1.5)),
                ((3.5, 1.5), (2.2, 1.5)),
                ((3.5, -0.6), (3.5, -0.1)),
                ((3.5, -0.1), (2.2, -0.1)),
            ],
        }
    }
}

impl Figure for TransmitterDiagram {
    fn size_inches(&self) -> (f64, f64) {
        (self.width_in, 6.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let body = titled_area(root, ctx, self.title, 14.0)?;
        let canvas = logical_canvas(&body, 0.0..15.0, -2.0..3.0);

        let arrow = ArrowStyle {
            color: Rgb::BLACK,
            width_pt: 1.5,
            head_pt: 7.0,
        };
        for &(from, to) in &self.links {
            draw_arrow(&canvas, ctx, from, to, &arrow)?;
        }

        for stage in &self.stages {
            draw_block_with_shadow(
                &canvas,
                ctx,
                stage.center(),
                (stage.width, stage.height),
                stage.label,
                None,
                &BlockStyle {
                    border: Rgb::BLACK,
                    border_pt: 2.0,
                    ..BlockStyle::filled(stage.fill)
                },
            )?;
        }

        draw_info_box(
            &canvas,
            ctx,
            (13.2, 2.3),
            self.note,
            &TextFormat::new(9.0, palette::text::INFO),
            palette::scientific::PRIMARY,
            Rgb::WHITE,
        )?;
        draw_legend(&canvas, ctx, (5.8, -1.6), 1.8, &LEGEND, 9.0)?;
        Ok(())
    }
}

/// The three transmitter diagrams of chapter 5.
pub struct Transmitters;

impl Transmitters {
    /// Each diagram with its output filename.
    pub fn figures() -> [(TransmitterDiagram, &'static str); 3] {
        [
            (TransmitterDiagram::cw(), "cw_transmitter_blocks.svg"),
            (TransmitterDiagram::ssb(), "ssb_transmitter_blocks.svg"),
            (TransmitterDiagram::fm(), "fm_transmitter_blocks.svg"),
        ]
    }
}

impl Diagram for Transmitters {
    fn name(&self) -> &'static str {
        "trasmettitori"
    }

    fn description(&self) -> &'static str {
        "CW, SSB and FM transmitter block diagrams"
    }

    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        Self::figures()
            .into_iter()
            .map(|(figure, filename)| saver.save(figure, Category::TRASMETTITORI, filename))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_counts() {
        assert_eq!(TransmitterDiagram::cw().stages.len(), 7);
        assert_eq!(TransmitterDiagram::ssb().stages.len(), 8);
        assert_eq!(TransmitterDiagram::fm().stages.len(), 9);
    }

    #[test]
    fn test_links_stay_on_canvas() {
        for diagram in [
            TransmitterDiagram::cw(),
            TransmitterDiagram::ssb(),
            TransmitterDiagram::fm(),
        ] {
            for &(from, to) in &diagram.links {
                for (x, y) in [from, to] {
                    assert!((0.0..=15.0).contains(&x), "{}: x {x}", diagram.title);
                    assert!((-2.0..=3.0).contains(&y), "{}: y {y}", diagram.title);
                }
                assert_ne!(from, to);
            }
        }
    }

    #[test]
    fn test_labels_have_no_pictographs() {
        for (diagram, filename) in Transmitters::figures() {
            assert!(filename.ends_with(".svg"));
            for stage in &diagram.stages {
                assert!(stage.label.is_ascii(), "{}", stage.label);
            }
        }
    }
}
