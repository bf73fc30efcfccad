//! NATO/ICAO spelling alphabet table.

use crate::draw::{draw_box, draw_text, logical_canvas, TextFormat};
use crate::render::RenderContext;
use crate::saver::FigureSaver;
use crate::traits::{Diagram, Figure};
use plotters::coord::Shift;
use plotters::prelude::*;
use radiofig_common::{Category, Result, Rgb};
use std::path::PathBuf;

/// Letters and their code words, in table order.
pub const ALPHABET: [(&str, &str); 26] = [
    ("A", "Alfa"),
    ("B", "Bravo"),
    ("C", "Charlie"),
    ("D", "Delta"),
    ("E", "Echo"),
    ("F", "Foxtrot"),
    ("G", "Golf"),
    ("H", "Hotel"),
    ("I", "India"),
    ("J", "Juliet"),
    ("K", "Kilo"),
    ("L", "Lima"),
    ("M", "Mike"),
    ("N", "November"),
    ("O", "Oscar"),
    ("P", "Papa"),
    ("Q", "Quebec"),
    ("R", "Romeo"),
    ("S", "Sierra"),
    ("T", "Tango"),
    ("U", "Uniform"),
    ("V", "Victor"),
    ("W", "Whiskey"),
    ("X", "X-Ray"),
    ("Y", "Yankee"),
    ("Z", "Zulu"),
];

const LIGHT_ROW: Rgb = Rgb::from_hex(0xe8f4fd);
const DARK_ROW: Rgb = Rgb::from_hex(0xd0e8f2);
const HEADER: Rgb = Rgb::from_hex(0x2c3e50);
const LETTER: Rgb = Rgb::from_hex(0xe74c3c);
const MUTED: Rgb = Rgb::from_hex(0x95a5a6);
const SUBTITLE: Rgb = Rgb::from_hex(0x7f8c8d);
const ROW_BORDER: Rgb = Rgb::from_hex(0xbdc3c7);

const COLUMNS: [f64; 3] = [1.5, 5.0, 8.5];
const ROWS_PER_COLUMN: usize = 9;
const FIRST_ROW_Y: f64 = 28.5;
const ROW_HEIGHT: f64 = 0.95;
const HEADER_Y: f64 = 29.5;

/// Format of the code words.
///
/// Fixed-width faces keep every glyph inside its advance cell, so letters
/// with a negative side bearing (the hook of `J`) are not clipped.
pub fn word_format() -> TextFormat {
    TextFormat::new(12.0, HEADER).bold().monospace()
}

/// Column center and row baseline of the `index`-th letter.
pub fn cell_position(index: usize) -> (f64, f64) {
    let column = index / ROWS_PER_COLUMN;
    let row = index % ROWS_PER_COLUMN;
    (COLUMNS[column], FIRST_ROW_Y - row as f64 * ROW_HEIGHT)
}

/// Three-column table of the spelling alphabet.
pub struct PhoneticAlphabetTable;

impl Figure for PhoneticAlphabetTable {
    fn size_inches(&self) -> (f64, f64) {
        (10.0, 12.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let canvas = logical_canvas(root, 0.0..10.0, 0.0..32.0);

        draw_text(
            &canvas,
            ctx,
            (5.0, 31.2),
            "ALFABETO FONETICO NATO / ICAO",
            &TextFormat::new(18.0, HEADER).bold(),
        )?;
        draw_text(
            &canvas,
            ctx,
            (5.0, 30.5),
            "Standard internazionale per le comunicazioni radioamatoriali",
            &TextFormat::new(10.0, SUBTITLE).italic(),
        )?;

        let header_text = TextFormat::new(10.0, Rgb::WHITE).bold();
        for column in COLUMNS {
            for (offset, half_width, title) in [(-0.5, 0.5, "Lettera"), (0.8, 0.6, "Fonetico")] {
                let x = column + offset;
                draw_box(
                    &canvas,
                    ctx,
                    (x - half_width, HEADER_Y + 0.3),
                    (x + half_width, HEADER_Y - 0.3),
                    HEADER,
                    None,
                )?;
                draw_text(&canvas, ctx, (x, HEADER_Y), title, &header_text)?;
            }
        }

        let letter_text = TextFormat::new(16.0, LETTER).bold().monospace();
        let equals_text = TextFormat::new(12.0, MUTED);
        let word_text = word_format();
        for (index, (letter, word)) in ALPHABET.iter().enumerate() {
            let (x, y) = cell_position(index);
            let fill = if index % ROWS_PER_COLUMN % 2 == 0 {
                LIGHT_ROW
            } else {
                DARK_ROW
            };
            draw_box(
                &canvas,
                ctx,
                (x - 1.4, y + 0.35),
                (x + 1.6, y - 0.35),
                fill,
                Some((ROW_BORDER, 0.5)),
            )?;
            draw_text(&canvas, ctx, (x - 0.5, y), letter, &letter_text)?;
            draw_text(&canvas, ctx, (x + 0.1, y), "=", &equals_text)?;
            draw_text(&canvas, ctx, (x + 0.8, y), word, &word_text)?;
        }

        let footer = TextFormat::new(8.0, MUTED).italic();
        draw_text(
            &canvas,
            ctx,
            (5.0, 1.5),
            "Fonte: Sub Allegato D (art. 3, comma 1, dell'Allegato n. 26)",
            &footer,
        )?;
        draw_text(
            &canvas,
            ctx,
            (5.0, 1.0),
            "D.Lgs. 1 agosto 2003, n. 259 - Programma di Esame Radioamatore",
            &footer,
        )?;
        Ok(())
    }
}

/// Saves the spelling alphabet table for the operating-practice appendix.
pub struct PhoneticAlphabet;

impl Diagram for PhoneticAlphabet {
    fn name(&self) -> &'static str {
        "alfabeto_fonetico"
    }

    fn description(&self) -> &'static str {
        "NATO/ICAO phonetic alphabet table"
    }

    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        let path = saver.with_facecolor(Rgb::WHITE).save(
            PhoneticAlphabetTable,
            Category::OPERATIVA,
            "alfabeto_fonetico_nato.png",
        )?;
        Ok(vec![path])
    }
}
