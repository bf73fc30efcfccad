//! Integration tests for radiofig-graphs crate.
//!
//! These tests save real files below scratch image roots. The local figures
//! draw shapes only; generating the built-in diagrams renders text and needs
//! a system sans-serif font.

use plotters::coord::Shift;
use plotters::prelude::*;
use proptest::prelude::*;
use radiofig_common::test_utils::{capture_logs, create_temp_dir};
use radiofig_common::{Category, FigureError, Result, Rgb};
use radiofig_config::StyleConfig;
use radiofig_graphs::draw::{draw_box, logical_canvas};
use radiofig_graphs::{
    save_figure, DiagramRegistry, Figure, FigureSaver, OutputLayout, RenderContext, SaveOptions,
};
use std::sync::Arc;
use tracing::Level;

/// Two colored bars on a 3x2 inch canvas.
struct Bars;

impl Figure for Bars {
    fn size_inches(&self) -> (f64, f64) {
        (3.0, 2.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, ctx: &RenderContext) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let canvas = logical_canvas(root, 0.0..3.0, 0.0..2.0);
        draw_box(&canvas, ctx, (0.5, 1.5), (1.0, 0.5), Rgb(200, 0, 0), None)?;
        draw_box(
            &canvas,
            ctx,
            (2.0, 1.5),
            (2.5, 0.5),
            Rgb(0, 0, 200),
            Some((Rgb::BLACK, 1.0)),
        )?;
        Ok(())
    }
}

fn options(dpi: u32) -> SaveOptions {
    SaveOptions::default()
        .with_dpi(dpi)
        .with_style(Arc::new(StyleConfig::default()))
}

#[test]
fn test_save_returns_exact_path() {
    let temp = create_temp_dir();
    let layout = OutputLayout::new(temp.path().join("images"));

    let path = save_figure(Bars, &layout, &Category::from("test"), "x.png", &options(50)).unwrap();

    assert_eq!(path, temp.path().join("images").join("test").join("x.png"));
    assert!(path.is_file());
}

#[test]
fn test_png_is_cropped_to_content() {
    let temp = create_temp_dir();
    let saver = FigureSaver::new(OutputLayout::new(temp.path()), options(100));

    let path = saver.save(Bars, "test", "bars.png").unwrap();
    let saved = image::open(&path).unwrap().to_rgb8();

    // Content spans x 0.5..2.5 in and y 0.5..1.5 in, plus 0.1 in of padding.
    let (width, height) = saved.dimensions();
    assert!((218..=224).contains(&width), "width {width}");
    assert!((118..=124).contains(&height), "height {height}");
    assert!(width < 300 && height < 200);
}

#[test]
fn test_svg_is_written_uncropped() {
    let temp = create_temp_dir();
    let saver = FigureSaver::new(OutputLayout::new(temp.path()), options(100));

    let path = saver.save(Bars, "05_trasmettitori", "bars.svg").unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();

    assert!(svg.contains("<svg"));
    assert!(svg.contains("width=\"300\""));
    assert!(svg.contains("height=\"200\""));
}

#[test]
fn test_unsupported_extension_writes_nothing() {
    let temp = create_temp_dir();
    let layout = OutputLayout::new(temp.path().join("images"));

    let err = save_figure(
        Bars,
        &layout,
        &Category::from("test"),
        "x.gif",
        &options(50),
    )
    .unwrap_err();

    assert!(matches!(err, FigureError::Validation { .. }));
    assert!(!temp.path().join("images").exists());
}

#[test]
fn test_save_logs_saved_path() {
    let temp = create_temp_dir();
    let layout = OutputLayout::new(temp.path());

    let (path, logs) = capture_logs(Level::INFO, || {
        save_figure(Bars, &layout, &Category::from("test"), "logged.png", &options(30)).unwrap()
    });

    assert!(logs
        .contents()
        .contains(&format!("Salvato: {}", path.display())));
}

#[test]
fn test_missing_nested_category_is_created() {
    let temp = create_temp_dir();
    let layout = OutputLayout::new(temp.path().join("images"));
    let category = Category::from("b_operativa/tabelle/nato");

    let dir = layout.output_dir(&category).unwrap();

    assert!(dir.is_dir());
    assert!(temp.path().join("images/b_operativa/tabelle").is_dir());
}

#[test]
fn test_builtin_registry() {
    let registry = DiagramRegistry::builtin();
    for name in [
        "resistore_vi",
        "campo_magnetico",
        "segnale_sinusoidale",
        "segnale_quadra",
        "modulazione_am",
        "confronto_modulazioni",
        "alfabeto_fonetico",
        "trasmettitori",
        "propagazione",
        "disturbi",
    ] {
        assert!(registry.get(name).is_some(), "missing {name}");
    }
    assert!(registry.require("grafico_inesistente").is_err());
}

/// Every file the built-in diagrams write, relative to the images root.
const BUILTIN_OUTPUTS: [&str; 18] = [
    "01_elettronica/grafico_resistore_vi.png",
    "01_elettronica/grafico_campo_magnetico.png",
    "01_elettronica/grafico_segnale_sinusoidale.png",
    "01_elettronica/grafico_segnale_quadra.png",
    "01_elettronica/grafico_modulazione_am.png",
    "01_elettronica/confronto_forme_onda_modulazione.png",
    "b_operativa/alfabeto_fonetico_nato.png",
    "05_trasmettitori/cw_transmitter_blocks.svg",
    "05_trasmettitori/ssb_transmitter_blocks.svg",
    "05_trasmettitori/fm_transmitter_blocks.svg",
    "07_propagazione/strati_ionosferici.png",
    "07_propagazione/zona_skip.png",
    "07_propagazione/muf_giornaliero.png",
    "07_propagazione/angolo_critico.png",
    "07_propagazione/propagazione_multihop.png",
    "09_disturbi/ferrite_cavo.png",
    "09_disturbi/schermatura_emi.png",
    "09_disturbi/filtro_rete_funzionale.png",
];

#[test]
fn test_builtin_diagrams_write_every_output() {
    let temp = create_temp_dir();
    let saver = FigureSaver::new(OutputLayout::new(temp.path()), options(40));
    let registry = DiagramRegistry::builtin();

    let mut written = Vec::new();
    for diagram in registry.iter() {
        let paths = diagram
            .generate(&saver)
            .unwrap_or_else(|err| panic!("{} failed: {err}", diagram.name()));
        assert!(!paths.is_empty(), "{} wrote nothing", diagram.name());
        written.extend(paths);
    }

    assert_eq!(written.len(), BUILTIN_OUTPUTS.len());
    for relative in BUILTIN_OUTPUTS {
        let expected = temp.path().join(relative);
        assert!(expected.is_file(), "missing {relative}");
        assert!(written.contains(&expected), "{relative} not reported");
    }
    for path in &written {
        assert!(path.is_file(), "{} is not a file", path.display());
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }
}

#[test]
fn test_phonetic_table_is_upright_on_disk() {
    let temp = create_temp_dir();
    let saver = FigureSaver::new(OutputLayout::new(temp.path()), options(30));
    let paths = DiagramRegistry::builtin()
        .generate("alfabeto_fonetico", &saver)
        .unwrap();

    let table = image::open(&paths[0]).unwrap().to_rgb8();
    let (_, height) = table.dimensions();
    // Dark slate header cells and title belong above the letter rows.
    let header_rows: Vec<u32> = table
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel.0 == [0x2c, 0x3e, 0x50])
        .map(|(_, y, _)| y)
        .collect();
    assert!(!header_rows.is_empty());
    assert!(header_rows.iter().all(|&y| y < height / 2));
}

proptest! {
    #[test]
    fn test_output_dir_is_idempotent(segments in prop::collection::vec("[a-z0-9_]{1,8}", 1..4)) {
        let temp = create_temp_dir();
        let layout = OutputLayout::new(temp.path());
        let category = Category::new(segments.join("/"));

        let first = layout.output_dir(&category).unwrap();
        let second = layout.output_dir(&category).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert!(first.is_dir());
        prop_assert!(first.starts_with(temp.path()));
    }
}
