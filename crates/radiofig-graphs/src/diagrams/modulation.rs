//! AM, FM and SSB compared in the time domain.

use crate::chart::{Annotation, LineChart, Series, StackedCharts};
use crate::palette::line;
use crate::saver::FigureSaver;
use crate::signals::{fm_sample, sample, suppressed_carrier_sample, AmSignal};
use crate::traits::Diagram;
use radiofig_common::{linspace, Category, Result, Rgb};
use std::path::PathBuf;

/// Carrier frequency of the comparison, scaled down to be visible.
pub const CARRIER_HZ: f64 = 100.0;
/// Audio tone frequency.
pub const TONE_HZ: f64 = 10.0;
/// FM modulation index.
pub const FM_BETA: f64 = 5.0;
/// AM modulation index.
pub const AM_INDEX: f64 = 0.8;

const SAMPLES: usize = 2000;
const DURATION_S: f64 = 0.1;

const PURPLE: Rgb = Rgb::from_hex(0x800080);
const ORANGE: Rgb = Rgb::from_hex(0xffa500);
const DARK_ORANGE: Rgb = Rgb::from_hex(0xff8c00);
const DARK_GREEN: Rgb = Rgb::from_hex(0x006400);

/// Samples `f(t)` over the shown interval, with time in milliseconds.
fn over_time(f: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
    let t = linspace(0.0, DURATION_S, SAMPLES);
    sample(&t, f)
        .into_iter()
        .map(|(t, y)| (t * 1000.0, y))
        .collect()
}

fn panel(title: &str) -> LineChart {
    LineChart::new(title)
        .labels("", "Ampiezza")
        .x_range(0.0..100.0)
        .y_range(-1.5..1.5)
}

/// The audio tone and the AM, FM and SSB signals it produces.
pub struct ModulationComparison;

impl ModulationComparison {
    pub fn figure() -> StackedCharts {
        let am = AmSignal {
            carrier_frequency: CARRIER_HZ,
            modulating_frequency: TONE_HZ,
            carrier_amplitude: 1.0,
            modulation_index: AM_INDEX,
        };

        StackedCharts {
            size: (14.0, 12.0),
            panels: vec![
                panel("Segnale Modulante (Audio)").series(
                    Series::new(over_time(|t| am.modulating(t)), line::BLUE)
                        .with_label("Segnale audio"),
                ),
                panel("AM - Modulazione di Ampiezza (m = 0.8)")
                    .y_range(-2.5..2.5)
                    .series(Series::new(over_time(|t| am.sample(t)), line::GREEN).with_width(0.8))
                    .series(
                        Series::new(over_time(|t| am.envelope(t)), line::RED)
                            .with_label("Inviluppo"),
                    )
                    .series(Series::new(over_time(|t| -am.envelope(t)), line::RED))
                    .annotation(Annotation::new(
                        "Portante sempre presente",
                        (75.0, 2.0),
                        DARK_GREEN,
                    )),
                panel("FM - Modulazione di Frequenza (beta = 5)")
                    .series(
                        Series::new(
                            over_time(|t| fm_sample(t, CARRIER_HZ, TONE_HZ, FM_BETA)),
                            PURPLE,
                        )
                        .with_width(0.8),
                    )
                    .annotation(Annotation::new(
                        "Ampiezza costante\nFrequenza variabile",
                        (70.0, 1.25),
                        PURPLE,
                    )),
                panel("SSB - Banda Laterale Unica (portante soppressa)")
                    .labels("Tempo (ms)", "Ampiezza")
                    .series(
                        Series::new(
                            over_time(|t| suppressed_carrier_sample(t, CARRIER_HZ, TONE_HZ)),
                            ORANGE,
                        )
                        .with_width(0.8),
                    )
                    .annotation(Annotation::new(
                        "Nessuna portante\nSolo informazione",
                        (70.0, 1.25),
                        DARK_ORANGE,
                    )),
            ],
        }
    }
}

impl Diagram for ModulationComparison {
    fn name(&self) -> &'static str {
        "confronto_modulazioni"
    }

    fn description(&self) -> &'static str {
        "AM, FM and SSB waveforms compared in the time domain"
    }

    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        let path = saver.with_facecolor(Rgb::WHITE).save(
            Self::figure(),
            Category::ELETTRONICA,
            "confronto_forme_onda_modulazione.png",
        )?;
        Ok(vec![path])
    }
}
