//! Function plots for the electronics chapter.

use crate::chart::{Annotation, LineChart, Series, StackedCharts};
use crate::palette::line;
use crate::saver::FigureSaver;
use crate::signals::{conductor_field, ohms_law_current, sample, square_wave, AmSignal};
use crate::traits::Diagram;
use radiofig_common::{linspace, Category, Result};
use std::f64::consts::PI;
use std::path::PathBuf;

/// Resistance of the V-I plot, in ohms.
pub const RESISTANCE_OHMS: f64 = 1000.0;
/// Conductor current of the field plot, in amperes.
pub const CONDUCTOR_CURRENT: f64 = 10.0;

const CURVE_SAMPLES: usize = 100;
const WAVE_SAMPLES: usize = 1000;

fn two_periods() -> Vec<f64> {
    linspace(0.0, 4.0 * PI, WAVE_SAMPLES)
}

/// I = V/R for a 1 kΩ resistor.
pub struct ResistorVi;

impl ResistorVi {
    pub fn figure() -> LineChart {
        let voltage = linspace(0.0, 10.0, CURVE_SAMPLES);
        LineChart::new("Curva Caratteristica V-I di un Resistore")
            .labels("Tensione (V)", "Corrente (A)")
            .series(
                Series::new(
                    sample(&voltage, |v| ohms_law_current(v, RESISTANCE_OHMS)),
                    line::RED,
                )
                .with_width(2.0)
                .with_label(format!("R = {RESISTANCE_OHMS} Ω")),
            )
    }
}

impl Diagram for ResistorVi {
    fn name(&self) -> &'static str {
        "resistore_vi"
    }

    fn description(&self) -> &'static str {
        "V-I characteristic of a resistor (Ohm's law)"
    }

    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        let path = saver.save(Self::figure(), Category::ELETTRONICA, "grafico_resistore_vi.png")?;
        Ok(vec![path])
    }
}

/// B = μ0·I/(2πr) around a straight conductor.
pub struct MagneticField;

impl MagneticField {
    pub fn figure() -> LineChart {
        let distance = linspace(0.001, 0.1, CURVE_SAMPLES);
        LineChart::new("Campo Magnetico attorno a un Conduttore")
            .labels("Distanza r (m)", "Induzione Magnetica B (T)")
            .series(
                Series::new(
                    sample(&distance, |r| conductor_field(CONDUCTOR_CURRENT, r)),
                    line::BLUE,
                )
                .with_width(2.0)
                .with_label("B = μ₀ I / (2π r)"),
            )
    }
}

impl Diagram for MagneticField {
    fn name(&self) -> &'static str {
        "campo_magnetico"
    }

    fn description(&self) -> &'static str {
        "Magnetic flux density around a straight conductor"
    }

    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        let path = saver.save(
            Self::figure(),
            Category::ELETTRONICA,
            "grafico_campo_magnetico.png",
        )?;
        Ok(vec![path])
    }
}

/// Two periods of sin(t) with period and frequency notes.
pub struct SineWave;

impl SineWave {
    pub fn figure() -> LineChart {
        let t = two_periods();
        LineChart::new("Segnale Sinusoidale: v(t) = sin(wt)")
            .size(10.0, 6.0)
            .labels("Tempo (t)", "v(t)")
            .series(Series::new(sample(&t, f64::sin), line::BLUE).with_width(2.0))
            .zero_lines(true, true)
            .annotation(
                Annotation::new("T = 2pi", (2.0 * PI + 0.5, 0.5), line::RED)
                    .pointing_to((2.0 * PI, 0.0)),
            )
            .annotation(Annotation::new("f = 1/T", (PI + 0.5, 0.9), line::GREEN))
    }
}

impl Diagram for SineWave {
    fn name(&self) -> &'static str {
        "segnale_sinusoidale"
    }

    fn description(&self) -> &'static str {
        "Sine wave with period and frequency annotations"
    }

    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        let path = saver.save(
            Self::figure(),
            Category::ELETTRONICA,
            "grafico_segnale_sinusoidale.png",
        )?;
        Ok(vec![path])
    }
}

/// Square wave sign(sin(t)).
pub struct SquareWave;

impl SquareWave {
    pub fn figure() -> LineChart {
        let t = two_periods();
        let frequency = 1.0 / (2.0 * PI);
        LineChart::new("Segnale Rettangolare (Quadra)")
            .size(10.0, 6.0)
            .labels("Tempo (t)", "Ampiezza")
            .series(Series::new(sample(&t, |t| square_wave(t, frequency)), line::RED).with_width(2.0))
            .zero_lines(true, false)
            .y_range(-1.2..1.2)
            .y_ticks(3)
    }
}

impl Diagram for SquareWave {
    fn name(&self) -> &'static str {
        "segnale_quadra"
    }

    fn description(&self) -> &'static str {
        "Rectangular (square) wave"
    }

    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        let path = saver.save(
            Self::figure(),
            Category::ELETTRONICA,
            "grafico_segnale_quadra.png",
        )?;
        Ok(vec![path])
    }
}

/// Modulating tone above the AM signal it produces.
pub struct AmModulation;

impl AmModulation {
    pub fn figure() -> StackedCharts {
        let t = two_periods();
        let am = AmSignal::default();
        StackedCharts {
            size: (12.0, 8.0),
            panels: vec![
                LineChart::new("Segnale Modulante")
                    .series(Series::new(sample(&t, |t| am.modulating(t)), line::BLUE)),
                LineChart::new("Segnale Modulato AM")
                    .series(Series::new(sample(&t, |t| am.sample(t)), line::RED)),
            ],
        }
    }
}

impl Diagram for AmModulation {
    fn name(&self) -> &'static str {
        "modulazione_am"
    }

    fn description(&self) -> &'static str {
        "Amplitude modulation: modulating and modulated signals"
    }

    fn generate(&self, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        let path = saver.save(
            Self::figure(),
            Category::ELETTRONICA,
            "grafico_modulazione_am.png",
        )?;
        Ok(vec![path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiofig_common::test_utils::assert_approx_eq;

    #[test]
    fn test_resistor_curve() {
        let chart = ResistorVi::figure();
        let points = &chart.series[0].points;
        assert_eq!(points.len(), 100);
        assert_eq!(points[0], (0.0, 0.0));
        assert_approx_eq(points[99].1, 0.01, 1e-12);
        assert_eq!(chart.series[0].label.as_deref(), Some("R = 1000 Ω"));
    }

    #[test]
    fn test_field_curve_decreases() {
        let chart = MagneticField::figure();
        let points = &chart.series[0].points;
        assert_eq!(points.len(), 100);
        assert!(points.windows(2).all(|pair| pair[1].1 < pair[0].1));
        assert_approx_eq(points[0].0, 0.001, 1e-15);
        assert_approx_eq(points[99].0, 0.1, 1e-15);
    }

    #[test]
    fn test_wave_figures() {
        let sine = SineWave::figure();
        assert_eq!(sine.size, (10.0, 6.0));
        assert_eq!(sine.series[0].points.len(), 1000);
        assert_eq!(sine.annotations.len(), 2);
        assert_eq!(sine.annotations[0].arrow_to, Some((2.0 * PI, 0.0)));

        let square = SquareWave::figure();
        assert!(square.series[0]
            .points
            .iter()
            .all(|&(_, y)| y == -1.0 || y == 0.0 || y == 1.0));
    }

    #[test]
    fn test_am_figure_has_two_panels() {
        let figure = AmModulation::figure();
        assert_eq!(figure.size, (12.0, 8.0));
        assert_eq!(figure.panels.len(), 2);
        assert_eq!(figure.panels[0].title, "Segnale Modulante");
        assert_eq!(figure.panels[1].title, "Segnale Modulato AM");
        let max = figure.panels[1]
            .series[0]
            .points
            .iter()
            .fold(0.0f64, |acc, &(_, y)| acc.max(y.abs()));
        assert!(max <= 1.5 + 1e-12);
    }
}
