//! Physics formulas and waveform samplers behind the function plots.

use std::f64::consts::PI;

/// Vacuum permeability, in henries per metre.
pub const MU_0: f64 = 4.0 * PI * 1e-7;

/// Current through a resistor by Ohm's law, `I = V / R`.
pub fn ohms_law_current(voltage: f64, resistance: f64) -> f64 {
    voltage / resistance
}

/// Magnetic flux density at distance `r` from a long straight conductor
/// carrying `current`, `B = μ0·I / (2π·r)`.
pub fn conductor_field(current: f64, distance: f64) -> f64 {
    MU_0 * current / (2.0 * PI * distance)
}

/// Sign of a sample: `-1`, `0` or `1`.
pub fn signum(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Unit square wave of `frequency`, `sign(sin(2π·f·t))`.
pub fn square_wave(t: f64, frequency: f64) -> f64 {
    signum((2.0 * PI * frequency * t).sin())
}

/// Parameters of a sinusoidally modulated AM signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmSignal {
    pub carrier_frequency: f64,
    pub modulating_frequency: f64,
    pub carrier_amplitude: f64,
    pub modulation_index: f64,
}

impl AmSignal {
    /// Modulating tone `sin(2π·fm·t)`.
    pub fn modulating(&self, t: f64) -> f64 {
        (2.0 * PI * self.modulating_frequency * t).sin()
    }

    /// Upper envelope `Ac + m·sin(2π·fm·t)`.
    pub fn envelope(&self, t: f64) -> f64 {
        self.carrier_amplitude + self.modulation_index * self.modulating(t)
    }

    /// Modulated signal `(Ac + m·sin(2π·fm·t))·cos(2π·fc·t)`.
    pub fn sample(&self, t: f64) -> f64 {
        self.envelope(t) * (2.0 * PI * self.carrier_frequency * t).cos()
    }
}

impl Default for AmSignal {
    fn default() -> Self {
        Self {
            carrier_frequency: 10.0,
            modulating_frequency: 1.0,
            carrier_amplitude: 1.0,
            modulation_index: 0.5,
        }
    }
}

/// Frequency-modulated carrier `sin(2π·fc·t + β·sin(2π·fm·t))`.
pub fn fm_sample(t: f64, carrier_frequency: f64, modulating_frequency: f64, beta: f64) -> f64 {
    (2.0 * PI * carrier_frequency * t + beta * (2.0 * PI * modulating_frequency * t).sin()).sin()
}

/// Suppressed-carrier product `sin(2π·fm·t)·cos(2π·fc·t)`, the simplified
/// single-sideband picture.
pub fn suppressed_carrier_sample(t: f64, carrier_frequency: f64, modulating_frequency: f64) -> f64 {
    (2.0 * PI * modulating_frequency * t).sin() * (2.0 * PI * carrier_frequency * t).cos()
}

/// Evaluates `f` at each of `xs`.
pub fn sample(xs: &[f64], f: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
    xs.iter().map(|&x| (x, f(x))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiofig_common::linspace;
    use radiofig_common::test_utils::assert_approx_eq;

    #[test]
    fn test_ohms_law() {
        assert_approx_eq(ohms_law_current(10.0, 1000.0), 0.01, 1e-12);
        assert_eq!(ohms_law_current(0.0, 1000.0), 0.0);
    }

    #[test]
    fn test_conductor_field_falls_off_inversely() {
        // 10 A at 1 cm gives 200 µT.
        assert_approx_eq(conductor_field(10.0, 0.01), 2e-4, 1e-12);
        let near = conductor_field(10.0, 0.001);
        let far = conductor_field(10.0, 0.1);
        assert_approx_eq(near / far, 100.0, 1e-9);
    }

    #[test]
    fn test_square_wave_sign() {
        let frequency = 1.0 / (2.0 * PI);
        assert_eq!(square_wave(0.0, frequency), 0.0);
        assert_eq!(square_wave(1.0, frequency), 1.0);
        assert_eq!(square_wave(PI + 1.0, frequency), -1.0);

        let t = linspace(0.0, 4.0 * PI, 1000);
        assert!(t
            .iter()
            .all(|&t| [-1.0, 0.0, 1.0].contains(&square_wave(t, frequency))));
    }

    #[test]
    fn test_am_envelope_bounds_signal() {
        let am = AmSignal::default();
        for t in linspace(0.0, 4.0 * PI, 1000) {
            let value = am.sample(t);
            assert!(value.abs() <= am.envelope(t) + 1e-12);
            assert!((0.5..=1.5).contains(&am.envelope(t)));
        }
        assert_approx_eq(am.sample(0.0), 1.0, 1e-12);
        assert_approx_eq(am.sample(0.25), -1.5, 1e-9);
    }

    #[test]
    fn test_fm_keeps_constant_amplitude() {
        assert_eq!(fm_sample(0.0, 100.0, 10.0, 5.0), 0.0);
        // Without deviation it is the plain carrier.
        assert_approx_eq(fm_sample(0.0025, 100.0, 10.0, 0.0), 1.0, 1e-12);
        for t in linspace(0.0, 0.1, 2000) {
            assert!(fm_sample(t, 100.0, 10.0, 5.0).abs() <= 1.0);
        }
    }

    #[test]
    fn test_suppressed_carrier_vanishes_with_the_tone() {
        assert_eq!(suppressed_carrier_sample(0.0, 100.0, 10.0), 0.0);
        assert_approx_eq(suppressed_carrier_sample(0.05, 100.0, 10.0), 0.0, 1e-12);
        assert_approx_eq(suppressed_carrier_sample(0.025, 100.0, 10.0), -1.0, 1e-9);
    }

    #[test]
    fn test_sample_pairs_inputs() {
        let points = sample(&[0.0, 1.0, 2.0], |x| x * x);
        assert_eq!(points, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
    }
}
