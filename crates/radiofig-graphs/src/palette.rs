//! Color palettes shared by the diagrams.

use radiofig_common::Rgb;

/// Fill colors for block-diagram stages.
pub mod block {
    use super::Rgb;

    pub const AUDIO: Rgb = Rgb::from_hex(0xfef08a);
    pub const RF: Rgb = Rgb::from_hex(0xbbf7d0);
    pub const MIXER: Rgb = Rgb::from_hex(0xbfdbfe);
    pub const FILTER: Rgb = Rgb::from_hex(0xddd6fe);
    pub const OSCILLATOR: Rgb = Rgb::from_hex(0xfecaca);
    pub const OUTPUT: Rgb = Rgb::from_hex(0xfed7aa);
    pub const CONTROL: Rgb = Rgb::from_hex(0xfef08a);
    pub const AMPLIFIER: Rgb = Rgb::from_hex(0xbbf7d0);
    pub const BORDER: Rgb = Rgb::from_hex(0x374151);
    pub const SHADOW: Rgb = Rgb::from_hex(0x94a3b8);
}

/// Line and marker colors for plots.
pub mod scientific {
    use super::Rgb;

    pub const PRIMARY: Rgb = Rgb::from_hex(0x3b82f6);
    pub const SECONDARY: Rgb = Rgb::from_hex(0x22c55e);
    pub const ACCENT: Rgb = Rgb::from_hex(0xef4444);
    pub const NEUTRAL: Rgb = Rgb::from_hex(0x6b7280);
    pub const HIGHLIGHT: Rgb = Rgb::from_hex(0xf59e0b);
}

/// Pale backgrounds for figures and panels.
pub mod background {
    use super::Rgb;

    pub const LIGHT_BLUE: Rgb = Rgb::from_hex(0xf0f9ff);
    pub const LIGHT_GREEN: Rgb = Rgb::from_hex(0xf0fdf4);
    pub const LIGHT_YELLOW: Rgb = Rgb::from_hex(0xfef3c7);
    pub const LIGHT_SLATE: Rgb = Rgb::from_hex(0xf8fafc);
}

/// `color` painted over white at opacity `alpha`.
pub fn tint(color: Rgb, alpha: f64) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    let blend = |channel: u8| (f64::from(channel) * alpha + 255.0 * (1.0 - alpha)).round() as u8;
    Rgb(blend(color.0), blend(color.1), blend(color.2))
}

/// Text colors used by the drawing helpers.
pub mod text {
    use super::Rgb;

    pub const LABEL: Rgb = Rgb::from_hex(0x1e293b);
    pub const SUBLABEL: Rgb = Rgb::from_hex(0x475569);
    pub const INFO: Rgb = Rgb::from_hex(0x1e40af);
}

/// Line colors for the classic function plots.
pub mod line {
    use super::Rgb;

    pub const RED: Rgb = Rgb::from_hex(0xff0000);
    pub const BLUE: Rgb = Rgb::from_hex(0x0000ff);
    pub const GREEN: Rgb = Rgb::from_hex(0x008000);
}
