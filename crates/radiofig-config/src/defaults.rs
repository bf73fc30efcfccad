//! Built-in style defaults.

use crate::schema::StyleConfig;
use radiofig_common::Rgb;

/// Base font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;
/// Title font size in points.
pub const DEFAULT_TITLE_SIZE: f64 = 12.0;
/// Axis label font size in points.
pub const DEFAULT_LABEL_SIZE: f64 = 10.0;
/// Grid line opacity.
pub const DEFAULT_GRID_ALPHA: f64 = 0.3;

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            title_size: DEFAULT_TITLE_SIZE,
            label_size: DEFAULT_LABEL_SIZE,
            figure_facecolor: Rgb::WHITE,
            axes_facecolor: Rgb::WHITE,
            grid: true,
            grid_alpha: DEFAULT_GRID_ALPHA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{StyleKey, StyleValue};

    #[test]
    fn test_default_table() {
        let map = StyleConfig::default().to_map();
        assert_eq!(map.len(), 7);
        assert_eq!(map[&StyleKey::FontSize], StyleValue::Number(10.0));
        assert_eq!(map[&StyleKey::TitleSize], StyleValue::Number(12.0));
        assert_eq!(map[&StyleKey::LabelSize], StyleValue::Number(10.0));
        assert_eq!(map[&StyleKey::FigureFaceColor], StyleValue::from("#ffffff"));
        assert_eq!(map[&StyleKey::AxesFaceColor], StyleValue::from("#ffffff"));
        assert_eq!(map[&StyleKey::Grid], StyleValue::Bool(true));
        assert_eq!(map[&StyleKey::GridAlpha], StyleValue::Number(0.3));
    }
}
