//! Range validation for the effective style.

use crate::schema::{StyleConfig, StyleKey};
use radiofig_common::{FigureError, Result};

/// Style validator.
pub struct StyleValidator;

impl StyleValidator {
    /// Validates a style: font sizes must be positive and finite, grid alpha in `[0, 1]`.
    pub fn validate(style: &StyleConfig) -> Result<()> {
        for (key, size) in [
            (StyleKey::FontSize, style.font_size),
            (StyleKey::TitleSize, style.title_size),
            (StyleKey::LabelSize, style.label_size),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(FigureError::validation_field(
                    format!("font size must be a positive number, got {size}"),
                    key.as_str(),
                ));
            }
        }

        if !(0.0..=1.0).contains(&style.grid_alpha) {
            return Err(FigureError::validation_field(
                format!("grid alpha must lie in [0, 1], got {}", style.grid_alpha),
                StyleKey::GridAlpha.as_str(),
            ));
        }

        Ok(())
    }
}
