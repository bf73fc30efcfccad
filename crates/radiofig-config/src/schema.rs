//! Style schema definitions: typed option names, values and the effective configuration.

use radiofig_common::{FigureError, Result, Rgb};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Names of the plotting options the style initializer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StyleKey {
    /// Base font size in points.
    #[serde(rename = "font.size")]
    FontSize,
    /// Axes title font size in points.
    #[serde(rename = "axes.titlesize")]
    TitleSize,
    /// Axis label font size in points.
    #[serde(rename = "axes.labelsize")]
    LabelSize,
    /// Whole-figure background.
    #[serde(rename = "figure.facecolor")]
    FigureFaceColor,
    /// Plotting-area background.
    #[serde(rename = "axes.facecolor")]
    AxesFaceColor,
    /// Grid visibility.
    #[serde(rename = "axes.grid")]
    Grid,
    /// Grid line opacity in `[0, 1]`.
    #[serde(rename = "grid.alpha")]
    GridAlpha,
}

impl StyleKey {
    /// Every key, in display order.
    pub const ALL: [StyleKey; 7] = [
        StyleKey::FontSize,
        StyleKey::TitleSize,
        StyleKey::LabelSize,
        StyleKey::FigureFaceColor,
        StyleKey::AxesFaceColor,
        StyleKey::Grid,
        StyleKey::GridAlpha,
    ];

    /// The option name as written by users.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKey::FontSize => "font.size",
            StyleKey::TitleSize => "axes.titlesize",
            StyleKey::LabelSize => "axes.labelsize",
            StyleKey::FigureFaceColor => "figure.facecolor",
            StyleKey::AxesFaceColor => "axes.facecolor",
            StyleKey::Grid => "axes.grid",
            StyleKey::GridAlpha => "grid.alpha",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        StyleKey::ALL
            .into_iter()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| FigureError::config(format!("unknown style option '{name}'")))
    }
}

/// A loosely typed option value, checked against its key when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// `true` / `false`.
    Bool(bool),
    /// Any number.
    Number(f64),
    /// Free text, used for colors.
    Text(String),
}

impl StyleValue {
    /// Parses a command-line value: a JSON scalar if it is one, text otherwise.
    pub fn parse_cli(raw: &str) -> Self {
        match serde_json::from_str::<StyleValue>(raw.trim()) {
            Ok(value) => value,
            Err(_) => StyleValue::Text(raw.trim().to_string()),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            StyleValue::Bool(_) => "a boolean",
            StyleValue::Number(_) => "a number",
            StyleValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Bool(b) => write!(f, "{b}"),
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Text(t) => f.write_str(t),
        }
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<Rgb> for StyleValue {
    fn from(value: Rgb) -> Self {
        StyleValue::Text(value.to_hex())
    }
}

/// The effective plotting style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Base font size in points.
    pub font_size: f64,
    /// Title font size in points.
    pub title_size: f64,
    /// Axis label font size in points.
    pub label_size: f64,
    /// Figure background color.
    pub figure_facecolor: Rgb,
    /// Plotting-area background color.
    pub axes_facecolor: Rgb,
    /// Whether grids are drawn.
    pub grid: bool,
    /// Grid line opacity.
    pub grid_alpha: f64,
}

impl StyleConfig {
    /// Reads one option as a loosely typed value.
    pub fn get(&self, key: StyleKey) -> StyleValue {
        match key {
            StyleKey::FontSize => self.font_size.into(),
            StyleKey::TitleSize => self.title_size.into(),
            StyleKey::LabelSize => self.label_size.into(),
            StyleKey::FigureFaceColor => self.figure_facecolor.into(),
            StyleKey::AxesFaceColor => self.axes_facecolor.into(),
            StyleKey::Grid => self.grid.into(),
            StyleKey::GridAlpha => self.grid_alpha.into(),
        }
    }

    /// Writes one option, rejecting values of the wrong kind for the key.
    pub fn set(&mut self, key: StyleKey, value: &StyleValue) -> Result<()> {
        match key {
            StyleKey::FontSize => self.font_size = expect_number(key, value)?,
            StyleKey::TitleSize => self.title_size = expect_number(key, value)?,
            StyleKey::LabelSize => self.label_size = expect_number(key, value)?,
            StyleKey::FigureFaceColor => self.figure_facecolor = expect_color(key, value)?,
            StyleKey::AxesFaceColor => self.axes_facecolor = expect_color(key, value)?,
            StyleKey::Grid => self.grid = expect_bool(key, value)?,
            StyleKey::GridAlpha => self.grid_alpha = expect_number(key, value)?,
        }
        Ok(())
    }

    /// The whole configuration as an ordered option map.
    pub fn to_map(&self) -> BTreeMap<StyleKey, StyleValue> {
        StyleKey::ALL.into_iter().map(|key| (key, self.get(key))).collect()
    }

    /// Built-in defaults with `overrides` applied on top, then validated.
    pub fn with_overrides(overrides: &StyleOverrides) -> Result<Self> {
        let mut style = Self::default();
        for (key, value) in overrides.iter() {
            style.set(*key, value)?;
        }
        crate::validator::StyleValidator::validate(&style)?;
        Ok(style)
    }
}

fn mismatch(key: StyleKey, expected: &str, value: &StyleValue) -> FigureError {
    FigureError::config(format!(
        "style option '{key}' expects {expected}, got {} ({value})",
        value.kind()
    ))
}

fn expect_number(key: StyleKey, value: &StyleValue) -> Result<f64> {
    match value {
        StyleValue::Number(n) => Ok(*n),
        other => Err(mismatch(key, "a number", other)),
    }
}

fn expect_bool(key: StyleKey, value: &StyleValue) -> Result<bool> {
    match value {
        StyleValue::Bool(b) => Ok(*b),
        StyleValue::Text(t) if t.eq_ignore_ascii_case("true") => Ok(true),
        StyleValue::Text(t) if t.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(mismatch(key, "a boolean", other)),
    }
}

fn expect_color(key: StyleKey, value: &StyleValue) -> Result<Rgb> {
    match value {
        StyleValue::Text(t) => Rgb::parse(t).map_err(|e| {
            FigureError::config_with_source(format!("style option '{key}' has a bad color"), e)
        }),
        other => Err(mismatch(key, "a color", other)),
    }
}

/// Caller-supplied style overrides. Setting a key twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleOverrides {
    values: BTreeMap<StyleKey, StyleValue>,
}

impl StyleOverrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a typed key, replacing any earlier value.
    pub fn set(&mut self, key: StyleKey, value: impl Into<StyleValue>) -> &mut Self {
        self.values.insert(key, value.into());
        self
    }

    /// Sets an option by name; unknown names are rejected.
    pub fn set_named(&mut self, name: &str, value: impl Into<StyleValue>) -> Result<&mut Self> {
        let key: StyleKey = name.parse()?;
        Ok(self.set(key, value))
    }

    /// Parses and applies a `key=value` assignment as given on the command line.
    pub fn set_assignment(&mut self, assignment: &str) -> Result<&mut Self> {
        let (name, raw) = assignment.split_once('=').ok_or_else(|| {
            FigureError::config(format!("expected KEY=VALUE, got '{assignment}'"))
        })?;
        let value = StyleValue::parse_cli(raw);
        self.set_named(name, value)
    }

    /// The value set for `key`, if any.
    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.values.get(&key)
    }

    /// Iterates the overrides in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        self.values.iter()
    }

    /// Number of overridden keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(StyleKey, StyleValue)> for StyleOverrides {
    fn from_iter<I: IntoIterator<Item = (StyleKey, StyleValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in StyleKey::ALL {
            assert_eq!(key.as_str().parse::<StyleKey>().unwrap(), key);
        }
        assert!("lines.linewidth".parse::<StyleKey>().is_err());
    }

    #[test]
    fn test_parse_cli_values() {
        assert_eq!(StyleValue::parse_cli("12"), StyleValue::Number(12.0));
        assert_eq!(StyleValue::parse_cli("0.5"), StyleValue::Number(0.5));
        assert_eq!(StyleValue::parse_cli("false"), StyleValue::Bool(false));
        assert_eq!(StyleValue::parse_cli("white"), StyleValue::from("white"));
        assert_eq!(StyleValue::parse_cli("\"#f0f9ff\""), StyleValue::from("#f0f9ff"));
    }

    #[test]
    fn test_set_rejects_wrong_kind() {
        let mut style = StyleConfig::default();
        let err = style.set(StyleKey::FontSize, &"big".into()).unwrap_err();
        assert!(err.to_string().contains("font.size"));
        assert_eq!(style, StyleConfig::default());

        assert!(style.set(StyleKey::Grid, &StyleValue::Number(1.0)).is_err());
        assert!(style.set(StyleKey::AxesFaceColor, &"nocolor".into()).is_err());
    }

    #[test]
    fn test_grid_accepts_text_booleans() {
        let mut style = StyleConfig::default();
        style.set(StyleKey::Grid, &"False".into()).unwrap();
        assert!(!style.grid);
    }

    #[test]
    fn test_assignment_parsing() {
        let mut overrides = StyleOverrides::new();
        overrides.set_assignment("font.size=14").unwrap();
        overrides.set_assignment("figure.facecolor=#f0f9ff").unwrap();

        assert_eq!(overrides.get(StyleKey::FontSize), Some(&StyleValue::Number(14.0)));
        assert_eq!(
            overrides.get(StyleKey::FigureFaceColor),
            Some(&StyleValue::from("#f0f9ff"))
        );
        assert!(overrides.set_assignment("font.size").is_err());
        assert!(overrides.set_assignment("bogus=1").is_err());
    }

    #[test]
    fn test_later_override_wins() {
        let mut overrides = StyleOverrides::new();
        overrides.set(StyleKey::GridAlpha, 0.1).set(StyleKey::GridAlpha, 0.7);
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get(StyleKey::GridAlpha), Some(&StyleValue::Number(0.7)));
    }

    #[test]
    fn test_overrides_serialize_with_option_names() {
        let mut overrides = StyleOverrides::new();
        overrides.set(StyleKey::Grid, false);
        let json = serde_json::to_string(&overrides).unwrap();
        assert_eq!(json, r#"{"axes.grid":false}"#);

        let back: StyleOverrides = serde_json::from_str(&json).unwrap();
        assert_eq!(back, overrides);
    }
}
