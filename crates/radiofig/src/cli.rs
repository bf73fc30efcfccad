//! Command line arguments.

use crate::error::{AppError, AppResult};
use clap::Parser;
use radiofig_common::{LogFormat, LoggingConfig};
use radiofig_config::StyleOverrides;
use radiofig_graphs::{FigureSaver, OutputLayout, SaveOptions, DEFAULT_DPI, IMAGES_DIR};
use std::path::PathBuf;

/// Generate the diagrams and charts of the amateur-radio exam study guide.
#[derive(Parser, Debug)]
#[command(name = "radiofig", author, version, about, long_about = None)]
pub struct Cli {
    /// Print the available diagram names and exit
    #[arg(long)]
    pub list: bool,

    /// Images root directory
    #[arg(long, value_name = "DIR", default_value = IMAGES_DIR)]
    pub images_dir: PathBuf,

    /// Output resolution in dots per inch
    #[arg(long, value_name = "DPI", default_value_t = DEFAULT_DPI,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub dpi: u32,

    /// Style override such as `font.size=11`, repeatable
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Enable debug logging, including failure traces
    #[arg(short, long)]
    pub verbose: bool,

    /// Log line format: plain, compact, pretty or json
    #[arg(long, value_name = "FORMAT", default_value = "plain")]
    pub log_format: LogFormat,

    /// Append log lines to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Diagrams to generate; all of them when omitted
    #[arg(value_name = "DIAGRAM")]
    pub diagrams: Vec<String>,
}

impl Cli {
    /// Collects the `--set` assignments, later ones winning.
    pub fn style_overrides(&self) -> AppResult<Option<StyleOverrides>> {
        if self.overrides.is_empty() {
            return Ok(None);
        }

        let mut overrides = StyleOverrides::new();
        for assignment in &self.overrides {
            overrides
                .set_assignment(assignment)
                .map_err(|err| AppError::invalid_argument("--set", err.to_string()))?;
        }
        Ok(Some(overrides))
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            format: self.log_format,
            file_path: self.log_file.clone(),
            ..LoggingConfig::for_verbosity(self.verbose)
        }
    }

    /// Saver writing below `--images-dir` at `--dpi`.
    pub fn saver(&self) -> FigureSaver {
        FigureSaver::new(
            OutputLayout::new(&self.images_dir),
            SaveOptions::default().with_dpi(self.dpi),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use radiofig_config::{StyleKey, StyleValue};
    use std::path::Path;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["radiofig"]).unwrap();
        assert!(!cli.list);
        assert!(!cli.verbose);
        assert_eq!(cli.images_dir, PathBuf::from("images"));
        assert_eq!(cli.dpi, 150);
        assert!(cli.diagrams.is_empty());
        assert!(cli.style_overrides().unwrap().is_none());
        assert_eq!(cli.saver().layout().root(), Path::new("images"));

        let logging = cli.logging_config();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, LogFormat::Plain);
        assert!(logging.file_path.is_none());
    }

    #[test]
    fn test_logging_flags() {
        let cli = Cli::try_parse_from([
            "radiofig",
            "--verbose",
            "--log-format",
            "json",
            "--log-file",
            "radiofig.log",
        ])
        .unwrap();

        let logging = cli.logging_config();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, LogFormat::Json);
        assert_eq!(logging.file_path, Some(PathBuf::from("radiofig.log")));

        assert!(Cli::try_parse_from(["radiofig", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn test_full_command_line() {
        let cli = Cli::try_parse_from([
            "radiofig",
            "-v",
            "--images-dir",
            "out",
            "--dpi",
            "300",
            "--set",
            "font.size=12",
            "--set",
            "axes.grid=false",
            "--set",
            "font.size=11",
            "resistore_vi",
            "trasmettitori",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.saver().options().dpi, 300);
        assert_eq!(cli.diagrams, vec!["resistore_vi", "trasmettitori"]);

        let overrides = cli.style_overrides().unwrap().unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get(StyleKey::FontSize), Some(&StyleValue::Number(11.0)));
        assert_eq!(overrides.get(StyleKey::Grid), Some(&StyleValue::Bool(false)));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Cli::try_parse_from(["radiofig", "--dpi", "0"]).is_err());

        let cli = Cli::try_parse_from(["radiofig", "--set", "font.size"]).unwrap();
        assert!(matches!(
            cli.style_overrides(),
            Err(AppError::InvalidArgument { .. })
        ));

        let cli = Cli::try_parse_from(["radiofig", "--set", "lines.width=2"]).unwrap();
        assert!(cli.style_overrides().is_err());
    }
}
