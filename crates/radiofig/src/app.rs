//! Wiring of the command line to the diagram registry and the runner.

use crate::cli::Cli;
use crate::error::AppResult;
use crate::runner::{run_batch, BatchSummary};
use radiofig_config::apply_style;
use radiofig_graphs::DiagramRegistry;
use std::fmt::Write;
use tracing::{debug, info};

/// One line per registered diagram: its name and description.
pub fn list_diagrams(registry: &DiagramRegistry) -> String {
    let width = registry.names().iter().map(|name| name.len()).max().unwrap_or(0);
    let mut listing = String::new();
    for diagram in registry.iter() {
        let _ = writeln!(
            listing,
            "{:<width$}  {}",
            diagram.name(),
            diagram.description()
        );
    }
    listing
}

/// Applies the style overrides and generates the selected diagrams, each
/// under the error-wrapped runner.
///
/// Unknown diagram names run as failing entries so they show up in the
/// batch summary.
pub fn run(cli: &Cli, registry: &DiagramRegistry) -> AppResult<BatchSummary> {
    let overrides = cli.style_overrides()?;
    apply_style(overrides.as_ref())?;

    let selected: Vec<String> = if cli.diagrams.is_empty() {
        registry.names().into_iter().map(str::to_string).collect()
    } else {
        cli.diagrams.clone()
    };
    let saver = cli.saver();
    info!(
        images_dir = %saver.layout().root().display(),
        dpi = saver.options().dpi,
        "Generating {} diagram(s)",
        selected.len()
    );

    let saver = &saver;
    let entries = selected.into_iter().map(|name| {
        let label = name.clone();
        let entry = move || -> anyhow::Result<()> {
            let paths = registry.generate(&name, saver)?;
            debug!(diagram = %name, files = paths.len(), "Diagram generated");
            Ok(())
        };
        (label, entry)
    });

    Ok(run_batch(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_has_every_diagram() {
        let registry = DiagramRegistry::builtin();
        let listing = list_diagrams(&registry);
        assert_eq!(listing.lines().count(), registry.len());
        assert!(listing.lines().any(|line| line.starts_with("alfabeto_fonetico ")));
        assert!(listing.contains("NATO/ICAO phonetic alphabet table"));
    }
}
