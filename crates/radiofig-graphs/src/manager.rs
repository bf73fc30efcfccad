//! Diagram registry for selecting and generating diagrams by name.

use crate::diagrams::{
    AmModulation, Interference, MagneticField, ModulationComparison, PhoneticAlphabet, Propagation,
    ResistorVi, SineWave, SquareWave, Transmitters,
};
use crate::saver::FigureSaver;
use crate::traits::Diagram;
use radiofig_common::{FigureError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Holds the available diagrams in registration order.
pub struct DiagramRegistry {
    diagrams: Vec<Box<dyn Diagram>>,
}

impl DiagramRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            diagrams: Vec::new(),
        }
    }

    /// Creates a registry holding every built-in diagram.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ResistorVi));
        registry.register(Box::new(MagneticField));
        registry.register(Box::new(SineWave));
        registry.register(Box::new(SquareWave));
        registry.register(Box::new(AmModulation));
        registry.register(Box::new(ModulationComparison));
        registry.register(Box::new(PhoneticAlphabet));
        registry.register(Box::new(Transmitters));
        registry.register(Box::new(Propagation));
        registry.register(Box::new(Interference));
        registry
    }

    /// Adds a diagram, replacing any earlier one with the same name.
    pub fn register(&mut self, diagram: Box<dyn Diagram>) {
        self.diagrams.retain(|existing| existing.name() != diagram.name());
        self.diagrams.push(diagram);
    }

    /// Looks a diagram up by name.
    pub fn get(&self, name: &str) -> Option<&dyn Diagram> {
        self.diagrams
            .iter()
            .find(|diagram| diagram.name() == name)
            .map(|diagram| &**diagram)
    }

    /// Looks a diagram up by name, failing for unknown names.
    pub fn require(&self, name: &str) -> Result<&dyn Diagram> {
        self.get(name).ok_or_else(|| {
            FigureError::validation_field(
                format!(
                    "unknown diagram '{name}', available: {}",
                    self.names().join(", ")
                ),
                "diagram",
            )
        })
    }

    /// Names of all registered diagrams.
    pub fn names(&self) -> Vec<&'static str> {
        self.diagrams.iter().map(|diagram| diagram.name()).collect()
    }

    /// Iterates over the registered diagrams.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Diagram> {
        self.diagrams.iter().map(|diagram| &**diagram)
    }

    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }

    /// Generates the named diagram.
    pub fn generate(&self, name: &str, saver: &FigureSaver) -> Result<Vec<PathBuf>> {
        let diagram = self.require(name)?;
        debug!(diagram = name, "Generating diagram");
        diagram.generate(saver)
    }
}

impl Default for DiagramRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Stub(&'static str);

    impl Diagram for Stub {
        fn name(&self) -> &'static str {
            self.0
        }

        fn description(&self) -> &'static str {
            "stub"
        }

        fn generate(&self, _saver: &FigureSaver) -> Result<Vec<PathBuf>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let registry = DiagramRegistry::builtin();
        let names = registry.names();
        assert_eq!(names.len(), 10);
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
        assert_eq!(names[0], "resistore_vi");
        assert!(registry.iter().all(|diagram| !diagram.description().is_empty()));
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = DiagramRegistry::default();
        assert_eq!(registry.get("trasmettitori").map(|d| d.name()), Some("trasmettitori"));
        assert!(registry.get("missing").is_none());

        let err = registry
            .require("missing")
            .err()
            .expect("unknown names are rejected");
        assert_eq!(err.field(), Some("diagram"));
        assert!(err.to_string().contains("resistore_vi"));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = DiagramRegistry::new();
        assert!(registry.is_empty());
        registry.register(Box::new(Stub("a")));
        registry.register(Box::new(Stub("b")));
        registry.register(Box::new(Stub("a")));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["b", "a"]);
        assert!(registry.generate("a", &FigureSaver::default()).unwrap().is_empty());
    }
}
