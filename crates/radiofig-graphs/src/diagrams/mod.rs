//! The study-guide diagrams.

pub mod functions;
pub mod interference;
pub mod ionosphere;
pub mod modulation;
pub mod phonetic_alphabet;
pub mod transmitters;

pub use functions::{AmModulation, MagneticField, ResistorVi, SineWave, SquareWave};
pub use interference::Interference;
pub use ionosphere::Propagation;
pub use modulation::ModulationComparison;
pub use phonetic_alphabet::PhoneticAlphabet;
pub use transmitters::Transmitters;
