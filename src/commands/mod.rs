//! Command implementations

pub mod languages;
pub mod simple;
pub mod simulate;

pub use languages::{LanguageRow, describe};
pub use simple::run_simple;
pub use simulate::{GameRecord, LanguageStats, SimulationResult, run_simulation};
