pub mod analyzer;
pub mod args;
pub mod field;
pub mod header;
pub mod hour;
pub mod report;
pub mod stats;
pub mod utils;

pub use analyzer::{TripAnalyzer, DEFAULT_TOP_K};
pub use args::Args;
pub use report::analyze_trips;
pub use stats::{AnalysisResult, SlotCount, ZoneCount};
