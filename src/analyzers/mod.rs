pub mod summary;

pub use summary::{DatasetAnalyzer, DatasetStatistics, LocationSummary, PollutantStatistics};
