pub mod modulation;
pub mod synthesizer;

pub use modulation::{diurnal_factor, seasonal_factor};
pub use synthesizer::SeriesGenerator;
