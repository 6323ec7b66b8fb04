pub mod location;
pub mod pollutant;
pub mod record;

pub use location::{monitored_locations, Location};
pub use pollutant::Pollutant;
pub use record::AqiRecord;
