use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(length(min = 1))]
    pub city: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Location {
    pub fn new(city: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            city: city.to_string(),
            latitude,
            longitude,
        }
    }
}

/// The fixed set of monitored locations, iterated in this order by the
/// generator for every request.
pub fn monitored_locations() -> Vec<Location> {
    vec![
        Location::new("New York", 40.7128, -74.0060),
        Location::new("Los Angeles", 34.0522, -118.2437),
        Location::new("London", 51.5074, -0.1278),
        Location::new("Tokyo", 35.6895, 139.6917),
        Location::new("Delhi", 28.7041, 77.1025),
    ]
}
