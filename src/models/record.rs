use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Location, Pollutant};

/// One generated observation: a single location at a single hour.
///
/// Concentrations are already clipped and rounded to their pollutant's
/// precision; AQI fields are `None` when the concentration lies above the
/// highest breakpoint segment. Records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiRecord {
    pub timestamp: NaiveDateTime,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,

    pub pm25: f64,
    pub pm10: f64,
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,

    pub aqi_pm25: Option<u16>,
    pub aqi_pm10: Option<u16>,
    pub aqi_co: Option<u16>,
    pub aqi_no2: Option<u16>,
    pub aqi_o3: Option<u16>,
    pub aqi_so2: Option<u16>,
}

impl AqiRecord {
    /// Assemble a record from per-pollutant samples in `Pollutant::ALL` order.
    pub fn from_samples(
        location: &Location,
        timestamp: NaiveDateTime,
        concentrations: [f64; 6],
        aqis: [Option<u16>; 6],
    ) -> Self {
        Self {
            timestamp,
            city: location.city.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            pm25: concentrations[0],
            pm10: concentrations[1],
            co: concentrations[2],
            no2: concentrations[3],
            o3: concentrations[4],
            so2: concentrations[5],
            aqi_pm25: aqis[0],
            aqi_pm10: aqis[1],
            aqi_co: aqis[2],
            aqi_no2: aqis[3],
            aqi_o3: aqis[4],
            aqi_so2: aqis[5],
        }
    }

    pub fn concentration(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Co => self.co,
            Pollutant::No2 => self.no2,
            Pollutant::O3 => self.o3,
            Pollutant::So2 => self.so2,
        }
    }

    pub fn aqi(&self, pollutant: Pollutant) -> Option<u16> {
        match pollutant {
            Pollutant::Pm25 => self.aqi_pm25,
            Pollutant::Pm10 => self.aqi_pm10,
            Pollutant::Co => self.aqi_co,
            Pollutant::No2 => self.aqi_no2,
            Pollutant::O3 => self.aqi_o3,
            Pollutant::So2 => self.aqi_so2,
        }
    }

    /// Row-wise worst AQI across the six pollutants.
    ///
    /// Missing values count as zero so an off-scale concentration never
    /// inflates downstream aggregates.
    pub fn max_aqi(&self) -> u16 {
        Pollutant::ALL
            .iter()
            .map(|&p| self.aqi(p).unwrap_or(0))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_record(aqis: [Option<u16>; 6]) -> AqiRecord {
        let location = Location::new("Testville", 50.0, 1.0);
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        AqiRecord::from_samples(&location, timestamp, [12.0, 54.0, 4.4, 53.0, 0.054, 35.0], aqis)
    }

    #[test]
    fn test_accessors_follow_registry_order() {
        let record = test_record([Some(50); 6]);
        assert_eq!(record.concentration(Pollutant::Pm25), 12.0);
        assert_eq!(record.concentration(Pollutant::O3), 0.054);
        assert_eq!(record.aqi(Pollutant::So2), Some(50));
    }

    #[test]
    fn test_max_aqi_picks_worst_pollutant() {
        let record = test_record([Some(42), Some(301), Some(7), None, Some(150), Some(88)]);
        assert_eq!(record.max_aqi(), 301);
    }

    #[test]
    fn test_max_aqi_treats_missing_as_zero() {
        let record = test_record([None; 6]);
        assert_eq!(record.max_aqi(), 0);
    }
}
