use serde::{Deserialize, Serialize};

/// The closed set of pollutants the generator models.
///
/// Each variant carries a static profile: display labels, the uniform range
/// base concentrations are drawn from, the post-modulation ceiling, the
/// rounding precision used in the output table, and whether the pollutant
/// follows the winter/summer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    Pm25,
    Pm10,
    Co,
    No2,
    O3,
    So2,
}

impl Pollutant {
    /// All pollutants, in output-column order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Co,
        Pollutant::No2,
        Pollutant::O3,
        Pollutant::So2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::So2 => "SO2",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => "µg/m³",
            Pollutant::Co | Pollutant::O3 => "ppm",
            Pollutant::No2 | Pollutant::So2 => "ppb",
        }
    }

    /// Short machine-friendly name, used for Parquet/Arrow column names.
    pub fn key(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::Co => "co",
            Pollutant::No2 => "no2",
            Pollutant::O3 => "o3",
            Pollutant::So2 => "so2",
        }
    }

    /// Concentration column header used by the CSV export and the dashboard.
    pub fn column_label(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5 (µg/m³)",
            Pollutant::Pm10 => "PM10 (µg/m³)",
            Pollutant::Co => "CO (ppm)",
            Pollutant::No2 => "NO2 (ppb)",
            Pollutant::O3 => "O3 (ppm)",
            Pollutant::So2 => "SO2 (ppb)",
        }
    }

    /// AQI column header used by the CSV export and the dashboard.
    pub fn aqi_column_label(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "AQI_PM2.5",
            Pollutant::Pm10 => "AQI_PM10",
            Pollutant::Co => "AQI_CO",
            Pollutant::No2 => "AQI_NO2",
            Pollutant::O3 => "AQI_O3",
            Pollutant::So2 => "AQI_SO2",
        }
    }

    /// Uniform range base concentrations are drawn from, before modulation.
    pub fn base_range(&self) -> (f64, f64) {
        match self {
            Pollutant::Pm25 => (5.0, 50.0),
            Pollutant::Pm10 => (10.0, 80.0),
            Pollutant::Co => (0.2, 8.0),
            Pollutant::No2 => (10.0, 120.0),
            Pollutant::O3 => (0.02, 0.09),
            Pollutant::So2 => (5.0, 50.0),
        }
    }

    /// Hard ceiling applied after modulation and outlier injection.
    pub fn ceiling(&self) -> f64 {
        match self {
            Pollutant::Pm25 => 500.0,
            Pollutant::Pm10 => 600.0,
            Pollutant::Co => 50.0,
            Pollutant::No2 => 2050.0,
            Pollutant::O3 => 0.2,
            Pollutant::So2 => 1005.0,
        }
    }

    /// Decimal places concentrations are rounded to in the output table.
    pub fn decimals(&self) -> u32 {
        match self {
            Pollutant::Co => 2,
            Pollutant::O3 => 3,
            _ => 1,
        }
    }

    /// Whether the pollutant follows the winter/summer seasonal cycle.
    ///
    /// Particulates and combustion gases build up under winter inversion
    /// layers; ozone is photochemical and keeps a flat seasonal profile here.
    pub fn seasonally_sensitive(&self) -> bool {
        !matches!(self, Pollutant::O3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_output_columns() {
        let labels: Vec<&str> = Pollutant::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["PM2.5", "PM10", "CO", "NO2", "O3", "SO2"]);
    }

    #[test]
    fn test_only_ozone_is_seasonally_flat() {
        for pollutant in Pollutant::ALL {
            assert_eq!(
                pollutant.seasonally_sensitive(),
                pollutant != Pollutant::O3
            );
        }
    }

    #[test]
    fn test_base_ranges_sit_below_ceilings() {
        for pollutant in Pollutant::ALL {
            let (low, high) = pollutant.base_range();
            assert!(low < high);
            assert!(high < pollutant.ceiling());
        }
    }

    #[test]
    fn test_column_labels_include_units() {
        assert_eq!(Pollutant::Pm25.column_label(), "PM2.5 (µg/m³)");
        assert_eq!(Pollutant::Co.column_label(), "CO (ppm)");
        assert_eq!(Pollutant::So2.aqi_column_label(), "AQI_SO2");
    }
}
