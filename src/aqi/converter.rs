use super::breakpoints::{table, Breakpoint};
use crate::models::Pollutant;

/// Convert a pollutant concentration to its AQI value.
///
/// Scans the pollutant's breakpoint table in ascending order and linearly
/// interpolates within the first segment whose concentration range contains
/// the value:
///
/// `aqi = (aqi_high - aqi_low) / (conc_high - conc_low) * (conc - conc_low) + aqi_low`
///
/// The interpolated value is rounded half away from zero (`f64::round`), so a
/// fractional AQI of exactly .5 rounds up. Tables are disjoint, which keeps
/// first-match-wins well defined at segment edges.
///
/// Returns `None` when the concentration lies above every defined segment.
/// The generator clips concentrations first, but the NO2 and SO2 ceilings sit
/// just above the last table segment, and ozone has no segments past 0.200,
/// so clipped values can still land off-scale.
pub fn aqi_from_concentration(concentration: f64, pollutant: Pollutant) -> Option<u16> {
    table(pollutant)
        .iter()
        .find(|segment| segment.conc_low <= concentration && concentration <= segment.conc_high)
        .map(|segment| interpolate(concentration, segment))
}

fn interpolate(concentration: f64, segment: &Breakpoint) -> u16 {
    let aqi_span = f64::from(segment.aqi_high - segment.aqi_low);
    let conc_span = segment.conc_high - segment.conc_low;
    let aqi = aqi_span / conc_span * (concentration - segment.conc_low) + f64::from(segment.aqi_low);
    aqi.round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_boundaries_map_to_boundary_aqi() {
        // Every published boundary concentration must return exactly the
        // boundary AQI value on both sides of the seam.
        for pollutant in Pollutant::ALL {
            for segment in table(pollutant) {
                assert_eq!(
                    aqi_from_concentration(segment.conc_low, pollutant),
                    Some(segment.aqi_low),
                    "{:?} at {}",
                    pollutant,
                    segment.conc_low
                );
                assert_eq!(
                    aqi_from_concentration(segment.conc_high, pollutant),
                    Some(segment.aqi_high),
                    "{:?} at {}",
                    pollutant,
                    segment.conc_high
                );
            }
        }
    }

    #[test]
    fn test_pm25_seam_values() {
        assert_eq!(aqi_from_concentration(12.0, Pollutant::Pm25), Some(50));
        assert_eq!(aqi_from_concentration(12.1, Pollutant::Pm25), Some(51));
    }

    #[test]
    fn test_interior_values() {
        // Hand-checked against the interpolation formula.
        assert_eq!(aqi_from_concentration(7.0, Pollutant::Pm25), Some(29));
        assert_eq!(aqi_from_concentration(10.0, Pollutant::Co), Some(109));
        assert_eq!(aqi_from_concentration(0.100, Pollutant::O3), Some(187));
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // PM2.5 0.12 interpolates to exactly 0.5 in the first segment
        // (50 / 12 * 0.12); the pinned rounding rule takes it to 1, where
        // round-half-to-even would give 0.
        assert_eq!(aqi_from_concentration(0.12, Pollutant::Pm25), Some(1));
    }

    #[test]
    fn test_monotonic_within_each_segment() {
        for pollutant in Pollutant::ALL {
            for segment in table(pollutant) {
                let mut previous = 0;
                for step in 0..=100 {
                    let conc = segment.conc_low
                        + (segment.conc_high - segment.conc_low) * f64::from(step) / 100.0;
                    let aqi = aqi_from_concentration(conc, pollutant).unwrap();
                    assert!(aqi >= previous, "{:?} at {}", pollutant, conc);
                    previous = aqi;
                }
            }
        }
    }

    #[test]
    fn test_off_scale_concentrations_have_no_aqi() {
        assert_eq!(aqi_from_concentration(0.25, Pollutant::O3), None);
        assert_eq!(aqi_from_concentration(2050.0, Pollutant::No2), None);
        assert_eq!(aqi_from_concentration(1005.0, Pollutant::So2), None);
    }

    #[test]
    fn test_ceiling_values_within_tables_convert() {
        assert_eq!(aqi_from_concentration(500.0, Pollutant::Pm25), Some(500));
        assert_eq!(aqi_from_concentration(0.2, Pollutant::O3), Some(300));
        assert_eq!(aqi_from_concentration(50.0, Pollutant::Co), Some(496));
    }

    #[test]
    fn test_negative_concentration_has_no_aqi() {
        assert_eq!(aqi_from_concentration(-1.0, Pollutant::Pm25), None);
    }
}
