use crate::models::Pollutant;
use crate::utils::constants::{
    OVERNIGHT_FACTOR, RUSH_HOUR_FACTOR, SUMMER_FACTOR, WINTER_FACTOR,
};

/// Time-of-day multiplier.
///
/// Traffic pushes concentrations up 30% during the morning (07:00–09:00) and
/// evening (18:00–21:00) rush windows; the overnight lull (00:00–05:00) pulls
/// them down 30%. All windows are inclusive on both ends.
pub fn diurnal_factor(hour: u32) -> f64 {
    match hour {
        7..=9 | 18..=21 => RUSH_HOUR_FACTOR,
        0..=5 => OVERNIGHT_FACTOR,
        _ => 1.0,
    }
}

/// Day-of-year multiplier.
///
/// Winter inversion conditions (day-of-year >= 335 or <= 59, wrapping the
/// year boundary) raise seasonally sensitive pollutants 40%; summer mixing
/// (days 150–250) lowers them 30%. Ozone is not seasonally sensitive and
/// always gets 1.0.
pub fn seasonal_factor(day_of_year: u32, pollutant: Pollutant) -> f64 {
    if !pollutant.seasonally_sensitive() {
        return 1.0;
    }

    if day_of_year >= 335 || day_of_year <= 59 {
        WINTER_FACTOR
    } else if (150..=250).contains(&day_of_year) {
        SUMMER_FACTOR
    } else {
        1.0
    }
}
