/// One row of the US AQI → PM2.5 breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiBand {
    pub low_aqi: i64,
    pub high_aqi: i64,
    pub low_pm25: f64,
    pub high_pm25: f64,
}

impl AqiBand {
    const fn new(low_aqi: i64, high_aqi: i64, low_pm25: f64, high_pm25: f64) -> Self {
        Self {
            low_aqi,
            high_aqi,
            low_pm25,
            high_pm25,
        }
    }

    pub fn contains(&self, aqi: i64) -> bool {
        self.low_aqi <= aqi && aqi <= self.high_aqi
    }

    fn interpolate(&self, aqi: i64) -> f64 {
        let fraction = (aqi - self.low_aqi) as f64 / (self.high_aqi - self.low_aqi) as f64;
        self.low_pm25 + fraction * (self.high_pm25 - self.low_pm25)
    }
}

/// Sorted ascending; adjacent bands never share an AQI value.
pub const AQI_BANDS: [AqiBand; 7] = [
    AqiBand::new(0, 50, 0.0, 9.0),
    AqiBand::new(51, 100, 9.1, 35.4),
    AqiBand::new(101, 150, 35.5, 55.4),
    AqiBand::new(151, 200, 55.5, 125.4),
    AqiBand::new(201, 300, 125.5, 225.4),
    AqiBand::new(301, 400, 225.5, 350.4),
    AqiBand::new(401, 500, 350.5, 500.4),
];

/// Converts a US AQI reading to a PM2.5 concentration in µg/m³.
///
/// Returns `None` when the AQI falls outside 0..=500. The result is rounded
/// to two decimals, half away from zero.
pub fn aqi_to_pm25(aqi: i64) -> Option<f64> {
    AQI_BANDS
        .iter()
        .find(|band| band.contains(aqi))
        .map(|band| round2(band.interpolate(aqi)))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_partition_the_domain() {
        assert_eq!(AQI_BANDS[0].low_aqi, 0);
        assert_eq!(AQI_BANDS[AQI_BANDS.len() - 1].high_aqi, 500);
        for pair in AQI_BANDS.windows(2) {
            assert_eq!(pair[0].high_aqi + 1, pair[1].low_aqi);
            assert!(pair[0].high_pm25 < pair[1].low_pm25);
        }
        for aqi in 0..=500 {
            let matches = AQI_BANDS.iter().filter(|b| b.contains(aqi)).count();
            assert_eq!(matches, 1, "AQI {} matched {} bands", aqi, matches);
        }
    }

    #[test]
    fn band_edges() {
        assert_eq!(aqi_to_pm25(0), Some(0.0));
        assert_eq!(aqi_to_pm25(50), Some(9.0));
        assert_eq!(aqi_to_pm25(51), Some(9.1));
        assert_eq!(aqi_to_pm25(100), Some(35.4));
        assert_eq!(aqi_to_pm25(300), Some(225.4));
        assert_eq!(aqi_to_pm25(500), Some(500.4));
    }

    #[test]
    fn results_stay_inside_their_band() {
        for aqi in [0, 50, 51, 100, 300, 500] {
            let band = AQI_BANDS.iter().find(|b| b.contains(aqi)).unwrap();
            let pm25 = aqi_to_pm25(aqi).unwrap();
            assert!(
                band.low_pm25 <= pm25 && pm25 <= band.high_pm25,
                "AQI {} → {} outside {:?}",
                aqi,
                pm25,
                band
            );
        }
    }

    #[test]
    fn interpolates_mid_band() {
        // 9.1 + 24/49 * 26.3 = 21.981...
        assert_eq!(aqi_to_pm25(75), Some(21.98));
        // 55.5 + 24/49 * 69.9 = 89.736...
        assert_eq!(aqi_to_pm25(175), Some(89.74));
    }

    #[test]
    fn out_of_range_has_no_value() {
        assert_eq!(aqi_to_pm25(-1), None);
        assert_eq!(aqi_to_pm25(501), None);
        assert_eq!(aqi_to_pm25(i64::MAX), None);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(2.675_000_1), 2.68);
        assert_eq!(round2(1.004), 1.0);
    }
}
