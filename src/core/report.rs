use crate::core::pollution::PollutionStatus;
use crate::core::types::ReportFields;

/// Renders the reply for a successful lookup.
///
/// Elevation is rounded to whole meters (half away from zero) and PM2.5 is
/// always printed with two decimals. Everything else uses `Display`, so no
/// precision is lost.
pub fn compose_report(fields: &ReportFields, status: PollutionStatus) -> String {
    format!(
        "Weather in {location}:\n\
         Temperature: {temperature}°C\n\
         Humidity: {humidity}%\n\
         Wind: {windspeed} km/h\n\
         Wind direction: {wind_direction}°\n\
         Pressure: {pressure} mmHg\n\
         Elevation above sea level {elevation} m\n\
         \n\
         PM2.5 pollution: {pm25:.2} µg/m³\n\
         {status}",
        location = fields.location,
        temperature = fields.temperature,
        humidity = fields.humidity,
        windspeed = fields.windspeed,
        wind_direction = fields.wind_direction,
        pressure = fields.pressure,
        elevation = fields.elevation.round() as i64,
        pm25 = fields.pm25,
        status = status.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReportFields {
        ReportFields {
            location: "Almaty".into(),
            temperature: -2.3,
            humidity: 81.0,
            windspeed: 7.6,
            wind_direction: 195.0,
            pressure: 1021.0,
            elevation: 851.6,
            pm25: 21.98,
        }
    }

    #[test]
    fn renders_template_verbatim() {
        let report = compose_report(&sample(), PollutionStatus::SlightlyPolluted);
        let expected = "Weather in Almaty:\n\
                        Temperature: -2.3°C\n\
                        Humidity: 81%\n\
                        Wind: 7.6 km/h\n\
                        Wind direction: 195°\n\
                        Pressure: 1021 mmHg\n\
                        Elevation above sea level 852 m\n\
                        \n\
                        PM2.5 pollution: 21.98 µg/m³\n\
                        🟡 Slightly polluted";
        assert_eq!(report, expected);
    }

    #[test]
    fn pm25_keeps_two_decimals() {
        let mut fields = sample();
        fields.pm25 = 0.0;
        let report = compose_report(&fields, PollutionStatus::Clean);
        assert!(report.contains("PM2.5 pollution: 0.00 µg/m³\n"));

        fields.pm25 = 500.4;
        let report = compose_report(&fields, PollutionStatus::VeryHarmful);
        assert!(report.contains("PM2.5 pollution: 500.40 µg/m³\n"));
    }

    #[test]
    fn elevation_rounds_to_nearest_meter() {
        let mut fields = sample();
        fields.elevation = -27.4;
        assert!(compose_report(&fields, PollutionStatus::Clean)
            .contains("Elevation above sea level -27 m\n"));
        fields.elevation = 0.5;
        assert!(compose_report(&fields, PollutionStatus::Clean)
            .contains("Elevation above sea level 1 m\n"));
    }

    #[test]
    fn fractional_readings_survive() {
        let mut fields = sample();
        fields.temperature = 18.25;
        fields.humidity = 43.5;
        fields.windspeed = 12.125;
        let report = compose_report(&fields, PollutionStatus::Clean);
        assert!(report.contains("Temperature: 18.25°C\n"));
        assert!(report.contains("Humidity: 43.5%\n"));
        assert!(report.contains("Wind: 12.125 km/h\n"));
    }

    #[test]
    fn ends_with_status_label() {
        let report = compose_report(&sample(), PollutionStatus::Harmful);
        assert!(report.ends_with(PollutionStatus::Harmful.label()));
    }
}
