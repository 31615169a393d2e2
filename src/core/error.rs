use thiserror::Error;

/// Why a place-name query could not be answered with a full report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("location not found")]
    LocationNotFound,
    #[error("air quality unavailable")]
    AirQualityUnavailable,
    #[error("weather unavailable")]
    WeatherUnavailable,
    #[error("elevation unavailable")]
    ElevationUnavailable,
}

impl LookupError {
    /// Text sent back to the user instead of a report.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::LocationNotFound => {
                "I can't find this city. Check the name and try again! 😕"
            }
            LookupError::AirQualityUnavailable => {
                "Couldn't get air quality data. Try again later, or there are no sensors in this city! 😕"
            }
            LookupError::WeatherUnavailable => "Couldn't get weather data. Try again later! 🤔",
            LookupError::ElevationUnavailable => {
                "Couldn't get the elevation for this place. Try again later! 🤔"
            }
        }
    }
}
