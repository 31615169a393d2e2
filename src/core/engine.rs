use crate::core::aqi::aqi_to_pm25;
use crate::core::dispatch::{Command, GREETING};
use crate::core::error::LookupError;
use crate::core::pollution::PollutionStatus;
use crate::core::report::compose_report;
use crate::core::types::*;
use crate::ports::air_quality::AirQualityFeed;
use crate::ports::elevation::ElevationFeed;
use crate::ports::geocoder::Geocoder;
use crate::ports::messenger::Messenger;
use crate::ports::weather_feed::WeatherFeed;
use std::fmt::Display;
use std::time::Duration;

/// The four lookups a report is built from.
pub struct Services<'a> {
    pub geocoder: &'a dyn Geocoder,
    pub weather: &'a dyn WeatherFeed,
    pub air_quality: &'a dyn AirQualityFeed,
    pub elevation: &'a dyn ElevationFeed,
}

/// Collapses an adapter result into "have data" or the given category.
fn require<T, E: Display>(
    result: Result<Option<T>, E>,
    source: &str,
    missing: LookupError,
) -> Result<T, LookupError> {
    match result {
        Ok(Some(v)) => Ok(v),
        Ok(None) => {
            tracing::info!("{} returned no data", source);
            Err(missing)
        }
        Err(e) => {
            tracing::warn!("{} failed: {}", source, e);
            Err(missing)
        }
    }
}

/// Runs the lookups in order: geocode, air quality, weather, elevation.
/// The first failure stops the chain; later services are not called.
pub async fn gather(services: &Services<'_>, query: &str) -> Result<ReportFields, LookupError> {
    let place = require(
        services.geocoder.locate(query).await,
        "Geocoder",
        LookupError::LocationNotFound,
    )?;
    let (lat, lon) = (place.latitude, place.longitude);

    let air = require(
        services.air_quality.nearest(lat, lon).await,
        "Air quality",
        LookupError::AirQualityUnavailable,
    )?;
    let pm25 = aqi_to_pm25(air.aqi).ok_or_else(|| {
        tracing::warn!("AQI {} outside the conversion table", air.aqi);
        LookupError::AirQualityUnavailable
    })?;

    let weather = require(
        services.weather.current(lat, lon).await,
        "Weather",
        LookupError::WeatherUnavailable,
    )?;

    let elevation = require(
        services.elevation.elevation(lat, lon).await,
        "Elevation",
        LookupError::ElevationUnavailable,
    )?;

    Ok(ReportFields {
        location: place.display_name,
        temperature: weather.temperature,
        humidity: air.humidity,
        windspeed: weather.windspeed,
        wind_direction: weather.wind_direction,
        pressure: air.pressure,
        elevation,
        pm25,
    })
}

/// Full reply text for one place-name query.
pub async fn answer(services: &Services<'_>, query: &str) -> String {
    match gather(services, query).await {
        Ok(fields) => {
            let status = PollutionStatus::classify(fields.pm25);
            tracing::info!(
                "{} → {} | PM2.5 {:.2} ({:?})",
                query, fields.location, fields.pm25, status
            );
            compose_report(&fields, status)
        }
        Err(e) => {
            tracing::info!("{} → {}", query, e);
            e.user_message().to_string()
        }
    }
}

/// Reply for a raw incoming text, `None` when the text gets no reply.
pub async fn reply_to(services: &Services<'_>, text: &str) -> Option<String> {
    match Command::parse(text)? {
        Command::Start => Some(GREETING.to_string()),
        Command::Lookup(query) => Some(answer(services, query).await),
    }
}

/// Long-polls the messenger forever, answering each message in turn.
pub async fn run_polling(messenger: &dyn Messenger, services: &Services<'_>) -> anyhow::Result<()> {
    let mut offset: Option<i64> = None;

    loop {
        let batch = match messenger.updates(offset).await {
            Ok(b) => b,
            Err(e) => {
                tracing::error!("Fetching updates failed: {}", e);
                tokio::time::sleep(Duration::from_secs(5)).await;
                continue;
            }
        };

        for message in batch {
            offset = Some(offset.unwrap_or(0).max(message.update_id + 1));
            handle(messenger, services, &message).await;
        }
    }
}

/// Answers one message. Send failures are logged, never propagated.
pub async fn handle(messenger: &dyn Messenger, services: &Services<'_>, message: &IncomingMessage) {
    let Some(text) = message.text.as_deref() else {
        tracing::debug!("Skipping non-text update {}", message.update_id);
        return;
    };
    let Some(reply) = reply_to(services, text).await else {
        return;
    };

    if let Err(e) = messenger.send(message.chat_id, &reply).await {
        tracing::error!("Reply to chat {} failed: {}", message.chat_id, e);
    }
}
