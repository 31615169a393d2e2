mod adapters;
mod core;
mod ports;
mod safety;

use adapters::airvisual::AirVisualClient;
use adapters::nominatim::NominatimClient;
use adapters::open_elevation::OpenElevationClient;
use adapters::telegram::TelegramClient;
use adapters::weather::WeatherClient;
use crate::core::engine::Services;
use crate::core::types::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenv::dotenv() {
        eprintln!("WARNING: .env load failed: {}", e);
    }
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    tracing::info!(
        "http_timeout={}s poll_timeout={}s nominatim={} open_meteo={} airvisual={} open_elevation={}",
        config.http_timeout_secs,
        config.poll_timeout_secs,
        config.nominatim_url,
        config.open_meteo_url,
        config.airvisual_url,
        config.open_elevation_url,
    );

    safety::validate_startup(&config)?;

    let _lock = safety::Lockfile::acquire(&config.lockfile_path)?;

    let http = adapters::http_client(&config)?;
    let geocoder = NominatimClient::new(http.clone(), &config);
    let weather = WeatherClient::new(http.clone(), &config);
    let air_quality = AirVisualClient::new(http.clone(), &config);
    let elevation = OpenElevationClient::new(http, &config);
    let messenger = TelegramClient::new(&config)?;

    let services = Services {
        geocoder: &geocoder,
        weather: &weather,
        air_quality: &air_quality,
        elevation: &elevation,
    };

    tracing::info!("Polling for messages");
    tokio::select! {
        result = crate::core::engine::run_polling(&messenger, &services) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("got SIGINT, shutting down");
            Ok(())
        }
    }
}
