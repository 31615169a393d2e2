pub mod air_quality;
pub mod elevation;
pub mod geocoder;
pub mod messenger;
pub mod weather_feed;
