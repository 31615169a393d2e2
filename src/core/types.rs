use serde::Deserialize;

// ── Lookup Results ──

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeather {
    /// °C
    pub temperature: f64,
    /// km/h
    pub windspeed: f64,
    #[serde(rename = "winddirection")]
    pub wind_direction: f64,
}

/// Raw nearest-station reading, before the AQI is converted to PM2.5.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQuality {
    pub aqi: i64,
    pub pressure: f64,
    pub humidity: f64,
}

// ── Report ──

#[derive(Debug, Clone, PartialEq)]
pub struct ReportFields {
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub wind_direction: f64,
    pub pressure: f64,
    pub elevation: f64,
    pub pm25: f64,
}

// ── Messaging ──

#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub update_id: i64,
    pub chat_id: i64,
    pub text: Option<String>,
}

// ── Config ──

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    pub airvisual_api_key: String,
    pub telegram_api_url: String,
    pub nominatim_url: String,
    pub open_meteo_url: String,
    pub airvisual_url: String,
    pub open_elevation_url: String,
    pub http_timeout_secs: u64,
    pub poll_timeout_secs: u64,
    pub user_agent: String,
    pub lockfile_path: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = |key: &str, default: &str| {
            var(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.into())
                .trim_end_matches('/')
                .to_string()
        };
        let secs = |key: &str, default: u64| -> anyhow::Result<u64> {
            match var(key) {
                Some(v) => v
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("{} must be a whole number of seconds, got {:?}", key, v)),
                None => Ok(default),
            }
        };

        Ok(Self {
            telegram_token: var("TELEGRAM_BOT_TOKEN").unwrap_or_default().trim().to_string(),
            airvisual_api_key: var("AIRVISUAL_API_KEY").unwrap_or_default().trim().to_string(),
            telegram_api_url: url("TELEGRAM_API_URL", "https://api.telegram.org"),
            nominatim_url: url("NOMINATIM_URL", "https://nominatim.openstreetmap.org"),
            open_meteo_url: url("OPEN_METEO_URL", "https://api.open-meteo.com"),
            airvisual_url: url("AIRVISUAL_URL", "https://api.airvisual.com"),
            open_elevation_url: url("OPEN_ELEVATION_URL", "https://api.open-elevation.com"),
            http_timeout_secs: secs("HTTP_TIMEOUT_SECS", 10)?,
            poll_timeout_secs: secs("POLL_TIMEOUT_SECS", 30)?,
            user_agent: var("USER_AGENT")
                .unwrap_or_else(|| concat!("pm25-weather-bot/", env!("CARGO_PKG_VERSION")).into()),
            lockfile_path: var("LOCKFILE_PATH").unwrap_or_else(|| "/tmp/pm25-weather-bot.lock".into()),
        })
    }
}
