use crate::core::types::Config;
use std::fs;
use std::io::Write;
use std::process;

/// Only one poller may use a bot token at a time; Telegram answers a second
/// `getUpdates` with 409 Conflict.
pub struct Lockfile {
    path: String,
}

impl Lockfile {
    pub fn acquire(path: &str) -> anyhow::Result<Self> {
        if let Ok(contents) = fs::read_to_string(path) {
            let pid: u32 = contents.trim().parse().unwrap_or(0);
            if pid > 0 && std::path::Path::new(&format!("/proc/{}", pid)).exists() {
                anyhow::bail!("Another instance running (PID {})", pid);
            }
            tracing::warn!("Removing stale lockfile (PID {} dead)", pid);
        }

        let mut f = fs::File::create(path)?;
        write!(f, "{}", process::id())?;
        Ok(Self {
            path: path.to_string(),
        })
    }
}

impl Drop for Lockfile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub fn validate_startup(config: &Config) -> anyhow::Result<()> {
    if config.telegram_token.is_empty() {
        anyhow::bail!("TELEGRAM_BOT_TOKEN not set");
    }
    let well_formed = config
        .telegram_token
        .split_once(':')
        .map(|(id, secret)| {
            !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) && !secret.is_empty()
        })
        .unwrap_or(false);
    if !well_formed {
        anyhow::bail!("TELEGRAM_BOT_TOKEN doesn't look like <bot id>:<secret>");
    }

    if config.airvisual_api_key.is_empty() {
        anyhow::bail!("AIRVISUAL_API_KEY not set");
    }

    if config.http_timeout_secs == 0 {
        anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than zero");
    }
    if config.poll_timeout_secs == 0 {
        tracing::warn!("POLL_TIMEOUT_SECS=0, falling back to short polling");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            telegram_token: "123456:AAE-secret".into(),
            airvisual_api_key: "key".into(),
            telegram_api_url: "https://api.telegram.org".into(),
            nominatim_url: "https://nominatim.openstreetmap.org".into(),
            open_meteo_url: "https://api.open-meteo.com".into(),
            airvisual_url: "https://api.airvisual.com".into(),
            open_elevation_url: "https://api.open-elevation.com".into(),
            http_timeout_secs: 10,
            poll_timeout_secs: 30,
            user_agent: "test".into(),
            lockfile_path: "/tmp/unused.lock".into(),
        }
    }

    #[test]
    fn accepts_complete_config() {
        assert!(validate_startup(&config()).is_ok());
    }

    #[test]
    fn rejects_missing_or_malformed_token() {
        for token in ["", "no-colon", ":secret", "12a:secret", "123:"] {
            let mut c = config();
            c.telegram_token = token.into();
            assert!(validate_startup(&c).is_err(), "accepted {:?}", token);
        }
    }

    #[test]
    fn rejects_missing_api_key() {
        let mut c = config();
        c.airvisual_api_key = String::new();
        let err = validate_startup(&c).unwrap_err();
        assert!(err.to_string().contains("AIRVISUAL_API_KEY"));
    }

    #[test]
    fn rejects_zero_http_timeout() {
        let mut c = config();
        c.http_timeout_secs = 0;
        assert!(validate_startup(&c).is_err());
    }

    #[test]
    fn lockfile_blocks_second_instance_and_cleans_up() {
        let path = std::env::temp_dir().join(format!("pm25-bot-test-{}.lock", process::id()));
        let path = path.to_str().unwrap().to_string();

        let lock = Lockfile::acquire(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), process::id().to_string());
        assert!(Lockfile::acquire(&path).is_err());

        drop(lock);
        assert!(!std::path::Path::new(&path).exists());
    }
}
