use std::{
    env,
    fmt::Display,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use chrono::Utc;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub site_url: String,
    pub region: String,
    pub build_time: String,
    pub ga_measurement_id: Option<String>,
    pub google_verification: Option<String>,
    pub analytics_consent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            site_url: String::from("https://maisoncocktail.fr"),
            region: String::from("local"),
            build_time: Utc::now().to_rfc3339(),
            ga_measurement_id: None,
            google_verification: None,
            analytics_consent: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for anything
    /// unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            host: try_load(&var, "MAISON_HOST", defaults.host)?,
            port: try_load(&var, "MAISON_PORT", defaults.port)?,
            site_url: var("MAISON_SITE_URL").unwrap_or(defaults.site_url),
            region: var("MAISON_REGION").unwrap_or(defaults.region),
            build_time: var("MAISON_BUILD_TIME").unwrap_or(defaults.build_time),
            ga_measurement_id: var("MAISON_GA_MEASUREMENT_ID"),
            google_verification: var("MAISON_GOOGLE_VERIFICATION"),
            analytics_consent: try_load(
                &var,
                "MAISON_ANALYTICS_CONSENT",
                defaults.analytics_consent,
            )?,
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn try_load<T, F>(var: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| {
            log::warn!("Invalid {key} value: {e}");
            ConfigError::new(key, format!("{value:?} ({e})"))
        }),
        None => {
            log::info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
