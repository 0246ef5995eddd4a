use crate::calendar::DisplayLocale;
use std::env;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub port: u16,
    pub locale: DisplayLocale,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("METAS_API_URL")
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let locale = match lookup("METAS_LOCALE") {
            Some(value) => value.parse().unwrap_or_else(|err| {
                warn!("{err}, falling back to English");
                DisplayLocale::default()
            }),
            None => DisplayLocale::default(),
        };

        Self {
            api_url,
            port,
            locale,
        }
    }
}
