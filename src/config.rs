use std::env;

use crate::privat_api::DEFAULT_API_URL;

const API_URL_VAR: &str = "PRIVAT_RATES_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Reads `.env` (if any) and the process environment.
    pub fn from_env() -> Config {
        dotenvy::dotenv().ok();

        Config::from_var(env::var(API_URL_VAR).ok())
    }

    fn from_var(api_url: Option<String>) -> Config {
        let api_url = api_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Config { api_url }
    }
}
