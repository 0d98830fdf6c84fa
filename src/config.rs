use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub itunes_base_url: String,
    pub itunes_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://podsearch.db?mode=rwc".to_string());

        let itunes_base_url = std::env::var("ITUNES_BASE_URL")
            .unwrap_or_else(|_| "https://itunes.apple.com".to_string());

        let itunes_timeout_secs: u64 =
            std::env::var("ITUNES_TIMEOUT_SECS").ok().and_then(|s| s.parse().ok()).unwrap_or(10);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            itunes_base_url,
            itunes_timeout_secs,
        })
    }
}
