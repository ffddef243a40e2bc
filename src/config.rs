// src/config.rs

use std::env;
use dotenvy::dotenv;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TOP_PERFORMERS_LIMIT: usize = 5;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory for the daily rolling log file.
    pub log_dir: String,
    pub cors_origins: Vec<String>,
    /// Leaderboard size when a request does not ask for one.
    pub top_performers_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            top_performers_limit: DEFAULT_TOP_PERFORMERS_LIMIT,
        }
    }
}

impl Config {
    /// Reads configuration from the environment (and `.env`, if present).
    /// Unset or malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let host = env::var("APP_HOST").unwrap_or(defaults.host);

        let port = env::var("APP_PORT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.port);

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let log_dir = env::var("LOG_DIR").unwrap_or(defaults.log_dir);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or(defaults.cors_origins);

        let top_performers_limit = env::var("TOP_PERFORMERS_LIMIT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(defaults.top_performers_limit);

        Self {
            host,
            port,
            rust_log,
            log_dir,
            cors_origins,
            top_performers_limit,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
