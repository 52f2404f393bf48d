// src/config.rs

use std::env;

use dotenvy::dotenv;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub access_token_key: String,
    pub refresh_token_key: String,
    /// Access token lifetime in seconds.
    pub access_token_age: u64,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let database_url = required("DATABASE_URL")?;
        let access_token_key = required("ACCESS_TOKEN_KEY")?;
        let refresh_token_key = required("REFRESH_TOKEN_KEY")?;

        let access_token_age = parsed("ACCESS_TOKEN_AGE", 3000)?;
        let port = parsed("PORT", 5000)?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            access_token_key,
            refresh_token_key,
            access_token_age,
            host,
            port,
            rust_log,
        })
    }
}

fn required(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| AppError::InternalServerError(format!("{} must be set", key)))
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::InternalServerError(format!("{} is not a valid value", key))),
        Err(_) => Ok(default),
    }
}
