//! Server settings read from the environment
//!
//! `.env` is loaded by `main` before [`ServerSettings::from_env`] runs.

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose;
use classifieds::ClassifiedsConfig;
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Settings for one server process
#[derive(Debug)]
pub struct ServerSettings {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub classifieds: ClassifiedsConfig,
}

impl ServerSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let password_pepper = env::var("PASSWORD_PEPPER")
            .ok()
            .map(|raw| decode_pepper(&raw))
            .transpose()?;

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            frontend_origins,
            classifieds: ClassifiedsConfig {
                password_pepper,
                ..ClassifiedsConfig::default()
            },
        })
    }
}

/// Comma separated list, blanks dropped
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Base64 pepper; an empty value is a configuration mistake
fn decode_pepper(raw: &str) -> anyhow::Result<Vec<u8>> {
    let pepper = general_purpose::STANDARD
        .decode(raw.trim())
        .context("PASSWORD_PEPPER must be base64")?;
    if pepper.is_empty() {
        bail!("PASSWORD_PEPPER must not be empty");
    }
    Ok(pepper)
}
