use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,

    /// Address the HTTP listener binds to.
    pub bind_address: SocketAddr,

    /// Front-end origin allowed by CORS to send credentialed requests.
    pub app_url: String,

    /// Marks the session cookie `Secure`; enable behind HTTPS.
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional_var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
            })?;

        let session_secure = match optional_var("SESSION_SECURE") {
            None => false,
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "SESSION_SECURE".to_string(),
                value,
            })?,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            bind_address,
            app_url: required_var("APP_URL")?,
            session_secure,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
