use crate::components::OfficeHoursPolicy;
use crate::error::{env_error, AppResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::{IpAddr, SocketAddr};

/// Default location of the office hours policy file
pub const DEFAULT_POLICY_PATH: &str = "config/office_hours.toml";
/// Default address the server binds to
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
/// Default server port
pub const DEFAULT_PORT: u16 = 3000;

/// Main configuration structure for the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Weekly office hours interviews must fit into
    pub office_hours: OfficeHoursPolicy,
    /// IP address to listen on
    pub bind_address: String,
    /// TCP port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            office_hours: OfficeHoursPolicy::default(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // An explicitly configured policy file must exist
        let policy_file = match env::var("OFFICE_HOURS_CONFIG") {
            Ok(path) => Some(fs::read_to_string(path)?),
            Err(_) => fs::read_to_string(DEFAULT_POLICY_PATH).ok(),
        };

        Self::from_sources(policy_file.as_deref(), |key| env::var(key).ok())
    }

    /// Parse an office hours policy file body
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        Self::from_sources(Some(content), |_| None)
    }

    /// Build configuration from an optional policy file and a variable lookup
    pub fn from_sources<F>(policy_file: Option<&str>, var: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut office_hours = match policy_file {
            Some(content) => toml::from_str::<OfficeHoursPolicy>(content)?,
            None => OfficeHoursPolicy::default(),
        };

        // Environment overrides the file
        if let Some(value) = var("OFFICE_HOURS_START") {
            office_hours.start_hour = parse_var("OFFICE_HOURS_START", &value)?;
        }
        if let Some(value) = var("OFFICE_HOURS_END") {
            office_hours.end_hour = parse_var("OFFICE_HOURS_END", &value)?;
        }
        if let Some(value) = var("OFFICE_HOURS_WEEKDAYS") {
            office_hours.allowed_weekdays = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_var("OFFICE_HOURS_WEEKDAYS", s))
                .collect::<AppResult<_>>()?;
        }
        office_hours.check()?;

        let bind_address =
            var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        bind_address
            .parse::<IpAddr>()
            .map_err(|_| env_error("Invalid BIND_ADDRESS format"))?;

        let port = match var("PORT") {
            Some(value) => parse_var("PORT", &value)?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            office_hours,
            bind_address,
            port,
        })
    }

    /// Socket address the server should listen on
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let ip = self
            .bind_address
            .parse::<IpAddr>()
            .map_err(|_| env_error("Invalid BIND_ADDRESS format"))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> AppResult<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| env_error(&format!("Invalid {} format: {}", name, value)))
}
