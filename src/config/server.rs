//! Process settings read from the environment (`.env` is loaded by the binary first).

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Debug mode only affects the default log level.
    pub debug: bool,
    pub max_connections: u32,
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            debug: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_demo_data: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset or blank variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = ServerConfig::default();
        Ok(ServerConfig {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            debug: flag_or("DEBUG", get("DEBUG"), defaults.debug)?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), defaults.max_connections)?,
            seed_demo_data: flag_or("SEED_DEMO_DATA", get("SEED_DEMO_DATA"), defaults.seed_demo_data)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Directive used when `RUST_LOG` is not set.
    pub fn default_log_directive(&self) -> &'static str {
        if self.debug {
            "bakery_api=debug,tower_http=debug"
        } else {
            "bakery_api=info,tower_http=info"
        }
    }
}

fn parse_or<T: FromStr>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { var, value: v }),
    }
}

fn flag_or(var: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(v) = value else {
        return Ok(default);
    };
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.bind_addr(), "127.0.0.1:5555");
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config_from(&[
            ("DATABASE_URL", "sqlite://bakery.db"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DEBUG", "TRUE"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("SEED_DEMO_DATA", "yes"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "sqlite://bakery.db");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert!(cfg.debug);
        assert_eq!(cfg.max_connections, 12);
        assert!(cfg.seed_demo_data);
        assert_eq!(cfg.default_log_directive(), "bakery_api=debug,tower_http=debug");
    }

    #[test]
    fn blank_values_fall_back() {
        let cfg = config_from(&[("PORT", "  "), ("DATABASE_URL", "")]).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn bad_flag_is_rejected() {
        let err = config_from(&[("DEBUG", "maybe")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for DEBUG: 'maybe'");
    }
}
