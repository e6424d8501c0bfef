use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub gemini_api_key: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| AppError::ConfigError("GEMINI_API_KEY not found in environment".to_string()))?;
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        Self::from_parts(gemini_api_key, &host, &port)
    }

    pub fn from_parts(gemini_api_key: String, host: &str, port: &str) -> Result<Self> {
        if gemini_api_key.trim().is_empty() {
            return Err(AppError::ConfigError("GEMINI_API_KEY is empty".to_string()));
        }

        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            gemini_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_rejected() {
        let err = Config::from_parts("   ".into(), "127.0.0.1", "3000").err();
        assert!(matches!(err, Some(AppError::ConfigError(_))));
    }

    #[test]
    fn parses_host_and_port() {
        let config = Config::from_parts("key".into(), "0.0.0.0", "8080").unwrap();
        assert_eq!(config.server_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.gemini_api_key, "key");
    }

    #[test]
    fn bad_port_is_config_error() {
        let err = Config::from_parts("key".into(), "127.0.0.1", "http").err();
        assert!(matches!(err, Some(AppError::ConfigError(msg)) if msg.starts_with("Invalid port")));
    }
}
