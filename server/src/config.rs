//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `BIND_ADDR`: listen IP, default `0.0.0.0`
//! - `PORT`: listen port, default `3000`
//!
//! Leptos site options (output name, site root, reload port) come from
//! `[package.metadata.leptos]` or `LEPTOS_*` variables and are loaded in
//! [`crate::routes::app`].

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?} (expected 1-65535)")]
    Port(String),
    #[error("invalid BIND_ADDR {0:?} (expected an IP address)")]
    BindAddr(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup (environment, map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ip = parse_bind_addr(lookup("BIND_ADDR").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::Port(raw.to_owned())),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_BIND_ADDR);
    };
    raw.parse::<IpAddr>().map_err(|_| ConfigError::BindAddr(raw.to_owned()))
}
