use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::error::ConfigError;
use crate::greeting::DEFAULT_ABSENT_PROFILE;

/// Command-line and environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "hello-spring", version, about = "Greets with process uptime and build profile")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Text shown in place of BUILD_PROFILE when it is unset
    #[arg(long, env = "ABSENT_PROFILE_TEXT", default_value = DEFAULT_ABSENT_PROFILE)]
    pub absent_profile: String,

    /// Tracing filter, overrides RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
