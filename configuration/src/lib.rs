use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SERVER: &str = "1.1.1.1";
pub const DEFAULT_PORT: u16 = 53;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    #[error("invalid DNS server address {0:?}, expected an IP address without port")]
    InvalidServer(String),

    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

/// Values given on the command line. `None` leaves the file/default value.
#[derive(Debug, Default)]
pub struct Overrides {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub timeout_secs: Option<u64>,
    pub domains: Option<String>,
}

/// A TOML file to layer between the defaults and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
    required: bool,
}

impl ConfigFile {
    /// Loading fails if the file does not exist.
    pub fn required(path: PathBuf) -> Self {
        Self { path, required: true }
    }

    /// Skipped if the file does not exist.
    pub fn optional(path: PathBuf) -> Self {
        Self {
            path,
            required: false,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// defaults < config file < command line
pub fn get_config(
    config_file: Option<ConfigFile>,
    overrides: Overrides,
) -> Result<LookupConfiguration, ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("dns.server", DEFAULT_SERVER)?
        .set_default("dns.port", DEFAULT_PORT as i64)?
        .set_default("dns.timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
        .set_default("domains", "")?;

    if let Some(file) = config_file {
        builder = builder.add_source(config::File::from(file.path).required(file.required));
    }

    builder = builder
        .set_override_option("dns.server", overrides.server)?
        .set_override_option("dns.port", overrides.port.map(i64::from))?
        .set_override_option("dns.timeout_secs", overrides.timeout_secs.map(|t| t as i64))?
        .set_override_option("domains", overrides.domains)?;

    let config = builder.build()?;
    let mut lookup = config.try_deserialize::<LookupConfiguration>()?;
    lookup.dns.validate()?;

    Ok(lookup)
}

#[derive(Debug, Deserialize)]
pub struct LookupConfiguration {
    pub dns: DnsConfiguration,
    domains: String,
}

impl LookupConfiguration {
    /// The comma separated domain list, trimmed, with empty entries dropped.
    pub fn domains(&self) -> Vec<String> {
        parse_domain_list(&self.domains)
    }
}

#[derive(Debug, Deserialize)]
pub struct DnsConfiguration {
    server: String,
    port: u16,
    timeout_secs: u64,
}

impl DnsConfiguration {
    fn validate(&mut self) -> Result<(), ConfigError> {
        self.server = self.server.trim().to_string();
        self.server_ip()?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    fn server_ip(&self) -> Result<IpAddr, ConfigError> {
        self.server
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidServer(self.server.clone()))
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn server_address(&self) -> Result<SocketAddr, ConfigError> {
        Ok(SocketAddr::new(self.server_ip()?, self.port))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn parse_domain_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect()
}
