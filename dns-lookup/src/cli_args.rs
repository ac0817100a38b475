use argh::FromArgs;
use configuration::{ConfigFile, Overrides};
use std::path::PathBuf;

fn default_config_path() -> PathBuf {
    PathBuf::from("./dns_lookup_config.toml")
}

#[derive(Debug, FromArgs)]
#[argh(description = "resolve A records of several domains concurrently")]
pub struct CliArgs {
    #[argh(option, description = "dns server ip address, default: '1.1.1.1'")]
    pub dns: Option<String>,

    #[argh(option, description = "comma separated domains: domain1,domain2,...")]
    pub domains: Option<String>,

    #[argh(option, description = "dns server port, default: 53")]
    pub port: Option<u16>,

    #[argh(option, description = "seconds to wait for each response, default: 5")]
    pub timeout: Option<u64>,

    #[argh(
        option,
        description = "config file path, default: './dns_lookup_config.toml' if it exists"
    )]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// An explicit `--config` must exist, the default path may be missing.
    pub fn config_file(&self) -> ConfigFile {
        match &self.config {
            Some(path) => ConfigFile::required(path.clone()),
            None => ConfigFile::optional(default_config_path()),
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            server: self.dns.clone(),
            port: self.port,
            timeout_secs: self.timeout,
            domains: self.domains.clone(),
        }
    }
}
