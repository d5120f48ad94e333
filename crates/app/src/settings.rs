//! Handles settings for the application.
//!
//! Sources, lowest priority first: the optional TOML file
//! (`config/billtracker.toml` or `--config`), `BILLTRACKER__*` environment
//! variables, command line flags.
use std::net::{AddrParseError, IpAddr, SocketAddr};

use clap::Parser;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/billtracker.toml";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid bind address: {0}")]
    Bind(#[from] AddrParseError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log level for the workspace crates.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    /// IPv4 or IPv6 address, e.g. `127.0.0.1` or `::1`.
    pub bind: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Server {
    pub fn addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip: IpAddr = self.bind.parse()?;
        Ok(SocketAddr::from((ip, self.port)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

#[derive(Debug, Default, Parser)]
#[command(name = "billtracker", version)]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override bind address.
    #[arg(long)]
    bind: Option<String>,
    /// Override listening port.
    #[arg(long)]
    port: Option<u16>,
    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    level: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, SettingsError> {
        Self::load(Args::parse())
    }

    pub fn load(args: Args) -> Result<Self, SettingsError> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("BILLTRACKER").separator("__"))
            .build()?
            .try_deserialize()?;

        if let Some(bind) = args.bind {
            settings.server.bind = bind;
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }
        if let Some(level) = args.level {
            settings.app.level = level;
        }

        Ok(settings)
    }
}
