//! Server configuration
//!
//! Built once at startup from the command line and shared read-only with
//! every request handler.

use crate::cli::Cli;
use crate::decode::{DecoderConfig, DEFAULT_MAX_DEPTH};
use crate::error::{Error, Result};
use crate::output::PrintMode;
use crate::schema::RenderTarget;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Default request body limit (2 MiB)
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Immutable per-process settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on (0 lets the OS choose)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Address to bind
    #[serde(default = "default_bind")]
    pub bind: IpAddr,

    /// Struct syntax to render; `None` logs the JSON only
    #[serde(default)]
    pub target: Option<RenderTarget>,

    /// How the JSON body is printed
    #[serde(default)]
    pub print_mode: PrintMode,

    /// Dump the request line and headers before the body
    #[serde(default)]
    pub show_headers: bool,

    /// Maximum nesting depth of request bodies
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum request body size in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_bind() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_body_limit() -> usize {
    DEFAULT_BODY_LIMIT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
            target: None,
            print_mode: PrintMode::default(),
            show_headers: false,
            max_depth: default_max_depth(),
            body_limit: default_body_limit(),
        }
    }
}

impl ServerConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from parsed command-line flags
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Self {
            port: cli.port,
            bind: cli.bind,
            target: cli.format,
            print_mode: PrintMode::from_pretty(cli.pretty),
            show_headers: cli.headers,
            max_depth: cli.max_depth,
            body_limit: cli.body_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the port
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the bind address
    #[must_use]
    pub fn with_bind(mut self, bind: IpAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Set the render target
    #[must_use]
    pub fn with_target(mut self, target: RenderTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the print mode
    #[must_use]
    pub fn with_print_mode(mut self, mode: PrintMode) -> Self {
        self.print_mode = mode;
        self
    }

    /// Enable/disable the header dump
    #[must_use]
    pub fn with_headers(mut self, enabled: bool) -> Self {
        self.show_headers = enabled;
        self
    }

    /// Set the maximum nesting depth
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the body size limit
    #[must_use]
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = bytes;
        self
    }

    /// Socket address to listen on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Decoder settings derived from this config
    pub fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig::with_max_depth(self.max_depth)
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::config("max_depth must be greater than zero"));
        }
        if self.body_limit == 0 {
            return Err(Error::config("body_limit must be greater than zero"));
        }
        Ok(())
    }
}
