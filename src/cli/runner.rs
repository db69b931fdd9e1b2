//! CLI runner - turns parsed flags into a running server

use crate::cli::commands::Cli;
use crate::cli::server::serve;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::output::PrintMode;
use tracing_subscriber::EnvFilter;

/// Log level used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter from `RUST_LOG` directives, falling back to `info`
///
/// Directives replace the default entirely; an unparseable value falls back.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the config and serve until shutdown
    pub async fn run(&self) -> Result<()> {
        let config = ServerConfig::from_cli(&self.cli)?;
        log_startup(&config);
        serve(config).await
    }
}

fn log_startup(config: &ServerConfig) {
    tracing::info!("Starting server on port {}...", config.port);
    if let Some(target) = config.target {
        tracing::info!("Format type: {target}");
    }
    if config.print_mode == PrintMode::Delimited {
        tracing::info!("Pretty JSON printing enabled");
    }
    if config.show_headers {
        tracing::info!("HTTP headers display enabled");
    }
}
