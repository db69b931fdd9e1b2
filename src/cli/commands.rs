//! CLI argument parsing

use crate::config::{DEFAULT_BODY_LIMIT, DEFAULT_PORT};
use crate::decode::DEFAULT_MAX_DEPTH;
use crate::schema::RenderTarget;
use clap::Parser;
use std::net::IpAddr;

const BEHAVIOR: &str = "\
Behavior:
  - Without --format: Shows only JSON (pretty or compact)
  - With --format: Shows struct and JSON (pretty or compact)
  - With --pretty: Shows JSON with delimiters
  - Without --pretty: Shows compact JSON-Body
  - With --headers: Shows HTTP headers
  - Without --headers: Headers are hidden";

/// HTTP request parsing and formatting tool
#[derive(Parser, Debug, Clone)]
#[command(name = "reqparser")]
#[command(author, version, about, long_about = None, after_help = BEHAVIOR)]
pub struct Cli {
    /// Port to run the server on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Output format type (go, rust); without it no struct is generated
    #[arg(short, long)]
    pub format: Option<RenderTarget>,

    /// Pretty print JSON with delimiters (otherwise shows compact JSON-Body)
    #[arg(long)]
    pub pretty: bool,

    /// Show HTTP headers in output
    #[arg(long)]
    pub headers: bool,

    /// Maximum nesting depth accepted in request bodies
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum request body size in bytes
    #[arg(long, default_value_t = DEFAULT_BODY_LIMIT)]
    pub body_limit: usize,
}
