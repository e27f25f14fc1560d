use std::time::Duration;

use clap::Parser;

use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize};
use super::types::{HttpMethod, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Async HTTP API performance tester in Rust - concurrent request dispatch, per-request latency sampling, and percentile reporting."
)]
pub struct ProbeArgs {
    /// Target API URL
    #[arg(value_name = "URL", help_heading = "Common Options")]
    pub url: String,

    /// HTTP method to use
    #[arg(
        long = "methods",
        default_value = "get",
        ignore_case = true,
        help_heading = "Common Options"
    )]
    pub methods: HttpMethod,

    /// Request headers as a JSON object, e.g. '{"Authorization": "Bearer token"}'
    #[arg(long, help_heading = "Common Options")]
    pub headers: Option<String>,

    /// Request payload as JSON (only sent for POST)
    #[arg(long, help_heading = "Common Options")]
    pub payload: Option<String>,

    /// Number of requests to send
    #[arg(
        long,
        short = 'n',
        default_value = "10",
        help_heading = "Common Options"
    )]
    pub requests: u64,

    /// Maximum number of requests in flight at once
    #[arg(
        long,
        short = 'c',
        default_value = "1",
        value_parser = parse_positive_usize,
        help_heading = "Load Options"
    )]
    pub concurrency: PositiveUsize,

    /// Per-request timeout (supports ms/s/m/h; bare numbers are seconds)
    #[arg(long, value_parser = parse_duration_arg, help_heading = "Load Options")]
    pub timeout: Option<Duration>,

    /// Enable verbose logging (sets log level to debug unless overridden by APIPERF_LOG/RUST_LOG)
    #[arg(long, short = 'v', help_heading = "Output Options")]
    pub verbose: bool,

    /// Disable color output
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = parse_bool_env,
        help_heading = "Output Options"
    )]
    pub no_color: bool,
}
