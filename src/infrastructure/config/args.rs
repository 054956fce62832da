use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "routeoptimize",
    version,
    about = "Terminal shell for the RouteOptimize driver and fleet app",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Simulated sign-in latency in milliseconds.
    #[arg(long, value_name = "MS")]
    pub login_latency_ms: Option<u64>,

    /// Arrival confirmation duration in milliseconds.
    #[arg(long, value_name = "MS")]
    pub arrival_revert_ms: Option<u64>,

    /// Reject a submit while a sign-in is in flight.
    #[arg(long)]
    pub reject_concurrent_submit: Option<bool>,

    /// Cancel pending sign-ins on logout or re-submit.
    #[arg(long)]
    pub cancel_superseded_timers: Option<bool>,

    /// Fail on missing view elements instead of skipping.
    #[arg(long)]
    pub strict_elements: Option<bool>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color name or hex value.
    #[arg(long, value_name = "COLOR")]
    pub accent_color: Option<String>,
}
