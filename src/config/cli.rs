use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Season year that keys the stat rows and team pages
    #[clap(long, env = "NBA_SEASON", default_value_t = 2026)]
    pub season: u16,

    /// Base URL of the statistics site
    #[arg(long, default_value = "https://www.basketball-reference.com")]
    pub base_url: String,

    /// Directory holding the persisted ranking collections
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Per-navigation timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Politeness delay between navigations, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the read API over the persisted rankings
    Serve {
        /// Port to bind
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}
