use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the portfolio file (hotels, groups, provider endpoint)
    #[arg(long, default_value = "portfolio.json")]
    pub portfolio_file: PathBuf,

    /// Directory to store observations and exports
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Delay between hotels during a bulk refresh, in milliseconds
    #[arg(long, default_value_t = 650)]
    pub delay_ms: u64,

    /// Provider API key, if the endpoint requires one
    #[clap(long, env = "RATING_PROVIDER_API_KEY", default_value = "")]
    pub provider_api_key: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch fresh ratings for every hotel in the portfolio
    Refresh,
    /// Print the composite score for one hotel
    Hotel {
        #[arg(long)]
        id: String,
    },
    /// Print the current aggregate table for a group
    Report {
        #[arg(long)]
        group: String,
    },
    /// Print a date-bucketed score series for a hotel or a group
    Trend {
        #[arg(long)]
        hotel: Option<String>,
        #[arg(long)]
        group: Option<String>,
        /// 7d, 30d, 90d or all
        #[arg(long, default_value = "all")]
        range: String,
    },
    /// Write a CSV report for a group under the data dir
    Export {
        #[arg(long)]
        group: String,
        /// One row per (hotel, date, platform) instead of the current table
        #[arg(long)]
        historical: bool,
        /// 7d, 30d, 90d or all
        #[arg(long, default_value = "all")]
        range: String,
    },
}
