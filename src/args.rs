use clap::Parser;
use std::path::PathBuf;

use crate::analyzer::DEFAULT_TOP_K;

#[derive(Parser, Debug)]
#[command(
    name = "zonerank",
    about = "Rank the busiest pickup zones and hourly slots in a trip CSV file",
    version,
    long_about = None
)]
pub struct Args {
    /// CSV file with one trip per line
    pub csv: PathBuf,

    /// Number of top zones to display
    #[arg(short, long, default_value_t = DEFAULT_TOP_K, allow_negative_numbers = true)]
    pub top: i64,

    /// Number of top (zone, hour) slots to display
    #[arg(short, long, default_value_t = DEFAULT_TOP_K, allow_negative_numbers = true)]
    pub slots: i64,

    /// Print the rankings as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
