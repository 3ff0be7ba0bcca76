use anyhow::Result;
use clap::Parser;
use tracing::error;

use zonerank::report::print_analysis_results;
use zonerank::utils::{setup_logging, validate_args};
use zonerank::{analyze_trips, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    match analyze_trips(&args) {
        Ok(result) => print_analysis_results(&result, &args),
        Err(e) => {
            error!("Trip analysis failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
