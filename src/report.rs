use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::stats::AnalysisResult;
use crate::utils::{format_hour, format_number};
use crate::{Args, TripAnalyzer};

pub fn open_trip_file(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).with_context(|| format!("Unable to open trip file {:?}", path))?;
    Ok(BufReader::new(file))
}

pub fn analyze_trips(args: &Args) -> Result<AnalysisResult> {
    let start_time = Instant::now();
    info!(action = "start", component = "trip_analysis", file_path = ?args.csv, "Starting trip analysis");

    let reader = open_trip_file(&args.csv)?;
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest(reader);

    let result = AnalysisResult {
        source: args.csv.display().to_string(),
        zones: analyzer.zone_count(),
        trips: analyzer.total_trips(),
        top_zones: analyzer.top_zones(args.top),
        top_slots: analyzer.top_busy_slots(args.slots),
    };

    info!(
        action = "complete",
        component = "trip_analysis",
        zones = result.zones,
        trips = result.trips,
        duration_ms = start_time.elapsed().as_millis(),
        "Trip analysis completed"
    );
    Ok(result)
}

pub fn write_text_report<W: Write>(out: &mut W, result: &AnalysisResult) -> Result<()> {
    writeln!(out, "\n--- Trip Analysis: {} ---", result.source)?;
    writeln!(
        out,
        "Zones: {}, trips counted: {}",
        format_number(result.zones as u64),
        format_number(result.trips)
    )?;

    writeln!(out, "\nTop {} busiest zones:", result.top_zones.len())?;
    for entry in &result.top_zones {
        writeln!(out, "- {}: {} trips", entry.zone, format_number(entry.count))?;
    }

    writeln!(out, "\nTop {} busiest slots:", result.top_slots.len())?;
    for entry in &result.top_slots {
        writeln!(
            out,
            "- {} @ {}: {} trips",
            entry.zone,
            format_hour(entry.hour),
            format_number(entry.count)
        )?;
    }

    Ok(())
}

pub fn write_json_report<W: Write>(out: &mut W, result: &AnalysisResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result).context("Failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

pub fn print_analysis_results(result: &AnalysisResult, args: &Args) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_json_report(&mut out, result)
    } else {
        write_text_report(&mut out, result)
    }
}
