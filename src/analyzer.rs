use std::collections::HashMap;
use std::io::BufRead;
use std::time::Instant;
use tracing::debug;

use crate::field::{is_blank, tokenize_line};
use crate::header::looks_like_header;
use crate::hour::{parse_hour, HOURS_PER_DAY};
use crate::stats::{SlotCount, ZoneCount};

/// Number of entries returned by the rankings when the caller has no preference.
pub const DEFAULT_TOP_K: i64 = 10;

/// Per-zone trip counts built from one CSV source.
///
/// Every ingestion starts from empty tables, so an analyzer can be reused
/// across files without results leaking between them.
#[derive(Debug, Default)]
pub struct TripAnalyzer {
    zone_totals: HashMap<String, u64>,
    zone_hour_totals: HashMap<String, [u64; HOURS_PER_DAY]>,
}

struct Line {
    text: String,
    lossy: bool,
}

#[derive(Debug, Default)]
struct IngestCounters {
    rows: u64,
    skipped: u64,
}

impl TripAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.zone_totals.clear();
        self.zone_hour_totals.clear();
    }

    /// Rebuild both tables from a line-oriented CSV stream.
    ///
    /// The first non-blank line is checked once for a header; all later
    /// lines are treated as data. Rows that cannot be classified are
    /// dropped without error. A read error ends the stream.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily, but a row whose
    /// zone lost bytes in decoding is dropped rather than merged with other
    /// undecodable zones.
    pub fn ingest<R: BufRead>(&mut self, reader: R) {
        let start_time = Instant::now();
        self.reset();

        let mut counters = IngestCounters::default();
        let mut lines = reader
            .split(b'\n')
            .map_while(|line| line.ok())
            .map(|bytes| match String::from_utf8(bytes) {
                Ok(line) => Line { text: line, lossy: false },
                Err(e) => Line {
                    text: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                    lossy: true,
                },
            });

        let Some(first) = lines.by_ref().find(|line| !is_blank(&line.text)) else {
            return;
        };
        let Some(cols) = tokenize_line(&first.text) else {
            return;
        };
        let header_skipped = looks_like_header(&cols);
        if !header_skipped {
            self.record_row(&cols, first.lossy, &mut counters);
        }

        for line in lines {
            if is_blank(&line.text) {
                continue;
            }
            if let Some(cols) = tokenize_line(&line.text) {
                self.record_row(&cols, line.lossy, &mut counters);
            }
        }

        debug!(
            action = "complete",
            component = "ingest",
            rows = counters.rows,
            skipped = counters.skipped,
            header_skipped,
            zones = self.zone_totals.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Ingestion completed"
        );
    }

    fn record_row(&mut self, cols: &[String], lossy: bool, counters: &mut IngestCounters) {
        if self.process_row(cols, lossy) {
            counters.rows += 1;
        } else {
            counters.skipped += 1;
        }
    }

    /// Classify one data row by its width and count it.
    ///
    /// | columns | zone | timestamp |
    /// |---------|------|-----------|
    /// | 3       | 1    | 2         |
    /// | 6+      | 1    | 3         |
    ///
    /// Any other width is skipped. Returns whether the row was counted.
    fn process_row(&mut self, cols: &[String], lossy: bool) -> bool {
        let (zone, time_field) = match cols.len() {
            3 => (&cols[1], &cols[2]),
            n if n >= 6 => (&cols[1], &cols[3]),
            _ => return false,
        };

        if zone.is_empty() || time_field.is_empty() {
            return false;
        }
        if lossy && zone.contains(char::REPLACEMENT_CHARACTER) {
            return false;
        }
        let Some(hour) = parse_hour(time_field) else {
            return false;
        };

        *self.zone_totals.entry(zone.clone()).or_insert(0) += 1;
        self.zone_hour_totals
            .entry(zone.clone())
            .or_insert([0; HOURS_PER_DAY])[usize::from(hour)] += 1;
        true
    }

    /// The `k` busiest zones, by count descending then zone name ascending.
    pub fn top_zones(&self, k: i64) -> Vec<ZoneCount> {
        if k <= 0 {
            return Vec::new();
        }

        let mut zones: Vec<ZoneCount> = self
            .zone_totals
            .iter()
            .map(|(zone, &count)| ZoneCount {
                zone: zone.clone(),
                count,
            })
            .collect();

        zones.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.zone.cmp(&b.zone)));
        zones.truncate(usize::try_from(k).unwrap_or(usize::MAX));
        zones
    }

    /// The `k` busiest (zone, hour) slots, by count descending, then zone
    /// name, then hour ascending. Empty slots are never listed.
    pub fn top_busy_slots(&self, k: i64) -> Vec<SlotCount> {
        if k <= 0 {
            return Vec::new();
        }

        let mut slots: Vec<SlotCount> = self
            .zone_hour_totals
            .iter()
            .flat_map(|(zone, hours)| {
                (0u8..)
                    .zip(hours.iter())
                    .filter(|(_, count)| **count > 0)
                    .map(move |(hour, &count)| SlotCount {
                        zone: zone.clone(),
                        hour,
                        count,
                    })
            })
            .collect();

        slots.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.zone.cmp(&b.zone))
                .then_with(|| a.hour.cmp(&b.hour))
        });
        slots.truncate(usize::try_from(k).unwrap_or(usize::MAX));
        slots
    }

    pub fn zone_count(&self) -> usize {
        self.zone_totals.len()
    }

    pub fn total_trips(&self) -> u64 {
        self.zone_totals.values().sum()
    }

    pub fn zone_total(&self, zone: &str) -> u64 {
        self.zone_totals.get(zone).copied().unwrap_or(0)
    }

    /// Hourly counts for `zone`, or `None` if the zone was never counted.
    pub fn zone_hours(&self, zone: &str) -> Option<&[u64; HOURS_PER_DAY]> {
        self.zone_hour_totals.get(zone)
    }
}
