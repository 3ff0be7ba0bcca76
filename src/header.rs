/// Keyword fragments looked for in the first three columns of a header row.
const HEADER_KEYWORDS: [&[&str]; 3] = [&["trip"], &["pickup", "zone"], &["time", "date"]];

/// Decide whether the first non-blank row is a header.
///
/// Column names are never matched exactly: `trip_id`, `Pickup Zone` and
/// `pickup_datetime` all qualify. An empty row is treated as a header.
pub fn looks_like_header(cols: &[String]) -> bool {
    if cols.is_empty() {
        return true;
    }

    cols.iter()
        .zip(HEADER_KEYWORDS.iter())
        .any(|(col, keywords)| {
            let lower = col.to_ascii_lowercase();
            keywords.iter().any(|keyword| lower.contains(*keyword))
        })
}
