pub const DELIMITER: char = ',';

/// Whitespace in the C locale: space, `\t`, `\n`, `\v`, `\f` and `\r`.
pub fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Trim a raw cell and strip one layer of surrounding double quotes.
///
/// Embedded quotes are left as they are; `"a""b"` becomes `a""b`.
pub fn normalize_field(raw: &str) -> String {
    // `\r` counts as whitespace, so CRLF line endings are covered here too.
    let mut cell = raw.trim_matches(is_space);

    if cell.len() >= 2 && cell.starts_with('"') && cell.ends_with('"') {
        cell = cell[1..cell.len() - 1].trim_matches(is_space);
    }

    cell.to_string()
}

/// Split a line on commas and normalize every cell.
///
/// Commas inside quotes still split. Returns `None` for an empty line.
pub fn tokenize_line(line: &str) -> Option<Vec<String>> {
    if line.is_empty() {
        return None;
    }

    let mut fields: Vec<String> = line.split(DELIMITER).map(normalize_field).collect();
    // A trailing delimiter does not open a new cell.
    if line.ends_with(DELIMITER) {
        fields.pop();
    }

    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

pub fn is_blank(line: &str) -> bool {
    normalize_field(line).is_empty()
}
