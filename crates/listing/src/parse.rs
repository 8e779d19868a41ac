use catalog_protocol::ListingRecord;
use once_cell::sync::Lazy;
use regex::Regex;

const HEADER_SERVER_MARKER: &str = "MCP Server";
const HEADER_PACKAGE_MARKER: &str = "Package Name";
const SEPARATOR_MARKER: &str = "---";
const MIN_COLUMNS: usize = 3;

static LINK_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("invalid link text regex"));

/// Extract the plugin-server table from a markdown document.
///
/// Only the first table whose header mentions both `MCP Server` and `Package Name` is read.
/// Scanning stops at the first non-empty line inside that table that does not start with `|`,
/// so later tables are never picked up. Malformed rows are dropped; this never fails.
pub fn parse_listing(raw_text: &str) -> Vec<ListingRecord> {
    let mut records = Vec::new();
    let mut in_table = false;

    for line in raw_text.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('|') && trimmed.ends_with('|') {
            if is_header_row(line) {
                in_table = true;
                continue;
            }
            if !in_table {
                continue;
            }
            if line.contains(SEPARATOR_MARKER) {
                continue;
            }
            if let Some(record) = parse_row(line) {
                records.push(record);
            }
        } else if in_table && !trimmed.starts_with('|') {
            break;
        }
    }

    log::debug!("parsed {} listing records", records.len());
    records
}

fn is_header_row(line: &str) -> bool {
    line.contains(HEADER_SERVER_MARKER) && line.contains(HEADER_PACKAGE_MARKER)
}

fn parse_row(line: &str) -> Option<ListingRecord> {
    let cells: Vec<&str> = line
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect();
    if cells.len() < MIN_COLUMNS {
        return None;
    }

    Some(ListingRecord {
        server_name: link_text(cells[0]).to_string(),
        package_name: cells[1].trim_matches('`').to_string(),
        description: cells[2].to_string(),
    })
}

fn link_text(cell: &str) -> &str {
    LINK_TEXT
        .captures(cell)
        .and_then(|caps| caps.get(1))
        .map_or(cell, |m| m.as_str())
}
