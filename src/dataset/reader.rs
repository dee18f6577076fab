//! Delimited-text reader for event logs. Header row names the columns;
//! `UserId` and `Event` are required, `Fake` is optional, anything else is
//! ignored.

use super::{EventRecord, EventTable};
use crate::error::{ClassifyError, Result};
use std::fs;
use std::path::Path;

const COL_USER: &str = "UserId";
const COL_EVENT: &str = "Event";
const COL_FAKE: &str = "Fake";

fn column_index(header: &[&str], name: &'static str) -> Result<usize> {
    header
        .iter()
        .position(|c| *c == name)
        .ok_or(ClassifyError::MissingColumn(name))
}

fn parse_label(raw: &str, line: usize) -> Result<u8> {
    match raw {
        "0" => Ok(0),
        "1" => Ok(1),
        other => Err(ClassifyError::MalformedRow {
            line,
            reason: format!("label '{other}' is not 0 or 1"),
        }),
    }
}

/// Read an event table from a comma-delimited file.
///
/// An input with only a header row yields an empty table, not an error.
pub fn read_events(path: &Path) -> Result<EventTable> {
    let raw = fs::read_to_string(path).map_err(|source| ClassifyError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = raw.lines().enumerate();
    let (_, header_line) = lines.next().ok_or(ClassifyError::EmptyInput)?;
    let header: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let user_idx = column_index(&header, COL_USER)?;
    let event_idx = column_index(&header, COL_EVENT)?;
    let fake_idx = header.iter().position(|c| *c == COL_FAKE);

    let mut records = Vec::new();
    for (i, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != header.len() {
            return Err(ClassifyError::MalformedRow {
                line: i + 1,
                reason: format!("expected {} fields, got {}", header.len(), fields.len()),
            });
        }

        let fake = match fake_idx {
            Some(idx) => Some(parse_label(fields[idx], i + 1)?),
            None => None,
        };
        records.push(EventRecord {
            user_id: fields[user_idx].to_string(),
            event: fields[event_idx].to_string(),
            fake,
        });
    }

    Ok(EventTable {
        records,
        has_labels: fake_idx.is_some(),
    })
}
