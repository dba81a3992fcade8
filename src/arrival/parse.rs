//! Two-column arrival file format.
//!
//! One arrival per line: `<arrival_time> <duration>`, whitespace separated.
//! Blank lines are skipped and `#` starts a comment.

use std::fs;
use std::path::Path;

use crate::error::{Result, SimError};
use crate::models::{Arrival, Ticks};

/// Parses arrival records from text.
pub fn parse_arrivals(input: &str) -> Result<Vec<Arrival>> {
    let mut arrivals = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [time, duration] = fields.as_slice() else {
            return Err(SimError::Parse {
                line: line_no,
                message: format!("expected 2 fields, found {}", fields.len()),
            });
        };

        arrivals.push(Arrival::new(
            parse_field(time, "arrival time", line_no)?,
            parse_field(duration, "duration", line_no)?,
        ));
    }

    Ok(arrivals)
}

/// Reads and parses an arrival file.
pub fn load_arrivals(path: impl AsRef<Path>) -> Result<Vec<Arrival>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_arrivals(&contents)
}

/// Formats arrivals in the format `parse_arrivals` reads.
pub fn format_arrivals(arrivals: &[Arrival]) -> String {
    arrivals
        .iter()
        .map(|arrival| format!("{} {}\n", arrival.time, arrival.duration))
        .collect()
}

fn parse_field(field: &str, what: &str, line: usize) -> Result<Ticks> {
    field.parse().map_err(|_| SimError::Parse {
        line,
        message: format!("invalid {what} '{field}'"),
    })
}
