use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::process::Process;

/// Largest arrival or process time accepted from a table file.
pub const MAX_TIME: usize = 1_000_000;

/// Upper bound on the simulated clock: latest arrival plus all work.
/// Round-Robin records one event per tick, so this also caps its trace.
pub const MAX_TICKS: usize = 10_000_000;

// The table file lists one task per line: `<name> <arrival_time> <process_time>`.
// Blank lines and lines starting with '#' are ignored.
pub fn read_input_file(filename: impl AsRef<Path>) -> Result<Vec<Process>> {
    let file = File::open(filename.as_ref())?;
    let processes = parse_table(BufReader::new(file))?;
    debug!(
        "loaded {} tasks from {}",
        processes.len(),
        filename.as_ref().display()
    );
    Ok(processes)
}

pub fn parse_table(reader: impl BufRead) -> Result<Vec<Process>> {
    let mut processes = Vec::new();
    let mut seen = HashSet::new();
    let mut latest_arrival = 0;
    let mut total_work = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut iter = line.split_whitespace();
        let name = iter
            .next()
            .ok_or_else(|| Error::parse(lineno, "missing task name"))?;
        let arrival_time = parse_field(iter.next(), lineno, "arrival time")?;
        let process_time = parse_field(iter.next(), lineno, "process time")?;
        if iter.next().is_some() {
            return Err(Error::parse(lineno, "trailing fields"));
        }
        if process_time == 0 {
            return Err(Error::parse(lineno, "process time must be positive"));
        }
        if arrival_time > MAX_TIME || process_time > MAX_TIME {
            return Err(Error::parse(
                lineno,
                format!("times must not exceed {}", MAX_TIME),
            ));
        }
        latest_arrival = latest_arrival.max(arrival_time);
        total_work += process_time;
        if latest_arrival + total_work > MAX_TICKS {
            return Err(Error::parse(
                lineno,
                format!("table needs more than {} ticks to run", MAX_TICKS),
            ));
        }
        if !seen.insert(name.to_owned()) {
            return Err(Error::parse(lineno, format!("duplicate task name {}", name)));
        }

        processes.push(Process::new(name, arrival_time, process_time));
    }

    Ok(processes)
}

fn parse_field(field: Option<&str>, lineno: usize, what: &str) -> Result<usize> {
    let field = field.ok_or_else(|| Error::parse(lineno, format!("missing {}", what)))?;
    field
        .parse()
        .map_err(|_| Error::parse(lineno, format!("bad {}: {}", what, field)))
}
