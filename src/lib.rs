//! CPU scheduling simulator.
//!
//! Runs a fixed table of tasks through First-Come-First-Served,
//! non-preemptive Shortest-Processing-Time-first and Round-Robin, and
//! reports the execution trace and response times of each run.

use std::io::{self, Write};

pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod ordering;
pub mod process;
pub mod ready_queue;
pub mod report;
pub mod schedule;
pub mod schedulers;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::process::{reference_table, Process, Status, TIME_QUANTUM};
pub use crate::ready_queue::{QueueError, ReadyQueue, QUEUE_CAPACITY};
pub use crate::schedule::{Burst, Event, Schedule};
pub use crate::schedulers::{admit, Fcfs, Policy, RoundRobin, Scheduler, Spt};

/// Runs every policy over the same table and renders each result to `out`,
/// one blank line between runs.
pub fn simulate(
    table: &[Process],
    policies: &[Policy],
    out: &mut impl Write,
) -> io::Result<Vec<Schedule>> {
    let mut schedules = Vec::with_capacity(policies.len());
    for (i, policy) in policies.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let schedule = policy.build().run(table);
        log::info!(
            "{}: average response time {:.2}",
            schedule.algorithm,
            schedule.average_response_time()
        );
        report::render(&schedule, out)?;
        schedules.push(schedule);
    }
    Ok(schedules)
}
