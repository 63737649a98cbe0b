use std::num::NonZeroUsize;
use std::str::FromStr;

use log::trace;
use regex::Regex;

use crate::error::{Error, Result};
use crate::process::{Process, Status};
use crate::ready_queue::ReadyQueue;
use crate::schedule::Schedule;

mod fcfs;
mod round_robin;
mod spt;

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use spt::Spt;

pub trait Scheduler {
    /// Header printed above the trace.
    fn name(&self) -> &'static str;

    /// Runs the whole table to completion. The input is never mutated, so
    /// the same table can be fed to every scheduler in turn.
    fn run(&self, processes: &[Process]) -> Schedule;
}

/// Arrival Feeder: enqueues every task that has arrived by `time` and is not
/// queued yet. `processes` must be sorted by arrival time; the scan stops at
/// the first task from the future.
pub fn admit(processes: &mut [Process], ready: &mut ReadyQueue, time: usize) {
    for (i, process) in processes.iter_mut().enumerate() {
        if process.arrival_time > time {
            break;
        }
        if process.status == Status::NotQueued {
            // overflow is already reported by the queue
            if ready.push(i).is_ok() {
                process.mark_queued();
                trace!("{:>2} admit {}", time, process.name);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Spt,
    RoundRobin(NonZeroUsize),
}

impl Policy {
    /// The three disciplines in the order the driver runs them.
    pub fn all(quantum: NonZeroUsize) -> Vec<Policy> {
        vec![Policy::Fcfs, Policy::Spt, Policy::RoundRobin(quantum)]
    }

    pub fn build(self) -> Box<dyn Scheduler> {
        match self {
            Policy::Fcfs => Box::new(Fcfs),
            Policy::Spt => Box::new(Spt),
            Policy::RoundRobin(quantum) => Box::new(RoundRobin::new(quantum)),
        }
    }
}

/// Accepts `F`, `S` or `R<quantum>`.
impl FromStr for Policy {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Policy> {
        let re = Regex::new(r"^(?:([FS])|R(\d+))$")
            .map_err(|_| Error::InvalidSpec(spec.to_owned()))?;
        let caps = re
            .captures(spec)
            .ok_or_else(|| Error::InvalidSpec(spec.to_owned()))?;

        if let Some(kind) = caps.get(1) {
            return Ok(if kind.as_str() == "F" {
                Policy::Fcfs
            } else {
                Policy::Spt
            });
        }

        let quantum = caps
            .get(2)
            .and_then(|q| q.as_str().parse::<usize>().ok())
            .ok_or_else(|| Error::InvalidSpec(spec.to_owned()))?;
        NonZeroUsize::new(quantum)
            .map(Policy::RoundRobin)
            .ok_or(Error::InvalidQuantum(quantum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::reference_table;

    #[test]
    fn admit_stops_at_first_future_arrival() {
        let mut table = reference_table();
        let mut ready = ReadyQueue::with_capacity(8);

        admit(&mut table, &mut ready, 0);
        assert_eq!(ready.iter().collect::<Vec<_>>(), vec![0]);

        admit(&mut table, &mut ready, 3);
        assert_eq!(ready.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(table[3].status, Status::NotQueued);
    }

    #[test]
    fn admit_never_enqueues_twice() {
        let mut table = reference_table();
        let mut ready = ReadyQueue::with_capacity(8);
        admit(&mut table, &mut ready, 10);
        admit(&mut table, &mut ready, 10);
        assert_eq!(ready.len(), 4);
        assert!(table.iter().all(|p| p.status == Status::Queued));
    }

    #[test]
    fn admit_leaves_dropped_task_unqueued_on_overflow() {
        let mut table = reference_table();
        let mut ready = ReadyQueue::with_capacity(1);
        admit(&mut table, &mut ready, 1);
        assert_eq!(table[0].status, Status::Queued);
        assert_eq!(table[1].status, Status::NotQueued);
    }

    #[test]
    fn parses_scheduler_specs() {
        let two = NonZeroUsize::new(2).unwrap();
        assert_eq!("F".parse::<Policy>().unwrap(), Policy::Fcfs);
        assert_eq!("S".parse::<Policy>().unwrap(), Policy::Spt);
        assert_eq!("R2".parse::<Policy>().unwrap(), Policy::RoundRobin(two));
        assert!(matches!("R0".parse::<Policy>(), Err(Error::InvalidQuantum(0))));
        assert!(matches!("X".parse::<Policy>(), Err(Error::InvalidSpec(_))));
        assert!(matches!("R".parse::<Policy>(), Err(Error::InvalidSpec(_))));
        assert!(matches!("FS".parse::<Policy>(), Err(Error::InvalidSpec(_))));
    }

    #[test]
    fn builds_named_schedulers() {
        let names: Vec<_> = Policy::all(NonZeroUsize::new(2).unwrap())
            .into_iter()
            .map(|policy| policy.build().name())
            .collect();
        assert_eq!(
            names,
            vec![
                "First-Come-First-Serve",
                "Shortest-Process-Time-First",
                "Round-Robin"
            ]
        );
    }
}
