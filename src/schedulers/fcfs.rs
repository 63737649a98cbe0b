use log::debug;

use super::Scheduler;
use crate::ordering::sort_by_arrival;
use crate::process::Process;
use crate::schedule::{Burst, Event, Schedule};

/// First-Come-First-Served: arrival order, each task runs to completion.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "First-Come-First-Serve"
    }

    fn run(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(self.name());
        let mut table = processes.to_vec();
        sort_by_arrival(&mut table);

        let mut total_time = 0;
        for (i, process) in table.iter_mut().enumerate() {
            // idle until the task shows up
            total_time = total_time.max(process.arrival_time);
            let start = total_time;
            debug!("{:>2} fcfs picks {}", start, process.name);

            schedule.events.push(Event::Run { time: start + 1, task: i });
            total_time += process.process_time;
            schedule.events.push(Event::Finish { time: total_time, task: i });
            schedule.bursts.push(Burst { task: i, start, end: total_time });

            process.mark_finished(total_time);
        }

        schedule.table = table;
        schedule
    }
}
