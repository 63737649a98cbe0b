use log::{debug, trace};

use super::Scheduler;
use crate::ordering::{by_process_time, combined, sort_by_arrival};
use crate::process::Process;
use crate::schedule::{Burst, Event, Schedule};

/// Non-preemptive Shortest-Processing-Time-first.
#[derive(Debug, Default, Clone, Copy)]
pub struct Spt;

/// Among tasks that have arrived by `time`, the one with the smallest
/// processing time. Ties go to the earlier arrival, then to the lower
/// position in `pending`.
fn select(pending: &[Process], time: usize) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .filter(|(_, p)| p.arrival_time <= time)
        .min_by(|(i, a), (j, b)| {
            by_process_time(a, b)
                .then_with(|| combined(a, b))
                .then(i.cmp(j))
        })
        .map(|(i, _)| i)
}

impl Scheduler for Spt {
    fn name(&self) -> &'static str {
        "Shortest-Process-Time-First"
    }

    fn run(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(self.name());
        let mut pending = processes.to_vec();
        sort_by_arrival(&mut pending);

        let mut finished: Vec<Process> = Vec::with_capacity(pending.len());
        let mut total_time = 0;
        while !pending.is_empty() {
            let idx = match select(&pending, total_time) {
                Some(idx) => idx,
                None => {
                    trace!("{:>2} spt idle", total_time);
                    total_time += 1;
                    continue;
                }
            };

            // order-preserving removal keeps the tie-break deterministic
            let mut process = pending.remove(idx);
            let task = finished.len();
            let start = total_time;
            debug!("{:>2} spt picks {} ({})", start, process.name, process.process_time);

            schedule.events.push(Event::Run { time: start + 1, task });
            total_time += process.process_time;
            schedule.events.push(Event::Finish { time: total_time, task });
            schedule.bursts.push(Burst { task, start, end: total_time });

            process.mark_finished(total_time);
            finished.push(process);
        }

        schedule.table = finished;
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::reference_table;

    #[test]
    fn reference_table_picks_shortest_eligible() {
        let schedule = Spt.run(&reference_table());
        assert_eq!(schedule.completion_order(), vec!["A", "B", "D", "C"]);
        assert_eq!(schedule.finish_time_of("A"), Some(2));
        assert_eq!(schedule.finish_time_of("B"), Some(12));
        assert_eq!(schedule.finish_time_of("D"), Some(15));
        assert_eq!(schedule.finish_time_of("C"), Some(22));
        assert_eq!(schedule.average_response_time(), 10.5);
    }

    #[test]
    fn table_is_in_completion_order() {
        let schedule = Spt.run(&reference_table());
        let names: Vec<_> = schedule.table.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn idle_ticks_advance_the_clock() {
        let table = vec![Process::new("X", 3, 2)];
        let schedule = Spt.run(&table);
        assert_eq!(
            schedule.events,
            vec![
                Event::Run { time: 4, task: 0 },
                Event::Finish { time: 5, task: 0 },
            ]
        );
    }

    #[test]
    fn ties_go_to_earlier_arrival_then_table_order() {
        let table = vec![
            Process::new("long", 0, 6),
            Process::new("p", 1, 2),
            Process::new("q", 2, 2),
            Process::new("r", 2, 2),
        ];
        let schedule = Spt.run(&table);
        assert_eq!(schedule.completion_order(), vec!["long", "p", "q", "r"]);
    }

    #[test]
    fn select_prefers_shorter_then_earlier_then_first() {
        let pending = vec![
            Process::new("slow", 0, 9),
            Process::new("b", 2, 3),
            Process::new("a", 1, 3),
            Process::new("a2", 1, 3),
            Process::new("future", 8, 1),
        ];
        assert_eq!(select(&pending, 0), Some(0));
        assert_eq!(select(&pending, 2), Some(2));
        assert_eq!(select(&pending, 8), Some(4));
        assert_eq!(select(&[], 8), None);
    }

    #[test]
    fn chosen_task_is_minimal_among_eligible() {
        let table = vec![
            Process::new("A", 0, 8),
            Process::new("B", 1, 4),
            Process::new("C", 2, 9),
            Process::new("D", 3, 5),
            Process::new("E", 20, 1),
        ];
        let schedule = Spt.run(&table);
        let mut done: Vec<&str> = Vec::new();
        for burst in &schedule.bursts {
            let chosen = &schedule.table[burst.task];
            for other in table.iter() {
                if done.contains(&other.name.as_str()) || other.name == chosen.name {
                    continue;
                }
                if other.arrival_time <= burst.start {
                    assert!(chosen.process_time <= other.process_time);
                }
            }
            done.push(chosen.name.as_str());
        }
        assert_eq!(schedule.completion_order(), vec!["A", "B", "D", "C", "E"]);
    }
}
