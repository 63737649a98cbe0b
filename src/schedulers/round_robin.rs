use std::num::NonZeroUsize;

use log::{debug, trace};

use super::{admit, Scheduler};
use crate::ordering::sort_by_arrival;
use crate::process::Process;
use crate::ready_queue::{ReadyQueue, QUEUE_CAPACITY};
use crate::schedule::{Burst, Event, Schedule};

/// Preemptive Round-Robin with a fixed quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroUsize) -> RoundRobin {
        RoundRobin { quantum }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round-Robin"
    }

    fn run(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(self.name());
        let mut table = processes.to_vec();
        sort_by_arrival(&mut table);

        let n = table.len();
        // every task sits in the queue at most once, so a re-enqueue never overflows
        let mut ready = ReadyQueue::with_capacity(QUEUE_CAPACITY.max(n));
        let mut timer = 0;
        let mut finished = 0;

        while finished != n {
            admit(&mut table, &mut ready, timer);

            let task = match ready.pop() {
                Some(task) => task,
                None => {
                    // nothing has arrived yet; the tick is reported after it elapses
                    timer += 1;
                    schedule.events.push(Event::Skip { time: timer });
                    trace!("{:>2} rr idle", timer);
                    continue;
                }
            };

            let burst = self.quantum.get().min(table[task].remaining_time);
            let start = timer;
            debug!(
                "{:>2} rr runs {} for {} (remaining {})",
                start, table[task].name, burst, table[task].remaining_time
            );

            for _ in 0..burst {
                timer += 1;
                table[task].remaining_time -= 1;
                if table[task].remaining_time != 0 {
                    schedule.events.push(Event::Run { time: timer, task });
                }
                // arrivals during the burst queue up ahead of the preempted task
                admit(&mut table, &mut ready, timer);
            }
            schedule.bursts.push(Burst { task, start, end: timer });

            if table[task].remaining_time == 0 {
                table[task].mark_finished(timer);
                schedule.events.push(Event::Finish { time: timer, task });
                finished += 1;
            } else {
                // still `Queued`; back to the tail
                let requeued = ready.push(task);
                debug_assert!(requeued.is_ok());
            }
        }

        schedule.table = table;
        schedule
    }
}
