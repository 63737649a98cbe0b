/// Reference instance: four tasks, quantum 2.
pub const TIME_QUANTUM: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotQueued,
    Queued,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub name: String,
    pub arrival_time: usize,
    pub process_time: usize,

    // simulation state
    pub remaining_time: usize,
    pub finish_time: Option<usize>,
    pub status: Status,
}

impl Process {
    pub fn new(name: &str, arrival_time: usize, process_time: usize) -> Process {
        Process {
            name: name.to_owned(),
            arrival_time,
            process_time,
            remaining_time: process_time,
            finish_time: None,
            status: Status::NotQueued,
        }
    }

    /// `finish_time - arrival_time`, once the task has finished.
    pub fn response_time(&self) -> Option<usize> {
        self.finish_time.map(|end| end - self.arrival_time)
    }

    pub fn mark_queued(&mut self) {
        debug_assert_eq!(self.status, Status::NotQueued, "{} queued twice", self.name);
        self.status = Status::Queued;
    }

    /// Records completion at `time`. Used by every scheduler, so FCFS and SPT
    /// results also end up `Finished`.
    pub fn mark_finished(&mut self, time: usize) {
        debug_assert_ne!(self.status, Status::Finished, "{} finished twice", self.name);
        debug_assert!(time >= self.arrival_time);
        self.remaining_time = 0;
        self.finish_time = Some(time);
        self.status = Status::Finished;
    }

    pub fn is_finished(&self) -> bool {
        self.status == Status::Finished
    }
}

pub fn reference_table() -> Vec<Process> {
    vec![
        Process::new("A", 0, 2),
        Process::new("B", 1, 10),
        Process::new("C", 3, 7),
        Process::new("D", 5, 3),
    ]
}
