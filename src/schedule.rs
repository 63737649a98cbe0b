use crate::process::Process;

/// One line of the execution trace. `task` indexes `Schedule::table`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Run { time: usize, task: usize },
    Finish { time: usize, task: usize },
    Skip { time: usize },
}

/// A contiguous execution interval `[start, end)` of one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Burst {
    pub task: usize,
    pub start: usize,
    pub end: usize,
}

impl Burst {
    pub fn duration(&self) -> usize {
        self.end - self.start
    }
}

/// Result of one scheduler run. `table` is in the scheduler's final order.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub algorithm: &'static str,
    pub events: Vec<Event>,
    pub bursts: Vec<Burst>,
    pub table: Vec<Process>,
}

impl Schedule {
    pub fn new(algorithm: &'static str) -> Schedule {
        Schedule {
            algorithm,
            events: Vec::new(),
            bursts: Vec::new(),
            table: Vec::new(),
        }
    }

    pub fn total_response_time(&self) -> usize {
        self.table.iter().filter_map(Process::response_time).sum()
    }

    pub fn average_response_time(&self) -> f64 {
        if self.table.is_empty() {
            return 0.0;
        }
        self.total_response_time() as f64 / self.table.len() as f64
    }

    pub fn finish_time_of(&self, name: &str) -> Option<usize> {
        self.table
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.finish_time)
    }

    /// Task names in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Finish { task, .. } => Some(self.table[*task].name.as_str()),
                _ => None,
            })
            .collect()
    }
}
