use std::fmt;

use log::{trace, warn};

/// Far above the size of any table we run.
pub const QUEUE_CAPACITY: usize = 10000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    Overflow,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Overflow => write!(f, "Error: Overflow"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Bounded circular FIFO of indices into a scheduler's process table.
#[derive(Debug)]
pub struct ReadyQueue {
    slots: Vec<usize>,
    head: usize,
    len: usize,
}

impl ReadyQueue {
    pub fn with_capacity(capacity: usize) -> ReadyQueue {
        ReadyQueue {
            slots: vec![0; capacity],
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `task` at the tail. A full queue drops the entry and reports
    /// the overflow; the caller is free to carry on.
    pub fn push(&mut self, task: usize) -> Result<(), QueueError> {
        if self.len == self.capacity() {
            warn!("{} (task #{} dropped)", QueueError::Overflow, task);
            return Err(QueueError::Overflow);
        }
        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = task;
        self.len += 1;
        trace!("ready queue push #{} (len {})", task, self.len);
        Ok(())
    }

    /// `None` means nothing is ready yet, not a failure.
    pub fn pop(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let task = self.slots[self.head];
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Some(task)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).map(move |i| self.slots[(self.head + i) % self.capacity()])
    }
}

impl Default for ReadyQueue {
    fn default() -> Self {
        ReadyQueue::with_capacity(QUEUE_CAPACITY)
    }
}
