use std::cmp::Ordering;

use crate::process::Process;

pub fn by_arrival(a: &Process, b: &Process) -> Ordering {
    a.arrival_time.cmp(&b.arrival_time)
}

pub fn by_process_time(a: &Process, b: &Process) -> Ordering {
    a.process_time.cmp(&b.process_time)
}

/// Arrival time first, processing time on a tie.
pub fn combined(a: &Process, b: &Process) -> Ordering {
    by_arrival(a, b).then_with(|| by_process_time(a, b))
}

/// Stable: tasks arriving together keep their table order.
pub fn sort_by_arrival(processes: &mut [Process]) {
    processes.sort_by(by_arrival);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(processes: &[Process]) -> Vec<&str> {
        processes.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn combined_breaks_arrival_ties_by_process_time() {
        let a = Process::new("A", 3, 9);
        let b = Process::new("B", 3, 4);
        let c = Process::new("C", 1, 20);
        assert_eq!(combined(&a, &b), Ordering::Greater);
        assert_eq!(combined(&c, &b), Ordering::Less);
        assert_eq!(combined(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn sort_by_arrival_is_stable() {
        let mut table = vec![
            Process::new("late", 4, 1),
            Process::new("x", 2, 5),
            Process::new("y", 2, 1),
            Process::new("z", 0, 3),
        ];
        sort_by_arrival(&mut table);
        assert_eq!(names(&table), vec!["z", "x", "y", "late"]);
    }
}
