use std::io::{self, Write};

use crate::schedule::{Event, Schedule};

fn write_event(out: &mut impl Write, schedule: &Schedule, event: &Event) -> io::Result<()> {
    match *event {
        Event::Run { time, task } => {
            writeln!(out, "{:2} Task:{}", time, schedule.table[task].name)
        }
        Event::Finish { time, task } => {
            writeln!(out, "{:2} Task:{} is finish", time, schedule.table[task].name)
        }
        Event::Skip { time } => writeln!(out, "{:2} skip", time),
    }
}

/// Prints the trace, the per-task table and the average response time.
pub fn render(schedule: &Schedule, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", schedule.algorithm)?;
    writeln!(out, "start")?;
    for event in &schedule.events {
        write_event(out, schedule, event)?;
    }
    writeln!(out, "end")?;
    writeln!(out)?;

    writeln!(out, "Task_Name|Arrival_Time|Finish_Time|Response_time|")?;
    for process in &schedule.table {
        writeln!(
            out,
            "        {}|{:12}|{:12}|{:14}|",
            process.name,
            process.arrival_time,
            process.finish_time.unwrap_or(0),
            process.response_time().unwrap_or(0)
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Average_Process_Time = {:.2}",
        schedule.average_response_time()
    )
}

pub fn render_to_string(schedule: &Schedule) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = render(schedule, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Process;

    #[test]
    fn formats_events_and_table() {
        let mut schedule = Schedule::new("Round-Robin");
        let mut x = Process::new("X", 3, 1);
        x.mark_finished(4);
        schedule.table = vec![x];
        schedule.events = vec![Event::Skip { time: 3 }, Event::Finish { time: 4, task: 0 }];

        let expected = concat!(
            "\nRound-Robin\nstart\n",
            " 3 skip\n",
            " 4 Task:X is finish\n",
            "end\n\n",
            "Task_Name|Arrival_Time|Finish_Time|Response_time|\n",
            "        X|           3|           4|             1|\n",
            "\nAverage_Process_Time = 1.00\n",
        );
        assert_eq!(render_to_string(&schedule), expected);
    }

    #[test]
    fn two_digit_times_are_not_padded() {
        let mut schedule = Schedule::new("First-Come-First-Serve");
        let mut x = Process::new("X", 0, 12);
        x.mark_finished(12);
        schedule.table = vec![x];
        schedule.events = vec![Event::Run { time: 1, task: 0 }, Event::Finish { time: 12, task: 0 }];
        let text = render_to_string(&schedule);
        assert!(text.contains("\n 1 Task:X\n12 Task:X is finish\n"));
    }
}
