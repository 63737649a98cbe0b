use std::io;
use std::path::PathBuf;

use clap::{App, Arg};

use cpusched::{logger, simulate, Config, Policy, Result};

fn valid_schedspec(value: &str) -> std::result::Result<Policy, cpusched::Error> {
    value.parse()
}

fn parse_args(actual_args: &[String]) -> Result<Config> {
    let matches = App::new("CPU scheduling simulator")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("schedspec")
                .short('s')
                .long("schedspec")
                .takes_value(true)
                .multiple_occurrences(true)
                .validator(valid_schedspec)
                .help("Scheduler specification (F, S or R<num>); repeat to run several"),
        )
        .arg(
            Arg::new("quantum")
                .short('q')
                .long("quantum")
                .takes_value(true)
                .default_value("2")
                .validator(|s| s.parse::<usize>())
                .help("Round-Robin quantum when no -s is given"),
        )
        .arg(
            Arg::new("inputfile")
                .long("inputfile")
                .takes_value(true)
                .help("Process table file (<name> <arrival> <time> per line)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .multiple_occurrences(true)
                .help("Log scheduling decisions to stderr (-vv for every tick)"),
        )
        .get_matches_from(actual_args);

    let specs: Vec<&str> = matches
        .values_of("schedspec")
        .map(|values| values.collect())
        .unwrap_or_default();
    // validated above, so only a missing value can fail here
    let quantum = matches
        .value_of("quantum")
        .and_then(|q| q.parse().ok())
        .unwrap_or(cpusched::TIME_QUANTUM);
    let inputfile = matches.value_of("inputfile").map(PathBuf::from);

    Config::new(&specs, quantum, inputfile, matches.occurrences_of("verbose"))
}

fn run(args: &[String]) -> Result<()> {
    let config = parse_args(args)?;
    logger::init(logger::level_for(config.verbosity));

    let table = config.load_table()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    simulate(&table, &config.policies, &mut out)?;
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = run(&args) {
        eprintln!("cpusched: {}", err);
        std::process::exit(1);
    }
}
