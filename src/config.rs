use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::input::read_input_file;
use crate::process::{reference_table, Process, TIME_QUANTUM};
use crate::schedulers::Policy;

#[derive(Debug, Clone)]
pub struct Config {
    pub policies: Vec<Policy>,
    /// `None` runs the built-in reference table.
    pub inputfile: Option<PathBuf>,
    pub verbosity: u64,
}

impl Config {
    /// Builds the run list from `-s` specs, falling back to all three
    /// disciplines with `quantum` for Round-Robin.
    pub fn new(
        specs: &[&str],
        quantum: usize,
        inputfile: Option<PathBuf>,
        verbosity: u64,
    ) -> Result<Config> {
        let quantum = NonZeroUsize::new(quantum).ok_or(Error::InvalidQuantum(quantum))?;
        let policies = if specs.is_empty() {
            Policy::all(quantum)
        } else {
            specs
                .iter()
                .map(|spec| spec.parse())
                .collect::<Result<Vec<Policy>>>()?
        };

        Ok(Config {
            policies,
            inputfile,
            verbosity,
        })
    }

    pub fn load_table(&self) -> Result<Vec<Process>> {
        match &self.inputfile {
            Some(path) => read_input_file(path),
            None => Ok(reference_table()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            policies: Policy::all(NonZeroUsize::new(TIME_QUANTUM).unwrap_or(NonZeroUsize::MIN)),
            inputfile: None,
            verbosity: 0,
        }
    }
}
