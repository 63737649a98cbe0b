use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    /// Malformed process table line (1-based).
    Parse { line: usize, message: String },
    InvalidSpec(String),
    InvalidQuantum(usize),
}

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Error {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {}", err),
            Error::Parse { line, message } => write!(f, "line {}: {}", line, message),
            Error::InvalidSpec(spec) => write!(
                f,
                "invalid scheduler specification: {}. Must be one of F, S or R<num>",
                spec
            ),
            Error::InvalidQuantum(quantum) => {
                write!(f, "invalid time quantum: {} (must be at least 1)", quantum)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}
