use std::fmt;

use calendar_day::{CalendarDay, InvalidDate};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Input components don't match any existing day.
    InvalidDate(InvalidDate),
    /// A range was built with its start after its end.
    InvertedRange { start: CalendarDay, end: CalendarDay },
    /// A strftime-like format string could not be understood.
    InvalidFormat(String),
    /// A textual date could not be parsed.
    Parse(chrono::ParseError),
    /// The given name is not a known IANA timezone.
    UnknownTimeZone(String),
    /// The day was entirely skipped by a clock change in the requested
    /// timezone.
    SkippedDay(CalendarDay),
}

impl From<InvalidDate> for Error {
    fn from(err: InvalidDate) -> Self {
        Self::InvalidDate(err)
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Self::Parse(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(err) => write!(f, "{err}"),
            Self::InvertedRange { start, end } => {
                write!(f, "range starts on {start} which is after its end {end}")
            }
            Self::InvalidFormat(format) => write!(f, "invalid date format `{format}`"),
            Self::Parse(err) => write!(f, "could not parse date: {err}"),
            Self::UnknownTimeZone(name) => write!(f, "unknown timezone `{name}`"),
            Self::SkippedDay(day) => write!(f, "day {day} doesn't exist in this timezone"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Returned when a value is requested from a range which has already been
/// fully traversed.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Exhausted;

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day range is exhausted")
    }
}

impl std::error::Error for Exhausted {}
