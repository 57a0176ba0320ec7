use std::env;
use std::fmt;
use std::process::ExitCode;

use appy_dates::dates::{last_day_of_month, parse_day};
use appy_dates::{DayRange, Direction, UiConfig};
use chrono::Datelike;

const USAGE: &str = "Usage: ./days <START> <END> [--backward]";

#[derive(Debug, PartialEq)]
enum ArgsError {
    Missing(&'static str),
    Unknown(String),
    Dates(appy_dates::Error),
}

impl From<appy_dates::Error> for ArgsError {
    fn from(err: appy_dates::Error) -> Self {
        Self::Dates(err)
    }
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "missing argument <{name}>\n{USAGE}"),
            Self::Unknown(arg) => write!(f, "unknown argument `{arg}`\n{USAGE}"),
            Self::Dates(err) => write!(f, "{err}"),
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<DayRange, ArgsError> {
    let start = parse_day(&args.next().ok_or(ArgsError::Missing("START"))?)?;
    let end = parse_day(&args.next().ok_or(ArgsError::Missing("END"))?)?;

    let direction = match args.next().as_deref() {
        None => Direction::Forward,
        Some("--backward") => Direction::Backward,
        Some(other) => return Err(ArgsError::Unknown(other.to_string())),
    };

    if let Some(extra) = args.next() {
        return Err(ArgsError::Unknown(extra));
    }

    Ok(DayRange::new(start, end, direction)?)
}

fn main() -> ExitCode {
    let range = match parse_args(env::args().skip(1)) {
        Ok(range) => range,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let config = UiConfig::default();
    println!(" - range: {} to {}", range.start(), range.end());
    println!(" - direction: {:?}", range.direction());
    println!(" - days: {}", range.len());
    println!("---");

    for day in range {
        print!(" - {} ({:?})", config.format_day(&day), day.weekday());

        if day == last_day_of_month(&day) {
            print!(" end of month");
        }

        println!()
    }

    ExitCode::SUCCESS
}
