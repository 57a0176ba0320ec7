use std::fmt;
use std::iter::FusedIterator;

use calendar_day::CalendarDay;
use chrono::Datelike;

use crate::error::{Error, Exhausted, Result};

/// Order in which the days of a [`DayRange`] are visited.
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Iterate over each day of a closed interval of days, from the first to the
/// last one or the other way around.
///
/// Both bounds are normalized to [`CalendarDay`] when the range is built, so
/// any time of day or timezone component of the inputs is ignored and each
/// step moves by exactly one calendar day.
///
/// ```
/// use appy_dates::{CalendarDay, DayRange};
///
/// let start: CalendarDay = "2021-02-27".parse().unwrap();
/// let end: CalendarDay = "2021-03-01".parse().unwrap();
///
/// let days: Vec<_> = DayRange::forward(start, end)
///     .unwrap()
///     .map(|day| day.to_string())
///     .collect();
///
/// assert_eq!(days, ["2021-02-27", "2021-02-28", "2021-03-01"]);
///
/// let days: Vec<_> = DayRange::backward(start, end)
///     .unwrap()
///     .map(|day| day.to_string())
///     .collect();
///
/// assert_eq!(days, ["2021-03-01", "2021-02-28", "2021-02-27"]);
/// ```
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct DayRange {
    start: CalendarDay,
    end: CalendarDay,
    direction: Direction,
    cursor: CalendarDay,
    done: bool,
}

impl DayRange {
    /// Build a range over all days from `start` to `end`, both included.
    ///
    /// Fails if `start` is after `end`: an inverted range is considered as a
    /// caller mistake rather than as an empty range.
    ///
    /// ```
    /// use appy_dates::{CalendarDay, DayRange, Direction, Error};
    ///
    /// let d1: CalendarDay = "2021-01-01".parse().unwrap();
    /// let d2: CalendarDay = "2021-12-31".parse().unwrap();
    ///
    /// assert_eq!(DayRange::new(d1, d2, Direction::Backward).unwrap().len(), 365);
    ///
    /// assert_eq!(
    ///     DayRange::new(d2, d1, Direction::Forward),
    ///     Err(Error::InvertedRange { start: d2, end: d1 }),
    /// );
    /// ```
    pub fn new<S: Datelike, E: Datelike>(start: S, end: E, direction: Direction) -> Result<Self> {
        let start = CalendarDay::from_date(&start);
        let end = CalendarDay::from_date(&end);

        if start > end {
            return Err(Error::InvertedRange { start, end });
        }

        let cursor = match direction {
            Direction::Forward => start,
            Direction::Backward => end,
        };

        #[cfg(feature = "log")]
        log::trace!("New {direction:?} day range from {start} to {end}");

        Ok(Self { start, end, direction, cursor, done: false })
    }

    /// Build a range visiting days in increasing order.
    pub fn forward<S: Datelike, E: Datelike>(start: S, end: E) -> Result<Self> {
        Self::new(start, end, Direction::Forward)
    }

    /// Build a range visiting days in decreasing order.
    pub fn backward<S: Datelike, E: Datelike>(start: S, end: E) -> Result<Self> {
        Self::new(start, end, Direction::Backward)
    }

    /// Build a range containing a single day.
    pub fn single<D: Datelike>(day: D) -> Self {
        let day = CalendarDay::from_date(&day);

        Self {
            start: day,
            end: day,
            direction: Direction::Forward,
            cursor: day,
            done: false,
        }
    }

    /// First day of the interval, whatever the direction is.
    pub fn start(&self) -> CalendarDay {
        self.start
    }

    /// Last day of the interval, whatever the direction is.
    pub fn end(&self) -> CalendarDay {
        self.end
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Check if a day belongs to the interval covered by this range. This
    /// doesn't depend on the progress of the iteration.
    ///
    /// ```
    /// use appy_dates::{CalendarDay, DayRange};
    ///
    /// let day = |s: &str| s.parse::<CalendarDay>().unwrap();
    /// let range = DayRange::forward(day("2021-06-01"), day("2021-06-30")).unwrap();
    ///
    /// assert!(range.contains(day("2021-06-01")));
    /// assert!(range.contains(day("2021-06-30")));
    /// assert!(!range.contains(day("2021-07-01")));
    /// ```
    pub fn contains<D: Datelike>(&self, day: D) -> bool {
        (self.start..=self.end).contains(&CalendarDay::from_date(&day))
    }

    /// Check if all days have already been yielded.
    pub fn is_exhausted(&self) -> bool {
        self.done
    }

    /// Get a fresh range over the same interval, in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.start, self.end, self.direction.reversed())
            .expect("bounds were already checked")
    }

    /// Yield the next day of the range, or fail if the whole interval has
    /// already been traversed.
    ///
    /// ```
    /// use appy_dates::{CalendarDay, DayRange};
    /// use appy_dates::error::Exhausted;
    ///
    /// let day: CalendarDay = "2021-06-15".parse().unwrap();
    /// let mut range = DayRange::single(day);
    ///
    /// assert_eq!(range.advance(), Ok(day));
    /// assert_eq!(range.advance(), Err(Exhausted));
    /// assert_eq!(range.advance(), Err(Exhausted));
    /// ```
    pub fn advance(&mut self) -> std::result::Result<CalendarDay, Exhausted> {
        if self.done {
            return Err(Exhausted);
        }

        let result = self.cursor;

        match self.direction {
            Direction::Forward => {
                if self.cursor >= self.end {
                    self.done = true;
                } else {
                    self.cursor = self.cursor.succ().expect("cursor is before range end");
                }
            }
            Direction::Backward => {
                if self.cursor <= self.start {
                    self.done = true;
                } else {
                    self.cursor = self.cursor.pred().expect("cursor is after range start");
                }
            }
        }

        Ok(result)
    }

    /// Number of days that are still to be yielded.
    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }

        let remaining = match self.direction {
            Direction::Forward => self.cursor.days_until(self.end),
            Direction::Backward => self.start.days_until(self.cursor),
        };

        usize::try_from(remaining + 1).expect("cursor out of range bounds")
    }
}

impl Iterator for DayRange {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DayRange {}

impl FusedIterator for DayRange {}

impl fmt::Debug for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DayRange")
            .field("range", &(self.start..=self.end))
            .field("direction", &self.direction)
            .field("cursor", &self.cursor)
            .field("done", &self.done)
            .finish()
    }
}
