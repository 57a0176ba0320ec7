use std::fmt::Debug;

use calendar_day::CalendarDay;
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, NaiveTime, TimeZone, Timelike};

use crate::error::{Error, Result};

/// Specifies how naive dates and times are turned into the representation of
/// a location. No localisation is available by default but this can be used
/// to specify a timezone.
pub trait Localize: Clone + Send + Sync {
    /// The type for localized date & time
    type DateTime: Clone + Debug + Eq + Ord + Datelike + Timelike;

    /// Localize a naive datetime, which is expected to be expressed in the
    /// local time of this location. A local time that doesn't exist is moved
    /// forward to the next valid instant.
    fn localize_datetime(&self, naive: NaiveDateTime) -> Self::DateTime;

    /// Same as [`Localize::localize_datetime`], except that a local time
    /// that doesn't exist is moved backward to the last valid instant
    /// preceding it.
    fn localize_datetime_backward(&self, naive: NaiveDateTime) -> Self::DateTime;

    /// Get the boundaries of a day in this location: its first minute
    /// (00:00) and its last minute (23:59).
    ///
    /// If one of these minutes is skipped by a clock change, the closest
    /// valid minute inside of the day is used instead. Fails if the whole
    /// day was skipped in this location.
    ///
    /// ```
    /// use appy_dates::localization::{Localize, NoLocation};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
    /// let (start, end) = NoLocation.day_interval(&date).unwrap();
    /// assert_eq!(start.to_string(), "2021-06-15 00:00:00");
    /// assert_eq!(end.to_string(), "2021-06-15 23:59:00");
    /// ```
    fn day_interval<D: Datelike>(&self, date: &D) -> Result<(Self::DateTime, Self::DateTime)> {
        let day = CalendarDay::from_date(date);
        let start_of_day = NaiveTime::from_hms_opt(0, 0, 0).expect("00:00 should be a valid time");
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 0).expect("23:59 should be a valid time");
        let start = self.localize_datetime(day.naive().and_time(start_of_day));
        let end = self.localize_datetime_backward(day.naive().and_time(end_of_day));

        if CalendarDay::from_date(&start) != day || CalendarDay::from_date(&end) != day {
            return Err(Error::SkippedDay(day));
        }

        Ok((start, end))
    }
}

/// No location info: dates are kept naive.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoLocation;

impl NoLocation {
    /// Attach a timezone to this location.
    pub fn with_tz<Tz: TimeZone + Send + Sync>(self, tz: Tz) -> TzLocation<Tz> {
        TzLocation::new(tz)
    }
}

impl Localize for NoLocation {
    type DateTime = NaiveDateTime;

    fn localize_datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        naive
    }

    fn localize_datetime_backward(&self, naive: NaiveDateTime) -> Self::DateTime {
        naive
    }
}

/// Time zone is specified.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct TzLocation<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    tz: Tz,
}

impl<Tz> TzLocation<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    /// Create a new location with given timezone.
    ///
    /// ```
    /// use appy_dates::localization::{Localize, TzLocation};
    /// use chrono::{NaiveDate, Timelike};
    ///
    /// let loc = TzLocation::new(chrono_tz::Europe::Paris);
    /// let date = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
    /// let (start, end) = loc.day_interval(&date).unwrap();
    ///
    /// assert_eq!(start.to_rfc3339(), "2021-06-15T00:00:00+02:00");
    /// assert_eq!((end.hour(), end.minute()), (23, 59));
    /// ```
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Get the timezone for this location.
    pub fn get_timezone(&self) -> &Tz {
        &self.tz
    }
}

#[cfg(feature = "tz")]
impl TzLocation<chrono_tz::Tz> {
    /// Create a new location from an IANA timezone name.
    ///
    /// ```
    /// use appy_dates::localization::TzLocation;
    ///
    /// assert!(TzLocation::from_name("Europe/Paris").is_ok());
    /// assert!(TzLocation::from_name("Mars/Olympus_Mons").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        let tz: chrono_tz::Tz = name
            .parse()
            .map_err(|_| Error::UnknownTimeZone(name.to_string()))?;

        Ok(Self::new(tz))
    }
}

impl<Tz> Localize for TzLocation<Tz>
where
    Tz: TimeZone + Send + Sync,
{
    type DateTime = DateTime<Tz>;

    fn localize_datetime(&self, naive: NaiveDateTime) -> Self::DateTime {
        localize_next_valid(naive, &self.tz)
    }

    fn localize_datetime_backward(&self, naive: NaiveDateTime) -> Self::DateTime {
        localize_prev_valid(naive, &self.tz)
    }
}

/// Localize input datetime to its next valid occurence.
///
/// Local times that are skipped by a forward clock change are moved to the
/// first instant following the gap, while ambiguous ones resolve to the
/// earliest instant.
pub(crate) fn localize_next_valid<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        chrono::LocalResult::Single(x) => x,
        chrono::LocalResult::Ambiguous(x, _y) => {
            #[cfg(feature = "log")]
            log::warn!("Ambiguous date {naive}: could be {x:?} (default) or {_y:?}");

            x
        }
        chrono::LocalResult::None => {
            let mut curr = naive;

            loop {
                curr += Duration::minutes(1);

                if let Some(res) = tz.from_local_datetime(&curr).earliest() {
                    #[cfg(feature = "log")]
                    log::warn!("Skipped invalid dates from {naive} to {curr}");

                    return res;
                }
            }
        }
    }
}

/// Localize input datetime to its previous valid occurence.
///
/// Local times that are skipped by a forward clock change are moved to the
/// last minute preceding the gap, while ambiguous ones resolve to the latest
/// instant.
pub(crate) fn localize_prev_valid<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        chrono::LocalResult::Single(x) => x,
        chrono::LocalResult::Ambiguous(_x, y) => {
            #[cfg(feature = "log")]
            log::warn!("Ambiguous date {naive}: could be {_x:?} or {y:?} (default)");

            y
        }
        chrono::LocalResult::None => {
            let mut curr = naive;

            loop {
                curr -= Duration::minutes(1);

                if let Some(res) = tz.from_local_datetime(&curr).latest() {
                    #[cfg(feature = "log")]
                    log::warn!("Moved invalid date {naive} back to {curr}");

                    return res;
                }
            }
        }
    }
}
