//! Helpers computing days and day boundaries out of any date-like value.

use calendar_day::CalendarDay;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::Result;
use crate::localization::{Localize, NoLocation, TzLocation};

/// Build a day from its components.
///
/// ```
/// use appy_dates::dates::day_from_ymd;
/// use appy_dates::Error;
///
/// assert_eq!(day_from_ymd(2020, 2, 29).unwrap().to_string(), "2020-02-29");
/// assert!(matches!(day_from_ymd(2021, 2, 29), Err(Error::InvalidDate(_))));
/// ```
pub fn day_from_ymd(year: i32, month: u32, day: u32) -> Result<CalendarDay> {
    Ok(CalendarDay::from_ymd(year, month, day)?)
}

/// Parse a day written as `YYYY-MM-DD`.
///
/// ```
/// use appy_dates::dates::parse_day;
/// use appy_dates::Error;
///
/// assert_eq!(parse_day("2021-06-15").unwrap().to_string(), "2021-06-15");
/// assert!(matches!(parse_day("2021-06-31"), Err(Error::Parse(_))));
/// ```
pub fn parse_day(input: &str) -> Result<CalendarDay> {
    let date = NaiveDate::parse_from_str(input, calendar_day::DAY_FORMAT)?;
    Ok(CalendarDay::from(date))
}

/// Normalize a date-like value into the calendar day it belongs to.
///
/// ```
/// use appy_dates::dates::normalize;
/// use chrono::{TimeZone, Utc};
///
/// let datetime = Utc.with_ymd_and_hms(2021, 3, 28, 1, 30, 0).unwrap();
/// assert_eq!(normalize(&datetime).to_string(), "2021-03-28");
/// ```
pub fn normalize<D: Datelike>(date: &D) -> CalendarDay {
    CalendarDay::from_date(date)
}

/// Get the first day of the month of input date.
pub fn first_day_of_month<D: Datelike>(date: &D) -> CalendarDay {
    normalize(date).first_day_of_month()
}

/// Get the last day of the month of input date.
///
/// ```
/// use appy_dates::dates::last_day_of_month;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 4, 12).unwrap();
/// assert_eq!(last_day_of_month(&date).to_string(), "2021-04-30");
/// ```
pub fn last_day_of_month<D: Datelike>(date: &D) -> CalendarDay {
    normalize(date).last_day_of_month()
}

/// Count the number of days in the month of input date.
pub fn days_in_month<D: Datelike>(date: &D) -> u32 {
    normalize(date).days_in_month()
}

/// Get the first (00:00) and last (23:59) minutes of the day of input date,
/// as naive local times.
///
/// ```
/// use appy_dates::dates::day_interval;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
/// let (start, end) = day_interval(&date);
/// assert_eq!(start.to_string(), "2021-06-15 00:00:00");
/// assert_eq!(end.to_string(), "2021-06-15 23:59:00");
/// ```
pub fn day_interval<D: Datelike>(date: &D) -> (NaiveDateTime, NaiveDateTime) {
    NoLocation
        .day_interval(date)
        .expect("naive local time never skips a day")
}

/// Get the first (00:00) and last (23:59) minutes of the local day of input
/// datetime, expressed in the same timezone.
///
/// ```
/// use appy_dates::dates::zoned_day_interval;
/// use chrono::{FixedOffset, TimeZone};
///
/// let tz = FixedOffset::west_opt(5 * 3600).unwrap();
/// let datetime = tz.with_ymd_and_hms(2021, 6, 15, 21, 30, 0).unwrap();
/// let (start, end) = zoned_day_interval(&datetime).unwrap();
///
/// assert_eq!(start.to_rfc3339(), "2021-06-15T00:00:00-05:00");
/// assert_eq!(end.to_rfc3339(), "2021-06-15T23:59:00-05:00");
/// ```
pub fn zoned_day_interval<Tz>(datetime: &DateTime<Tz>) -> Result<(DateTime<Tz>, DateTime<Tz>)>
where
    Tz: TimeZone + Send + Sync,
{
    TzLocation::new(datetime.timezone()).day_interval(datetime)
}
