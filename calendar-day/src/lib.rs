#![doc = include_str!("../README.md")]

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, IsoWeek, Months, NaiveDate, NaiveTime, Utc, Weekday};

/// Textual format of a day, as used by `Display` and `FromStr`.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

// --
// -- Errors
// --

/// A (year, month, day) triple that does not match any existing day.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct InvalidDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid date {:04}-{:02}-{:02}",
            self.year, self.month, self.day
        )
    }
}

impl std::error::Error for InvalidDate {}

// --
// -- CalendarDay
// --

/// A day of the proleptic Gregorian calendar, with no time of day and no
/// timezone attached.
///
/// Arithmetic on this type always moves by whole calendar days: there is no
/// instant involved, hence no daylight saving transition can make a day be
/// skipped or repeated.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// First day that can be represented.
    pub const MIN: Self = Self(NaiveDate::MIN);

    /// Last day that can be represented.
    pub const MAX: Self = Self(NaiveDate::MAX);

    /// Build a day from its components, failing if they don't match an
    /// existing day.
    ///
    /// ```
    /// use calendar_day::CalendarDay;
    ///
    /// assert!(CalendarDay::from_ymd(2020, 2, 29).is_ok());
    /// assert!(CalendarDay::from_ymd(2021, 2, 29).is_err());
    /// assert!(CalendarDay::from_ymd(2021, 13, 1).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, InvalidDate> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(InvalidDate { year, month, day })
    }

    /// Normalize any date-like value into the calendar day it belongs to.
    ///
    /// Only the (year, month, day) components of the input are kept, so for
    /// a zoned datetime this is its local date in that zone.
    ///
    /// ```
    /// use calendar_day::CalendarDay;
    /// use chrono::NaiveDate;
    ///
    /// let datetime = NaiveDate::from_ymd_opt(2021, 6, 15)
    ///     .unwrap()
    ///     .and_hms_opt(23, 59, 59)
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     CalendarDay::from_date(&datetime),
    ///     CalendarDay::from_ymd(2021, 6, 15).unwrap(),
    /// );
    /// ```
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self(
            NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())
                .expect("Datelike value should always hold a valid date"),
        )
    }

    /// Get the underlying naive date.
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    /// The following day, if it can be represented.
    ///
    /// ```
    /// use calendar_day::CalendarDay;
    ///
    /// let day = CalendarDay::from_ymd(2020, 2, 28).unwrap();
    /// assert_eq!(day.succ(), Some(CalendarDay::from_ymd(2020, 2, 29).unwrap()));
    /// assert_eq!(CalendarDay::MAX.succ(), None);
    /// ```
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// The previous day, if it can be represented.
    ///
    /// ```
    /// use calendar_day::CalendarDay;
    ///
    /// let day = CalendarDay::from_ymd(2021, 3, 1).unwrap();
    /// assert_eq!(day.pred(), Some(CalendarDay::from_ymd(2021, 2, 28).unwrap()));
    /// assert_eq!(CalendarDay::MIN.pred(), None);
    /// ```
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Signed number of days from `self` to `other`.
    ///
    /// ```
    /// use calendar_day::CalendarDay;
    ///
    /// let d1 = CalendarDay::from_ymd(2021, 1, 1).unwrap();
    /// let d2 = CalendarDay::from_ymd(2022, 1, 1).unwrap();
    /// assert_eq!(d1.days_until(d2), 365);
    /// assert_eq!(d2.days_until(d1), -365);
    /// ```
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// First day of this day's month.
    pub fn first_day_of_month(self) -> Self {
        Self(
            self.0
                .with_day(1)
                .expect("first of the month should always exist"),
        )
    }

    /// Number of days in this day's month.
    ///
    /// ```
    /// use calendar_day::CalendarDay;
    ///
    /// let days = |y, m| CalendarDay::from_ymd(y, m, 1).unwrap().days_in_month();
    /// assert_eq!(days(2021, 1), 31);
    /// assert_eq!(days(2021, 2), 28);
    /// assert_eq!(days(2020, 2), 29);
    /// assert_eq!(days(2021, 4), 30);
    /// ```
    pub fn days_in_month(self) -> u32 {
        let Some(date_next_month) = self.0.checked_add_months(Months::new(1)) else {
            // December of last supported year
            return 31;
        };

        let first_this_month = self.first_day_of_month();
        let first_next_month = Self::from_date(&date_next_month).first_day_of_month();

        first_this_month
            .days_until(first_next_month)
            .try_into()
            .expect("month length should fit any integer")
    }

    /// Last day of this day's month.
    ///
    /// ```
    /// use calendar_day::CalendarDay;
    ///
    /// let day = CalendarDay::from_ymd(2020, 2, 3).unwrap();
    /// assert_eq!(day.last_day_of_month(), CalendarDay::from_ymd(2020, 2, 29).unwrap());
    /// ```
    pub fn last_day_of_month(self) -> Self {
        Self(
            self.0
                .with_day(self.days_in_month())
                .expect("month length should be a valid day"),
        )
    }

    /// Most recent day, `self` included, which is a given weekday.
    ///
    /// ```
    /// use calendar_day::CalendarDay;
    /// use chrono::Weekday;
    ///
    /// let thursday = CalendarDay::from_ymd(2021, 6, 17).unwrap();
    /// let monday = CalendarDay::from_ymd(2021, 6, 14).unwrap();
    /// assert_eq!(thursday.last_weekday(Weekday::Mon), Some(monday));
    /// assert_eq!(monday.last_weekday(Weekday::Mon), Some(monday));
    /// ```
    pub fn last_weekday(self, weekday: Weekday) -> Option<Self> {
        let back = (7 + self.0.weekday().num_days_from_monday()
            - weekday.num_days_from_monday())
            % 7;

        self.0
            .checked_sub_days(chrono::Days::new(back.into()))
            .map(Self)
    }

    /// Project this day to an instant: midday in UTC.
    ///
    /// This is the representation to use when a timestamp is required but
    /// must still identify the day unambiguously from any timezone whose
    /// offset is less than twelve hours.
    ///
    /// ```
    /// use calendar_day::CalendarDay;
    ///
    /// let day = CalendarDay::from_ymd(2021, 3, 28).unwrap();
    /// assert_eq!(day.at_noon_utc().to_rfc3339(), "2021-03-28T12:00:00+00:00");
    /// ```
    pub fn at_noon_utc(self) -> DateTime<Utc> {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("noon should be a valid time");
        self.0.and_time(noon).and_utc()
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDay> for NaiveDate {
    fn from(day: CalendarDay) -> Self {
        day.0
    }
}

impl FromStr for CalendarDay {
    type Err = chrono::ParseError;

    /// ```
    /// use calendar_day::CalendarDay;
    ///
    /// let day: CalendarDay = "2021-06-15".parse().unwrap();
    /// assert_eq!(day, CalendarDay::from_ymd(2021, 6, 15).unwrap());
    /// assert!("2021-02-30".parse::<CalendarDay>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DAY_FORMAT).map(Self)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl fmt::Debug for CalendarDay {
    /// ```
    /// use calendar_day::CalendarDay;
    ///
    /// let day = CalendarDay::from_ymd(2021, 6, 15).unwrap();
    /// assert_eq!(format!("{day:?}"), "CalendarDay(2021-06-15)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDay({self})")
    }
}

impl Datelike for CalendarDay {
    fn year(&self) -> i32 {
        self.0.year()
    }

    fn month(&self) -> u32 {
        self.0.month()
    }

    fn month0(&self) -> u32 {
        self.0.month0()
    }

    fn day(&self) -> u32 {
        self.0.day()
    }

    fn day0(&self) -> u32 {
        self.0.day0()
    }

    fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    fn ordinal0(&self) -> u32 {
        self.0.ordinal0()
    }

    fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    fn iso_week(&self) -> IsoWeek {
        self.0.iso_week()
    }

    fn with_year(&self, year: i32) -> Option<Self> {
        self.0.with_year(year).map(Self)
    }

    fn with_month(&self, month: u32) -> Option<Self> {
        self.0.with_month(month).map(Self)
    }

    fn with_month0(&self, month0: u32) -> Option<Self> {
        self.0.with_month0(month0).map(Self)
    }

    fn with_day(&self, day: u32) -> Option<Self> {
        self.0.with_day(day).map(Self)
    }

    fn with_day0(&self, day0: u32) -> Option<Self> {
        self.0.with_day0(day0).map(Self)
    }

    fn with_ordinal(&self, ordinal: u32) -> Option<Self> {
        self.0.with_ordinal(ordinal).map(Self)
    }

    fn with_ordinal0(&self, ordinal0: u32) -> Option<Self> {
        self.0.with_ordinal0(ordinal0).map(Self)
    }
}

#[cfg(feature = "fuzzing")]
impl<'a> arbitrary::Arbitrary<'a> for CalendarDay {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        // Days from 0001-01-01 to 9999-12-31
        let days = u.int_in_range(1..=3_652_059)?;

        NaiveDate::from_num_days_from_ce_opt(days)
            .map(Self)
            .ok_or(arbitrary::Error::IncorrectFormat)
    }
}
