use std::fmt::Display;

use calendar_day::CalendarDay;
use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Days, Weekday};

use crate::day_range::DayRange;
use crate::error::{Error, Result};
use crate::localization::{Localize, NoLocation};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Display preferences of a user interface showing dates.
///
/// ```
/// use appy_dates::{CalendarDay, UiConfig};
/// use chrono::Weekday;
///
/// let config = UiConfig::default()
///     .with_date_format("%d/%m/%Y")
///     .unwrap()
///     .with_first_weekday(Weekday::Sun);
///
/// let day: CalendarDay = "2021-06-16".parse().unwrap();
/// assert_eq!(config.format_day(&day), "16/06/2021");
///
/// let week: Vec<_> = config.week_of(day).unwrap().collect();
/// assert_eq!(week.first().unwrap().to_string(), "2021-06-13");
/// assert_eq!(week.last().unwrap().to_string(), "2021-06-19");
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct UiConfig<L = NoLocation> {
    date_format: String,
    datetime_format: String,
    first_weekday: Weekday,
    locale: L,
}

impl<L> UiConfig<L> {
    /// Set the format used to display days, following `strftime` syntax.
    pub fn with_date_format(self, format: &str) -> Result<Self> {
        Ok(Self { date_format: checked_format(format)?, ..self })
    }

    /// Set the format used to display datetimes, following `strftime` syntax.
    pub fn with_datetime_format(self, format: &str) -> Result<Self> {
        Ok(Self { datetime_format: checked_format(format)?, ..self })
    }

    /// Set the day weeks are considered to start on.
    pub fn with_first_weekday(self, first_weekday: Weekday) -> Self {
        Self { first_weekday, ..self }
    }

    /// Attach a new locale component to this config.
    pub fn with_locale<L2: Localize>(self, locale: L2) -> UiConfig<L2> {
        UiConfig {
            date_format: self.date_format,
            datetime_format: self.datetime_format,
            first_weekday: self.first_weekday,
            locale,
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn datetime_format(&self) -> &str {
        &self.datetime_format
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn locale(&self) -> &L {
        &self.locale
    }

    /// Display a day with configured date format.
    pub fn format_day<D: Datelike>(&self, date: &D) -> String {
        CalendarDay::from_date(date)
            .naive()
            .format(&self.date_format)
            .to_string()
    }

    /// Range over the 7 days of the week containing input day, starting with
    /// configured first weekday. Returns `None` if this week is not fully
    /// representable.
    pub fn week_of<D: Datelike>(&self, date: D) -> Option<DayRange> {
        let start = CalendarDay::from_date(&date).last_weekday(self.first_weekday)?;
        let end = start.naive().checked_add_days(Days::new(6))?;
        DayRange::forward(start, end).ok()
    }

    /// Range over all the days of the month of input day.
    ///
    /// ```
    /// use appy_dates::{CalendarDay, UiConfig};
    ///
    /// let day: CalendarDay = "2020-02-14".parse().unwrap();
    /// let month = UiConfig::default().month_of(day);
    ///
    /// assert_eq!(month.len(), 29);
    /// assert_eq!(month.start().to_string(), "2020-02-01");
    /// assert_eq!(month.end().to_string(), "2020-02-29");
    /// ```
    pub fn month_of<D: Datelike>(&self, date: D) -> DayRange {
        let day = CalendarDay::from_date(&date);

        DayRange::forward(day.first_day_of_month(), day.last_day_of_month())
            .expect("first day of month should be before its last day")
    }
}

impl<L: Localize> UiConfig<L> {
    /// Get the first and last minutes of a day for configured locale.
    pub fn day_interval<D: Datelike>(&self, date: &D) -> Result<(L::DateTime, L::DateTime)> {
        self.locale.day_interval(date)
    }

    /// Display a datetime with configured datetime format.
    pub fn format_datetime(&self, datetime: &L::DateTime) -> String
    where
        L::DateTime: HasFormat,
    {
        datetime.format_with(&self.datetime_format)
    }
}

impl Default for UiConfig<NoLocation> {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            first_weekday: Weekday::Mon,
            locale: NoLocation,
        }
    }
}

/// Datetime representations that can be displayed with a `strftime` format.
pub trait HasFormat {
    fn format_with(&self, format: &str) -> String;
}

impl HasFormat for chrono::NaiveDateTime {
    fn format_with(&self, format: &str) -> String {
        self.format(format).to_string()
    }
}

impl<Tz> HasFormat for chrono::DateTime<Tz>
where
    Tz: chrono::TimeZone,
    Tz::Offset: Display,
{
    fn format_with(&self, format: &str) -> String {
        self.format(format).to_string()
    }
}

fn checked_format(format: &str) -> Result<String> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidFormat(format.to_string()));
    }

    Ok(format.to_string())
}
