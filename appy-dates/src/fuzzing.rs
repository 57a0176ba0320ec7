use arbitrary::Arbitrary;
use calendar_day::CalendarDay;
use chrono::{Datelike, Duration, FixedOffset, NaiveTime, TimeZone, Timelike};

use crate::dates::{last_day_of_month, zoned_day_interval};
use crate::{DayRange, Direction};

/// Maximal number of days covered by a fuzzed range.
const MAX_SPAN: i64 = 366 * 10;

#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub start: CalendarDay,
    pub span: u16,
    pub direction: Direction,
    pub offset_minutes: i16,
    pub time_secs: u32,
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_range(data: Data) -> bool {
    if i64::from(data.span) > MAX_SPAN {
        return false;
    }

    // Bounds are passed as zoned datetimes to check that only their local
    // date is taken into account.
    let Some(tz) = FixedOffset::east_opt(i32::from(data.offset_minutes) * 60) else {
        return false;
    };

    let Some(time) = NaiveTime::from_num_seconds_from_midnight_opt(data.time_secs % 86_400, 0)
    else {
        return false;
    };

    let Some(end) = data
        .start
        .naive()
        .checked_add_signed(Duration::days(data.span.into()))
    else {
        return false;
    };

    let Some(start_dt) = tz.from_local_datetime(&data.start.naive().and_time(time)).single()
    else {
        return false;
    };

    let Some(end_dt) = tz.from_local_datetime(&end.and_time(time)).single() else {
        return false;
    };

    let range = DayRange::new(start_dt, end_dt, data.direction).expect("bounds are ordered");
    assert_eq!(range.len(), usize::from(data.span) + 1);
    let days: Vec<_> = range.collect();
    assert_eq!(days.len(), usize::from(data.span) + 1);

    let (first, last) = match data.direction {
        Direction::Forward => (data.start, CalendarDay::from(end)),
        Direction::Backward => (CalendarDay::from(end), data.start),
    };

    assert_eq!(days.first(), Some(&first));
    assert_eq!(days.last(), Some(&last));

    for pair in days.windows(2) {
        let step = pair[0].days_until(pair[1]);

        match data.direction {
            Direction::Forward => assert_eq!(step, 1),
            Direction::Backward => assert_eq!(step, -1),
        }
    }

    let month_end = last_day_of_month(&data.start);
    assert_eq!(month_end.month(), data.start.month());
    assert!(month_end.succ().map_or(true, |next| next.day() == 1));

    let (day_start, day_end) = zoned_day_interval(&start_dt).expect("fixed offsets never skip a day");
    assert_eq!(CalendarDay::from_date(&day_start), data.start);
    assert_eq!(CalendarDay::from_date(&day_end), data.start);
    assert_eq!((day_start.hour(), day_start.minute()), (0, 0));
    assert_eq!((day_end.hour(), day_end.minute()), (23, 59));
    true
}
