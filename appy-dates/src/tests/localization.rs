use chrono::{Duration, Timelike};

use crate::dates::zoned_day_interval;
use crate::error::Error;
use crate::localization::localize::{localize_next_valid, localize_prev_valid};
use crate::localization::{Localize, NoLocation, TzLocation};
use crate::{date, datetime};

#[test]
fn naive_day_interval() {
    assert_eq!(
        NoLocation.day_interval(&date!("2021-06-15")),
        Ok((datetime!("2021-06-15 00:00"), datetime!("2021-06-15 23:59"))),
    );
}

#[test]
fn tz_day_interval() {
    let tz = chrono_tz::Europe::Paris;
    let loc = NoLocation.with_tz(tz);

    assert_eq!(
        loc.day_interval(&date!("2021-06-15")),
        Ok((datetime!("2021-06-15 00:00", tz), datetime!("2021-06-15 23:59", tz))),
    );
}

// In France, time skipped from 02:00 to 03:00 on 31/03/2024
#[test]
fn day_interval_on_short_day() {
    let tz = chrono_tz::Europe::Paris;
    let (start, end) = TzLocation::new(tz).day_interval(&date!("2024-03-31")).unwrap();
    assert_eq!(start.to_rfc3339(), "2024-03-31T00:00:00+01:00");
    assert_eq!(end.to_rfc3339(), "2024-03-31T23:59:00+02:00");
    assert_eq!(end - start, Duration::hours(22) + Duration::minutes(59));
}

// In France, the clock jumped back to 02:00 on 27/10/2024 03:00
#[test]
fn day_interval_on_long_day() {
    let tz = chrono_tz::Europe::Paris;
    let (start, end) = TzLocation::new(tz).day_interval(&date!("2024-10-27")).unwrap();
    assert_eq!(end - start, Duration::hours(24) + Duration::minutes(59));
}

// In Brazil, clocks jumped from 00:00 to 01:00 on 04/11/2018
#[test]
fn day_starts_in_gap() {
    let tz = chrono_tz::America::Sao_Paulo;
    let (start, end) = TzLocation::new(tz).day_interval(&date!("2018-11-04")).unwrap();
    assert_eq!((start.hour(), start.minute()), (1, 0));
    assert_eq!((end.hour(), end.minute()), (23, 59));
    assert_eq!(start.date_naive(), date!("2018-11-04").naive());
}

// Samoa skipped 30/12/2011 while moving to the other side of the date line
#[test]
fn skipped_day_is_reported() {
    let tz = chrono_tz::Pacific::Apia;
    let loc = TzLocation::new(tz);

    assert_eq!(
        loc.day_interval(&date!("2011-12-30")),
        Err(Error::SkippedDay(date!("2011-12-30"))),
    );

    assert_eq!(
        zoned_day_interval(&datetime!("2011-12-31 12:00", tz)),
        Ok((datetime!("2011-12-31 00:00", tz), datetime!("2011-12-31 23:59", tz))),
    );

    let (start, end) = loc.day_interval(&date!("2011-12-29")).unwrap();
    assert_eq!(start.date_naive(), date!("2011-12-29").naive());
    assert_eq!(end.date_naive(), date!("2011-12-29").naive());
    assert_eq!((end.hour(), end.minute()), (23, 59));
}

#[test]
fn skipped_time_moves_before_gap() {
    let tz = chrono_tz::Europe::Paris;
    let localized = localize_prev_valid(datetime!("2024-03-31 02:30"), &tz);
    assert_eq!(localized.to_rfc3339(), "2024-03-31T01:59:00+01:00");

    // The last minute before the date line jump stays on the 29th.
    let localized = localize_prev_valid(datetime!("2011-12-30 12:00"), &chrono_tz::Pacific::Apia);
    assert_eq!(localized.naive_local(), datetime!("2011-12-29 23:59"));
}

#[test]
fn ambiguous_time_backward_resolves_to_latest() {
    let tz = chrono_tz::Europe::Paris;
    let localized = localize_prev_valid(datetime!("2024-10-27 02:30"), &tz);
    assert_eq!(localized.to_rfc3339(), "2024-10-27T02:30:00+01:00");
}

#[test]
fn ambiguous_time_resolves_to_earliest() {
    let tz = chrono_tz::Europe::Paris;
    let localized = localize_next_valid(datetime!("2024-10-27 02:30"), &tz);
    assert_eq!(localized.to_rfc3339(), "2024-10-27T02:30:00+02:00");
}

#[test]
fn skipped_time_moves_after_gap() {
    let tz = chrono_tz::Europe::Paris;
    let localized = localize_next_valid(datetime!("2024-03-31 02:30"), &tz);
    assert_eq!(localized.to_rfc3339(), "2024-03-31T03:00:00+02:00");
}

#[test]
fn zoned_interval_keeps_zone() {
    let tz = chrono_tz::Asia::Tokyo;
    let datetime = datetime!("2021-06-15 07:00", tz);
    let (start, end) = zoned_day_interval(&datetime).unwrap();
    assert_eq!(start, datetime!("2021-06-15 00:00", tz));
    assert_eq!(end, datetime!("2021-06-15 23:59", tz));
}

#[cfg(feature = "tz")]
#[test]
fn tz_from_name() {
    let loc = TzLocation::from_name("Europe/Paris").unwrap();
    assert_eq!(loc.get_timezone(), &chrono_tz::Europe::Paris);

    assert_eq!(
        TzLocation::from_name("Europe/Atlantis"),
        Err(Error::UnknownTimeZone("Europe/Atlantis".to_string())),
    );
}
