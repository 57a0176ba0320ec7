use chrono::Duration;

use crate::{date, datetime, DayRange};

// In France, time skipped from 02:00 to 03:00 on 31/03/2024
// See https://www.service-public.fr/particuliers/actualites/A15539
#[test]
fn spring_forward_no_skipped_day() {
    let tz = chrono_tz::Europe::Paris;
    let start = datetime!("2024-03-30 23:30", tz);
    let end = datetime!("2024-04-01 00:30", tz);

    // Adding 24 hours to a local time would jump over the 31st.
    assert_eq!(start + Duration::hours(24), end);

    let days: Vec<_> = DayRange::forward(start, end).unwrap().collect();

    assert_eq!(
        days,
        [date!("2024-03-30"), date!("2024-03-31"), date!("2024-04-01")],
    );
}

// In France, the clock jumped back to 02:00 on 27/10/2024 03:00
// See https://www.service-public.fr/particuliers/actualites/A15263
#[test]
fn fall_back_no_repeated_day() {
    let tz = chrono_tz::Europe::Paris;
    let start = datetime!("2024-10-26 00:30", tz);
    let end = datetime!("2024-10-28 00:30", tz);

    // Adding 48 hours to a local time would stay on the 27th.
    assert_eq!(
        (start + Duration::hours(48)).naive_local(),
        datetime!("2024-10-27 23:30"),
    );

    let days: Vec<_> = DayRange::backward(start, end).unwrap().collect();

    assert_eq!(
        days,
        [date!("2024-10-28"), date!("2024-10-27"), date!("2024-10-26")],
    );
}

#[test]
fn whole_year_in_dst_zone() {
    let tz = chrono_tz::America::New_York;
    let start = datetime!("2023-01-01 12:00", tz);
    let end = datetime!("2023-12-31 12:00", tz);
    let days: Vec<_> = DayRange::forward(start, end).unwrap().collect();

    assert_eq!(days.len(), 365);
    assert!(days.windows(2).all(|pair| pair[0].days_until(pair[1]) == 1));
}

#[test]
fn bounds_from_different_zones() {
    // Each bound is normalized to the local day of its own zone.
    let start = datetime!("2024-03-30 23:30", chrono_tz::Pacific::Auckland);
    let end = datetime!("2024-03-31 01:00", chrono_tz::America::Los_Angeles);
    let range = DayRange::forward(start, end).unwrap();

    assert_eq!(range.start(), date!("2024-03-30"));
    assert_eq!(range.end(), date!("2024-03-31"));
    assert_eq!(range.len(), 2);
}
