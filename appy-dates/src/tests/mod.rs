#[cfg(feature = "fuzzing")]
mod fuzzing;

mod daylight_saving;
mod localization;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use calendar_day::CalendarDay;
        $date.parse::<CalendarDay>().expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
    ( $date: expr, $tz: expr ) => {{
        use chrono::TimeZone;

        $tz.from_local_datetime(&datetime!($date))
            .single()
            .expect("ambiguous input datetime")
    }};
}
