use arbitrary::{Arbitrary, Unstructured};

use crate::date;
use crate::fuzzing::{run_fuzz_range, Data};
use crate::Direction;

#[test]
fn fuzz_reject_large_span() {
    let data = Data {
        start: date!("2021-06-15"),
        span: u16::MAX,
        direction: Direction::Forward,
        offset_minutes: 0,
        time_secs: 0,
    };

    assert!(!run_fuzz_range(data));
}

#[test]
fn fuzz_reject_invalid_offset() {
    let data = Data {
        start: date!("2021-06-15"),
        span: 3,
        direction: Direction::Forward,
        offset_minutes: 25 * 60,
        time_secs: 0,
    };

    assert!(!run_fuzz_range(data));
}

#[test]
fn fuzz_examples() {
    for (start, span, direction, offset_minutes) in [
        ("2020-02-27", 3, Direction::Forward, -600),
        ("2021-12-31", 0, Direction::Backward, 840),
        ("1999-01-01", 3650, Direction::Backward, 60),
    ] {
        let data = Data {
            start: date!(start),
            span,
            direction,
            offset_minutes,
            time_secs: 86_399,
        };

        assert!(run_fuzz_range(data));
    }
}

#[test]
fn fuzz_arbitrary_bytes() {
    let bytes: Vec<u8> = (0..=255).cycle().take(4096).collect();
    let mut unstructured = Unstructured::new(&bytes);

    while !unstructured.is_empty() {
        let data = Data::arbitrary(&mut unstructured).unwrap();
        run_fuzz_range(data);
    }
}
