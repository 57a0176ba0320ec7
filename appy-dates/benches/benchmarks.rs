use appy_dates::dates::{day_interval, last_day_of_month};
use appy_dates::{CalendarDay, DayRange, TzLocation, UiConfig};
use appy_dates::localization::Localize;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn day(s: &str) -> CalendarDay {
    s.parse().unwrap()
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    let start = day("2000-01-01");
    let end = day("2099-12-31");

    group.bench_function("forward_century", |b| {
        b.iter(|| DayRange::forward(black_box(start), black_box(end)).unwrap().count())
    });

    group.bench_function("backward_century", |b| {
        b.iter(|| DayRange::backward(black_box(start), black_box(end)).unwrap().count())
    });
}

fn bench_month(c: &mut Criterion) {
    let mut group = c.benchmark_group("month");
    let dates: Vec<_> = DayRange::forward(day("2020-01-01"), day("2020-12-31"))
        .unwrap()
        .collect();

    group.bench_function("last_day_of_month", |b| {
        b.iter(|| {
            for date in &dates {
                black_box(last_day_of_month(black_box(date)));
            }
        })
    });

    group.bench_function("month_of", |b| {
        let config = UiConfig::default();
        b.iter(|| config.month_of(black_box(day("2020-02-14"))).count())
    });
}

fn bench_interval(c: &mut Criterion) {
    let mut group = c.benchmark_group("day_interval");
    let date = day("2024-03-31");

    group.bench_function("naive", |b| b.iter(|| day_interval(black_box(&date))));

    group.bench_function("europe_paris", |b| {
        let loc = TzLocation::new(chrono_tz::Europe::Paris);
        b.iter(|| loc.day_interval(black_box(&date)).unwrap())
    });
}

criterion_group!(benches, bench_range, bench_month, bench_interval);
criterion_main!(benches);
