use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timesieve::TimeQuery;

fn fixed_from() -> jiff::Zoned {
    jiff::civil::Date::new(2026, 2, 6)
        .unwrap()
        .to_datetime(jiff::civil::Time::new(12, 0, 0, 0).unwrap())
        .to_zoned(jiff::tz::TimeZone::UTC)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Parse benchmarks
// ---------------------------------------------------------------------------

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("open", |b| {
        b.iter(|| TimeQuery::parse(black_box("* * * * *")).unwrap());
    });

    group.bench_function("dense", |b| {
        b.iter(|| TimeQuery::parse(black_box("*/5 9-17 1,15 1-3,9-12 1-5")).unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Search benchmarks (next_from)
// ---------------------------------------------------------------------------

fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("next");
    let from = fixed_from();

    let same_hour = TimeQuery::parse("*/5 * * * *").unwrap();
    group.bench_function("same_hour", |b| {
        b.iter(|| same_hour.next_from(black_box(&from)).unwrap());
    });

    let next_day = TimeQuery::parse("4 3 * * *").unwrap();
    group.bench_function("next_day", |b| {
        b.iter(|| next_day.next_from(black_box(&from)).unwrap());
    });

    let yearly = TimeQuery::parse("0 0 25 12 *").unwrap();
    group.bench_function("months_away", |b| {
        b.iter(|| yearly.next_from(black_box(&from)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_next);
criterion_main!(benches);
