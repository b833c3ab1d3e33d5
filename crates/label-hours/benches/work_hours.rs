use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use label_hours::{work_time_between, work_time_for_label, LabelEvent, WorkCalendar};
use std::hint::black_box;

fn bench_clip_month(c: &mut Criterion) {
    let calendar = WorkCalendar::default();
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let end = start + Duration::days(31);

    c.bench_function("clip_31_day_span", |b| {
        b.iter(|| work_time_between(black_box(&start), black_box(&end), &calendar))
    });
}

fn bench_aggregate_history(c: &mut Criterion) {
    let calendar = WorkCalendar::default();
    let origin = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();
    let events: Vec<LabelEvent> = (0..200)
        .flat_map(|i| {
            let start = origin + Duration::hours(i * 7);
            [
                LabelEvent::add(start, "Doing"),
                LabelEvent::remove(start + Duration::hours(3), "Doing"),
            ]
        })
        .collect();
    let now = origin + Duration::days(90);

    c.bench_function("aggregate_200_intervals", |b| {
        b.iter(|| work_time_for_label(black_box(&events), "Doing", &calendar, now))
    });
}

criterion_group!(benches, bench_clip_month, bench_aggregate_history);
criterion_main!(benches);
