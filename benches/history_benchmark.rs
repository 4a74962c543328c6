use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use homefit_core::models::{BodyArea, WorkoutRecord};
use homefit_core::services::history::{compute_streak_on, group_by_day, summarize};
use homefit_core::time_utils::day_key;

/// Two years of records: three workouts on five days out of every seven.
fn synthetic_history() -> (Vec<WorkoutRecord>, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).expect("valid date");
    let mut records = Vec::new();

    for offset in 0..730 {
        if offset % 7 >= 5 {
            continue; // rest days
        }
        let day = start + chrono::Duration::days(offset);
        for i in 0..3 {
            records.push(WorkoutRecord {
                id: format!("{}-{}", offset, i),
                activity_id: "burpees".to_string(),
                activity_name: "Burpees".to_string(),
                category: BodyArea::FullBody,
                day_key: day_key(day),
                occurred_at: format!("{}T0{}:00:00+00:00", day_key(day), 6 + i),
                duration_seconds: 300 + i * 60,
                calories: if i == 0 { None } else { Some(25.0) },
            });
        }
    }

    let today = start + chrono::Duration::days(729);
    (records, today)
}

fn benchmark_aggregation(c: &mut Criterion) {
    let (records, today) = synthetic_history();

    let mut group = c.benchmark_group("history_aggregation");

    group.bench_function("group_by_day_two_years", |b| {
        b.iter(|| group_by_day(black_box(&records)))
    });

    group.bench_function("summarize_two_years", |b| {
        b.iter(|| summarize(black_box(&records)))
    });

    group.bench_function("compute_streak_two_years", |b| {
        b.iter(|| compute_streak_on(black_box(&records), black_box(today)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_aggregation);
criterion_main!(benches);
