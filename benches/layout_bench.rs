// Benchmark for the layout pipeline
// Measures a full recompute per view mode and the cached path.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use year_calendar::models::event::AllDayEvent;
use year_calendar::models::settings::LayoutConstants;
use year_calendar::models::view_mode::ViewMode;
use year_calendar::services::layout::{compute_layout, LayoutCache, LayoutInput, Viewport};

/// A busy year: `count` events of 1-9 days spread across 2024
fn busy_year(count: usize) -> Vec<AllDayEvent> {
    let jan_1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let start = jan_1 + Duration::days(((i * 37) % 360) as i64);
            let end = start + Duration::days((i % 9 + 1) as i64);
            AllDayEvent {
                id: format!("bench:{}", i),
                calendar_id: "bench|primary".to_string(),
                summary: format!("Event {}", i),
                start_date: start,
                end_date: end,
            }
        })
        .collect()
}

fn benchmark_compute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_layout");
    let constants = LayoutConstants::default();

    for count in [0usize, 100, 1000] {
        let events = busy_year(count);
        for view in ViewMode::ALL {
            group.bench_with_input(
                BenchmarkId::new(view.to_string(), count),
                &events,
                |b, events| {
                    b.iter(|| {
                        compute_layout(black_box(&LayoutInput {
                            year: 2024,
                            view,
                            viewport: Viewport::new(1200.0, 800.0),
                            measured_cell: None,
                            events,
                            constants: &constants,
                        }))
                    })
                },
            );
        }
    }

    group.finish();
}

fn benchmark_cache_hit(c: &mut Criterion) {
    let constants = LayoutConstants::default();
    let events = busy_year(1000);
    let input = LayoutInput {
        year: 2024,
        view: ViewMode::Default,
        viewport: Viewport::new(1200.0, 800.0),
        measured_cell: None,
        events: &events,
        constants: &constants,
    };
    let mut cache = LayoutCache::new();
    cache.get_or_compute(&input);

    c.bench_function("layout_cache_hit_1000_events", |b| {
        b.iter(|| cache.get_or_compute(black_box(&input)))
    });
}

criterion_group!(benches, benchmark_compute_layout, benchmark_cache_hit);
criterion_main!(benches);
