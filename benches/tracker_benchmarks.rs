use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trainlog::report::{render_full_table, ReportStyle};
use trainlog::{AverageBasis, Category, WorkoutRecord, WorkoutTracker};

/// Benchmarks for the in-memory store scans and table rendering

fn create_tracker(size: usize) -> WorkoutTracker {
    let mut tracker = WorkoutTracker::new();
    for i in 0..size {
        let date = format!("05-{:02}", i % 28 + 1);
        let category = Category::from_menu_choice((i % 5) as i64 + 1);
        let mut record = WorkoutRecord::new(format!("Workout {}", i), date, (i % 90) as i64 + 10, category);
        if i % 3 == 0 {
            record = record.completed();
        }
        tracker.add_record(record);
    }
    tracker
}

fn bench_date_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Date Filter");

    for &size in &[10, 100, 1000, 10000] {
        let tracker = create_tracker(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("by_date", size), &tracker, |b, tracker| {
            b.iter(|| tracker.by_date(black_box("05-14")).count());
        });
    }

    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("Statistics");

    for &size in &[10, 1000, 10000] {
        let tracker = create_tracker(size);

        group.bench_with_input(BenchmarkId::new("completed_only", size), &tracker, |b, tracker| {
            b.iter(|| tracker.statistics(black_box(AverageBasis::CompletedOnly)));
        });
    }

    group.finish();
}

fn bench_full_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("Full Table");
    let style = ReportStyle::plain();

    for &size in &[10, 100, 1000] {
        let tracker = create_tracker(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("render", size), &tracker, |b, tracker| {
            b.iter(|| render_full_table(tracker.all(), &style));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_date_filter, bench_statistics, bench_full_table);
criterion_main!(benches);
