//! Benchmark for the snapshot-to-score pipeline.

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use signal_conditions::{EngineConfig, SignalScorer};
use signal_core::{Bar, InstrumentSpec};
use signal_indicators::{IndicatorPeriods, SnapshotBuilder};

fn generate_bars(size: usize) -> Vec<Bar> {
    (0..size)
        .map(|i| {
            let close = 1.1 + (i as f64 * 0.1).sin() * 0.01;
            Bar::new(i as i64 * 60_000, close, close + 0.0005, close - 0.0005, close, 1_000.0)
        })
        .collect()
}

fn benchmark_scoring(c: &mut Criterion) {
    let builder = SnapshotBuilder::new(&IndicatorPeriods::default()).unwrap();
    let snapshot = builder.build(&generate_bars(100)).unwrap();
    let scorer = SignalScorer::new(EngineConfig::default());
    let instrument = InstrumentSpec::infer("EURUSD");
    let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();

    c.bench_function("score_snapshot", |b| {
        b.iter(|| scorer.score("EURUSD", black_box(&snapshot), &instrument, now))
    });
}

criterion_group!(benches, benchmark_scoring);
criterion_main!(benches);
