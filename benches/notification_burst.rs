// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification center hot paths.
//!
//! Measures the performance of:
//! - A burst of notifications overflowing the visible cap
//! - Dismissing a notification from the middle of a full center
//! - Draining a batch of fired timers

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use toast_center::notifications::{
    CenterSettings, ManualScheduler, NotificationCenter, NotificationRequest, SequentialIds,
};

fn center() -> (NotificationCenter<ManualScheduler>, ManualScheduler) {
    let clock = ManualScheduler::new();
    let center = NotificationCenter::with_scheduler(
        CenterSettings::default(),
        clock.clone(),
        SequentialIds::new(),
    );
    (center, clock)
}

/// Benchmark a producer notifying faster than toasts are dismissed.
fn bench_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_center");

    group.bench_function("notify_burst_100", |b| {
        b.iter(|| {
            let (mut center, _clock) = center();
            for i in 0..100 {
                center
                    .notify(NotificationRequest::info(format!("toast-{i}")))
                    .unwrap();
            }
            black_box(center.visible_count());
        });
    });

    group.finish();
}

/// Benchmark dismissing from the middle of a full center.
fn bench_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_center");

    group.bench_function("dismiss_middle", |b| {
        b.iter(|| {
            let (mut center, _clock) = center();
            let ids: Vec<_> = (0..5)
                .map(|i| {
                    center
                        .notify(NotificationRequest::info(format!("toast-{i}")))
                        .unwrap()
                })
                .collect();
            black_box(center.dismiss(ids[2]));
        });
    });

    group.finish();
}

/// Benchmark applying a batch of expired timers.
fn bench_process_fired(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_center");

    group.bench_function("process_fired_5", |b| {
        b.iter(|| {
            let (mut center, clock) = center();
            for i in 0..5 {
                center
                    .notify(NotificationRequest::info(format!("toast-{i}")).duration_ms(10))
                    .unwrap();
            }
            clock.advance(Duration::from_millis(10));
            black_box(center.process_fired());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_burst, bench_dismiss, bench_process_fired);
criterion_main!(benches);
