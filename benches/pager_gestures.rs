// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the paging state machine.

use bubble_bar::accessibility::AccessibilitySignals;
use bubble_bar::config::{Configuration, SwipeBehavior};
use bubble_bar::ui::pager::{Message, Pager};
use criterion::{criterion_group, criterion_main, Criterion};
use iced_core::Vector;
use std::hint::black_box;
use std::time::Duration;

fn pager() -> Pager {
    let mut config = Configuration::default();
    config.set_swipe_behavior(SwipeBehavior::Full);
    let mut pager = Pager::new(5, 320.0);
    pager.configure(&config.effective(&AccessibilitySignals::default()));
    pager
}

/// A full drag: start, 20 move events, release.
fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager_gestures");

    group.bench_function("swipe_with_live_commit", |b| {
        b.iter(|| {
            let mut pager = pager();
            pager.handle(Message::Select(2));
            pager.handle(Message::DragStarted { x: 160.0 });
            for step in 1..=20 {
                let translation = Vector::new(-7.5 * step as f32, 0.0);
                black_box(pager.handle(Message::DragChanged { translation }));
            }
            black_box(pager.handle(Message::DragEnded {
                translation: Vector::new(-150.0, 0.0),
            }));
        });
    });

    group.bench_function("rejected_swipe_settle", |b| {
        b.iter(|| {
            let mut pager = pager();
            pager.handle(Message::DragStarted { x: 160.0 });
            pager.handle(Message::DragChanged {
                translation: Vector::new(-40.0, 0.0),
            });
            pager.handle(Message::DragEnded {
                translation: Vector::new(-40.0, 0.0),
            });
            while pager.is_settling() {
                pager.handle(Message::Tick(Duration::from_millis(16)));
                black_box(pager.display_offset());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
