// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for accessibility resolution.
//!
//! Measures the performance of:
//! - Resolving a configuration with no active signal
//! - Resolving with every signal active (style copy included)

use bubble_bar::accessibility::{AccessibilitySignals, DynamicTextScale};
use bubble_bar::config::Configuration;
use bubble_bar::ui::style::Preset;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("accessibility_resolve");
    let config = Configuration::with_style(Preset::Glass);

    let neutral = AccessibilitySignals::default();
    group.bench_function("neutral_signals", |b| {
        b.iter(|| black_box(config.effective(black_box(&neutral))));
    });

    let all_on = AccessibilitySignals {
        text_scale: DynamicTextScale::Accessibility5,
        reduce_motion: true,
        reduce_transparency: true,
        increased_contrast: true,
    };
    group.bench_function("all_signals", |b| {
        b.iter(|| black_box(config.effective(black_box(&all_on))));
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
