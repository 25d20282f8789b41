//! Criterion benchmarks for the key translation tables.
//!
//! Measures the latency of standard and numpad lookups to verify the
//! per-event translation stays a table-lookup-class operation on the hot
//! path of the event filter.
//!
//! Run with:
//! ```bash
//! cargo bench --package framebridge-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use framebridge_core::keymap::native::{codes, NativeKeyCode};
use framebridge_core::{KeyTranslator, ModifierSet};

// ── Representative key codes for benchmarking ─────────────────────────────────

/// A slice of well-known native codes that cover the most common keys.
const BENCH_CODES: &[NativeKeyCode] = &[
    codes::A,
    codes::Z,
    codes::RETURN,
    codes::ESCAPE,
    codes::BACKSPACE,
    codes::TAB,
    codes::SPACE,
    codes::F1,
    codes::F12,
    codes::CONTROL,
    codes::SHIFT,
    codes::ALT,
    codes::SUPER_L,
    codes::LEFT,
    codes::RIGHT,
    codes::UP,
    codes::DOWN,
    codes::DIGIT_1,
    codes::DIGIT_0,
    NativeKeyCode(0x0108_0000), // no mapping
];

// ── Benchmarks: standard table ───────────────────────────────────────────────

fn bench_standard_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_standard");

    // Single lookup (typical per-event cost)
    group.bench_function("translate_single", |b| {
        b.iter(|| KeyTranslator::translate(black_box(codes::A), ModifierSet::NONE))
    });

    // Batch of 20 diverse codes (simulates a burst of key events)
    group.bench_function("translate_batch_20", |b| {
        b.iter(|| {
            BENCH_CODES
                .iter()
                .map(|&code| KeyTranslator::translate(black_box(code), ModifierSet::NONE))
                .collect::<Vec<_>>()
        })
    });

    // Unmapped code (falls through both tables)
    group.bench_function("translate_unmapped", |b| {
        b.iter(|| {
            KeyTranslator::translate(black_box(NativeKeyCode(0x0108_0000)), ModifierSet::NONE)
        })
    });

    group.finish();
}

// ── Benchmarks: numpad precedence path ───────────────────────────────────────

fn bench_numpad_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_numpad");
    let keypad = ModifierSet(ModifierSet::KEYPAD);

    // Numpad hit (digit with keypad flag)
    group.bench_function("translate_keypad_digit", |b| {
        b.iter(|| KeyTranslator::translate(black_box(codes::DIGIT_7), keypad))
    });

    // Numpad miss falling through to the standard table
    group.bench_function("translate_keypad_fallthrough", |b| {
        b.iter(|| KeyTranslator::translate(black_box(codes::LEFT), keypad))
    });

    group.finish();
}

criterion_group!(benches, bench_standard_translate, bench_numpad_translate);
criterion_main!(benches);
