//! Benchmarks for rotor machine operations.
//!
//! Measures machine construction, single-letter throughput, message
//! throughput and how the rotor pass scales with the number of rotors.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rotorcrypt::{CipherMachine, RotorBank, RotorWiring};

/// Wirings cycled through to build banks of any size.
const WIRINGS: [&str; 3] = [
    "DMTWSILRUYQNKFEJCAZBPGXOHV",
    "HQZGPJTMOBLNCIFDYAWVEUSRKX",
    "UQNTLSZFMREHDPXKIBVYGJCWOA",
];

/// Plug pairs used consistently across all benchmarks.
const BENCH_PLUGS: [&str; 10] = ["QW", "ER", "TY", "UI", "OP", "AS", "DF", "GH", "JK", "LZ"];

/// Message length in letters for throughput benchmarks.
const MESSAGE_LEN: usize = 4096;

fn bank(num_rotors: usize) -> RotorBank {
    let rotors = (0..num_rotors)
        .map(|i| RotorWiring::new(WIRINGS[i % WIRINGS.len()]).unwrap())
        .collect();
    RotorBank::new(rotors, 0).unwrap()
}

fn message() -> String {
    (0..MESSAGE_LEN)
        .map(|i| (b'A' + (i * 7 % 26) as u8) as char)
        .collect()
}

/// Benchmarks building a three-rotor machine with a full plugboard.
fn bench_machine_init(c: &mut Criterion) {
    c.bench_function("machine_init", |b| {
        b.iter(|| CipherMachine::with_plug_strs(black_box(&BENCH_PLUGS), bank(3)).unwrap());
    });
}

/// Benchmarks `process_letter()` on a three-rotor machine.
///
/// The machine is built once and its offset advances naturally between
/// iterations.
fn bench_process_letter(c: &mut Criterion) {
    let mut machine = CipherMachine::with_plug_strs(&BENCH_PLUGS, bank(3)).unwrap();

    let mut group = c.benchmark_group("process_letter");
    group.throughput(Throughput::Elements(1));
    group.bench_function("3_rotors", |b| {
        b.iter(|| machine.process_letter(black_box('E')).unwrap());
    });
    group.finish();
}

/// Benchmarks `process()` over a 4 KiB message.
fn bench_process_message(c: &mut Criterion) {
    let mut machine = CipherMachine::with_plug_strs(&BENCH_PLUGS, bank(3)).unwrap();
    let text = message();

    let mut group = c.benchmark_group("process_message");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));
    group.bench_function("3_rotors", |b| {
        b.iter(|| machine.process(black_box(&text)).unwrap());
    });
    group.finish();
}

/// Benchmarks message throughput across different rotor counts.
fn bench_rotor_scaling(c: &mut Criterion) {
    let rotor_counts: &[usize] = &[1, 3, 8, 13];
    let text = message();

    let mut group = c.benchmark_group("rotor_scaling");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));

    for &num_rotors in rotor_counts {
        let mut rotors = bank(num_rotors);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_rotors),
            &num_rotors,
            |b, _| {
                b.iter(|| rotors.process_message(black_box(&text)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_machine_init,
    bench_process_letter,
    bench_process_message,
    bench_rotor_scaling,
);
criterion_main!(benches);
