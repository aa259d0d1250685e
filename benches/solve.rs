use ab_npp_pow::{Solution, Solver, B, INPUT_BYTES, N};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

fn packed_input(seed: u64) -> [u8; INPUT_BYTES] {
    let mut state = seed;
    let mut numbers = [0u64; N];
    for n in &mut numbers {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        *n = state & ((1u64 << B) - 1);
    }

    let mut bytes = [0u8; INPUT_BYTES];
    let mut bit_cursor = 0usize;
    for value in numbers {
        for bit in 0..B as usize {
            if value & (1 << bit) != 0 {
                let total_bit = bit_cursor + bit;
                bytes[total_bit / 8] |= 1 << (total_bit % 8);
            }
        }
        bit_cursor += B as usize;
    }
    bytes
}

fn solve_bench(c: &mut Criterion) {
    let input = packed_input(0x5EED_1234_5678_9abc);

    let mut group = c.benchmark_group("solve");
    group.throughput(Throughput::Elements(1));

    group.bench_function("first_solution/max_leaves=16", |b| {
        let mut solver = Solver::new();
        let mut solutions = [Solution::default(); 1];
        b.iter(|| {
            solver
                .solve(black_box(&input), &mut solutions, 16, false)
                .expect("input is exactly INPUT_BYTES long")
        });
    });

    group.bench_function("full_probe/max_leaves=64", |b| {
        let mut solver = Solver::new();
        let mut solutions = [Solution::default(); 16];
        b.iter(|| {
            solver
                .solve(black_box(&input), &mut solutions, 64, true)
                .expect("input is exactly INPUT_BYTES long")
        });
    });

    group.finish();
}

criterion_group!(benches, solve_bench);
criterion_main!(benches);
