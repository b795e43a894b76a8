//! Benchmarks the hot fetch-decode-execute path with a tight, self-looping
//! ROM: a byte-mode Fibonacci step (`ADDk ROT POP`) driven by a counter
//! parked on the return stack, looping via `JCN` until it reaches zero.

use criterion::{criterion_group, criterion_main, Criterion};
use juxn_core::decode::op;
use juxn_core::device::DevicePage;
use juxn_core::memory::Memory;
use juxn_core::Uxn;

/// Builds a ROM computing `iterations` steps of `(a, b) -> (b, a+b)` (mod
/// 256, via wrapping `ADD`) in a single loop, then halts with `BRK`.
fn fibonacci_rom(iterations: u8) -> Vec<u8> {
    let mut rom = vec![
        op::LIT, 0x00, // a = 0
        op::LIT, 0x01, // b = 1
        op::LIT, iterations, // counter
        op::STH, // counter -> return stack
    ];
    let loop_start = rom.len();
    rom.extend([
        op::ADD | op::KEEP, // [a, b] -> [a, b, a+b]
        op::ROT,            // -> [b, a+b, a]
        op::POP,            // -> [b, a+b]
        op::STH | op::RETURN, // pull counter back: [b, c, counter]
        op::LIT, 1,
        op::SUB,  // counter - 1
        op::DUP,
        op::STH, // stash one copy of counter-1 for the next pass
        op::LIT, 0, // placeholder, patched below
        op::JCN,
    ]);
    let jump_offset_idx = rom.len() - 1;
    rom.push(op::BRK);

    let brk_addr = 0x100 + rom.len() - 1;
    let loop_addr = 0x100 + loop_start;
    let offset = (loop_addr as i32 - brk_addr as i32) as i8 as u8;
    rom[jump_offset_idx] = offset;
    rom
}

fn run_fibonacci(rom: &[u8]) {
    let mut ram = [0u8; 65536];
    let mut vm = Uxn::new(Memory::new(&mut ram), DevicePage::new());
    vm.reset(rom);
    vm.run(u64::MAX);
}

fn bench_fibonacci(c: &mut Criterion) {
    let rom = fibonacci_rom(200);
    c.bench_function("fibonacci/200 iterations", |b| {
        b.iter(|| run_fibonacci(std::hint::black_box(&rom)));
    });
}

criterion_group!(benches, bench_fibonacci);
criterion_main!(benches);
