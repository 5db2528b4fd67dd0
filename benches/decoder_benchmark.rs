use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gameboy_dasm_rust::rom::validation::NINTENDO_LOGO;
use gameboy_dasm_rust::{Disassembler, HeaderRecord};

/// Image de 32 KiB avec un mélange représentatif d'instructions
fn bench_image() -> Vec<u8> {
    let mut data = vec![0u8; 0x8000];
    data[0x104..0x134].copy_from_slice(&NINTENDO_LOGO);
    for i in (0x150..data.len()).step_by(4) {
        data[i] = 0x3E; // ld A, d8
        data[i + 1] = 0x42;
        data[i + 2] = 0xCB; // swap A
        data[i + 3] = 0x37;
    }
    data
}

fn benchmark_disassembly(c: &mut Criterion) {
    let data = bench_image();

    c.bench_function("disassemble_32k_image", |b| {
        b.iter(|| Disassembler::new(black_box(&data)).count())
    });
}

fn benchmark_header_parse(c: &mut Criterion) {
    let data = bench_image();

    c.bench_function("header_parse", |b| {
        b.iter(|| HeaderRecord::parse(black_box(&data)).unwrap())
    });
}

criterion_group!(benches, benchmark_disassembly, benchmark_header_parse);
criterion_main!(benches);
