use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming::cs::ecc::{Codeword, HammingCode};

fn word_for(k: usize) -> String {
    (0..k).map(|i| if i % 3 == 0 { '1' } else { '0' }).collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_construction");
    for m in [3, 5, 7] {
        group.bench_with_input(BenchmarkId::from_parameter(m), &m, |b, &m| {
            b.iter(|| HammingCode::new(black_box(m)).expect("valid parameter"))
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_encode");
    for m in [3, 5, 7] {
        let code = HammingCode::new(m).expect("valid parameter");
        let word = word_for(code.k());
        group.bench_with_input(BenchmarkId::from_parameter(m), &word, |b, word| {
            b.iter(|| code.encode(black_box(word)).expect("valid word"))
        });
    }
    group.finish();
}

fn bench_decode_with_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_decode_with_error");
    for m in [3, 5, 7] {
        let code = HammingCode::new(m).expect("valid parameter");
        let codeword = code.encode(&word_for(code.k())).expect("valid word");
        let damaged = code
            .bit_flip(&codeword, code.n() as i64 / 2)
            .expect("valid position");
        group.bench_with_input(BenchmarkId::from_parameter(m), &damaged, |b, damaged| {
            b.iter(|| code.decode(black_box(damaged)).expect("correctable"))
        });
    }
    group.finish();
}

fn bench_decode_batch(c: &mut Criterion) {
    let code = HammingCode::new(5).expect("valid parameter");
    let codeword = code.encode(&word_for(code.k())).expect("valid word");
    let batch: Vec<Codeword> = (1..=code.n() as i64)
        .cycle()
        .take(4096)
        .map(|p| code.bit_flip(&codeword, p).expect("valid position"))
        .collect();

    c.bench_function("hamming_decode_batch_4096", |b| {
        b.iter(|| code.decode_batch(black_box(&batch)).expect("correctable"))
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_encode,
    bench_decode_with_error,
    bench_decode_batch
);
criterion_main!(benches);
