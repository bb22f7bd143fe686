use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use damerau::{distance_matrix, str_distance, CharSequence, DamerauLevenshtein};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_text(rng: &mut ChaCha20Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
        .collect()
}

fn bench_single_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("damerau_levenshtein");
    let mut rng = ChaCha20Rng::seed_from_u64(1);

    for len in [8usize, 64, 512] {
        let a = random_text(&mut rng, len);
        let b = random_text(&mut rng, len);

        group.bench_with_input(BenchmarkId::new("fresh_engine", len), &len, |bench, _| {
            bench.iter(|| str_distance(black_box(&a), black_box(&b)))
        });

        let a_seq = CharSequence::from(a.as_str());
        let b_seq = CharSequence::from(b.as_str());
        let mut engine = DamerauLevenshtein::new();
        group.bench_with_input(BenchmarkId::new("reused_engine", len), &len, |bench, _| {
            bench.iter(|| engine.distance(black_box(&a_seq), black_box(&b_seq)))
        });
    }

    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let queries: Vec<CharSequence> = (0..64)
        .map(|_| CharSequence::from(random_text(&mut rng, 16)))
        .collect();
    let choices: Vec<CharSequence> = (0..256)
        .map(|_| CharSequence::from(random_text(&mut rng, 16)))
        .collect();

    c.bench_function("distance_matrix_64x256", |bench| {
        bench.iter(|| distance_matrix(black_box(&queries), black_box(&choices)))
    });
}

criterion_group!(benches, bench_single_pair, bench_matrix);
criterion_main!(benches);
