//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stemma::{token_stream, LcpArray, RepeatIndex, SuffixArray, Witness};

/// Deterministic witnesses over a small vocabulary, so repeats are plentiful.
fn synthetic_witnesses(count: usize, tokens_each: usize) -> Vec<Witness> {
    const VOCAB: [&str; 12] = [
        "the", "and", "of", "to", "in", "that", "was", "his", "he", "it", "with", "for",
    ];
    let mut state = 0x2545f4914f6cdd1du64;
    (0..count)
        .map(|index| {
            let tokens: Vec<String> = (0..tokens_each)
                .map(|_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    VOCAB[((state >> 33) % VOCAB.len() as u64) as usize].to_string()
                })
                .collect();
            Witness::from_tokens(format!("w{index}"), tokens)
        })
        .collect()
}

fn benchmark_index(c: &mut Criterion) {
    let witnesses = synthetic_witnesses(4, 400);
    let stream = token_stream(&witnesses);

    c.bench_function("suffix_array_4x400", |b| {
        b.iter(|| SuffixArray::build(black_box(&stream)));
    });

    let sa = SuffixArray::build(&stream);
    c.bench_function("lcp_array_4x400", |b| {
        b.iter(|| LcpArray::build(black_box(&stream), black_box(&sa)));
    });

    c.bench_function("repeat_index_4x400", |b| {
        b.iter(|| RepeatIndex::build(black_box(&stream)));
    });
}

criterion_group!(benches, benchmark_index);
criterion_main!(benches);
