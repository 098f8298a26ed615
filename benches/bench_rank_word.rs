use criterion::{Criterion, criterion_group, criterion_main};
use wordwise::{SpellCorrector, SuggestConfig};

fn synthetic_dictionary(n: usize) -> Vec<String> {
    let syllables = ["ka", "ro", "te", "mi", "sun", "pla", "dor", "ve", "qui", "ng"];
    (0..n)
        .map(|i| {
            let mut word = String::new();
            let mut k = i;
            loop {
                word.push_str(syllables[k % syllables.len()]);
                k /= syllables.len();
                if k == 0 {
                    break;
                }
            }
            word
        })
        .collect()
}

fn bench_rank_word(c: &mut Criterion) {
    let corrector = SpellCorrector::new(synthetic_dictionary(20_000));
    let serial = SuggestConfig::default();
    let parallel = SuggestConfig::default().with_parallel(true);

    c.bench_function("rank_word_serial", |b| {
        b.iter(|| corrector.rank_with("plaromite", &serial))
    });
    c.bench_function("rank_word_parallel", |b| {
        b.iter(|| corrector.rank_with("plaromite", &parallel))
    });
}

criterion_group!(benches, bench_rank_word);
criterion_main!(benches);
