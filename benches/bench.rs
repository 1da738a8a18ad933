use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use parrot::lexicon::cache::CachedLexicon;
use parrot::lexicon::memory::InMemoryLexicon;
use parrot::paraphrase::level::DifficultyLevel;
use parrot::paraphrase::paraphraser::Paraphraser;

fn sample_lexicon() -> InMemoryLexicon {
    InMemoryLexicon::from_entries([
        ("cat", vec![vec!["feline"], vec!["tomcat"], vec!["pussycat"]]),
        ("dog", vec![vec!["canine"], vec!["hound"], vec!["pooch"]]),
        ("big", vec![vec!["large"], vec!["huge"], vec!["enormous"]]),
        ("run", vec![vec!["sprint"], vec!["dash"], vec!["bolt"]]),
        ("house", vec![vec!["home"], vec!["dwelling"], vec!["abode"]]),
    ])
}

fn sample_text() -> String {
    "The big dog and the small cat run around the old house while the sun goes down. "
        .repeat(100)
}

fn bench_paraphrase(c: &mut Criterion) {
    let text = sample_text();

    let paraphraser = Paraphraser::new(Arc::new(sample_lexicon()));
    c.bench_function("paraphrase_easy", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            paraphraser
                .paraphrase(&text, DifficultyLevel::Easy, &mut rng)
                .unwrap()
        })
    });

    c.bench_function("paraphrase_all_levels", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            paraphraser.paraphrase_all(&text, &mut rng).unwrap()
        })
    });

    let cached = Paraphraser::new(Arc::new(CachedLexicon::new(sample_lexicon())));
    c.bench_function("paraphrase_all_levels_cached", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            cached.paraphrase_all(&text, &mut rng).unwrap()
        })
    });
}

criterion_group!(benches, bench_paraphrase);
criterion_main!(benches);
