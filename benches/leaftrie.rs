use leaftrie::trie::{Trie, TrieAtom, TrieString};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{
    distr::{Alphanumeric, Uniform},
    rng, Rng,
};

static POPULATION_SIZE: usize = 10000;

fn random_word(size: usize) -> Vec<char> {
    rng()
        .sample_iter(&Alphanumeric)
        .take(rng().random_range(1..=size))
        .map(char::from)
        .collect()
}

fn get_words(size: usize) -> Vec<Vec<char>> {
    (0..POPULATION_SIZE).map(|_| random_word(size)).collect()
}

fn make_trie(words: &[Vec<char>]) -> TrieString<usize> {
    Trie::from_pairs(words.iter().map(|w| (w.iter().copied(), w.len()))).unwrap()
}

fn trie_build(b: &mut Criterion) {
    let words = get_words(16);
    b.bench_function("trie build", |b| b.iter(|| make_trie(&words)));
}

fn trie_get(b: &mut Criterion) {
    let words = get_words(16);
    let trie = make_trie(&words);
    b.bench_function("trie get", |b| {
        b.iter(|| {
            words
                .iter()
                .map(|w| trie.get(w.iter().copied()).unwrap())
                .collect::<Vec<Option<&usize>>>()
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let trie = make_trie(&get_words(512));
    c.bench_function("contains: char items (len: 1..=512)", |b| {
        b.iter_batched(
            || random_word(512),
            |input| contains_trie(&trie, input),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("partial: char items (len: 1..=512)", |b| {
        b.iter_batched(
            || random_word(512),
            |input| partial_trie(&trie, input),
            BatchSize::SmallInput,
        )
    });
}

fn search(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;

    let mut group = c.benchmark_group("search");
    for size in [
        BASE_SIZE,
        2 * BASE_SIZE,
        4 * BASE_SIZE,
        8 * BASE_SIZE,
        16 * BASE_SIZE,
        32 * BASE_SIZE,
        64 * BASE_SIZE,
    ]
    .iter()
    {
        let range = Uniform::new_inclusive(1, size).unwrap();
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("random find (usize)", size),
            size,
            |b, &size| {
                let trie: Trie<usize, usize> = Trie::from_pairs((0..POPULATION_SIZE).map(|i| {
                    let entry: Vec<usize> = rng()
                        .sample_iter(range)
                        .take(rng().random_range(1..=size))
                        .collect();
                    (entry, i)
                }))
                .unwrap();
                b.iter_batched(
                    || rng().sample_iter(range).take(rng().random_range(1..=size)),
                    |input| contains_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("random find (char)", size),
            size,
            |b, &size| {
                let trie = make_trie(&get_words(size));
                b.iter_batched(
                    || random_word(size),
                    |input| contains_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("always find (char)", size),
            size,
            |b, &size| {
                let searches = get_words(size);
                let trie = make_trie(&searches);
                b.iter_batched(
                    || searches[rng().random_range(0..searches.len())].clone(),
                    |input| partial_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, trie_build, trie_get, criterion_benchmark, search);
criterion_main!(benches);

fn contains_trie<S: IntoIterator<Item = A>, A: TrieAtom, V>(
    trie: &Trie<A, V>,
    input: S,
) -> leaftrie::Result<bool> {
    trie.contains(input)
}

fn partial_trie<S: IntoIterator<Item = A>, A: TrieAtom, V>(
    trie: &Trie<A, V>,
    input: S,
) -> leaftrie::Result<bool> {
    trie.partial(input)
}
