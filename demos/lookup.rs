use rand::{distr::Alphanumeric, rng, Rng};
use std::iter::FromIterator;

use leaftrie::TrieString;

fn main() -> leaftrie::Result<()> {
    // RUST_LOG=leaftrie=trace shows keys lost to overwrites
    env_logger::init();

    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Store 10 random strings composed of between 1 and 10
    // characters, each mapped to its length.
    let searches: Vec<Vec<char>> = (0..POPULATION_SIZE)
        .map(|_| {
            rng()
                .sample_iter(&Alphanumeric)
                .take(rng().random_range(1..=SIZE))
                .map(char::from)
                .collect()
        })
        .collect();
    let trie = TrieString::from_pairs(searches.iter().map(|s| (s.iter().copied(), s.len())))?;
    println!("stored {} of {} keys", trie.count(), searches.len());

    for search in &searches {
        let word = String::from_iter(search);
        println!(
            "key: {}, contains: {}, partial: {}, value: {:?}",
            word,
            trie.contains(search.iter().copied())?,
            trie.partial(search.iter().copied())?,
            trie.get(search.iter().copied())?
        );
    }

    // Empty keys are rejected
    match trie.get("".chars()) {
        Ok(_) => unreachable!("empty keys are invalid"),
        Err(e) => println!("empty key: {}", e),
    }
    Ok(())
}
