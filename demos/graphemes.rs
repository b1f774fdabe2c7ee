use leaftrie::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() -> leaftrie::Result<()> {
    env_logger::init();

    // Build our trie from grapheme keys
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    let count = input.clone().count();
    let trie = Trie::from_pairs([(input.clone(), count)])?;

    assert!(trie.contains(input.clone())?);
    assert!(trie.partial(input.clone().take(1))?);
    assert_eq!(trie.get(input)?, Some(&count));
    Ok(())
}
