/// Word id reserved for "no word". A real word whose hash lands on this
/// value is dropped from scoring rather than tracked.
pub const RESERVED_WORD: u32 = 0;

/// Case-insensitive multiplicative hash over a single word.
///
/// Distinct words may collide; colliding words are indistinguishable to the
/// scorer. That approximation is accepted — a rare false match only nudges
/// two titles together.
pub fn hash_word(word: &str) -> u32 {
    let mut h: u32 = 0;
    for b in word.bytes() {
        h = h.wrapping_mul(17).wrapping_add(u32::from(b.to_ascii_lowercase()));
    }
    h
}

/// Words of a title, in order. Everything from the first '.' onward is
/// ignored so file extensions never count as words.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    let stem = match text.find('.') {
        Some(i) => &text[..i],
        None => text,
    };
    stem.split_whitespace()
}

/// Hashes every word of a title. Empty input yields an empty list.
pub fn tokenize(text: &str) -> Vec<u32> {
    words(text)
        .map(hash_word)
        .filter(|&w| w != RESERVED_WORD)
        .collect()
}
