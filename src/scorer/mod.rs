use crate::error::{ClumpyError, ClumpyResult};
use crate::playlist::Entry;
use serde::Serialize;

/// One word the playlist uses more than once, with its global occurrence
/// count and the rarity weight derived from it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WordStat {
    pub word: u32,
    pub count: u32,
    pub rarity: f32,
}

/// Global word statistics for one loaded playlist.
///
/// Built exactly once, before any scoring. Reordering never changes which
/// words the playlist contains, so the table is immutable for the rest of
/// the run.
pub struct WordTable {
    stats: Vec<WordStat>,
}

impl WordTable {
    /// Counts every word occurrence across every entry (a word repeated
    /// within one title counts each time), drops words seen exactly once —
    /// they can never score an adjacent pair — and weights the rest by
    /// 100.0 / count, so rarer shared words pull harder.
    pub fn build(entries: &[Entry]) -> Self {
        let mut stats: Vec<WordStat> = Vec::new();

        for entry in entries {
            for &word in &entry.words {
                match stats.iter_mut().find(|s| s.word == word) {
                    Some(s) => s.count += 1,
                    None => stats.push(WordStat {
                        word,
                        count: 1,
                        rarity: 0.0,
                    }),
                }
            }
        }

        stats.retain(|s| s.count > 1);
        for s in &mut stats {
            s.rarity = 100.0 / s.count as f32;
        }
        stats.sort_unstable_by_key(|s| s.word);

        Self { stats }
    }

    /// Rarity weight of a word, or [`ClumpyError::UnknownWord`] if the word
    /// is not in the table. Scoring only ever looks up words matched across
    /// two entries, which are always retained, so this error means the
    /// tokenizer and the table disagree.
    ///
    /// Linear scan on purpose: the table stays in the low thousands and
    /// lookups are nowhere near the run's bottleneck. A bsearch over the
    /// sorted ids measured slower at these sizes.
    pub fn rarity(&self, word: u32) -> ClumpyResult<f32> {
        self.stats
            .iter()
            .find(|s| s.word == word)
            .map(|s| s.rarity)
            .ok_or(ClumpyError::UnknownWord(word))
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn stats(&self) -> &[WordStat] {
        &self.stats
    }
}

/// Rarity-weighted overlap of two entries' word lists. A word matched k
/// times in `b` contributes k times; repeated words amplify the score.
pub fn score_pair(a: &Entry, b: &Entry, table: &WordTable) -> ClumpyResult<f32> {
    let mut sc = 0.0;
    for &wa in &a.words {
        for &wb in &b.words {
            if wa == wb {
                sc += table.rarity(wa)?;
            }
        }
    }
    Ok(sc)
}

/// Clumpiness of an ordering: the sum of [`score_pair`] over every adjacent
/// pair. Pure — the same ordering and table always produce the same score.
/// A single entry (no pairs) scores 0. O(n * m^2) for n entries of m words,
/// fine for short titles.
pub fn score(entries: &[Entry], table: &WordTable) -> ClumpyResult<f32> {
    let mut total = 0.0;
    for pair in entries.windows(2) {
        total += score_pair(&pair[0], &pair[1], table)?;
    }
    Ok(total)
}
