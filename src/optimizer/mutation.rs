use crate::playlist::Entry;
use fastrand::Rng;

/// Applies one burst of random pairwise swaps in place and returns how many
/// were made. The count is drawn once as `lo + rng(1 + (hi - lo))` when
/// `hi > lo`, else it is exactly `lo`. Positions are uniform with
/// replacement; swapping a position with itself is a permitted no-op.
///
/// Callers validate `lo <= hi` once up front, not per call.
pub fn mutate(entries: &mut [Entry], rng: &mut Rng, lo: u32, hi: u32) -> u32 {
    let mut n = lo;
    if hi > lo {
        n += rng.u32(0..1 + hi - lo);
    }
    for _ in 0..n {
        let a = rng.usize(0..entries.len());
        let b = rng.usize(0..entries.len());
        entries.swap(a, b);
    }
    n
}

/// Heavy pre-search scrambling: `multiplier` mutation rounds per entry.
/// Run before any scoring so the search never inherits adjacency structure
/// from the input order.
pub fn shuffle(entries: &mut [Entry], rng: &mut Rng, multiplier: u32, lo: u32, hi: u32) {
    let rounds = multiplier as usize * entries.len();
    for _ in 0..rounds {
        mutate(entries, rng, lo, hi);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::entries_from_lines;

    fn texts(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn mutate_preserves_the_multiset() {
        let mut entries = entries_from_lines(["a", "b", "c", "d", "e"]);
        let mut rng = Rng::with_seed(7);

        for _ in 0..100 {
            mutate(&mut entries, &mut rng, 1, 3);
        }

        let mut seen = texts(&entries);
        seen.sort_unstable();
        assert_eq!(seen, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn swap_count_stays_in_range() {
        let mut entries = entries_from_lines(["a", "b", "c"]);
        let mut rng = Rng::with_seed(11);

        for _ in 0..200 {
            let n = mutate(&mut entries, &mut rng, 2, 5);
            assert!((2..=5).contains(&n));
        }
    }

    #[test]
    fn equal_bounds_fix_the_swap_count() {
        let mut entries = entries_from_lines(["a", "b", "c"]);
        let mut rng = Rng::with_seed(13);

        for _ in 0..50 {
            assert_eq!(mutate(&mut entries, &mut rng, 3, 3), 3);
        }
    }

    #[test]
    fn single_entry_survives_mutation() {
        let mut entries = entries_from_lines(["only"]);
        let mut rng = Rng::with_seed(17);

        mutate(&mut entries, &mut rng, 1, 4);
        assert_eq!(entries[0].text, "only");
    }
}
