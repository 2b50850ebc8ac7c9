use super::{mutation, Optimizer};
use crate::error::ClumpyResult;
use crate::scorer;
use std::time::Instant;

/// Receives an update whenever the search finds a strictly better ordering.
/// Returning false aborts the search; the best ordering so far still comes
/// back.
pub trait ProgressCallback {
    fn on_improved(&mut self, iteration: u64, score: f32, mutations: u32) -> bool;
}

/// No-op callback for headless runs.
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_improved(&mut self, _iteration: u64, _score: f32, _mutations: u32) -> bool {
        true
    }
}

pub struct SearchResult {
    pub score: f32,
    pub lines: Vec<String>,
    pub iterations: u64,
}

impl Optimizer {
    /// Diversify, then hill-climb until `deadline`.
    ///
    /// Each iteration scores the working ordering, snapshots it if it beats
    /// the best, then resets the working ordering to the best before the
    /// next mutation. Every mutation is a single-step perturbation of the
    /// best known ordering, never cumulative drift. The reset must come
    /// before the perturbation, not after the score.
    ///
    /// The deadline is checked once per iteration, so overrun is bounded by
    /// one scoring pass plus one mutation.
    pub fn run<CB: ProgressCallback>(
        &mut self,
        deadline: Instant,
        callback: &mut CB,
    ) -> ClumpyResult<SearchResult> {
        let (lo, hi) = (self.options.lo_mut, self.options.hi_mut);

        mutation::shuffle(
            &mut self.working,
            &mut self.rng,
            self.options.shuffle,
            lo,
            hi,
        );

        let mut iteration: u64 = 0;
        let mut mutations: u32 = 0;

        loop {
            iteration += 1;
            let score = scorer::score(&self.working, &self.table)?;

            if score > self.best_score {
                self.best_score = score;
                self.best.clone_from(&self.working);
                if !callback.on_improved(iteration, score, mutations) {
                    break;
                }
            }

            self.working.clone_from(&self.best);

            if Instant::now() >= deadline {
                break;
            }
            mutations = mutation::mutate(&mut self.working, &mut self.rng, lo, hi);
        }

        Ok(SearchResult {
            score: self.best_score,
            lines: self.best.iter().map(|e| e.text.clone()).collect(),
            iterations: iteration,
        })
    }
}
