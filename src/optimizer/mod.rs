pub mod mutation;
pub mod runner;

pub use runner::{ProgressCallback, SearchResult, Silent};

use crate::config::SearchParams;
use crate::error::{ClumpyError, ClumpyResult};
use crate::playlist::Entry;
use crate::scorer::WordTable;
use fastrand::Rng;

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub shuffle: u32,
    pub lo_mut: u32,
    pub hi_mut: u32,
    pub seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            shuffle: 8,
            lo_mut: 1,
            hi_mut: 2,
            seed: None,
        }
    }
}

impl From<&SearchParams> for SearchOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            shuffle: params.shuffle,
            lo_mut: params.lo_mut,
            hi_mut: params.hi_mut,
            seed: params.seed,
        }
    }
}

/// All state the search owns: the immutable word table, the working ordering
/// under mutation, and the best ordering seen so far. Nothing lives outside
/// this value.
pub struct Optimizer {
    table: WordTable,
    working: Vec<Entry>,
    best: Vec<Entry>,
    best_score: f32,
    options: SearchOptions,
    rng: Rng,
}

impl Optimizer {
    /// Takes ownership of the loaded entries and builds the word table.
    ///
    /// The best score starts at `f32::MIN` so the first real score — even a
    /// flat 0 — always becomes the first snapshot.
    pub fn load(entries: Vec<Entry>, options: SearchOptions) -> ClumpyResult<Self> {
        if entries.is_empty() {
            return Err(ClumpyError::EmptyPlaylist);
        }
        if options.lo_mut > options.hi_mut {
            return Err(ClumpyError::MutationRange {
                lo: options.lo_mut,
                hi: options.hi_mut,
            });
        }

        let table = WordTable::build(&entries);
        let rng = match options.seed {
            Some(s) => Rng::with_seed(s),
            None => Rng::new(),
        };

        Ok(Self {
            table,
            working: entries,
            best: Vec::new(),
            best_score: f32::MIN,
            options,
            rng,
        })
    }

    pub fn table(&self) -> &WordTable {
        &self.table
    }

    pub fn best_score(&self) -> f32 {
        self.best_score
    }
}
