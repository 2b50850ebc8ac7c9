use clap::Args;
use clumpy::error::{ClumpyError, ClumpyResult};
use clumpy::playlist;
use clumpy::scorer::{self, WordTable};
use clumpy::tokenizer;
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Emit the report as JSON instead of log lines
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// How many of the rarest shared words to list
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Serialize, Debug)]
struct SharedWord {
    word: String,
    count: u32,
    rarity: f32,
}

#[derive(Serialize, Debug)]
struct ScoreReport {
    entries: usize,
    shared_words: usize,
    total_score: f32,
    rarest: Vec<SharedWord>,
}

pub fn run(args: &ScoreArgs, input: &str) -> ClumpyResult<()> {
    let entries = playlist::load_playlist(input)?;
    if entries.is_empty() {
        return Err(ClumpyError::EmptyPlaylist);
    }

    let table = WordTable::build(&entries);
    let total = scorer::score(&entries, &table)?;

    // The table only keeps hashes; recover a spelling for each shared word
    // from the titles themselves.
    let mut spellings: HashMap<u32, String> = HashMap::new();
    for entry in &entries {
        for word in tokenizer::words(&entry.text) {
            spellings
                .entry(tokenizer::hash_word(word))
                .or_insert_with(|| word.to_lowercase());
        }
    }

    let mut rarest: Vec<SharedWord> = table
        .stats()
        .iter()
        .map(|s| SharedWord {
            word: spellings
                .get(&s.word)
                .cloned()
                .unwrap_or_else(|| format!("#{}", s.word)),
            count: s.count,
            rarity: s.rarity,
        })
        .collect();
    rarest.sort_by(|a, b| {
        b.rarity
            .partial_cmp(&a.rarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.word.cmp(&b.word))
    });
    rarest.truncate(args.top);

    let report = ScoreReport {
        entries: entries.len(),
        shared_words: table.len(),
        total_score: total,
        rarest,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        info!("Entries: {}", report.entries);
        info!("Words seen multiple times: {}", report.shared_words);
        info!("Score as ordered: {:.1}", report.total_score);
        for w in &report.rarest {
            info!("  {:<20} count {:3}  rarity {:5.1}", w.word, w.count, w.rarity);
        }
    }
    Ok(())
}
