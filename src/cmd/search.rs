use clap::Args;
use clumpy::config::SearchParams;
use clumpy::error::ClumpyResult;
use clumpy::optimizer::{Optimizer, ProgressCallback, SearchOptions};
use clumpy::playlist;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: SearchParams,
}

struct CliLogger;

impl ProgressCallback for CliLogger {
    fn on_improved(&mut self, iteration: u64, score: f32, mutations: u32) -> bool {
        info!(
            "It {:7} | Best score {:8.1} | Mutations {}",
            iteration, score, mutations
        );
        true
    }
}

pub fn run(args: &SearchArgs, input: &str, output: &str) -> ClumpyResult<()> {
    let entries = playlist::load_playlist(input)?;
    info!("Loaded {} entries from {}", entries.len(), input);

    let mut optimizer = Optimizer::load(entries, SearchOptions::from(&args.params))?;
    info!(
        "Scored {} words seen multiple times",
        optimizer.table().len()
    );

    let deadline = Instant::now() + Duration::from_secs(args.params.time);
    let result = optimizer.run(deadline, &mut CliLogger)?;

    info!(
        "Final score {:.1} after {} iterations",
        result.score, result.iterations
    );

    playlist::save_playlist(output, &result.lines)?;
    info!("Wrote {} entries to {}", result.lines.len(), output);
    Ok(())
}
