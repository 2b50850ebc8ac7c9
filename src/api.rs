use crate::error::ClumpyResult;
use crate::optimizer::{Optimizer, SearchOptions, Silent};
use crate::playlist;
use std::time::{Duration, Instant};

/// One-call service: tokenize the lines, optimize for the given budget and
/// return the reordered lines. Blank lines are dropped, as on file load.
pub fn clumpify(
    lines: &[String],
    options: SearchOptions,
    budget: Duration,
) -> ClumpyResult<Vec<String>> {
    let entries = playlist::entries_from_lines(lines);
    let mut optimizer = Optimizer::load(entries, options)?;
    let result = optimizer.run(Instant::now() + budget, &mut Silent)?;
    Ok(result.lines)
}
