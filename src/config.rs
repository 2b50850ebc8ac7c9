use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Seconds of wall-clock search budget; more time, clumpier output
    #[arg(short = 'T', long, default_value_t = 10)]
    pub time: u64,

    /// Fewest swaps per search step
    #[arg(long, default_value_t = 1)]
    pub lo_mut: u32,

    /// Most swaps per search step; higher values take coarser steps
    #[arg(long, default_value_t = 2)]
    pub hi_mut: u32,

    /// Pre-search shuffle rounds per entry, erases any incidental order in
    /// the input
    #[arg(short = 'r', long, default_value_t = 8)]
    pub shuffle: u32,

    /// Seed for reproducible runs; omitted means time-seeded
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}
