use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Playlist to read; "-" reads stdin
    #[arg(global = true, short, long, default_value = "playlist.m3u")]
    input: String,

    /// Playlist to write; "-" writes stdout
    #[arg(global = true, short, long, default_value = "clumpy.m3u")]
    output: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reorder a playlist so tracks sharing uncommon words sit together
    Search(cmd::search::SearchArgs),
    /// Score a playlist as-is and report its shared-word statistics
    Score(cmd::score::ScoreArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Search(args) => cmd::search::run(args, &cli.input, &cli.output),
        Commands::Score(args) => cmd::score::run(args, &cli.input),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
