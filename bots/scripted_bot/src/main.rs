use blokus::{Move, MinimaxStrategy, ScriptedStrategy, SearchConfig};
use blokus_bot_utils::{initialize_logging, Bot, StrategyBot};

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    /// Move tokens to play on our first turns, e.g. "U043,B166"
    #[arg(short, long, value_delimiter = ',')]
    moves: Vec<Move>,
    /// Look-ahead of the search used once the moves run out
    #[arg(short, long, default_value_t = 1)]
    depth: u32,
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    let fallback = MinimaxStrategy::new(SearchConfig {
        depth: args.depth,
        ..SearchConfig::default()
    });
    StrategyBot::new(ScriptedStrategy::new(args.moves, fallback)).run()
}
