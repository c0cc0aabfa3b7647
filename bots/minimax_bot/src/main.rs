use blokus::{Budget, MinimaxStrategy, SearchConfig};
use blokus_bot_utils::{initialize_logging, Bot, StrategyBot};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    /// Number of plies to look ahead after our own move
    #[arg(short, long, default_value_t = 1)]
    depth: u32,
    /// Stop searching after this many candidate placements (0 means no limit)
    #[arg(short, long, default_value_t = 0)]
    budget: u64,
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    let config = SearchConfig {
        depth: args.depth,
        budget: match args.budget {
            0 => Budget::Unbounded,
            n => Budget::Candidates(n),
        },
    };
    debug!("Searching with {:?}", config);
    StrategyBot::new(MinimaxStrategy::new(config)).run()
}
