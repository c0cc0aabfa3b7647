use blokus::RandomStrategy;
use blokus_bot_utils::{initialize_logging, Bot, StrategyBot};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);
    let rng = StdRng::seed_from_u64(seed);

    StrategyBot::new(RandomStrategy::new(rng)).run()
}
