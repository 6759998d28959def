//! Command-line batch simulation.
//!
//! ```text
//! cargo run --example simulate -- -c 10 -n 500 -s m -a f
//! ```

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use roulettrs::{Batch, BatchResult, CapitalMode, Money, SimulationOptions, Strategy};
use tracing_subscriber::EnvFilter;

const BAR_WIDTH: f64 = 50.0;

#[derive(Parser, Debug)]
#[command(author, version, about = "Roulette betting-strategy simulation")]
struct Args {
    /// Number of runs.
    #[arg(short = 'c', long)]
    runs: u32,

    /// Number of spins per run.
    #[arg(short = 'n', long)]
    spins: u32,

    /// Strategy: m (martingale), d (d'alembert), f (fibonacci), o (own).
    #[arg(short = 's', long)]
    strategy: Strategy,

    /// Capital: f (finite), i (infinite).
    #[arg(short = 'a', long)]
    capital: CapitalMode,

    #[arg(long, default_value = "10")]
    base_stake: Money,

    #[arg(long, default_value = "1000")]
    initial_capital: Money,

    /// Wheel seed; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Spread runs over all cores (requires the `parallel` feature).
    #[arg(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = SimulationOptions::default()
        .with_runs(args.runs)
        .with_spins(args.spins)
        .with_strategy(args.strategy)
        .with_capital_mode(args.capital)
        .with_base_stake(args.base_stake)
        .with_initial_capital(args.initial_capital)
        .with_seed(seed);

    if let Err(err) = options.validate() {
        eprintln!("Invalid options: {err}");
        return ExitCode::FAILURE;
    }

    let batch = Batch::new(options);
    let result = if args.parallel {
        run_parallel(&batch)
    } else {
        batch.run()
    };

    print_runs(&result);
    print_streaks(&result);
    println!(
        "Ruined: {} of {} runs ({} strategy, {} capital, seed {seed})",
        result.ruined(),
        result.total_runs(),
        options.strategy,
        options.capital_mode,
    );

    ExitCode::SUCCESS
}

#[cfg(feature = "parallel")]
fn run_parallel(batch: &Batch) -> BatchResult {
    batch.run_parallel()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(batch: &Batch) -> BatchResult {
    eprintln!("Built without the `parallel` feature; running sequentially.");
    batch.run()
}

fn print_runs(result: &BatchResult) {
    println!("Capital by run:");
    for (index, run) in result.runs().iter().enumerate() {
        let status = if run.ruined { "ruined" } else { "" };
        println!(
            "  run {:>4}: {:>4} spins, final {:>10}, peak {:>10} {status}",
            index + 1,
            run.spins_played(),
            run.final_capital().unwrap_or_default(),
            run.peak_capital().unwrap_or_default(),
        );
    }
}

fn print_streaks(result: &BatchResult) {
    let frequencies = result.relative_frequencies();
    if frequencies.is_empty() {
        println!("No losing streaks recorded.");
        return;
    }

    println!("Loss streak distribution:");
    for (length, share) in frequencies {
        let bar = "#".repeat((share * BAR_WIDTH).round() as usize);
        println!("  {length:>3}: {:>6.2}% {bar}", share * 100.0);
    }
}
