//! Martian Dice statistics across dice budgets.
//!
//! Solves every budget from `--min-dice` to `--max-dice` in parallel, each in
//! its own solver session, and prints first-roll states, total states,
//! recursive steps, expected score and computation time per budget.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use martian_dice_solver::games::martian::{
    DiceStats, MartianConfig, MartianDice, MartianError, StatsReport,
};

/// Solve Martian Dice for a range of dice budgets.
#[derive(Parser)]
#[command(name = "martian_stats")]
#[command(about = "Expected score and state counts for each dice budget")]
struct Cli {
    /// Smallest dice budget.
    #[arg(long, default_value = "1")]
    min_dice: usize,

    /// Largest dice budget. Defaults to the configured dice.
    #[arg(long)]
    max_dice: Option<usize>,

    /// JSON config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pre-size each memo table for this many positions.
    #[arg(long)]
    capacity: Option<usize>,

    /// Write the report as JSON to this path.
    #[arg(long)]
    json: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(2);
    }
}

fn run(cli: Cli) -> Result<(), MartianError> {
    let mut config = match &cli.config {
        Some(path) => MartianConfig::from_json_file(path)?,
        None => MartianConfig::default(),
    };
    if let Some(capacity) = cli.capacity {
        config.solver = config.solver.with_capacity(capacity);
    }
    config.validate()?;

    let max_dice = MartianDice::try_new(cli.max_dice.unwrap_or(config.dice as usize))?.dice();
    let min_dice = MartianDice::try_new(cli.min_dice)?.dice();
    if min_dice > max_dice {
        return Err(MartianError::InvalidDiceCount(format!(
            "{}..={}",
            min_dice, max_dice
        )));
    }

    println!("=== Martian Dice Statistics ===\n");
    let start = Instant::now();

    let pb = ProgressBar::new((max_dice - min_dice) as u64 + 1);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] dice {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let report = StatsReport::solve_range(min_dice..=max_dice, &config.solver, |stats: &DiceStats| {
        pb.println(format!(
            "{:>2} dice solved: {} states, expected {:.2} ({:.2}s)",
            stats.dice, stats.total_states, stats.expected_score, stats.seconds
        ));
        pb.inc(1);
    });
    pb.finish_and_clear();

    println!("{}", report.table());
    println!("Total time: {:.2}s", start.elapsed().as_secs_f64());

    if let Some(path) = cli.json {
        match report.save_json(&path) {
            Ok(_) => println!("Saved JSON: {}", path),
            Err(e) => eprintln!("Error saving JSON: {}", e),
        }
    }

    Ok(())
}
