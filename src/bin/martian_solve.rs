//! Martian Dice solver binary.
//!
//! Solves a position given as a dice count or in `SAVED:ROLLED:DICE`
//! notation and prints its expected score, best moves and move values.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use martian_dice_solver::games::martian::{
    position_line, render_tree, MartianConfig, MartianDice, MartianError, Position,
};
use martian_dice_solver::solver::{Game, Solver};

/// Optimal strategy for Martian Dice.
#[derive(Parser)]
#[command(name = "martian_solve")]
#[command(about = "Expected score and best moves for a Martian Dice position")]
struct Cli {
    /// Position as a dice count (e.g. `13`) or `SAVED:ROLLED:DICE`
    /// (e.g. `LLT:HCc:0`). Defaults to a fresh game with the configured dice.
    position: Option<String>,

    /// JSON config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full game tree below the position.
    #[arg(long)]
    tree: bool,

    /// Limit the rendered tree to this many levels.
    #[arg(long)]
    depth: Option<usize>,

    /// Play this many Monte Carlo games to check the expectation.
    #[arg(long)]
    playouts: Option<u64>,

    /// Random seed for playouts.
    #[arg(long)]
    seed: Option<u64>,

    /// Export every solved position as JSON to this path.
    #[arg(long)]
    export: Option<PathBuf>,
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
        Some(path) => {
            let config = MartianConfig::from_json_file(path)?;
            println!("Loaded config from: {}", path.display());
            config
        }
        None => MartianConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.solver = config.solver.with_seed(seed);
    }
    if let Some(depth) = cli.depth {
        config.max_tree_depth = Some(depth);
    }
    if let Some(games) = cli.playouts {
        config.solver = config.solver.with_playouts(games);
    }
    config.validate()?;

    let position: Position = match &cli.position {
        Some(notation) => notation.parse()?,
        None => Position::new(config.dice),
    };

    let game = MartianDice::for_position(&position);
    let mut solver = Solver::new(game, config.solver.clone());

    println!("=== Martian Dice Solver ===\n");
    solver.solve(&position);

    println!("{}", position_line(&position, Some(&solver)));
    if let Some(values) = solver.move_values(&position) {
        for (mv, value) in values {
            println!("  {:<14} {:.4}", mv.to_string(), value);
        }
    }

    let stats = solver.stats();
    println!();
    println!("Positions: {}", stats.positions);
    println!("Recursive steps: {}", stats.recursive_steps);
    println!("Memo hits: {}", stats.memo_hits);
    println!("Solve time: {:.3}s ({:.0} positions/s)", stats.elapsed_seconds, stats.positions_per_second());

    if cli.playouts.is_some() {
        if position == game.initial_state() {
            let result = solver.play_out_default();
            println!(
                "\nPlayouts: {} games, mean {:.4} ± {:.4} (solved {:.4})",
                result.games, result.mean_score, result.std_error, result.expected_score
            );
        } else {
            println!("\nPlayouts start from a fresh game; skipped for {}", position.notation());
        }
    }

    if cli.tree {
        println!("\n{}", render_tree(&position, Some(&solver), config.max_tree_depth));
    }

    if let Some(path) = cli.export {
        let export = solver.export();
        let written = serde_json::to_string_pretty(&export)
            .map_err(std::io::Error::from)
            .and_then(|json| File::create(&path).and_then(|mut f| f.write_all(json.as_bytes())));
        match written {
            Ok(_) => println!("Exported {} positions to {}", export.positions.len(), path.display()),
            Err(e) => eprintln!("Error exporting: {}", e),
        }
    }

    Ok(())
}
