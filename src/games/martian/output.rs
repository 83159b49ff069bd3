//! Text and JSON reports for solved Martian Dice games.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::ops::RangeInclusive;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::combinatorics::outcome_count;
use super::game::MartianDice;
use super::position::Position;
use crate::solver::{Solver, SolverConfig};

/// One line of a report: the position description, annotated with the
/// expected score and best moves when the solver has them.
pub fn position_line(position: &Position, solver: Option<&Solver<MartianDice>>) -> String {
    let mut line = position.description();

    if let Some(solution) = solver.and_then(|s| s.solution(position)) {
        let _ = write!(line, ", expected = {:.2}", solution.expected_score);
        if !solution.best_moves.is_empty() {
            let best: Vec<String> = solution.best_moves.iter().map(|mv| mv.to_string()).collect();
            let _ = write!(line, ", best = [{}]", best.join(", "));
        }
    }
    line
}

/// Recursive description of the game tree below `position`.
///
/// Every successor of every legal move is listed under its parent, each
/// level indented by one `". "` prefix. `max_depth` limits how many levels
/// below `position` are rendered.
pub fn render_tree(
    position: &Position,
    solver: Option<&Solver<MartianDice>>,
    max_depth: Option<usize>,
) -> String {
    let mut out = String::new();
    write_tree(&mut out, position, solver, 0, max_depth);
    out
}

fn write_tree(
    out: &mut String,
    position: &Position,
    solver: Option<&Solver<MartianDice>>,
    depth: usize,
    max_depth: Option<usize>,
) {
    if depth > 0 {
        out.push('\n');
    }
    out.push_str(&". ".repeat(depth));
    out.push_str(&position_line(position, solver));

    if max_depth.is_some_and(|max| depth >= max) {
        return;
    }

    for mv in position.legal_moves() {
        for outcome in position.successors(mv) {
            write_tree(out, &outcome.state, solver, depth + 1, max_depth);
        }
    }
}

/// Solving statistics for one dice budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiceStats {
    /// Dice budget.
    pub dice: u8,
    /// Distinct breakdowns of the opening roll; one for an empty pool.
    pub first_states: u64,
    /// Distinct positions reachable from the root.
    pub total_states: usize,
    /// Non-terminal positions expanded.
    pub recursive_steps: u64,
    /// Expected score of the root under optimal play.
    pub expected_score: f64,
    /// Wall-clock solving time in seconds.
    pub seconds: f64,
}

impl DiceStats {
    /// Solve a fresh game with `dice` dice in its own session.
    pub fn solve(dice: u8, config: &SolverConfig) -> Self {
        let start = Instant::now();
        let mut solver = Solver::new(MartianDice::new(dice), config.clone());
        let expected_score = solver.solve_root();

        DiceStats {
            dice,
            first_states: outcome_count(dice),
            total_states: solver.num_positions(),
            recursive_steps: solver.stats().recursive_steps,
            expected_score,
            seconds: start.elapsed().as_secs_f64(),
        }
    }
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Seconds since the Unix epoch when the report was built.
    pub timestamp: u64,
    /// Wall-clock time for the whole report.
    pub total_seconds: f64,
}

/// Statistics across a range of dice budgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// When and how long the report took.
    pub metadata: ReportMetadata,
    /// One row per dice budget, in ascending order.
    pub rows: Vec<DiceStats>,
}

impl StatsReport {
    /// Solve every dice budget in `dice` in parallel, one isolated solver per
    /// budget. `on_done` is called as each budget finishes.
    pub fn solve_range<F>(dice: RangeInclusive<u8>, config: &SolverConfig, on_done: F) -> Self
    where
        F: Fn(&DiceStats) + Sync,
    {
        let start = Instant::now();

        let mut rows: Vec<DiceStats> = dice
            .into_par_iter()
            .map(|n| {
                let stats = DiceStats::solve(n, config);
                on_done(&stats);
                stats
            })
            .collect();
        rows.sort_by_key(|row| row.dice);

        Self {
            metadata: ReportMetadata {
                timestamp: std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0),
                total_seconds: start.elapsed().as_secs_f64(),
            },
            rows,
        }
    }

    /// Render the report as an aligned text table.
    pub fn table(&self) -> String {
        let mut out = String::from(
            "Dice\tFirst States\tTotal States\tRecursive Steps\tExpected Score\tComputation Time\n",
        );
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:>4}\t{:>12}\t{:>12}\t{:>15}\t{:>14.2}\t{:>16.2}",
                row.dice,
                row.first_states,
                row.total_states,
                row.recursive_steps,
                row.expected_score,
                row.seconds
            );
        }
        out
    }

    /// Write the report as pretty-printed JSON.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_tree_of_one_die() {
        let tree = render_tree(&Position::new(1), None, None);
        let lines: Vec<&str> = tree.lines().collect();

        // Root, five roll outcomes with their picks, and the end-game leaf.
        assert_eq!(lines[0], Position::new(1).description());
        assert_eq!(lines.iter().filter(|l| l.starts_with(". ") && !l.starts_with(". . ")).count(), 6);
        assert_eq!(lines.len(), 1 + 5 + 4 + 1);
    }

    #[test]
    fn test_tree_depth_limit() {
        let tree = render_tree(&Position::new(3), None, Some(1));
        // Root plus 35 roll outcomes plus the end-game leaf.
        assert_eq!(tree.lines().count(), 1 + 35 + 1);
        assert!(tree.lines().all(|l| !l.starts_with(". . ")));
    }

    #[test]
    fn test_annotated_line() {
        let mut solver = Solver::new(MartianDice::new(1), SolverConfig::default());
        solver.solve_root();
        let line = position_line(&Position::new(1), Some(&solver));
        assert!(line.ends_with(", expected = 0.50, best = [RollDice]"), "{}", line);
    }

    #[test]
    fn test_stats_report() {
        let calls = AtomicUsize::new(0);
        let report = StatsReport::solve_range(1..=3, &SolverConfig::default(), |_| {
            calls.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(calls.load(Ordering::Relaxed), 3);
        let dice: Vec<u8> = report.rows.iter().map(|r| r.dice).collect();
        assert_eq!(dice, vec![1, 2, 3]);

        assert_eq!(report.rows[0].first_states, 5);
        assert_eq!(report.rows[0].total_states, 11);
        assert_eq!(report.rows[0].recursive_steps, 5);
        assert_eq!(report.rows[0].expected_score, 0.5);
        assert_eq!(report.rows[1].total_states, 55);
        assert_eq!(report.rows[1].recursive_steps, 32);

        let table = report.table();
        assert_eq!(table.lines().count(), 4);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"expected_score\":0.5"));
    }

    #[test]
    fn test_zero_dice_stats() {
        let stats = DiceStats::solve(0, &SolverConfig::default());
        assert_eq!(stats.first_states, 1);
        assert_eq!(stats.total_states, 1);
        assert_eq!(stats.recursive_steps, 0);
        assert_eq!(stats.expected_score, 0.0);
    }
}
