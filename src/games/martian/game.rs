//! `Game` implementation for Martian Dice.

use rand::Rng;

use super::combinatorics::RollOutcome;
use super::error::{MartianError, Result};
use super::moves::DiceMove;
use super::position::{Position, MAX_DICE};
use crate::solver::game::{Game, Outcome};

/// Martian Dice with a fixed dice budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MartianDice {
    dice: u8,
}

impl MartianDice {
    /// Create a game with `dice` dice.
    ///
    /// # Panics
    /// Panics if `dice > MAX_DICE`; use `try_new` for unchecked input.
    pub fn new(dice: u8) -> Self {
        assert!(dice <= MAX_DICE, "{} dice exceeds the maximum of {}", dice, MAX_DICE);
        Self { dice }
    }

    /// Create a game, rejecting dice counts above `MAX_DICE`.
    pub fn try_new(dice: usize) -> Result<Self> {
        if dice > MAX_DICE as usize {
            return Err(MartianError::TooManyDice {
                dice,
                max: MAX_DICE as usize,
            });
        }
        Ok(Self { dice: dice as u8 })
    }

    /// The game whose budget matches an arbitrary position.
    ///
    /// The budget is the position's `total_dice`, so a position produced by
    /// `EndGame` yields a game sized to its saved dice. Solving it is
    /// unaffected; only `initial_state` and playouts use the budget.
    pub fn for_position(position: &Position) -> Self {
        Self::new(position.total_dice())
    }

    /// Dice budget.
    pub fn dice(&self) -> u8 {
        self.dice
    }
}

impl Game for MartianDice {
    type State = Position;
    type Move = DiceMove;

    fn initial_state(&self) -> Position {
        Position::new(self.dice)
    }

    fn legal_moves(&self, state: &Position) -> Vec<DiceMove> {
        state.legal_moves()
    }

    fn is_terminal(&self, state: &Position) -> bool {
        state.is_terminal()
    }

    fn score(&self, state: &Position) -> f64 {
        state.score() as f64
    }

    fn successors(&self, state: &Position, mv: &DiceMove) -> Vec<Outcome<Position>> {
        state.successors(*mv)
    }

    /// Rolls are sampled die by die instead of enumerating every breakdown.
    fn sample_successor<R: Rng>(&self, state: &Position, mv: &DiceMove, rng: &mut R) -> Position {
        if *mv != DiceMove::RollDice {
            return state.successors(*mv)[0].state;
        }
        assert!(state.is_legal(mv), "illegal move {} at {}", mv, state);

        let mut outcome = RollOutcome::default();
        for _ in 0..state.dice_to_roll() {
            match rng.gen_range(0..6) {
                0 | 1 => outcome.lasers += 1,
                2 => outcome.tanks += 1,
                3 => outcome.humans += 1,
                4 => outcome.cows += 1,
                _ => outcome.chickens += 1,
            }
        }
        state.after_roll(&outcome)
    }

    fn move_name(&self, mv: &DiceMove) -> String {
        mv.to_string()
    }

    fn state_description(&self, state: &Position) -> String {
        state.description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Solver, SolverConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solve(dice: u8) -> (Solver<MartianDice>, Position) {
        let game = MartianDice::new(dice);
        let mut solver = Solver::new(game, SolverConfig::default());
        solver.solve_root();
        (solver, game.initial_state())
    }

    #[test]
    fn test_zero_dice() {
        let (solver, root) = solve(0);
        assert_eq!(solver.expected_score(&root), 0.0);
        assert!(solver.best_moves(&root).is_empty());
        assert_eq!(solver.num_positions(), 1);
    }

    #[test]
    fn test_one_die() {
        // Rolling one die: a human/cow/chicken (3 of 6 faces) can be saved
        // for 1 point; lasers and tanks end at 0.
        let (solver, root) = solve(1);
        assert_eq!(solver.expected_score(&root), 0.5);
        assert_eq!(solver.best_moves(&root), &[DiceMove::RollDice]);
    }

    #[test]
    fn test_more_dice_never_hurt() {
        let mut previous = 0.0;
        for dice in 0..=5 {
            let (solver, root) = solve(dice);
            let value = solver.expected_score(&root);
            assert!(value >= previous, "{} dice: {} < {}", dice, value, previous);
            previous = value;
        }
    }

    #[test]
    fn test_expected_is_max_of_move_values() {
        let (solver, _) = solve(4);
        for (position, solution) in solver.memo().solved() {
            if position.is_terminal() {
                assert_eq!(solution.expected_score, position.score() as f64);
                continue;
            }
            let values = solver.move_values(position).unwrap();
            let best = values.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(best, solution.expected_score);
            for (mv, value) in values {
                assert_eq!(solution.best_moves.contains(&mv), value == best);
            }
        }
    }

    #[test]
    fn test_sampled_roll_conserves_dice() {
        let game = MartianDice::new(6);
        let root = game.initial_state();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let next = game.sample_successor(&root, &DiceMove::RollDice, &mut rng);
            assert_eq!(next.total_dice(), 6);
            assert_eq!(next.dice_to_roll(), 0);
        }
    }

    #[test]
    fn test_play_out_matches_expectation() {
        let game = MartianDice::new(3);
        let config = SolverConfig::default().with_seed(42).with_playouts(20_000);
        let mut solver = Solver::new(game, config);
        solver.solve_root();

        let result = solver.play_out_default();
        assert!(result.agrees_within(5.0), "{:?}", result);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(MartianDice::try_new(13).map(|g| g.dice()), Ok(13));
        assert_eq!(
            MartianDice::try_new(14),
            Err(MartianError::TooManyDice { dice: 14, max: 13 })
        );
    }
}
