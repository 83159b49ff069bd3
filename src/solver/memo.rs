//! Memo table for solved positions.
//!
//! The table maps a position, compared by its canonical equality, to its
//! solving status. A position that is absent is unsolved.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::solver::game::{GameState, Move};

/// Result of solving one position.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<M> {
    /// Expected final score under optimal play.
    pub expected_score: f64,
    /// Every move achieving `expected_score`. Empty for terminal positions.
    pub best_moves: Vec<M>,
}

impl<M: Move> Solution<M> {
    /// Solution of a terminal position.
    pub fn terminal(score: f64) -> Self {
        Self {
            expected_score: score,
            best_moves: Vec::new(),
        }
    }
}

/// Solving status of a stored position.
#[derive(Debug, Clone, PartialEq)]
pub enum MemoEntry<M> {
    /// Expansion of this position is in progress on the current call stack.
    Solving,
    /// The position has a final result.
    Solved(Solution<M>),
}

/// Status of a position as seen by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Not in the table.
    Unsolved,
    /// Being expanded.
    Solving,
    /// Result available.
    Solved,
}

/// Memo table owned by a single solving session.
#[derive(Debug, Clone)]
pub struct MemoTable<S, M> {
    entries: FxHashMap<S, MemoEntry<M>>,
}

impl<S: GameState, M: Move> Default for MemoTable<S, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState, M: Move> MemoTable<S, M> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Create a table with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Status of `state` in this table.
    pub fn status(&self, state: &S) -> SolveStatus {
        match self.entries.get(state) {
            None => SolveStatus::Unsolved,
            Some(MemoEntry::Solving) => SolveStatus::Solving,
            Some(MemoEntry::Solved(_)) => SolveStatus::Solved,
        }
    }

    /// Get the solution of `state` if it has been solved.
    pub fn get(&self, state: &S) -> Option<&Solution<M>> {
        match self.entries.get(state) {
            Some(MemoEntry::Solved(solution)) => Some(solution),
            _ => None,
        }
    }

    /// Mark `state` as being expanded.
    ///
    /// # Panics
    /// Panics if the state is already present; re-entering a position means
    /// the position graph has a cycle.
    pub fn begin(&mut self, state: &S) {
        let previous = self.entries.insert(state.clone(), MemoEntry::Solving);
        assert!(
            previous.is_none(),
            "position {:?} re-entered while {:?}",
            state,
            previous
        );
    }

    /// Store the final solution of `state`.
    pub fn finish(&mut self, state: &S, solution: Solution<M>) {
        match self.entries.get_mut(state) {
            Some(entry) => *entry = MemoEntry::Solved(solution),
            None => {
                self.entries
                    .insert(state.clone(), MemoEntry::Solved(solution));
            }
        }
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no position has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over solved positions.
    pub fn solved(&self) -> impl Iterator<Item = (&S, &Solution<M>)> {
        self.entries.iter().filter_map(|(state, entry)| match entry {
            MemoEntry::Solved(solution) => Some((state, solution)),
            MemoEntry::Solving => None,
        })
    }

    /// Clear all stored data.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Serializable export of one solved position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedPosition {
    /// Human-readable position description.
    pub position: String,
    /// Expected score under optimal play.
    pub expected_score: f64,
    /// Names of the best moves.
    pub best_moves: Vec<String>,
}

/// Serializable export format for a memo table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoExport {
    /// Solved positions, sorted by description.
    pub positions: Vec<ExportedPosition>,
}
