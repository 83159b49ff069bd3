//! Martian Dice positions and their transition rules.
//!
//! ## Game Rules
//!
//! - Each die shows a laser (two faces), tank, human, cow or chicken
//! - Tanks rolled are locked in immediately
//! - After a roll the player locks in every die of one rolled category:
//!   lasers any number of times, humans/cows/chickens once each
//! - Unlocked dice return to the pool; the player then rolls again or stops
//! - Score: humans + cows + chickens, +3 if all three were saved, but 0 if
//!   tanks outnumber lasers
//!
//! ## Turn Structure
//!
//! ```text
//! pool > 0:   RollDice ──► chance over C(n+4, 4) breakdowns
//!             EndGame  ──► terminal
//! pool == 0:  Save<Category> for each lockable rolled category
//!             (no lockable category ──► terminal)
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::combinatorics::{roll_outcomes, RollOutcome};
use super::moves::DiceMove;
use crate::solver::game::{GameState, Outcome};

/// Maximum dice budget of a game.
pub const MAX_DICE: u8 = 13;

/// Bonus for saving at least one human, cow and chicken.
pub const FULL_SET_BONUS: u32 = 3;

/// Bits per field in the canonical key.
const KEY_BITS: u32 = 4;
const FIELD_MAX: u8 = (1 << KEY_BITS) - 1;

/// Per-category dice counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tally {
    /// Laser dice.
    pub lasers: u8,
    /// Tank dice.
    pub tanks: u8,
    /// Human dice.
    pub humans: u8,
    /// Cow dice.
    pub cows: u8,
    /// Chicken dice.
    pub chickens: u8,
}

impl Tally {
    /// Total dice across all categories.
    pub fn total(&self) -> u8 {
        self.lasers + self.tanks + self.humans + self.cows + self.chickens
    }

    /// Dice that can be locked by the player (every category but tanks).
    pub fn pickable(&self) -> u8 {
        self.lasers + self.humans + self.cows + self.chickens
    }
}

/// A game position.
///
/// Positions are values: equality and hashing use only the canonical key,
/// which packs the ten persistent fields and is computed once at
/// construction. The transient `rolled.tanks` count (kept only to weight the
/// roll that produced this position) is not part of the key.
#[derive(Clone, Copy)]
pub struct Position {
    saved: Tally,
    rolled: Tally,
    dice_to_roll: u8,
    key: u64,
}

impl Position {
    /// Root position: `dice` dice in the pool, nothing saved or rolled.
    ///
    /// # Panics
    /// Panics if `dice > MAX_DICE`.
    pub fn new(dice: u8) -> Self {
        assert!(dice <= MAX_DICE, "{} dice exceeds the maximum of {}", dice, MAX_DICE);
        Self::from_parts(Tally::default(), Tally::default(), dice)
    }

    /// Build a position from its parts. `rolled.tanks` is the transient
    /// tank count of the last roll.
    ///
    /// # Panics
    /// Panics if a persistent count does not fit the canonical key.
    pub fn from_parts(saved: Tally, rolled: Tally, dice_to_roll: u8) -> Self {
        let key = canonical_key(&saved, &rolled, dice_to_roll);
        Self {
            saved,
            rolled,
            dice_to_roll,
            key,
        }
    }

    /// Saved (locked-in) counts.
    pub fn saved(&self) -> Tally {
        self.saved
    }

    /// Rolled counts available to lock this turn.
    pub fn rolled(&self) -> Tally {
        self.rolled
    }

    /// Tanks produced by the roll that led here.
    pub fn rolled_tanks(&self) -> u8 {
        self.rolled.tanks
    }

    /// Dice in the pool, available for the next roll.
    pub fn dice_to_roll(&self) -> u8 {
        self.dice_to_roll
    }

    /// Dice still in play: saved, rolled and pooled.
    ///
    /// Equals the game's dice budget for every position reached without
    /// `EndGame`. Ending the game discards the pool, so its successor counts
    /// only the saved dice.
    pub fn total_dice(&self) -> u8 {
        self.saved.total() + self.rolled.pickable() + self.dice_to_roll
    }

    /// Legal moves, in `DiceMove::ALL` order.
    pub fn legal_moves(&self) -> Vec<DiceMove> {
        DiceMove::ALL
            .iter()
            .copied()
            .filter(|mv| self.is_legal(mv))
            .collect()
    }

    /// Check whether `mv` is legal here.
    pub fn is_legal(&self, mv: &DiceMove) -> bool {
        match mv {
            DiceMove::SaveLasers => self.rolled.lasers > 0,
            DiceMove::SaveHumans => self.rolled.humans > 0 && self.saved.humans == 0,
            DiceMove::SaveCows => self.rolled.cows > 0 && self.saved.cows == 0,
            DiceMove::SaveChickens => self.rolled.chickens > 0 && self.saved.chickens == 0,
            DiceMove::RollDice | DiceMove::EndGame => self.dice_to_roll > 0,
        }
    }

    /// A position with no legal moves.
    pub fn is_terminal(&self) -> bool {
        !DiceMove::ALL.iter().any(|mv| self.is_legal(mv))
    }

    /// Face-value score of this position.
    pub fn score(&self) -> u32 {
        if self.saved.tanks > self.saved.lasers {
            return 0;
        }

        let bonus = if self.saved.humans > 0 && self.saved.cows > 0 && self.saved.chickens > 0 {
            FULL_SET_BONUS
        } else {
            0
        };

        (self.saved.humans + self.saved.cows + self.saved.chickens) as u32 + bonus
    }

    /// Every successor of this position under `mv`.
    ///
    /// Pick and end moves have one successor of weight 1. A roll has one
    /// successor per category breakdown, weighted by its face-assignment
    /// count.
    ///
    /// # Panics
    /// Panics if `mv` is not legal here.
    pub fn successors(&self, mv: DiceMove) -> Vec<Outcome<Position>> {
        assert!(self.is_legal(&mv), "illegal move {} at {}", mv, self);

        match mv {
            DiceMove::RollDice => roll_outcomes(self.dice_to_roll)
                .into_iter()
                .map(|outcome| Outcome::weighted(self.after_roll(&outcome), outcome.weight()))
                .collect(),
            DiceMove::EndGame => vec![Outcome::certain(self.after_end_game())],
            pick => vec![Outcome::certain(self.after_pick(pick))],
        }
    }

    /// Position after the pool is rolled into `outcome`.
    pub fn after_roll(&self, outcome: &RollOutcome) -> Position {
        debug_assert_eq!(outcome.dice(), self.dice_to_roll);

        let saved = Tally {
            tanks: self.saved.tanks + outcome.tanks,
            ..self.saved
        };
        let rolled = Tally {
            lasers: outcome.lasers,
            tanks: outcome.tanks,
            humans: outcome.humans,
            cows: outcome.cows,
            chickens: outcome.chickens,
        };

        Position::from_parts(saved, rolled, 0)
    }

    fn after_end_game(&self) -> Position {
        Position::from_parts(self.saved, self.rolled, 0)
    }

    fn after_pick(&self, mv: DiceMove) -> Position {
        let mut saved = self.saved;
        let mut rolled = self.rolled;

        match mv {
            DiceMove::SaveLasers => {
                saved.lasers += rolled.lasers;
                rolled.lasers = 0;
            }
            DiceMove::SaveHumans => {
                saved.humans = rolled.humans;
                rolled.humans = 0;
            }
            DiceMove::SaveCows => {
                saved.cows = rolled.cows;
                rolled.cows = 0;
            }
            DiceMove::SaveChickens => {
                saved.chickens = rolled.chickens;
                rolled.chickens = 0;
            }
            DiceMove::RollDice | DiceMove::EndGame => unreachable!("{} is not a pick", mv),
        }

        // Unpicked dice go back to the pool.
        Position::from_parts(saved, Tally::default(), rolled.pickable())
    }

    /// Description in the form
    /// `Saved = LLT, available = HCc, possible moves = [...], score = N`.
    pub fn description(&self) -> String {
        let moves: Vec<String> = self.legal_moves().iter().map(DiceMove::to_string).collect();
        let available = if self.dice_to_roll == 0 {
            format!("available = {}", letters(&self.rolled, false))
        } else {
            format!("available = {} dice", self.dice_to_roll)
        };

        format!(
            "Saved = {}, {}, possible moves = [{}], score = {}",
            letters(&self.saved, true),
            available,
            moves.join(", "),
            self.score()
        )
    }

    /// Compact notation `SAVED:ROLLED:DICE`, parseable with `str::parse`.
    pub fn notation(&self) -> String {
        format!(
            "{}:{}:{}",
            letters(&self.saved, true),
            letters(&self.rolled, false),
            self.dice_to_roll
        )
    }
}

/// Pack the persistent fields into a single key, four bits per field.
fn canonical_key(saved: &Tally, rolled: &Tally, dice_to_roll: u8) -> u64 {
    let fields = [
        saved.lasers,
        saved.tanks,
        saved.humans,
        saved.cows,
        saved.chickens,
        rolled.lasers,
        rolled.humans,
        rolled.cows,
        rolled.chickens,
        dice_to_roll,
    ];

    fields.iter().enumerate().fold(0u64, |key, (i, &count)| {
        assert!(count <= FIELD_MAX, "count {} does not fit the position key", count);
        key | (count as u64) << (KEY_BITS * i as u32)
    })
}

/// Render counts as die letters: `L` laser, `T` tank, `H` human, `C` cow,
/// `c` chicken.
pub(crate) fn letters(tally: &Tally, with_tanks: bool) -> String {
    let tanks = if with_tanks { tally.tanks } else { 0 };
    [
        ('L', tally.lasers),
        ('T', tanks),
        ('H', tally.humans),
        ('C', tally.cows),
        ('c', tally.chickens),
    ]
    .iter()
    .flat_map(|&(letter, count)| std::iter::repeat(letter).take(count as usize))
    .collect()
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.key);
    }
}

impl GameState for Position {}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("saved", &self.saved)
            .field("rolled", &self.rolled)
            .field("dice_to_roll", &self.dice_to_roll)
            .finish()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
