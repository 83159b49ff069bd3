//! Player decisions in Martian Dice.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::solver::game::Move;

/// A decision available at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiceMove {
    /// Lock in every rolled laser. Lasers may be locked repeatedly.
    SaveLasers,
    /// Lock in every rolled human (once per game).
    SaveHumans,
    /// Lock in every rolled cow (once per game).
    SaveCows,
    /// Lock in every rolled chicken (once per game).
    SaveChickens,
    /// Roll the dice still in the pool.
    RollDice,
    /// Stop and keep the current score.
    EndGame,
}

impl DiceMove {
    /// All moves in legal-move order.
    pub const ALL: [DiceMove; 6] = [
        DiceMove::SaveLasers,
        DiceMove::SaveHumans,
        DiceMove::SaveCows,
        DiceMove::SaveChickens,
        DiceMove::RollDice,
        DiceMove::EndGame,
    ];
}

impl Move for DiceMove {
    fn notation(&self) -> String {
        match self {
            DiceMove::SaveLasers => "L".to_string(),
            DiceMove::SaveHumans => "H".to_string(),
            DiceMove::SaveCows => "C".to_string(),
            DiceMove::SaveChickens => "c".to_string(),
            DiceMove::RollDice => "roll".to_string(),
            DiceMove::EndGame => "end".to_string(),
        }
    }
}

impl fmt::Display for DiceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiceMove::SaveLasers => "SaveLasers",
            DiceMove::SaveHumans => "SaveHumans",
            DiceMove::SaveCows => "SaveCows",
            DiceMove::SaveChickens => "SaveChickens",
            DiceMove::RollDice => "RollDice",
            DiceMove::EndGame => "EndGame",
        };
        write!(f, "{}", name)
    }
}
