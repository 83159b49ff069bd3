//! Parsing positions from compact notation.
//!
//! A position is written `SAVED:ROLLED:DICE`, for example `LLT:HCc:0`, using
//! `L` laser, `T` tank, `H` human, `C` cow and `c` chicken. A bare number
//! such as `7` is a fresh game with that many dice.

use std::str::FromStr;

use super::error::{MartianError, Result};
use super::position::{Position, Tally, MAX_DICE};

impl FromStr for Position {
    type Err = MartianError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let segments: Vec<&str> = s.split(':').collect();

        match segments.as_slice() {
            [dice] => {
                let dice = parse_dice(dice)?;
                Ok(Position::new(dice))
            }
            [saved, rolled, dice] => {
                let saved = parse_tally(saved, "saved")?;
                let rolled = parse_tally(rolled, "rolled")?;
                let dice_to_roll = parse_dice(dice)?;

                if rolled.tanks > 0 {
                    return Err(MartianError::RolledTanks);
                }
                if dice_to_roll > 0 && rolled.total() > 0 {
                    return Err(MartianError::RolledWithPendingDice(dice_to_roll));
                }

                let total = saved.total() as usize + rolled.total() as usize + dice_to_roll as usize;
                if total > MAX_DICE as usize {
                    return Err(MartianError::TooManyDice {
                        dice: total,
                        max: MAX_DICE as usize,
                    });
                }

                Ok(Position::from_parts(saved, rolled, dice_to_roll))
            }
            _ => Err(MartianError::InvalidNotation(s.to_string())),
        }
    }
}

fn parse_dice(s: &str) -> Result<u8> {
    let dice: usize = s
        .trim()
        .parse()
        .map_err(|_| MartianError::InvalidDiceCount(s.to_string()))?;

    if dice > MAX_DICE as usize {
        return Err(MartianError::TooManyDice {
            dice,
            max: MAX_DICE as usize,
        });
    }
    Ok(dice as u8)
}

fn parse_tally(s: &str, segment: &'static str) -> Result<Tally> {
    let mut tally = Tally::default();

    for face in s.trim().chars() {
        let slot = match face {
            'L' => &mut tally.lasers,
            'T' => &mut tally.tanks,
            'H' => &mut tally.humans,
            'C' => &mut tally.cows,
            'c' => &mut tally.chickens,
            _ => return Err(MartianError::UnknownFace { face, segment }),
        };
        if *slot >= MAX_DICE {
            return Err(MartianError::TooManyDice {
                dice: MAX_DICE as usize + 1,
                max: MAX_DICE as usize,
            });
        }
        *slot += 1;
    }

    Ok(tally)
}
