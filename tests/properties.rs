//! Property-based tests for positions, weights and canonical equality.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use martian_dice_solver::games::martian::combinatorics::total_weight;
use martian_dice_solver::games::martian::{roll_permutations, DiceMove, Position, Tally, MAX_DICE};

fn hash_of(position: &Position) -> u64 {
    let mut hasher = DefaultHasher::new();
    position.hash(&mut hasher);
    hasher.finish()
}

/// Strategy: a position after a roll, with at most `MAX_DICE` dice in total.
fn rolled_position() -> impl Strategy<Value = Position> {
    (prop::array::uniform9(0u8..=3), 0u8..=3).prop_filter_map(
        "dice budget exceeded",
        |(c, rolled_tanks)| {
            let saved = Tally { lasers: c[0], tanks: c[1], humans: c[2], cows: c[3], chickens: c[4] };
            let rolled = Tally { lasers: c[5], tanks: rolled_tanks, humans: c[6], cows: c[7], chickens: c[8] };
            let total = saved.total() + rolled.pickable();
            (total <= MAX_DICE).then(|| Position::from_parts(saved, rolled, 0))
        },
    )
}

/// Strategy: a terminal position. Rolled lasers are cleared and every other
/// rolled category is kept only when it is already locked.
fn terminal_position() -> impl Strategy<Value = Position> {
    rolled_position().prop_map(|position| {
        let saved = position.saved();
        let rolled = position.rolled();
        let blocked = |count: u8, locked: u8| if locked > 0 { count } else { 0 };
        let rolled = Tally {
            lasers: 0,
            tanks: rolled.tanks,
            humans: blocked(rolled.humans, saved.humans),
            cows: blocked(rolled.cows, saved.cows),
            chickens: blocked(rolled.chickens, saved.chickens),
        };
        Position::from_parts(saved, rolled, 0)
    })
}

/// Strategy: a position between rolls, with dice still in the pool.
fn pool_position() -> impl Strategy<Value = Position> {
    (prop::array::uniform5(0u8..=1), 1u8..=6).prop_map(|(c, dice)| {
        let saved = Tally { lasers: c[0], tanks: c[1], humans: c[2], cows: c[3], chickens: c[4] };
        Position::from_parts(saved, Tally::default(), dice)
    })
}

proptest! {
    // Weights of every roll outcome sum to 6^n.
    #[test]
    fn roll_weights_normalize(n in 1u8..=MAX_DICE) {
        let outcomes = Position::new(n).successors(DiceMove::RollDice);
        let sum: u64 = outcomes.iter().map(|o| o.weight).sum();
        prop_assert_eq!(sum, total_weight(n));
    }

    // Pick moves and rolls never create or destroy dice.
    #[test]
    fn transitions_conserve_dice(position in rolled_position()) {
        for mv in position.legal_moves() {
            for outcome in position.successors(mv) {
                prop_assert_eq!(outcome.state.total_dice(), position.total_dice());
            }
        }
    }

    #[test]
    fn pool_transitions_conserve_dice(position in pool_position()) {
        prop_assert_eq!(position.legal_moves(), vec![DiceMove::RollDice, DiceMove::EndGame]);
        let outcomes = position.successors(DiceMove::RollDice);
        for outcome in &outcomes {
            prop_assert_eq!(outcome.state.total_dice(), position.total_dice());
            prop_assert_eq!(outcome.state.dice_to_roll(), 0);
            let r = outcome.state.rolled();
            prop_assert_eq!(outcome.weight, roll_permutations(r.lasers, r.tanks, r.humans, r.cows, r.chickens));
        }
    }

    // Terminal scores stay within [0, 3 + budget] and tanks overrun lasers.
    #[test]
    fn terminal_score_bounds(position in terminal_position()) {
        prop_assert!(position.is_terminal());
        let score = position.score();
        prop_assert!(score <= 3 + position.total_dice() as u32);
        if position.saved().tanks > position.saved().lasers {
            prop_assert_eq!(score, 0);
        }
    }

    // Positions differing only in the transient tank count are one memo entry.
    #[test]
    fn rolled_tanks_do_not_split_memo_entries(position in rolled_position(), tanks in 0u8..=3) {
        let rolled = Tally { tanks, ..position.rolled() };
        let twin = Position::from_parts(position.saved(), rolled, position.dice_to_roll());

        prop_assert_eq!(twin, position);
        prop_assert_eq!(hash_of(&twin), hash_of(&position));

        let mut memo = FxHashMap::default();
        memo.insert(position, 1.0);
        prop_assert_eq!(memo.get(&twin), Some(&1.0));
    }

    // Equal keys iff equal persistent fields.
    #[test]
    fn equality_matches_fields(a in rolled_position(), b in rolled_position()) {
        let same_fields = a.saved() == b.saved()
            && Tally { tanks: 0, ..a.rolled() } == Tally { tanks: 0, ..b.rolled() }
            && a.dice_to_roll() == b.dice_to_roll();
        prop_assert_eq!(a == b, same_fields);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    // Notation renders and parses back to the same position.
    #[test]
    fn notation_roundtrip(position in rolled_position()) {
        let parsed: Position = position.notation().parse().unwrap();
        prop_assert_eq!(parsed, position);
    }
}
