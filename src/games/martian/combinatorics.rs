//! Factorials and roll-outcome weights for Martian Dice.
//!
//! A Martian die has six faces: two lasers, one tank, one human, one cow and
//! one chicken. Rolling `n` dice produces a count per category; the number of
//! equally likely face assignments behind a given breakdown is the
//! multinomial coefficient scaled by `2^lasers`.

/// Largest `n` for which `factorial(n)` fits in a `u64`.
pub const MAX_FACTORIAL: usize = 20;

/// Number of faces on a die.
pub const FACES: u64 = 6;

/// Faces showing a laser.
pub const LASER_FACES: u64 = 2;

const FACTORIALS: [u64; MAX_FACTORIAL + 1] = build_factorials();

const fn build_factorials() -> [u64; MAX_FACTORIAL + 1] {
    let mut table = [1u64; MAX_FACTORIAL + 1];
    let mut i = 1;
    while i <= MAX_FACTORIAL {
        table[i] = table[i - 1] * i as u64;
        i += 1;
    }
    table
}

/// `n!` from the precomputed table.
///
/// # Panics
/// Panics if `n > MAX_FACTORIAL`.
pub fn factorial(n: usize) -> u64 {
    assert!(
        n <= MAX_FACTORIAL,
        "factorial({}) is outside the precomputed range 0..={}",
        n,
        MAX_FACTORIAL
    );
    FACTORIALS[n]
}

/// Number of face assignments of `n = sum of counts` labeled dice that
/// produce exactly the given category counts.
///
/// ```text
/// n! / (lasers! * tanks! * humans! * cows! * chickens!) * 2^lasers
/// ```
///
/// # Panics
/// Panics if the dice total exceeds `MAX_FACTORIAL` or the weight does not
/// fit in a `u64`.
pub fn roll_permutations(lasers: u8, tanks: u8, humans: u8, cows: u8, chickens: u8) -> u64 {
    let counts = [lasers, tanks, humans, cows, chickens];
    let n: usize = counts.iter().map(|&c| c as usize).sum();

    // The product of the parts' factorials never exceeds n!, so no overflow.
    let denominator: u64 = counts.iter().map(|&c| factorial(c as usize)).product();
    let multinomial = factorial(n) / denominator;

    let weight = multinomial as u128 * (LASER_FACES as u128).pow(lasers as u32);
    match u64::try_from(weight) {
        Ok(weight) => weight,
        Err(_) => panic!("roll weight for {:?} overflows u64", counts),
    }
}

/// Category counts of one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RollOutcome {
    /// Dice showing a laser.
    pub lasers: u8,
    /// Dice showing a tank.
    pub tanks: u8,
    /// Dice showing a human.
    pub humans: u8,
    /// Dice showing a cow.
    pub cows: u8,
    /// Dice showing a chicken.
    pub chickens: u8,
}

impl RollOutcome {
    /// Number of face assignments producing this outcome.
    pub fn weight(&self) -> u64 {
        roll_permutations(self.lasers, self.tanks, self.humans, self.cows, self.chickens)
    }

    /// Total dice in this outcome.
    pub fn dice(&self) -> u8 {
        self.lasers + self.tanks + self.humans + self.cows + self.chickens
    }
}

/// Every category breakdown of rolling `n` dice.
///
/// Ordered by lasers, then tanks, then humans, then cows; chickens take the
/// remainder. There are `C(n + 4, 4)` outcomes.
pub fn roll_outcomes(n: u8) -> Vec<RollOutcome> {
    let mut outcomes = Vec::with_capacity(outcome_count(n) as usize);
    for lasers in 0..=n {
        for tanks in 0..=(n - lasers) {
            for humans in 0..=(n - lasers - tanks) {
                for cows in 0..=(n - lasers - tanks - humans) {
                    outcomes.push(RollOutcome {
                        lasers,
                        tanks,
                        humans,
                        cows,
                        chickens: n - lasers - tanks - humans - cows,
                    });
                }
            }
        }
    }
    outcomes
}

/// `C(n + 4, 4)`: the number of distinct breakdowns of `n` dice.
pub fn outcome_count(n: u8) -> u64 {
    let n = n as u64;
    (n + 1) * (n + 2) * (n + 3) * (n + 4) / 24
}

/// `6^n`: the number of face assignments of `n` labeled dice.
pub fn total_weight(n: u8) -> u64 {
    FACES.pow(n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorials() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(13), 6_227_020_800);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    #[should_panic(expected = "outside the precomputed range")]
    fn test_factorial_out_of_range() {
        factorial(21);
    }

    #[test]
    fn test_single_die_weights() {
        assert_eq!(roll_permutations(1, 0, 0, 0, 0), 2);
        assert_eq!(roll_permutations(0, 1, 0, 0, 0), 1);
        assert_eq!(roll_permutations(0, 0, 1, 0, 0), 1);
        assert_eq!(roll_permutations(0, 0, 0, 1, 0), 1);
        assert_eq!(roll_permutations(0, 0, 0, 0, 1), 1);
        assert_eq!(roll_permutations(0, 0, 0, 0, 0), 1);
    }

    #[test]
    fn test_mixed_weights() {
        // Two lasers, one cow: 3!/(2!1!) * 2^2 = 12
        assert_eq!(roll_permutations(2, 0, 0, 1, 0), 12);
        // One of each non-laser category: 4! = 24
        assert_eq!(roll_permutations(0, 1, 1, 1, 1), 24);
        // All thirteen lasers: 2^13
        assert_eq!(roll_permutations(13, 0, 0, 0, 0), 8192);
    }

    #[test]
    fn test_weights_sum_to_six_pow_n() {
        for n in 0..=13u8 {
            let sum: u64 = roll_outcomes(n).iter().map(RollOutcome::weight).sum();
            assert_eq!(sum, total_weight(n), "n = {}", n);
        }
    }

    #[test]
    fn test_outcome_counts() {
        assert_eq!(roll_outcomes(0), vec![RollOutcome::default()]);
        for n in 0..=13u8 {
            let outcomes = roll_outcomes(n);
            assert_eq!(outcomes.len() as u64, outcome_count(n));
            assert!(outcomes.iter().all(|o| o.dice() == n));
        }
        assert_eq!(outcome_count(1), 5);
        assert_eq!(outcome_count(13), 2380);
    }

    #[test]
    fn test_outcome_order() {
        let outcomes = roll_outcomes(1);
        assert_eq!(outcomes[0], RollOutcome { chickens: 1, ..Default::default() });
        assert_eq!(outcomes[1], RollOutcome { cows: 1, ..Default::default() });
        assert_eq!(outcomes[2], RollOutcome { humans: 1, ..Default::default() });
        assert_eq!(outcomes[3], RollOutcome { tanks: 1, ..Default::default() });
        assert_eq!(outcomes[4], RollOutcome { lasers: 1, ..Default::default() });
    }
}
