//! Benchmarks for the Martian Dice solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use martian_dice_solver::games::martian::{roll_outcomes, DiceMove, MartianDice, Position};
use martian_dice_solver::solver::{Solver, SolverConfig};

fn solve_benchmark(c: &mut Criterion) {
    for dice in [4u8, 8] {
        c.bench_function(&format!("solve_{}_dice", dice), |b| {
            b.iter(|| {
                let mut solver = Solver::new(MartianDice::new(dice), SolverConfig::default());
                black_box(solver.solve_root())
            })
        });
    }

    // 14440 positions are reachable with 8 dice.
    c.bench_function("solve_8_dice_presized", |b| {
        b.iter(|| {
            let mut solver =
                Solver::with_capacity(MartianDice::new(8), SolverConfig::default(), 14_440);
            black_box(solver.solve_root())
        })
    });
}

fn roll_expansion_benchmark(c: &mut Criterion) {
    let root = Position::new(13);

    c.bench_function("roll_outcomes_13", |b| {
        b.iter(|| black_box(roll_outcomes(black_box(13))).len())
    });

    c.bench_function("roll_successors_13", |b| {
        b.iter(|| black_box(root.successors(black_box(DiceMove::RollDice))).len())
    });
}

criterion_group!(benches, solve_benchmark, roll_expansion_benchmark);
criterion_main!(benches);
