//! Game implementations for the backward-induction solver.
//!
//! ## Available Games
//!
//! - [`martian`]: Martian Dice, a push-your-luck dice game
//!
//! ## Adding New Games
//!
//! 1. Create a new module under `src/games/`
//! 2. Define state and move types
//! 3. Implement the `Game` trait
//! 4. Add tests that verify expected behavior
//!
//! See the [`martian`] module for a complete example.

pub mod martian;
