//! Cellular automaton engine.
//!
//! A fixed-size toroidal grid of binary cells advanced one generation at a
//! time under a life-like rule, with a textual snapshot on demand.

pub mod grid;
pub mod pattern;
pub mod rule;
pub mod universe;

pub use grid::Grid;
pub use pattern::Pattern;
pub use rule::Rule;
pub use universe::Universe;
