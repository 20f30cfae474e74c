//! Engine module - Grid, rule, scheduling and control for the automaton.

mod controller;
mod events;
mod grid;
mod rule;
mod scheduler;

pub use controller::*;
pub use events::*;
pub use grid::*;
pub use rule::step;
pub use scheduler::*;
