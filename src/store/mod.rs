//! Store module - Saved-pattern persistence over a key/value contract.

mod catalog;
mod memory;

pub use catalog::*;
pub use memory::*;
