//! Torus Life - Interactive Conway's Game of Life engine.
//!
//! This crate provides the simulation and scheduling core of an
//! interactive Game of Life: a binary cell grid with toroidal neighbor
//! topology, double-buffered generation advances, a frame-paced
//! play/pause scheduler driven by a host callback primitive, and live
//! cell painting that works in any scheduler state. Drawing, UI chrome
//! and the persistent storage backend stay outside; they plug in through
//! the render-observer, event and key/value interfaces.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `schema`: Configuration, pattern matrices and the preset catalog
//! - `engine`: Grid, generation rule, frame scheduler and game controller
//! - `store`: Saved-pattern persistence over a key/value contract
//!
//! # Example
//!
//! ```rust
//! use torus_life::{
//!     engine::{GameController, ManualDriver, TickOutcome},
//!     schema::GameConfig,
//! };
//!
//! let config = GameConfig::default();
//! let mut game = GameController::new(&config, ManualDriver::new()).unwrap();
//!
//! // Paint a blinker and start playing.
//! for (x, y) in [(2, 1), (2, 2), (2, 3)] {
//!     game.paint(x, y).unwrap();
//! }
//! game.toggle_playing(0);
//!
//! // The host delivers ticks; a generation advances once the frame
//! // interval (100 ms by default) has elapsed.
//! assert_eq!(game.tick(50), TickOutcome::Waiting);
//! assert_eq!(game.tick(100), TickOutcome::Step);
//! assert_eq!(game.generation(), 1);
//! ```

pub mod engine;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use engine::{CellGrid, GameController, GridStats, ManualDriver, step};
pub use schema::{GameConfig, Pattern, PresetCatalog};
pub use store::{MemoryStore, PatternCatalog};
