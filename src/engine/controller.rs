//! Game controller composing grid, rule, scheduler and notifications.
//!
//! The controller exclusively owns the live grid. A generation advance
//! clones the grid, computes the next generation into the clone from the
//! unmodified snapshot, then swaps the clone in; nothing else ever holds
//! the grid across a call, so no reader can observe a half-updated
//! generation.

use log::debug;

use crate::schema::{ConfigError, GameConfig, Pattern, PatternError};

use super::events::{EventBus, EventKind, GameEvent, RenderObserver};
use super::grid::{CellGrid, GridError};
use super::rule;
use super::scheduler::{FrameScheduler, TickDriver, TickOutcome};

/// Owner of the live grid and the play/pause/reset surface.
pub struct GameController<D: TickDriver> {
    grid: CellGrid,
    scheduler: FrameScheduler<D>,
    events: EventBus,
    observers: Vec<Box<dyn RenderObserver>>,
    is_playing: bool,
    generation: u64,
}

impl<D: TickDriver> GameController<D> {
    /// Build a controller from a validated configuration.
    ///
    /// Configuration errors are fatal; no partially initialized controller
    /// is ever returned.
    pub fn new(config: &GameConfig, driver: D) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: CellGrid::new(config.rows, config.cols),
            scheduler: FrameScheduler::new(driver, config.frame_interval_ms),
            events: EventBus::new(),
            observers: Vec::new(),
            is_playing: false,
            generation: 0,
        })
    }

    /// Read access to the live grid.
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Generations advanced since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Scheduler access for host glue that owns the callback primitive.
    pub fn scheduler(&self) -> &FrameScheduler<D> {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut FrameScheduler<D> {
        &mut self.scheduler
    }

    /// Subscribe to a named event; handlers run synchronously in
    /// registration order.
    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&GameEvent) + 'static) {
        self.events.subscribe(kind, handler);
    }

    /// Attach a render observer for cell-change and redraw notifications.
    pub fn add_observer(&mut self, observer: impl RenderObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Start if paused, pause if playing. Emits `PlayingChanged`.
    pub fn toggle_playing(&mut self, now_ms: u64) {
        self.scheduler.toggle(now_ms);
        self.is_playing = self.scheduler.is_running();
        self.events.emit(GameEvent::PlayingChanged {
            playing: self.is_playing,
        });
    }

    /// Handle a tick from the host callback primitive.
    ///
    /// Advances exactly one generation when the frame interval has
    /// elapsed; otherwise only re-arms.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        let outcome = self.scheduler.on_tick(now_ms);
        if outcome == TickOutcome::Step {
            self.advance_generation();
        }
        outcome
    }

    /// Paint the cell at (x, y) alive. Additive-only; valid while playing
    /// or paused, and never disturbs scheduler state.
    pub fn paint(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.grid.set(x, y, 1)
    }

    /// Signal the end of a paint stroke.
    ///
    /// When idle there is no upcoming tick to redraw, so the painted cells
    /// are published with a bulk render notification; when playing the
    /// next scheduled advance picks them up.
    pub fn end_paint(&mut self) {
        if !self.scheduler.is_running() {
            self.notify_grid_replaced();
        }
    }

    /// Cancel scheduling, clear the grid and notify. Callable from any
    /// state; a second reset of an idle, empty controller is a no-op
    /// apart from the notifications.
    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.grid.clear();
        self.generation = 0;
        self.is_playing = false;
        self.notify_grid_replaced();
        self.events.emit(GameEvent::Reset);
    }

    /// Replace the grid contents with `pattern`, anchored at the origin.
    ///
    /// All-or-nothing: an oversized pattern is rejected before any grid
    /// state changes. Scheduler state is untouched.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<(), PatternError> {
        if pattern.rows() > self.grid.rows() || pattern.cols() > self.grid.cols() {
            return Err(PatternError::TooLarge {
                rows: pattern.rows(),
                cols: pattern.cols(),
                grid_rows: self.grid.rows(),
                grid_cols: self.grid.cols(),
            });
        }

        self.grid.clear();
        for y in 0..pattern.rows() {
            for x in 0..pattern.cols() {
                self.grid.set_cell(x, y, pattern.at(x, y));
            }
        }
        self.notify_grid_replaced();
        Ok(())
    }

    /// Snapshot the full grid as a pattern matrix.
    pub fn save_pattern(&self) -> Pattern {
        let rows: Vec<Vec<u8>> = (0..self.grid.rows())
            .map(|y| {
                (0..self.grid.cols())
                    .map(|x| self.grid.cell(x, y))
                    .collect()
            })
            .collect();
        // A live grid always has >= 1x1 binary cells, so this cannot fail.
        Pattern::new(rows).unwrap_or_else(|_| unreachable!("grid is a valid matrix"))
    }

    fn advance_generation(&mut self) {
        let next = rule::step(&self.grid);

        for y in 0..self.grid.rows() {
            for x in 0..self.grid.cols() {
                if self.grid.cell(x, y) != next.cell(x, y) {
                    for observer in &mut self.observers {
                        observer.cell_advanced(x, y, &self.grid, &next);
                    }
                }
            }
        }

        // Swap the new generation in; the old grid is dropped here.
        self.grid = next;
        self.generation += 1;
        debug!("advanced to generation {}", self.generation);
    }

    fn notify_grid_replaced(&mut self) {
        for observer in &mut self.observers {
            observer.grid_replaced(&self.grid);
        }
    }
}

/// Grid statistics for monitoring.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GridStats {
    pub generation: u64,
    pub live_cells: usize,
    pub density: f32,
}

impl GridStats {
    /// Compute statistics from the controller's live grid.
    pub fn from_controller<D: TickDriver>(game: &GameController<D>) -> Self {
        let live_cells = game.grid().live_cells();
        Self {
            generation: game.generation(),
            live_cells,
            density: live_cells as f32 / game.grid().len() as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scheduler::ManualDriver;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller(rows: usize, cols: usize) -> GameController<ManualDriver> {
        let config = GameConfig {
            rows,
            cols,
            frame_interval_ms: 100,
        };
        GameController::new(&config, ManualDriver::new()).unwrap()
    }

    /// Records every notification it receives.
    #[derive(Default)]
    struct Recorder {
        cell_changes: Rc<RefCell<Vec<(usize, usize, u8, u8)>>>,
        replacements: Rc<RefCell<usize>>,
    }

    impl RenderObserver for Recorder {
        fn cell_advanced(&mut self, x: usize, y: usize, old: &CellGrid, new: &CellGrid) {
            self.cell_changes.borrow_mut().push((
                x,
                y,
                old.get(x, y).unwrap(),
                new.get(x, y).unwrap(),
            ));
        }

        fn grid_replaced(&mut self, _grid: &CellGrid) {
            *self.replacements.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = GameConfig {
            rows: 0,
            cols: 8,
            frame_interval_ms: 100,
        };
        assert!(GameController::new(&config, ManualDriver::new()).is_err());
    }

    #[test]
    fn test_toggle_playing_emits_event() {
        let mut game = controller(8, 8);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            game.subscribe(EventKind::PlayingChanged, move |e| {
                if let GameEvent::PlayingChanged { playing } = e {
                    seen.borrow_mut().push(*playing);
                }
            });
        }

        game.toggle_playing(0);
        assert!(game.is_playing());
        game.toggle_playing(10);
        assert!(!game.is_playing());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_tick_advances_blinker() {
        let mut game = controller(5, 5);
        for &(x, y) in &[(2, 1), (2, 2), (2, 3)] {
            game.paint(x, y).unwrap();
        }

        game.toggle_playing(0);
        assert_eq!(game.tick(50), TickOutcome::Waiting);
        assert_eq!(game.generation(), 0);

        assert_eq!(game.tick(100), TickOutcome::Step);
        assert_eq!(game.generation(), 1);
        assert_eq!(game.grid().get(1, 2).unwrap(), 1);
        assert_eq!(game.grid().get(2, 2).unwrap(), 1);
        assert_eq!(game.grid().get(3, 2).unwrap(), 1);
        assert_eq!(game.grid().get(2, 1).unwrap(), 0);
    }

    #[test]
    fn test_advance_notifies_changed_cells_only() {
        let mut game = controller(5, 5);
        let recorder = Recorder::default();
        let changes = Rc::clone(&recorder.cell_changes);
        game.add_observer(recorder);

        for &(x, y) in &[(2, 1), (2, 2), (2, 3)] {
            game.paint(x, y).unwrap();
        }
        game.toggle_playing(0);
        game.tick(100);

        // Blinker flip changes four cells: (2,1) and (2,3) die,
        // (1,2) and (3,2) birth. (2,2) stays and must not be reported.
        let mut seen = changes.borrow().clone();
        seen.sort_unstable();
        assert_eq!(
            seen,
            vec![(1, 2, 0, 1), (2, 1, 1, 0), (2, 3, 1, 0), (3, 2, 0, 1)]
        );
    }

    #[test]
    fn test_paint_while_playing_keeps_scheduler_running() {
        let mut game = controller(8, 8);
        game.toggle_playing(0);
        game.paint(3, 3).unwrap();
        game.end_paint();
        assert!(game.is_playing());
        assert_eq!(game.grid().get(3, 3).unwrap(), 1);
    }

    #[test]
    fn test_paint_is_additive_only() {
        let mut game = controller(8, 8);
        game.paint(1, 1).unwrap();
        game.paint(1, 1).unwrap();
        assert_eq!(game.grid().get(1, 1).unwrap(), 1);
        assert_eq!(game.grid().live_cells(), 1);
    }

    #[test]
    fn test_paint_out_of_bounds_is_error() {
        let mut game = controller(4, 4);
        assert!(game.paint(4, 0).is_err());
        assert_eq!(game.grid().live_cells(), 0);
    }

    #[test]
    fn test_end_paint_notifies_when_idle() {
        let mut game = controller(8, 8);
        let recorder = Recorder::default();
        let replacements = Rc::clone(&recorder.replacements);
        game.add_observer(recorder);

        game.paint(0, 0).unwrap();
        game.end_paint();
        assert_eq!(*replacements.borrow(), 1);

        // while playing, the scheduled tick's redraw suffices
        game.toggle_playing(0);
        game.paint(1, 1).unwrap();
        game.end_paint();
        assert_eq!(*replacements.borrow(), 1);
    }

    #[test]
    fn test_reset_clears_and_stops() {
        let mut game = controller(6, 6);
        let resets = Rc::new(RefCell::new(0));
        {
            let resets = Rc::clone(&resets);
            game.subscribe(EventKind::Reset, move |_| *resets.borrow_mut() += 1);
        }

        game.paint(2, 2).unwrap();
        game.toggle_playing(0);
        game.tick(100);
        game.reset();

        assert!(!game.is_playing());
        assert_eq!(game.generation(), 0);
        assert_eq!(game.grid().live_cells(), 0);
        assert_eq!(*resets.borrow(), 1);

        // no further advance until started again
        assert_eq!(game.tick(500), TickOutcome::Ignored);

        // reset of an idle, empty controller is safe
        game.reset();
        assert_eq!(*resets.borrow(), 2);
    }

    #[test]
    fn test_load_pattern_all_or_nothing() {
        let mut game = controller(3, 3);
        game.paint(0, 0).unwrap();

        let big = Pattern::new(vec![vec![1; 5]; 5]).unwrap();
        let err = game.load_pattern(&big).unwrap_err();
        assert!(matches!(err, PatternError::TooLarge { .. }));
        // rejected before mutating anything
        assert_eq!(game.grid().get(0, 0).unwrap(), 1);
        assert_eq!(game.grid().live_cells(), 1);
    }

    #[test]
    fn test_load_pattern_replaces_contents() {
        let mut game = controller(4, 4);
        game.paint(3, 3).unwrap();

        let glider = Pattern::new(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]]).unwrap();
        game.load_pattern(&glider).unwrap();

        assert_eq!(game.grid().live_cells(), 5);
        assert_eq!(game.grid().get(1, 0).unwrap(), 1);
        // previous contents are gone
        assert_eq!(game.grid().get(3, 3).unwrap(), 0);
    }

    #[test]
    fn test_load_pattern_keeps_scheduler_state() {
        let mut game = controller(4, 4);
        game.toggle_playing(0);
        let block = Pattern::new(vec![vec![1, 1], vec![1, 1]]).unwrap();
        game.load_pattern(&block).unwrap();
        assert!(game.is_playing());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut game = controller(4, 4);
        for &(x, y) in &[(0, 0), (2, 1), (3, 3), (1, 2)] {
            game.paint(x, y).unwrap();
        }

        let saved = game.save_pattern();
        game.reset();
        game.load_pattern(&saved).unwrap();

        assert_eq!(game.save_pattern(), saved);
    }
}
