//! Typed event subscription and render notifications.
//!
//! Event kinds are a closed enum rather than string keys, so dispatch is
//! exhaustive and a typo cannot create a silent dead channel. Handlers
//! run synchronously in registration order.

use super::grid::CellGrid;

/// Closed set of subscribable event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PlayingChanged,
    Reset,
}

/// Event payloads delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PlayingChanged { playing: bool },
    Reset,
}

impl GameEvent {
    fn kind(&self) -> EventKind {
        match self {
            GameEvent::PlayingChanged { .. } => EventKind::PlayingChanged,
            GameEvent::Reset => EventKind::Reset,
        }
    }
}

type EventHandler = Box<dyn FnMut(&GameEvent)>;

/// Per-kind ordered subscriber lists.
#[derive(Default)]
pub struct EventBus {
    playing_changed: Vec<EventHandler>,
    reset: Vec<EventHandler>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: impl FnMut(&GameEvent) + 'static) {
        let list = match kind {
            EventKind::PlayingChanged => &mut self.playing_changed,
            EventKind::Reset => &mut self.reset,
        };
        list.push(Box::new(handler));
    }

    pub fn emit(&mut self, event: GameEvent) {
        let list = match event.kind() {
            EventKind::PlayingChanged => &mut self.playing_changed,
            EventKind::Reset => &mut self.reset,
        };
        for handler in list.iter_mut() {
            handler(&event);
        }
    }
}

/// Render-side notifications consumed by an external drawing layer.
pub trait RenderObserver {
    /// Called once per changed cell during a generation advance, with the
    /// outgoing and incoming grids.
    fn cell_advanced(&mut self, x: usize, y: usize, old: &CellGrid, new: &CellGrid);

    /// Called after a bulk change (paint stroke end, pattern load, reset)
    /// that replaced or rewrote the grid wholesale.
    fn grid_replaced(&mut self, grid: &CellGrid);
}
