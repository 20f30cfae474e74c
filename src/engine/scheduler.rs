//! Frame-paced play/pause scheduler.
//!
//! The scheduler is a state machine driven from outside: a host-provided
//! repeating-callback primitive (a display-frame hook, a timer) delivers
//! ticks, and the scheduler decides on each tick whether a generation
//! advance is due. Polling every tick but stepping only when the frame
//! interval has elapsed decouples the generation rate from the host's
//! native callback cadence.

use log::debug;

/// Opaque handle to an outstanding armed tick.
pub type TickHandle = u64;

/// Host repeating-callback primitive.
///
/// Production drivers wrap a real timer or per-frame hook; tests use
/// [`ManualDriver`] and deliver ticks with direct synchronous calls.
pub trait TickDriver {
    /// Arm one upcoming tick and return a handle for cancellation.
    fn arm(&mut self) -> TickHandle;
    /// Cancel a previously armed tick so it never fires. Disarming a
    /// handle that has already fired or was never armed must be a no-op.
    fn disarm(&mut self, handle: TickHandle);
}

/// What the scheduler decided about a delivered tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Scheduler is idle; the tick was stale and ignored.
    Ignored,
    /// Running, but the frame interval has not elapsed yet. Re-armed.
    Waiting,
    /// Frame interval elapsed: exactly one generation advance is due. Re-armed.
    Step,
}

/// Play/pause state machine pacing generation advances.
///
/// Invariant: a tick is armed with the driver iff the scheduler is running.
pub struct FrameScheduler<D: TickDriver> {
    driver: D,
    frame_interval_ms: u64,
    last_step_ms: u64,
    pending: Option<TickHandle>,
}

impl<D: TickDriver> FrameScheduler<D> {
    pub fn new(driver: D, frame_interval_ms: u64) -> Self {
        debug_assert!(frame_interval_ms > 0);
        Self {
            driver,
            frame_interval_ms,
            last_step_ms: 0,
            pending: None,
        }
    }

    /// Minimum elapsed time between two generation advances.
    #[inline]
    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Transition to running. No-op if already running.
    pub fn start(&mut self, now_ms: u64) {
        if self.pending.is_some() {
            return;
        }
        debug!("scheduler start at {now_ms}ms");
        self.last_step_ms = now_ms;
        self.pending = Some(self.driver.arm());
    }

    /// Transition to idle, disarming the pending tick. No-op if already idle.
    ///
    /// After this returns no further tick can produce a step until
    /// [`start`](Self::start) is called again.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("scheduler cancel");
            self.driver.disarm(handle);
        }
    }

    /// Cancel if running, start otherwise.
    pub fn toggle(&mut self, now_ms: u64) {
        if self.is_running() {
            self.cancel();
        } else {
            self.start(now_ms);
        }
    }

    /// Handle one tick delivered by the driver at timestamp `now_ms`.
    ///
    /// The outgoing handle is disarmed before the next tick is armed, so
    /// even a spurious call (a tick the driver never fired) cannot leave
    /// two ticks armed at once.
    pub fn on_tick(&mut self, now_ms: u64) -> TickOutcome {
        let Some(fired) = self.pending.take() else {
            return TickOutcome::Ignored;
        };
        self.driver.disarm(fired);

        let due = now_ms.saturating_sub(self.last_step_ms) >= self.frame_interval_ms;
        if due {
            self.last_step_ms = now_ms;
        }

        self.pending = Some(self.driver.arm());

        if due {
            TickOutcome::Step
        } else {
            TickOutcome::Waiting
        }
    }

    /// Driver access, mainly for tests and host glue.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

/// Tick driver with no timer behind it.
///
/// Arms are recorded; the owner delivers ticks by calling
/// [`FrameScheduler::on_tick`] directly with an explicit clock. Used by
/// the CLI loop and throughout the tests.
#[derive(Debug, Default)]
pub struct ManualDriver {
    next_handle: TickHandle,
    armed: Vec<TickHandle>,
    arm_count: usize,
    disarm_count: usize,
}

impl ManualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles currently armed and not yet fired or disarmed.
    pub fn outstanding(&self) -> usize {
        self.armed.len()
    }

    /// Total arms ever requested.
    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    /// Total disarms ever requested.
    pub fn disarm_count(&self) -> usize {
        self.disarm_count
    }

    /// Mark the oldest armed tick as fired (the driver's side of delivery).
    pub fn fire(&mut self) -> Option<TickHandle> {
        if self.armed.is_empty() {
            None
        } else {
            Some(self.armed.remove(0))
        }
    }
}

impl TickDriver for ManualDriver {
    fn arm(&mut self) -> TickHandle {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.arm_count += 1;
        self.armed.push(handle);
        handle
    }

    fn disarm(&mut self, handle: TickHandle) {
        self.disarm_count += 1;
        self.armed.retain(|&h| h != handle);
    }
}
