//=========================================================================
// Boundary Checker
//=========================================================================
//
// State machine governing when the periodic containment evaluation runs.
//
//     Idle ──enable(delay)──> Scheduled ──delay elapsed──> Active
//       ^                         │                           │
//       └───────── disable() ─────┴───────────────────────────┘
//
// `disable` returns to Idle from any state and discards the pending
// delay; re-arming always starts from a full delay, never a partial one.
// Pausing the game and beginning a drag session both disable the checker,
// so no evaluation can ever race with a geometry edit.
//
// The checker decides *when* to evaluate; the orchestrator performs the
// evaluation itself, because evaluation needs the region, the entity
// mirror, the geometry query, and the suppression snapshot.
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;

//=== CheckerState ========================================================

/// Scheduling state of the boundary checker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckerState {
    /// No evaluations run.
    Idle,

    /// Counting down to the first evaluation.
    Scheduled { delay: f32 },

    /// Evaluating every tick.
    Active,
}

//=== BoundaryChecker =====================================================

/// Periodic containment-evaluation scheduler.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryChecker {
    state: CheckerState,
}

impl BoundaryChecker {
    /// Creates an idle checker.
    pub fn new() -> Self {
        Self {
            state: CheckerState::Idle,
        }
    }

    /// Current scheduling state.
    #[inline]
    pub fn state(&self) -> CheckerState {
        self.state
    }

    /// Arms the checker.
    ///
    /// A non-positive delay goes straight to `Active`; otherwise the first
    /// evaluation runs once `delay` seconds have accumulated.
    pub fn enable(&mut self, delay: f32) {
        self.state = if delay <= 0.0 {
            debug!("boundary checker active immediately");
            CheckerState::Active
        } else {
            debug!("boundary checker scheduled in {}s", delay);
            CheckerState::Scheduled { delay }
        };
    }

    /// Returns to `Idle` from any state, discarding any pending delay.
    pub fn disable(&mut self) {
        if self.state != CheckerState::Idle {
            debug!("boundary checker disabled");
        }
        self.state = CheckerState::Idle;
    }

    /// Advances the schedule.
    ///
    /// Returns `true` when a containment evaluation is due this tick:
    /// every tick while `Active`, and once on the tick where a scheduled
    /// delay elapses (which also transitions to `Active`).
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.state {
            CheckerState::Idle => false,
            CheckerState::Active => true,
            CheckerState::Scheduled { delay } => {
                let remaining = delay - dt;
                if remaining <= 0.0 {
                    debug!("boundary checker activated");
                    self.state = CheckerState::Active;
                    true
                } else {
                    self.state = CheckerState::Scheduled { delay: remaining };
                    false
                }
            }
        }
    }
}

impl Default for BoundaryChecker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
