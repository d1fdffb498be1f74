//=========================================================================
// Game-Over Latch
//=========================================================================
//
// Terminal one-shot flag with deferred re-evaluation.
//
//     Active ──trigger, suppressed──> PendingDeath
//     Active ──trigger, clean──────────────────────> Over (terminal)
//     PendingDeath ──suppression cleared, still outside──> Over
//     PendingDeath ──suppression cleared, back inside────> Active
//
// A violation raised while any suppression source holds (paused, drag
// session, buffer window) is deferred, not discarded. When the last
// suppression source clears, the containment test is re-run before the
// latch commits: a transient fix during the suppressed window (say, a
// resize that brought the entity back inside) cancels the pending death.
//
// `Over` is sticky. The only way out is the explicit full reset that a
// restart performs.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::notify::{Notification, NotificationQueue};

//=== Suppression =========================================================

/// Snapshot of the three violation-suppression sources.
///
/// Built by the orchestrator at the moment of each trigger or
/// re-evaluation, so state transitions earlier in the same tick are
/// always reflected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Suppression {
    pub paused: bool,
    pub dragging: bool,
    pub buffered: bool,
}

impl Suppression {
    /// Returns true if any suppression source holds.
    #[inline]
    pub fn any(self) -> bool {
        self.paused || self.dragging || self.buffered
    }
}

//=== GameOverState =======================================================

/// Lifecycle state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverState {
    /// The run is live.
    Active,

    /// A violation occurred under suppression and awaits re-evaluation.
    PendingDeath,

    /// Terminal. Only a full reset leaves this state.
    Over,
}

//=== GameOverLatch =======================================================

/// Idempotent terminal latch for the run.
#[derive(Debug, Clone, Copy)]
pub struct GameOverLatch {
    state: GameOverState,
}

impl GameOverLatch {
    /// Creates a latch for a live run.
    pub fn new() -> Self {
        Self {
            state: GameOverState::Active,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> GameOverState {
        self.state
    }

    /// Returns true once the terminal state has been reached.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.state == GameOverState::Over
    }

    //--- trigger() --------------------------------------------------------

    /// Records a boundary violation.
    ///
    /// Already `Over`: idempotent no-op, no extra notification. Under any
    /// suppression: the violation is deferred as `PendingDeath`. Otherwise
    /// the latch commits to `Over` and emits the one-shot game-over
    /// notification.
    pub fn trigger(&mut self, suppression: Suppression, notifications: &mut NotificationQueue) {
        if self.state == GameOverState::Over {
            debug!("violation ignored: already over");
            return;
        }

        if suppression.any() {
            debug!("violation deferred under {:?}", suppression);
            self.state = GameOverState::PendingDeath;
            return;
        }

        info!("game over latched");
        self.state = GameOverState::Over;
        notifications.push(Notification::GameOver);
    }

    //--- reevaluate_on_suppression_cleared() ------------------------------

    /// Resolves a deferred violation.
    ///
    /// Called exactly when a suppression source transitions to false.
    /// Acts only on `PendingDeath` with no remaining suppression: the
    /// caller re-runs the containment test and passes `still_outside`,
    /// which decides between committing to `Over` and returning to
    /// `Active`.
    pub fn reevaluate_on_suppression_cleared(
        &mut self,
        still_outside: bool,
        suppression: Suppression,
        notifications: &mut NotificationQueue,
    ) {
        if self.state != GameOverState::PendingDeath || suppression.any() {
            return;
        }

        if still_outside {
            info!("pending death confirmed: game over latched");
            self.state = GameOverState::Over;
            notifications.push(Notification::GameOver);
        } else {
            info!("pending death cancelled: entity back inside region");
            self.state = GameOverState::Active;
        }
    }

    //--- Recovery ---------------------------------------------------------

    /// Drops a deferred violation without re-evaluation.
    ///
    /// Teleport hook: a teleport produces a fresh trusted position that
    /// must not inherit a stale violation recorded before the move.
    pub fn clear_pending(&mut self) {
        if self.state == GameOverState::PendingDeath {
            debug!("pending death cleared");
            self.state = GameOverState::Active;
        }
    }

    /// Full reset back to a live run. The only path out of `Over`.
    pub fn reset(&mut self) {
        self.state = GameOverState::Active;
    }
}

impl Default for GameOverLatch {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
