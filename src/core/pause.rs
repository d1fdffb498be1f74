//=========================================================================
// Pause Controller
//=========================================================================
//
// Single authority for the Running/Paused transition.
//
// Pausing is what makes region editing safe: every drag and resize is
// gated on the paused state, and the pause transition is the one place
// that silences the boundary checker, so no geometry mutation can ever
// race with an active containment check.
//
// Transition effects:
//
//   Running -> Paused:  checker idle, platform coupling held, region
//                       editable, observers notified
//   Paused  -> Running: buffer window started, any drag force-ended,
//                       checker re-armed from the full delay, coupling
//                       released, observers notified
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::buffer::BufferWindow;
use super::carrier::PlatformCoupler;
use super::checker::BoundaryChecker;
use super::config::CoreConfig;
use super::drag::DragEditor;
use super::geometry::GeometryQuery;
use super::latch::{GameOverLatch, Suppression};
use super::notify::{Notification, NotificationQueue};
use super::region::Region;
use super::tracked::TrackedEntity;

//=== PauseState ==========================================================

/// Top-level simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseState {
    Running,
    Paused,
}

//=== PauseDeps ===========================================================

/// Split borrows of the systems a pause transition drives.
///
/// Built by the orchestrator from its own fields; keeps the transition
/// logic here without the controller owning its collaborators.
pub(crate) struct PauseDeps<'a> {
    pub buffer: &'a mut BufferWindow,
    pub drag: &'a mut DragEditor,
    pub checker: &'a mut BoundaryChecker,
    pub latch: &'a mut GameOverLatch,
    pub coupler: &'a mut PlatformCoupler,
    pub entity: &'a mut TrackedEntity,
    pub region: &'a Region,
    pub query: &'a dyn GeometryQuery,
    pub notifications: &'a mut NotificationQueue,
}

//=== PauseController =====================================================

/// Owner of [`PauseState`] and its transitions.
#[derive(Debug, Clone, Copy)]
pub struct PauseController {
    state: PauseState,
    resume_buffer: f32,
    check_delay: f32,
}

impl PauseController {
    //--- Construction -----------------------------------------------------

    /// Creates a controller in the running state.
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            state: PauseState::Running,
            resume_buffer: config.resume_buffer,
            check_delay: config.check_delay,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> PauseState {
        self.state
    }

    /// Returns true while paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state == PauseState::Paused
    }

    //--- toggle() ---------------------------------------------------------

    /// Flips the pause state.
    ///
    /// Refused once the run is over; the terminal state freezes gameplay
    /// transitions entirely.
    pub(crate) fn toggle(&mut self, deps: PauseDeps<'_>) {
        if deps.latch.is_over() {
            debug!("pause toggle ignored: run is over");
            return;
        }

        match self.state {
            PauseState::Running => self.enter_paused(deps),
            PauseState::Paused => self.enter_running(deps),
        }
    }

    //--- force_set() ------------------------------------------------------

    /// Sets the pause state directly, bypassing the toggle.
    ///
    /// Same transition semantics; additionally clears any drag session
    /// when forcing a pause. Setting the current state again is a no-op.
    pub(crate) fn force_set(&mut self, paused: bool, deps: PauseDeps<'_>) {
        if deps.latch.is_over() {
            debug!("force pause ignored: run is over");
            return;
        }

        let target = if paused {
            PauseState::Paused
        } else {
            PauseState::Running
        };
        if self.state == target {
            debug!("force pause ignored: already {:?}", target);
            return;
        }

        if paused {
            // Administrative path: clear any session before freezing
            deps.drag.force_end();
            self.enter_paused(deps);
        } else {
            self.enter_running(deps);
        }
    }

    /// Resets to running without transition effects. Restart only.
    pub(crate) fn reset(&mut self) {
        self.state = PauseState::Running;
    }

    //--- Transitions ------------------------------------------------------

    fn enter_paused(&mut self, deps: PauseDeps<'_>) {
        info!("game paused");
        self.state = PauseState::Paused;

        deps.checker.disable();
        deps.coupler.hold(deps.entity);
        deps.notifications.push(Notification::Paused(true));
    }

    fn enter_running(&mut self, deps: PauseDeps<'_>) {
        info!("game resumed");
        self.state = PauseState::Running;

        deps.drag.force_end();
        deps.buffer.start(self.resume_buffer);
        deps.checker.enable(self.check_delay);
        deps.coupler.release(deps.entity, deps.query);
        deps.notifications.push(Notification::Paused(false));

        // The pause suppression source just cleared. With the fresh
        // buffer active this resolves nothing yet; the buffer's expiry
        // hook performs the deciding re-evaluation.
        let suppression = Suppression {
            paused: false,
            dragging: deps.drag.is_active(),
            buffered: deps.buffer.active(),
        };
        let still_outside = match deps.entity.position() {
            Some(p) => !deps.query.contains(&deps.region.bounds(), p),
            None => false,
        };
        deps.latch
            .reevaluate_on_suppression_cleared(still_outside, suppression, deps.notifications);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
