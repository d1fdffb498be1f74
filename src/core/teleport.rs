//=========================================================================
// Teleport Service
//=========================================================================
//
// Relocates the tracked entity to the region's center as a recovery
// mechanic (flag-touch in the original game).
//
// A teleport is defined as producing a fresh, trusted position: any
// stale buffer window is cleared and a new one started, and a deferred
// violation recorded before the move is dropped rather than re-evaluated
// against the new position.
//
// Preconditions are absorbed, not propagated: a teleport requested while
// paused, dragging, terminal, or before the entity is bound is a logged
// no-op. The outcome enum exists for diagnostics and tests.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::buffer::BufferWindow;
use super::latch::GameOverLatch;
use super::notify::{Notification, NotificationQueue};
use super::region::Region;
use super::tracked::TrackedEntity;

//=== TeleportOutcome =====================================================

/// Result of a teleport request. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeleportOutcome {
    /// The entity was relocated to the region center.
    Done,

    /// Skipped: the game is paused.
    SkippedPaused,

    /// Skipped: the run is already over.
    SkippedGameOver,

    /// Skipped: a drag session is active.
    SkippedDragging,

    /// Skipped: no entity position has been reported yet.
    SkippedUnbound,
}

//=== TeleportService =====================================================

/// Entity relocation with suppression-state reset.
#[derive(Debug, Clone, Copy)]
pub struct TeleportService {
    resume_buffer: f32,
}

impl TeleportService {
    /// Creates a service using the session's buffer duration.
    pub fn new(resume_buffer: f32) -> Self {
        Self { resume_buffer }
    }

    //--- teleport_to_center() ---------------------------------------------

    /// Moves the entity to the region center if all preconditions hold.
    ///
    /// On success the write is published as `EntityRelocated`, the buffer
    /// window restarts fresh, and any pending death is dropped. Given a
    /// non-degenerate region, containment holds immediately afterward.
    pub fn teleport_to_center(
        &self,
        paused: bool,
        dragging: bool,
        region: &Region,
        entity: &mut TrackedEntity,
        buffer: &mut BufferWindow,
        latch: &mut GameOverLatch,
        notifications: &mut NotificationQueue,
    ) -> TeleportOutcome {
        if latch.is_over() {
            debug!("teleport skipped: run is over");
            return TeleportOutcome::SkippedGameOver;
        }
        if paused {
            debug!("teleport skipped: game is paused");
            return TeleportOutcome::SkippedPaused;
        }
        if dragging {
            debug!("teleport skipped: drag session active");
            return TeleportOutcome::SkippedDragging;
        }
        if !entity.is_bound() {
            warn!("teleport skipped: no tracked entity bound");
            return TeleportOutcome::SkippedUnbound;
        }

        let target = region.center();
        entity.set_position(target);
        notifications.push(Notification::EntityRelocated(target));

        // Fresh trusted position: drop stale suppression state, then open
        // a new window covering the settle after the move.
        buffer.clear();
        buffer.start(self.resume_buffer);
        latch.clear_pending();

        info!("entity teleported to region center {:?}", target);
        TeleportOutcome::Done
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
