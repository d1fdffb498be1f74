//=========================================================================
// Platform Coupler
//=========================================================================
//
// Explicit ownership transfer for "moving platform carries the player".
//
// Instead of an implicit scene-graph parent/child side effect, the
// coupling is a small state machine driven by collision events and the
// pause transitions:
//
//     Detached ──player enters platform (running)──> Attached
//     Attached ──pause──> Held (position saved, coupling released)
//     Held ──resume, still overlapping──> Attached
//     Held ──resume, moved apart───────> Detached
//     any ──player exits platform──> Detached
//
// While Held, every paused tick forces the entity back to the saved
// position, so a platform that keeps animating during the pause cannot
// drag the player along. Attaching while paused is refused outright.
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::geometry::{Bounds, GeometryQuery, Vec2};
use super::notify::{Notification, NotificationQueue};
use super::tracked::TrackedEntity;

//=== CouplingState =======================================================

/// Attachment state between the tracked entity and a moving platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CouplingState {
    /// No platform relationship.
    Detached,

    /// The platform carries the entity.
    Attached { platform: u32, bounds: Bounds },

    /// Pause hold: coupling released, position pinned until resume.
    Held {
        platform: u32,
        bounds: Bounds,
        saved: Vec2,
    },
}

//=== PlatformCoupler =====================================================

/// Pause-aware platform attachment manager.
#[derive(Debug, Clone, Copy)]
pub struct PlatformCoupler {
    state: CouplingState,
}

impl PlatformCoupler {
    /// Creates a detached coupler.
    pub fn new() -> Self {
        Self {
            state: CouplingState::Detached,
        }
    }

    /// Current coupling state.
    #[inline]
    pub fn state(&self) -> CouplingState {
        self.state
    }

    /// Returns true while a platform carries the entity.
    #[inline]
    pub fn is_attached(&self) -> bool {
        matches!(self.state, CouplingState::Attached { .. })
    }

    //--- Collision-driven transitions -------------------------------------

    /// Attaches the entity to a platform.
    ///
    /// Refused while paused: the relationship is only established under
    /// live simulation. Returns whether the attach took effect.
    pub fn attach(&mut self, platform: u32, bounds: Bounds, paused: bool) -> bool {
        if paused {
            debug!("attach to platform {} refused: game is paused", platform);
            return false;
        }

        debug!("entity attached to platform {}", platform);
        self.state = CouplingState::Attached { platform, bounds };
        true
    }

    /// Drops any platform relationship, including a pause hold.
    pub fn detach(&mut self) {
        if self.state != CouplingState::Detached {
            debug!("entity detached from platform");
        }
        self.state = CouplingState::Detached;
    }

    //--- Pause transitions ------------------------------------------------

    /// Running→Paused hook: saves the entity position and releases the
    /// coupling. Without a bound position there is nothing to pin, so the
    /// coupling simply drops.
    pub fn hold(&mut self, entity: &TrackedEntity) {
        let CouplingState::Attached { platform, bounds } = self.state else {
            return;
        };

        match entity.position() {
            Some(saved) => {
                debug!("pause hold: entity pinned at {:?}", saved);
                self.state = CouplingState::Held {
                    platform,
                    bounds,
                    saved,
                };
            }
            None => {
                debug!("pause hold skipped: no tracked entity bound");
                self.state = CouplingState::Detached;
            }
        }
    }

    /// Paused-tick hook: forces the entity back to the saved position.
    ///
    /// Publishes the write only when the position actually drifted, so a
    /// quiet pause does not flood observers.
    pub fn enforce_hold(&mut self, entity: &mut TrackedEntity, notifications: &mut NotificationQueue) {
        let CouplingState::Held { saved, .. } = self.state else {
            return;
        };

        if entity.position() != Some(saved) {
            entity.set_position(saved);
            notifications.push(Notification::EntityRelocated(saved));
        }
    }

    /// Paused→Running hook: reattaches if the entity still overlaps the
    /// saved platform bounds, otherwise detaches.
    pub fn release(&mut self, entity: &TrackedEntity, query: &dyn GeometryQuery) {
        let CouplingState::Held {
            platform, bounds, ..
        } = self.state
        else {
            return;
        };

        let still_overlapping = entity
            .position()
            .is_some_and(|p| query.intersects(&bounds, &Bounds::point(p)));

        if still_overlapping {
            debug!("resume: entity reattached to platform {}", platform);
            self.state = CouplingState::Attached { platform, bounds };
        } else {
            debug!("resume: entity left platform {}, detaching", platform);
            self.state = CouplingState::Detached;
        }
    }
}

impl Default for PlatformCoupler {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
