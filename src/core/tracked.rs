//=========================================================================
// Tracked Entity Mirror
//=========================================================================
//
// The entity's transform is owned by the external physics layer. The core
// keeps a mirror of its position, updated by position-report commands,
// and writes it back only through the teleport service and the platform
// coupler's pause-hold. Core-initiated writes are accompanied by an
// `EntityRelocated` notification so the owner can apply them.
//
// The mirror starts unbound; containment evaluation is skipped (never
// treated as a violation) until the first report arrives.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::geometry::Vec2;

//=== TrackedEntity =======================================================

/// Position mirror for the externally owned entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackedEntity {
    position: Option<Vec2>,
}

impl TrackedEntity {
    /// Creates an unbound mirror.
    pub fn new() -> Self {
        Self { position: None }
    }

    /// Last known position, if any report has arrived.
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Returns true once a position has been reported.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.position.is_some()
    }

    /// Records a position, from an external report or a core write.
    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = Some(position);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
