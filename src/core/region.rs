//=========================================================================
// Containment Region
//=========================================================================
//
// Mutable containment geometry: a center and per-axis half-extents with
// hard clamp bounds.
//
// The region is the one piece of shared state in the core. Its sole
// writers are the drag editor and the slider-resize path, both of which
// are gated on the paused state by the orchestrator; the boundary checker
// only ever reads it. Clamping happens on every write so no transient
// out-of-range geometry can be observed by the checker or by renderers.
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::config::CoreConfig;
use super::geometry::{Bounds, Vec2};

//=== Axis ================================================================

/// Region axis selector, used by slider-driven resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

//=== Region ==============================================================

/// The axis-aligned containment zone the tracked entity must stay within.
///
/// Captures its initial center and extents at construction; [`Region::reset`]
/// restores them (used only by full restart).
///
/// Invariant: after any mutation, both half-extents lie within
/// `[min_extent, max_extent]`. Center translation is unclamped.
#[derive(Debug, Clone)]
pub struct Region {
    center: Vec2,
    extents: Vec2,
    min_extent: f32,
    max_extent: f32,
    initial_center: Vec2,
    initial_extents: Vec2,
}

impl Region {
    //--- Construction -----------------------------------------------------

    /// Creates a region at `center` with the requested half-extents.
    ///
    /// Extents are clamped to the configured bounds immediately, so the
    /// invariant holds from the first observable state onward.
    pub fn new(center: Vec2, extents: Vec2, config: &CoreConfig) -> Self {
        let clamped = Vec2::new(
            extents.x.clamp(config.min_extent, config.max_extent),
            extents.y.clamp(config.min_extent, config.max_extent),
        );

        if clamped != extents {
            debug!(
                "initial region extents {:?} clamped to {:?}",
                extents, clamped
            );
        }

        Self {
            center,
            extents: clamped,
            min_extent: config.min_extent,
            max_extent: config.max_extent,
            initial_center: center,
            initial_extents: clamped,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Current center.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Current half-extents.
    #[inline]
    pub fn extents(&self) -> Vec2 {
        self.extents
    }

    /// The region as plain bounds, for geometry queries.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.center, self.extents)
    }

    //--- Mutation (paused-only by orchestrator discipline) ----------------

    /// Moves the center by a delta. Returns whether anything changed.
    pub fn translate(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        self.center += delta;
        true
    }

    /// Sets one half-extent axis, clamped to the configured bounds.
    ///
    /// Out-of-range values are silently clamped, never rejected. Returns
    /// whether the stored extent actually changed.
    pub fn set_extent(&mut self, axis: Axis, value: f32) -> bool {
        let clamped = value.clamp(self.min_extent, self.max_extent);
        if clamped != value {
            debug!(
                "extent request {} on {:?} clamped to {}",
                value, axis, clamped
            );
        }

        let slot = match axis {
            Axis::X => &mut self.extents.x,
            Axis::Y => &mut self.extents.y,
        };

        if *slot == clamped {
            return false;
        }
        *slot = clamped;
        true
    }

    /// Sets both half-extents, each axis clamped independently.
    pub fn set_extents(&mut self, extents: Vec2) -> bool {
        let x = self.set_extent(Axis::X, extents.x);
        let y = self.set_extent(Axis::Y, extents.y);
        x || y
    }

    /// Restores the captured initial center and extents.
    pub fn reset(&mut self) {
        self.center = self.initial_center;
        self.extents = self.initial_extents;
        debug!(
            "region reset to center {:?}, extents {:?}",
            self.center, self.extents
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
