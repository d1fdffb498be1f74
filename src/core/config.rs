//=========================================================================
// Core Configuration
//=========================================================================
//
// Load-time scalar configuration for the containment core.
//
// Values are supplied once by an external config/inspector layer and are
// treated as immutable for the lifetime of a session. Validation happens
// at construction; a misconfigured session is a programming error, not a
// runtime condition to absorb.
//
//=========================================================================

//=== CoreConfig ==========================================================

/// Immutable session configuration.
///
/// # Fields
///
/// - `min_extent` / `max_extent`: per-axis clamp bounds for the region's
///   half-extents. Every resize lands inside `[min_extent, max_extent]`.
/// - `resume_buffer`: seconds of containment-check suppression after
///   resuming from pause or teleporting.
/// - `check_delay`: seconds between arming the boundary checker and its
///   first evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreConfig {
    pub min_extent: f32,
    pub max_extent: f32,
    pub resume_buffer: f32,
    pub check_delay: f32,
}

impl CoreConfig {
    /// Creates a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if `min_extent` is not positive, `max_extent < min_extent`,
    /// `resume_buffer` is not positive, or `check_delay` is negative.
    pub fn new(min_extent: f32, max_extent: f32, resume_buffer: f32, check_delay: f32) -> Self {
        assert!(
            min_extent > 0.0,
            "min_extent must be positive, got {}",
            min_extent
        );
        assert!(
            max_extent >= min_extent,
            "max_extent ({}) must be >= min_extent ({})",
            max_extent,
            min_extent
        );
        assert!(
            resume_buffer > 0.0,
            "resume_buffer must be positive, got {}",
            resume_buffer
        );
        assert!(
            check_delay >= 0.0,
            "check_delay must be non-negative, got {}",
            check_delay
        );

        Self {
            min_extent,
            max_extent,
            resume_buffer,
            check_delay,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            min_extent: 1.0,
            max_extent: 10.0,
            resume_buffer: 2.0,
            check_delay: 0.5,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
