//=========================================================================
// Buffer Window
//=========================================================================
//
// Countdown suppressing containment checks for a short interval after
// resuming from pause or teleporting. While the window is active, a
// boundary violation is never latched directly; the window's expiry is
// one of the suppression-cleared hooks that re-evaluates a deferred
// violation.
//
// The window is decremented once per tick, and only while the game is
// running (the orchestrator guards this; the window itself is agnostic).
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;

//=== BufferWindow ========================================================

/// Check-suppression countdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferWindow {
    remaining: f32,
}

impl BufferWindow {
    /// Creates an inactive window.
    pub fn new() -> Self {
        Self { remaining: 0.0 }
    }

    /// Returns true while time remains on the window.
    #[inline]
    pub fn active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Seconds left until expiry.
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Starts (or restarts) the window at `duration` seconds.
    ///
    /// A non-positive duration leaves the window inactive.
    pub fn start(&mut self, duration: f32) {
        if duration <= 0.0 {
            debug!("buffer window start skipped: duration {} not positive", duration);
            self.remaining = 0.0;
            return;
        }
        self.remaining = duration;
        debug!("buffer window started: {}s", duration);
    }

    /// Clears the window without an expiry event.
    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    /// Advances the countdown.
    ///
    /// Returns `true` exactly on the tick where the window expires, so the
    /// orchestrator can run the suppression-cleared re-evaluation once.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }

        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            debug!("buffer window expired");
            return true;
        }
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
