//=========================================================================
// Notifications
//=========================================================================
//
// Outbound events produced by the containment core.
//
// Components push notifications here during a tick; the orchestrator
// drains the queue at the tick boundary and hands the events to external
// observers (UI, rendering, scene reload). The core never calls into
// observers directly.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::geometry::Vec2;

//=== Notification ========================================================

/// One-way event published to external observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// Pause state changed. Carries the new paused flag.
    Paused(bool),

    /// The game-over latch transitioned to its terminal state.
    ///
    /// Emitted exactly once per run; a restart is required before it can
    /// ever be emitted again.
    GameOver,

    /// The containment region was moved or resized.
    RegionChanged { center: Vec2, extents: Vec2 },

    /// The core wrote the tracked entity's position (teleport or platform
    /// pause-hold). The owning physics layer should apply this transform.
    EntityRelocated(Vec2),

    /// A full restart completed internally; the external level-reload
    /// capability should now run.
    RestartRequested,
}

//=== NotificationQueue ===================================================

/// Queue of notifications produced during the current tick.
///
/// Drained by the orchestrator at tick boundaries.
pub struct NotificationQueue {
    queue: Vec<Notification>,
}

impl NotificationQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a notification for the current tick.
    pub fn push(&mut self, notification: Notification) {
        self.queue.push(notification);
    }

    /// Returns an iterator over the queued notifications.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued notifications.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all notifications, leaving the queue empty.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queue)
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
