//=========================================================================
// Input Commands
//=========================================================================
//
// Discrete commands consumed by the containment core.
//
// The core never polls devices. Whatever platform layer the game uses
// translates raw input and physics callbacks into these commands and
// queues them on the core (directly, or over the runtime channel). They
// are applied at the next tick in the pipeline's fixed order: pause and
// position reports first, then pointer, slider, collision, and service
// requests.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::collision::CollisionEvent;
use super::geometry::Vec2;
use super::region::Axis;

//=== InputCommand ========================================================

/// A single externally produced command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    /// Flip the pause state.
    PauseToggle,

    /// Set the pause state directly (debug/administrative path).
    ForcePause(bool),

    /// Pointer pressed at a world position; may begin a drag session.
    PointerDown(Vec2),

    /// Pointer moved; advances an active drag session.
    PointerMoved(Vec2),

    /// Pointer released; ends an active drag session.
    PointerUp,

    /// A UI slider changed one region half-extent.
    SliderChanged(Axis, f32),

    /// Request a teleport of the entity to the region center.
    TeleportRequested,

    /// Request a full restart of the run.
    RestartRequested,

    /// Position report for the externally owned entity transform.
    EntityAt(Vec2),

    /// A contact report from the external collision layer.
    Collision(CollisionEvent),
}

impl InputCommand {
    /// Returns true for commands applied in the pipeline's first phase
    /// (pause transitions and position reports), ahead of the buffer
    /// countdown and all edit/service commands.
    pub(crate) fn is_priority(&self) -> bool {
        matches!(
            self,
            InputCommand::PauseToggle | InputCommand::ForcePause(_) | InputCommand::EntityAt(_)
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
