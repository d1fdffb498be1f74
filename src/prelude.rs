//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use containment_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Containment core and runtime
pub use crate::core::GameCore;
pub use crate::engine::{CoreEvent, Runtime, RuntimeBuilder, RuntimeHandle};

// Configuration and geometry
pub use crate::core::config::CoreConfig;
pub use crate::core::geometry::{AabbQuery, Bounds, GeometryQuery, Vec2};

// Commands and notifications
pub use crate::core::input::InputCommand;
pub use crate::core::notify::Notification;

// Collision routing
pub use crate::core::collision::{
    BodyKind, CollisionEvent, CollisionResponse, ContactPhase, ZoneKind,
};

// Component states
pub use crate::core::carrier::CouplingState;
pub use crate::core::checker::CheckerState;
pub use crate::core::latch::GameOverState;
pub use crate::core::pause::PauseState;
pub use crate::core::region::Axis;
pub use crate::core::teleport::TeleportOutcome;
