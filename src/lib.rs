//=========================================================================
// Containment Engine — Library Root
//
// This crate defines the public API surface of the containment engine:
// a pause-aware boundary-validation state machine for games where the
// player must stay inside an editable containment region.
//
// Responsibilities:
// - Expose the containment core (`GameCore`) and its component modules
// - Expose the threaded runtime front end (`Runtime`)
// - Provide a prelude for the common types
//
// Typical usage:
// ```no_run
// use containment_engine::prelude::*;
//
// fn main() {
//     let mut core = GameCore::new(
//         CoreConfig::default(),
//         AabbQuery,
//         Vec2::ZERO,
//         Vec2::new(3.0, 3.0),
//     );
//     core.push_command(InputCommand::EntityAt(Vec2::new(1.0, 1.0)));
//     core.tick(1.0 / 60.0);
//     for note in core.drain_notifications() {
//         println!("{:?}", note);
//     }
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the full state machine (region, checker, drag editor,
// latch, pause controller, ...). It is exposed publicly so hosts can
// embed `GameCore` directly and drive ticks themselves.
//
// `engine` provides the optional threaded runtime around the core.
//
pub mod core;
pub mod engine;

//--- Prelude -------------------------------------------------------------

pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the two entry points so users can `use
// containment_engine::{GameCore, RuntimeBuilder};` without knowing the
// internal module structure.
//
pub use crate::core::GameCore;
pub use crate::engine::{Runtime, RuntimeBuilder, RuntimeHandle};
