//=========================================================================
// Collision Intake & Routing Table
//=========================================================================
//
// Single entry point for collision events reported by the external
// physics layer, dispatched through an explicit table keyed by
// (body kind, zone kind, contact phase).
//
// The table replaces per-object trigger callbacks: every reaction the
// core has to a contact is a named response looked up here, and a game
// can rebind entries without touching the orchestrator. Unrouted
// combinations fall through to `Ignore`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::geometry::Bounds;

//=== Event Vocabulary ====================================================

/// Contact lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactPhase {
    Enter,
    Stay,
    Exit,
}

/// Kind of moving body the contact involves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// The tracked player entity.
    Player,

    /// The containment region itself, moving as a body during edits.
    Region,
}

/// Kind of zone the body contacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    /// The containment region's own area.
    Containment,

    /// A moving platform's carry area.
    Platform,

    /// A recovery flag.
    Flag,
}

/// A contact report from the external collision layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub phase: ContactPhase,
    pub body: BodyKind,
    pub zone: ZoneKind,

    /// Identifier of the zone's owner, used for platform attachment.
    pub zone_id: u32,

    /// Zone bounds at the moment of contact, used for resume reattachment.
    pub zone_bounds: Bounds,
}

//=== CollisionResponse ===================================================

/// Named reaction the core takes to a routed contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResponse {
    /// Raise a containment violation through the game-over latch.
    ReportViolation,

    /// Attach the entity to the contacted platform.
    Attach,

    /// Detach the entity from its platform.
    Detach,

    /// Teleport the entity to the region center.
    Teleport,

    /// No reaction.
    Ignore,
}

//=== CollisionRouter =====================================================

/// Lookup table from contact descriptors to responses.
pub struct CollisionRouter {
    table: HashMap<(BodyKind, ZoneKind, ContactPhase), CollisionResponse>,
}

impl CollisionRouter {
    /// Creates a router with the default platformer bindings:
    ///
    /// - player leaves the containment area: report a violation
    /// - player enters / leaves a platform: attach / detach
    /// - the region touches a flag: teleport recovery
    pub fn new() -> Self {
        let mut table = HashMap::new();

        table.insert(
            (BodyKind::Player, ZoneKind::Containment, ContactPhase::Exit),
            CollisionResponse::ReportViolation,
        );
        table.insert(
            (BodyKind::Player, ZoneKind::Platform, ContactPhase::Enter),
            CollisionResponse::Attach,
        );
        table.insert(
            (BodyKind::Player, ZoneKind::Platform, ContactPhase::Exit),
            CollisionResponse::Detach,
        );
        table.insert(
            (BodyKind::Region, ZoneKind::Flag, ContactPhase::Enter),
            CollisionResponse::Teleport,
        );

        Self { table }
    }

    /// Binds (or rebinds) a contact descriptor to a response.
    pub fn bind(
        &mut self,
        body: BodyKind,
        zone: ZoneKind,
        phase: ContactPhase,
        response: CollisionResponse,
    ) {
        if self
            .table
            .insert((body, zone, phase), response)
            .is_some()
        {
            debug!(
                "collision binding ({:?}, {:?}, {:?}) replaced with {:?}",
                body, zone, phase, response
            );
        }
    }

    /// Routes an event to its response. Unbound combinations are ignored.
    pub fn route(&self, event: &CollisionEvent) -> CollisionResponse {
        match self.table.get(&(event.body, event.zone, event.phase)) {
            Some(&response) => response,
            None => {
                debug!(
                    "unrouted contact ({:?}, {:?}, {:?}) ignored",
                    event.body, event.zone, event.phase
                );
                CollisionResponse::Ignore
            }
        }
    }
}

impl Default for CollisionRouter {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
