//=========================================================================
// Containment Core Orchestrator
//
// Central coordinator for the pause-aware boundary-validation state
// machine.
//
// Responsibilities:
// - Own every component (region, checker, drag editor, latch, ...)
// - Apply queued input commands in the pipeline's fixed order
// - Run the per-tick pipeline and publish notifications at the boundary
//
// Per-tick ordering is significant and fixed:
//   1. Pause transitions and entity position reports
//   2. Buffer window countdown (running only), with its expiry hook
//   3. Pointer, slider, collision, and service commands; pause hold
//   4. Boundary checker schedule and containment evaluation
//   5. Notification drain by the caller
//
// Everything is single-threaded and cooperative; "suspension" is only
// ever a multi-tick scheduled delay. The one shared resource, the region
// geometry, is written exclusively under pause, so no evaluation can
// observe a half-applied edit.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod buffer;
pub mod carrier;
pub mod checker;
pub mod collision;
pub mod config;
pub mod drag;
pub mod geometry;
pub mod input;
pub mod latch;
pub mod notify;
pub mod pause;
pub mod region;
pub mod teleport;
pub mod tracked;

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Imports ====================================================

use buffer::BufferWindow;
use carrier::{CouplingState, PlatformCoupler};
use checker::{BoundaryChecker, CheckerState};
use collision::{CollisionEvent, CollisionResponse, CollisionRouter};
use config::CoreConfig;
use drag::DragEditor;
use geometry::{GeometryQuery, Vec2};
use input::InputCommand;
use latch::{GameOverLatch, GameOverState, Suppression};
use notify::{Notification, NotificationQueue};
use pause::{PauseController, PauseDeps, PauseState};
use region::Region;
use teleport::TeleportService;
use tracked::TrackedEntity;

//=== GameCore ============================================================

/// The containment state machine.
///
/// Owns all components and the command queue. External layers queue
/// [`InputCommand`]s, call [`GameCore::tick`] once per frame, and drain
/// [`Notification`]s afterward. The geometry query is injected at
/// construction and consumed, never owned logic.
pub struct GameCore<Q: GeometryQuery> {
    config: CoreConfig,
    query: Q,

    pause: PauseController,
    region: Region,
    entity: TrackedEntity,
    buffer: BufferWindow,
    checker: BoundaryChecker,
    drag: DragEditor,
    teleport: TeleportService,
    latch: GameOverLatch,
    coupler: PlatformCoupler,
    router: CollisionRouter,

    notifications: NotificationQueue,
    pending: Vec<InputCommand>,
}

impl<Q: GeometryQuery> GameCore<Q> {
    //--- Construction -----------------------------------------------------

    /// Creates a core with the region at `region_center` /
    /// `region_extents` (clamped to the configured bounds).
    ///
    /// The run starts live and running, with the boundary checker armed
    /// at the configured delay. The entity mirror is unbound until the
    /// first position report; evaluation skips until then.
    pub fn new(config: CoreConfig, query: Q, region_center: Vec2, region_extents: Vec2) -> Self {
        let region = Region::new(region_center, region_extents, &config);
        let mut checker = BoundaryChecker::new();
        checker.enable(config.check_delay);

        info!(
            "containment core initialized (region center {:?}, extents {:?})",
            region.center(),
            region.extents()
        );

        Self {
            query,
            pause: PauseController::new(&config),
            region,
            entity: TrackedEntity::new(),
            buffer: BufferWindow::new(),
            checker,
            drag: DragEditor::new(),
            teleport: TeleportService::new(config.resume_buffer),
            latch: GameOverLatch::new(),
            coupler: PlatformCoupler::new(),
            router: CollisionRouter::new(),
            notifications: NotificationQueue::new(),
            pending: Vec::new(),
            config,
        }
    }

    //--- Command Intake ---------------------------------------------------

    /// Queues a command for the next tick.
    pub fn push_command(&mut self, command: InputCommand) {
        self.pending.push(command);
    }

    //--- tick() -----------------------------------------------------------

    /// Advances the core by one frame.
    pub fn tick(&mut self, dt: f32) {
        let commands = std::mem::take(&mut self.pending);
        let mut deferred = Vec::with_capacity(commands.len());

        //--- Phase 1: pause transitions and position reports -------------
        for command in commands {
            if !command.is_priority() {
                deferred.push(command);
                continue;
            }
            match command {
                InputCommand::PauseToggle => self.toggle_pause(),
                InputCommand::ForcePause(paused) => self.force_pause(paused),
                InputCommand::EntityAt(position) => self.entity.set_position(position),
                _ => {}
            }
        }

        //--- Phase 2: buffer window countdown ----------------------------
        if !self.pause.is_paused() && self.buffer.tick(dt) {
            self.reevaluate_after_suppression();
        }

        //--- Phase 3: edit and service commands --------------------------
        for command in deferred {
            self.apply_edit_command(command);
        }
        if self.pause.is_paused() {
            self.coupler
                .enforce_hold(&mut self.entity, &mut self.notifications);
        }

        //--- Phase 4: boundary check -------------------------------------
        if self.checker.tick(dt) {
            self.run_boundary_check();
        }
    }

    /// Takes all notifications produced up to this point.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.take()
    }

    //--- Observations -----------------------------------------------------

    /// Current pause state.
    pub fn pause_state(&self) -> PauseState {
        self.pause.state()
    }

    /// Current run state.
    pub fn game_over_state(&self) -> GameOverState {
        self.latch.state()
    }

    /// Current boundary-checker scheduling state.
    pub fn checker_state(&self) -> CheckerState {
        self.checker.state()
    }

    /// Current platform coupling state.
    pub fn coupling_state(&self) -> CouplingState {
        self.coupler.state()
    }

    /// The containment region (read-only; edits go through commands).
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Last reported entity position, if any.
    pub fn entity_position(&self) -> Option<Vec2> {
        self.entity.position()
    }

    /// Returns true while a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Session configuration.
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Collision routing table, for game-specific rebinding.
    pub fn collision_router_mut(&mut self) -> &mut CollisionRouter {
        &mut self.router
    }

    //--- restart() --------------------------------------------------------

    /// Full reset: the only path out of the terminal state.
    ///
    /// Restores the region's initial capture, clears every transient
    /// state, arms the checker as at session start, and asks the external
    /// layer to reload the level.
    pub fn restart(&mut self) {
        info!("restarting run");

        self.latch.reset();
        self.region.reset();
        self.drag.force_end();
        self.coupler.detach();
        self.pause.reset();

        // Same grace as session start: the reloading level gets a buffer
        // before the first containment evaluation.
        self.buffer.clear();
        self.buffer.start(self.config.resume_buffer);
        self.checker.disable();
        self.checker.enable(self.config.check_delay);

        self.notifications.push(Notification::RestartRequested);
    }

    //--- Pause Plumbing ---------------------------------------------------

    fn toggle_pause(&mut self) {
        self.pause.toggle(PauseDeps {
            buffer: &mut self.buffer,
            drag: &mut self.drag,
            checker: &mut self.checker,
            latch: &mut self.latch,
            coupler: &mut self.coupler,
            entity: &mut self.entity,
            region: &self.region,
            query: &self.query,
            notifications: &mut self.notifications,
        });
    }

    fn force_pause(&mut self, paused: bool) {
        self.pause.force_set(
            paused,
            PauseDeps {
                buffer: &mut self.buffer,
                drag: &mut self.drag,
                checker: &mut self.checker,
                latch: &mut self.latch,
                coupler: &mut self.coupler,
                entity: &mut self.entity,
                region: &self.region,
                query: &self.query,
                notifications: &mut self.notifications,
            },
        );
    }

    //--- Edit & Service Commands ------------------------------------------

    fn apply_edit_command(&mut self, command: InputCommand) {
        match command {
            InputCommand::PointerDown(pointer) => {
                let hit = self.query.contains(&self.region.bounds(), pointer);
                self.drag
                    .begin_drag(pointer, hit, self.pause.is_paused(), &mut self.checker);
            }
            InputCommand::PointerMoved(pointer) => {
                if self.drag.drag_to(pointer, &mut self.region) {
                    self.publish_region_changed();
                }
            }
            InputCommand::PointerUp => self.finish_drag(),
            InputCommand::SliderChanged(axis, value) => {
                if !self.pause.is_paused() {
                    debug!("slider resize ignored: game is running");
                    return;
                }
                if self.region.set_extent(axis, value) {
                    self.publish_region_changed();
                }
            }
            InputCommand::TeleportRequested => self.request_teleport(),
            InputCommand::RestartRequested => self.restart(),
            InputCommand::Collision(event) => self.handle_collision(event),

            // Consumed in the priority phase
            InputCommand::PauseToggle
            | InputCommand::ForcePause(_)
            | InputCommand::EntityAt(_) => {}
        }
    }

    fn finish_drag(&mut self) {
        let running = !self.pause.is_paused();
        if self
            .drag
            .end_drag(running, self.config.check_delay, &mut self.checker)
        {
            // The drag suppression source just cleared
            self.reevaluate_after_suppression();
        }
    }

    fn request_teleport(&mut self) {
        self.teleport.teleport_to_center(
            self.pause.is_paused(),
            self.drag.is_active(),
            &self.region,
            &mut self.entity,
            &mut self.buffer,
            &mut self.latch,
            &mut self.notifications,
        );
    }

    fn handle_collision(&mut self, event: CollisionEvent) {
        match self.router.route(&event) {
            CollisionResponse::ReportViolation => {
                let suppression = self.suppression();
                self.latch.trigger(suppression, &mut self.notifications);
            }
            CollisionResponse::Attach => {
                self.coupler
                    .attach(event.zone_id, event.zone_bounds, self.pause.is_paused());
            }
            CollisionResponse::Detach => self.coupler.detach(),
            CollisionResponse::Teleport => self.request_teleport(),
            CollisionResponse::Ignore => {}
        }
    }

    //--- Containment Evaluation -------------------------------------------

    fn suppression(&self) -> Suppression {
        Suppression {
            paused: self.pause.is_paused(),
            dragging: self.drag.is_active(),
            buffered: self.buffer.active(),
        }
    }

    fn run_boundary_check(&mut self) {
        let Some(position) = self.entity.position() else {
            debug!("containment evaluation skipped: no tracked entity bound");
            return;
        };

        if self.query.contains(&self.region.bounds(), position) {
            return;
        }

        // Guard re-checked at the moment of the call, absorbing any state
        // transition earlier in this same tick.
        let suppression = self.suppression();
        if suppression.any() || self.latch.is_over() {
            return;
        }
        self.latch.trigger(suppression, &mut self.notifications);
    }

    fn reevaluate_after_suppression(&mut self) {
        let suppression = self.suppression();
        let still_outside = match self.entity.position() {
            Some(p) => !self.query.contains(&self.region.bounds(), p),
            None => false,
        };
        self.latch
            .reevaluate_on_suppression_cleared(still_outside, suppression, &mut self.notifications);
    }

    fn publish_region_changed(&mut self) {
        self.notifications.push(Notification::RegionChanged {
            center: self.region.center(),
            extents: self.region.extents(),
        });
    }
}

//=========================================================================
// Scenario Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use collision::{BodyKind, ContactPhase, ZoneKind};
    use geometry::{AabbQuery, Bounds};
    use region::Axis;

    // min 1, max 5; resume buffer and check delay both 2s so the first
    // post-resume evaluation lands exactly when the buffer expires.
    fn core() -> GameCore<AabbQuery> {
        GameCore::new(
            CoreConfig::new(1.0, 5.0, 2.0, 2.0),
            AabbQuery,
            Vec2::ZERO,
            Vec2::new(2.0, 2.0),
        )
    }

    fn containment_exit() -> InputCommand {
        InputCommand::Collision(CollisionEvent {
            phase: ContactPhase::Exit,
            body: BodyKind::Player,
            zone: ZoneKind::Containment,
            zone_id: 0,
            zone_bounds: Bounds::new(Vec2::ZERO, Vec2::new(2.0, 2.0)),
        })
    }

    fn platform_contact(phase: ContactPhase) -> InputCommand {
        InputCommand::Collision(CollisionEvent {
            phase,
            body: BodyKind::Player,
            zone: ZoneKind::Platform,
            zone_id: 9,
            zone_bounds: Bounds::new(Vec2::new(0.0, -2.0), Vec2::new(3.0, 0.5)),
        })
    }

    //--- Containment Basics -----------------------------------------------

    #[test]
    fn contained_entity_never_ends_the_run() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(1.0, 1.0)));

        for _ in 0..10 {
            core.tick(1.0);
        }
        assert_eq!(core.game_over_state(), GameOverState::Active);
        assert!(core.drain_notifications().is_empty());
    }

    #[test]
    fn escaped_entity_ends_the_run_after_check_delay() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(10.0, 10.0)));

        core.tick(1.0);
        assert_eq!(core.game_over_state(), GameOverState::Active);

        core.tick(1.0);
        assert_eq!(core.game_over_state(), GameOverState::Over);
        assert_eq!(core.drain_notifications(), vec![Notification::GameOver]);
    }

    #[test]
    fn unbound_entity_is_never_a_violation() {
        let mut core = core();
        for _ in 0..10 {
            core.tick(1.0);
        }
        assert_eq!(core.game_over_state(), GameOverState::Active);
    }

    #[test]
    fn boundary_position_counts_as_inside() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(2.0, -2.0)));

        for _ in 0..5 {
            core.tick(1.0);
        }
        assert_eq!(core.game_over_state(), GameOverState::Active);
    }

    //--- Pause & Resume ---------------------------------------------------

    #[test]
    fn pausing_silences_the_checker_entirely() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(10.0, 10.0)));
        core.push_command(InputCommand::PauseToggle);
        core.tick(1.0);

        assert_eq!(core.pause_state(), PauseState::Paused);
        assert_eq!(core.checker_state(), CheckerState::Idle);

        for _ in 0..20 {
            core.tick(1.0);
        }
        assert_eq!(core.game_over_state(), GameOverState::Active);
    }

    #[test]
    fn resume_runs_exactly_one_check_at_the_buffer_boundary() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(10.0, 10.0)));
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.drain_notifications();

        // First second of accumulated running time: nothing fires
        core.tick(1.0);
        assert_eq!(core.game_over_state(), GameOverState::Active);

        // Accumulated time reaches the delay: one evaluation, game over
        core.tick(1.0);
        assert_eq!(core.game_over_state(), GameOverState::Over);
        assert_eq!(core.drain_notifications(), vec![Notification::GameOver]);
    }

    #[test]
    fn pause_notifications_carry_the_new_state() {
        let mut core = core();
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        assert_eq!(core.drain_notifications(), vec![Notification::Paused(true)]);

        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        assert_eq!(core.drain_notifications(), vec![Notification::Paused(false)]);
    }

    #[test]
    fn force_pause_follows_toggle_semantics() {
        let mut core = core();
        core.push_command(InputCommand::ForcePause(true));
        core.tick(0.1);
        assert_eq!(core.pause_state(), PauseState::Paused);
        assert_eq!(core.checker_state(), CheckerState::Idle);

        // Redundant force is a no-op
        core.drain_notifications();
        core.push_command(InputCommand::ForcePause(true));
        core.tick(0.1);
        assert!(core.drain_notifications().is_empty());

        core.push_command(InputCommand::ForcePause(false));
        core.tick(0.1);
        assert_eq!(core.pause_state(), PauseState::Running);
    }

    #[test]
    fn pause_toggle_refused_once_over() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(10.0, 10.0)));
        core.tick(2.0);
        assert_eq!(core.game_over_state(), GameOverState::Over);
        core.drain_notifications();

        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        assert_eq!(core.pause_state(), PauseState::Running);
        assert!(core.drain_notifications().is_empty());
    }

    //--- Region Editing ---------------------------------------------------

    #[test]
    fn slider_resize_clamps_and_notifies_while_paused() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(4.5, 4.5)));
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.drain_notifications();

        core.push_command(InputCommand::SliderChanged(Axis::X, 7.0));
        core.push_command(InputCommand::SliderChanged(Axis::Y, 7.0));
        core.tick(0.1);

        assert_eq!(core.region().extents(), Vec2::new(5.0, 5.0));
        let notes = core.drain_notifications();
        assert_eq!(notes.len(), 2);
        assert_eq!(
            notes[1],
            Notification::RegionChanged {
                center: Vec2::ZERO,
                extents: Vec2::new(5.0, 5.0),
            }
        );

        // Entity at (4.5, 4.5) stays contained after resume settles
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        for _ in 0..5 {
            core.tick(1.0);
        }
        assert_eq!(core.game_over_state(), GameOverState::Active);
    }

    #[test]
    fn slider_resize_ignored_while_running() {
        let mut core = core();
        core.push_command(InputCommand::SliderChanged(Axis::X, 4.0));
        core.tick(0.1);

        assert_eq!(core.region().extents(), Vec2::new(2.0, 2.0));
        assert!(core.drain_notifications().is_empty());
    }

    #[test]
    fn drag_requires_pause_and_region_hit() {
        let mut core = core();

        // Running: refused
        core.push_command(InputCommand::PointerDown(Vec2::new(1.0, 1.0)));
        core.tick(0.1);
        assert!(!core.is_dragging());

        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);

        // Paused but off the region: refused
        core.push_command(InputCommand::PointerDown(Vec2::new(9.0, 9.0)));
        core.tick(0.1);
        assert!(!core.is_dragging());

        // Paused and on the region: accepted
        core.push_command(InputCommand::PointerDown(Vec2::new(1.0, 1.0)));
        core.tick(0.1);
        assert!(core.is_dragging());
    }

    #[test]
    fn drag_moves_region_and_publishes_changes() {
        let mut core = core();
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.drain_notifications();

        core.push_command(InputCommand::PointerDown(Vec2::ZERO));
        core.push_command(InputCommand::PointerMoved(Vec2::new(-5.0, -5.0)));
        core.push_command(InputCommand::PointerUp);
        core.tick(0.1);

        assert_eq!(core.region().center(), Vec2::new(-5.0, -5.0));
        assert!(!core.is_dragging());
        assert_eq!(
            core.drain_notifications(),
            vec![Notification::RegionChanged {
                center: Vec2::new(-5.0, -5.0),
                extents: Vec2::new(2.0, 2.0),
            }]
        );
    }

    #[test]
    fn resume_mid_drag_force_ends_the_session() {
        let mut core = core();
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.push_command(InputCommand::PointerDown(Vec2::ZERO));
        core.tick(0.1);
        assert!(core.is_dragging());

        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);

        assert!(!core.is_dragging());
        assert!(matches!(
            core.checker_state(),
            CheckerState::Scheduled { .. }
        ));
    }

    #[test]
    fn edit_that_strands_the_entity_ends_the_run_after_resume() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(3.0, 3.0)));
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);

        // Drag the region away and shrink it while paused
        core.push_command(InputCommand::PointerDown(Vec2::new(1.0, 1.0)));
        core.push_command(InputCommand::PointerMoved(Vec2::new(-4.0, -4.0)));
        core.push_command(InputCommand::SliderChanged(Axis::X, 1.0));
        core.push_command(InputCommand::SliderChanged(Axis::Y, 1.0));
        core.push_command(InputCommand::PointerUp);
        core.tick(0.1);

        // Still suppressed: nothing latched during the pause
        assert_eq!(core.game_over_state(), GameOverState::Active);
        core.drain_notifications();

        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.drain_notifications();

        core.tick(1.0);
        assert_eq!(core.game_over_state(), GameOverState::Active);
        core.tick(1.0);
        assert_eq!(core.game_over_state(), GameOverState::Over);
        assert_eq!(core.drain_notifications(), vec![Notification::GameOver]);
    }

    //--- Deferred Violations ----------------------------------------------

    #[test]
    fn violation_during_drag_defers_then_resolves() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(3.0, 3.0)));
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.push_command(InputCommand::PointerDown(Vec2::new(1.0, 1.0)));
        core.tick(0.1);
        assert!(core.is_dragging());

        // External collision layer reports the exit mid-drag
        core.push_command(containment_exit());
        core.tick(0.1);
        assert_eq!(core.game_over_state(), GameOverState::PendingDeath);

        core.push_command(InputCommand::PointerUp);
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.drain_notifications();

        // Buffer expiry performs the single deciding re-evaluation
        core.tick(2.0);
        assert_eq!(core.game_over_state(), GameOverState::Over);
        assert_eq!(core.drain_notifications(), vec![Notification::GameOver]);
    }

    #[test]
    fn buffered_violation_confirms_when_still_outside() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(10.0, 10.0)));
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.drain_notifications();

        core.push_command(containment_exit());
        core.tick(0.5);
        assert_eq!(core.game_over_state(), GameOverState::PendingDeath);

        core.tick(1.5);
        assert_eq!(core.game_over_state(), GameOverState::Over);
        assert_eq!(core.drain_notifications(), vec![Notification::GameOver]);
    }

    #[test]
    fn buffered_violation_cancels_when_back_inside() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(10.0, 10.0)));
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.drain_notifications();

        core.push_command(containment_exit());
        core.tick(0.5);
        assert_eq!(core.game_over_state(), GameOverState::PendingDeath);

        // Entity returns inside before the buffer runs out
        core.push_command(InputCommand::EntityAt(Vec2::new(1.0, 1.0)));
        core.tick(1.5);

        assert_eq!(core.game_over_state(), GameOverState::Active);
        assert!(core.drain_notifications().is_empty());
    }

    //--- Teleport ---------------------------------------------------------

    #[test]
    fn teleport_recovers_the_entity_to_region_center() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(10.0, 10.0)));
        core.push_command(InputCommand::TeleportRequested);
        core.tick(0.1);

        assert_eq!(core.entity_position(), Some(Vec2::ZERO));
        assert_eq!(
            core.drain_notifications(),
            vec![Notification::EntityRelocated(Vec2::ZERO)]
        );

        // The fresh buffer suppresses the next evaluations
        core.tick(1.0);
        assert_eq!(core.game_over_state(), GameOverState::Active);
    }

    #[test]
    fn teleport_is_a_noop_during_a_drag_session() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(1.5, 1.5)));
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.push_command(InputCommand::PointerDown(Vec2::new(1.0, 1.0)));
        core.tick(0.1);
        core.drain_notifications();

        core.push_command(InputCommand::TeleportRequested);
        core.tick(0.1);

        assert_eq!(core.entity_position(), Some(Vec2::new(1.5, 1.5)));
        assert!(core.drain_notifications().is_empty());
    }

    #[test]
    fn flag_contact_teleports_through_the_routing_table() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(10.0, 10.0)));
        core.push_command(InputCommand::Collision(CollisionEvent {
            phase: ContactPhase::Enter,
            body: BodyKind::Region,
            zone: ZoneKind::Flag,
            zone_id: 4,
            zone_bounds: Bounds::new(Vec2::new(10.0, 10.0), Vec2::new(0.5, 0.5)),
        }));
        core.tick(0.1);

        assert_eq!(core.entity_position(), Some(Vec2::ZERO));
    }

    //--- Platform Coupling ------------------------------------------------

    #[test]
    fn platform_carry_survives_a_pause_round_trip() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(1.0, -1.6)));
        core.push_command(platform_contact(ContactPhase::Enter));
        core.tick(0.1);
        assert!(matches!(
            core.coupling_state(),
            CouplingState::Attached { platform: 9, .. }
        ));

        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        assert!(matches!(core.coupling_state(), CouplingState::Held { .. }));

        // The animating platform tries to drag the entity; the hold pins it
        core.push_command(InputCommand::EntityAt(Vec2::new(4.0, -1.6)));
        core.tick(0.1);
        assert_eq!(core.entity_position(), Some(Vec2::new(1.0, -1.6)));

        core.drain_notifications();
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        assert!(matches!(
            core.coupling_state(),
            CouplingState::Attached { platform: 9, .. }
        ));
    }

    #[test]
    fn platform_exit_detaches_even_while_held() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(1.0, -1.6)));
        core.push_command(platform_contact(ContactPhase::Enter));
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);

        core.push_command(platform_contact(ContactPhase::Exit));
        core.tick(0.1);
        assert_eq!(core.coupling_state(), CouplingState::Detached);
    }

    //--- Restart ----------------------------------------------------------

    #[test]
    fn restart_is_the_only_path_out_of_over() {
        let mut core = core();
        core.push_command(InputCommand::EntityAt(Vec2::new(10.0, 10.0)));
        core.tick(2.0);
        assert_eq!(core.game_over_state(), GameOverState::Over);
        core.drain_notifications();

        core.push_command(InputCommand::RestartRequested);
        core.tick(0.1);

        assert_eq!(core.game_over_state(), GameOverState::Active);
        assert_eq!(core.pause_state(), PauseState::Running);
        assert_eq!(core.region().center(), Vec2::ZERO);
        assert_eq!(core.region().extents(), Vec2::new(2.0, 2.0));
        assert_eq!(
            core.drain_notifications(),
            vec![Notification::RestartRequested]
        );

        // Pausing works again after the reset
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        assert_eq!(core.pause_state(), PauseState::Paused);
    }

    #[test]
    fn restart_restores_edited_region_geometry() {
        let mut core = core();
        core.push_command(InputCommand::PauseToggle);
        core.tick(0.1);
        core.push_command(InputCommand::PointerDown(Vec2::ZERO));
        core.push_command(InputCommand::PointerMoved(Vec2::new(3.0, 3.0)));
        core.push_command(InputCommand::PointerUp);
        core.push_command(InputCommand::SliderChanged(Axis::X, 4.0));
        core.tick(0.1);

        core.push_command(InputCommand::RestartRequested);
        core.tick(0.1);

        assert_eq!(core.region().center(), Vec2::ZERO);
        assert_eq!(core.region().extents(), Vec2::new(2.0, 2.0));
    }
}
