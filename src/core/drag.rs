//=========================================================================
// Drag Editor
//=========================================================================
//
// Pointer-driven edit session for the containment region.
//
// A session may only begin while the game is paused and the pointer hits
// the region. Beginning a session disables the boundary checker
// unconditionally; under pause the checker is already idle, but the
// explicit call keeps the exclusion safe for any future caller that arms
// the checker while paused.
//
// Ending a session while the game is running (pause was toggled
// mid-drag) re-arms the checker from the full delay. Ending while paused
// leaves the checker idle; the pause controller re-arms it on resume.
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::checker::BoundaryChecker;
use super::geometry::Vec2;
use super::region::Region;

//=== DragSession =========================================================

/// Live drag state: the last accepted pointer sample.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    origin: Vec2,
}

//=== DragEditor ==========================================================

/// Exclusive, pause-only editing mode for the region's position.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragEditor {
    session: Option<DragSession>,
}

impl DragEditor {
    /// Creates an editor with no active session.
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Returns true while a drag session is active.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    //--- begin_drag() -----------------------------------------------------

    /// Starts a session from a pointer-down sample.
    ///
    /// Ignored unless the game is paused and the pointer hit the region
    /// (`hit` is the orchestrator's containment test of the pointer).
    /// Returns whether a session started.
    pub fn begin_drag(
        &mut self,
        pointer: Vec2,
        hit: bool,
        paused: bool,
        checker: &mut BoundaryChecker,
    ) -> bool {
        if !paused {
            debug!("drag ignored: game is running");
            return false;
        }
        if !hit {
            debug!("drag ignored: pointer {:?} outside region", pointer);
            return false;
        }
        if self.session.is_some() {
            debug!("drag ignored: session already active");
            return false;
        }

        checker.disable();
        self.session = Some(DragSession { origin: pointer });
        debug!("drag session started at {:?}", pointer);
        true
    }

    //--- drag_to() --------------------------------------------------------

    /// Applies a pointer-move sample to the region.
    ///
    /// Translates the region center by the delta from the last sample and
    /// refreshes the sample. Returns whether the region moved.
    pub fn drag_to(&mut self, pointer: Vec2, region: &mut Region) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let delta = pointer - session.origin;
        session.origin = pointer;
        region.translate(delta)
    }

    //--- end_drag() -------------------------------------------------------

    /// Ends the session on pointer-up.
    ///
    /// If the game is running at this point, re-arms the checker with the
    /// full `check_delay`. Returns whether a session actually ended, so
    /// the orchestrator can run the suppression-cleared re-evaluation.
    pub fn end_drag(
        &mut self,
        running: bool,
        check_delay: f32,
        checker: &mut BoundaryChecker,
    ) -> bool {
        if self.session.take().is_none() {
            return false;
        }

        debug!("drag session ended (running: {})", running);
        if running {
            checker.enable(check_delay);
        }
        true
    }

    /// Drops any session without touching the checker.
    ///
    /// Used by pause transitions, which manage the checker themselves.
    pub fn force_end(&mut self) {
        if self.session.take().is_some() {
            debug!("drag session force-ended");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::checker::CheckerState;
    use crate::core::config::CoreConfig;

    fn region() -> Region {
        Region::new(
            Vec2::ZERO,
            Vec2::new(2.0, 2.0),
            &CoreConfig::new(1.0, 5.0, 2.0, 0.5),
        )
    }

    #[test]
    fn begin_requires_pause_and_hit() {
        let mut drag = DragEditor::new();
        let mut checker = BoundaryChecker::new();
        let p = Vec2::new(1.0, 1.0);

        assert!(!drag.begin_drag(p, true, false, &mut checker));
        assert!(!drag.begin_drag(p, false, true, &mut checker));
        assert!(drag.begin_drag(p, true, true, &mut checker));
        assert!(drag.is_active());
    }

    #[test]
    fn begin_disables_checker() {
        let mut drag = DragEditor::new();
        let mut checker = BoundaryChecker::new();
        checker.enable(1.0);

        drag.begin_drag(Vec2::ZERO, true, true, &mut checker);
        assert_eq!(checker.state(), CheckerState::Idle);
    }

    #[test]
    fn second_begin_is_ignored() {
        let mut drag = DragEditor::new();
        let mut checker = BoundaryChecker::new();

        assert!(drag.begin_drag(Vec2::ZERO, true, true, &mut checker));
        assert!(!drag.begin_drag(Vec2::new(1.0, 0.0), true, true, &mut checker));
    }

    #[test]
    fn drag_translates_by_pointer_delta() {
        let mut drag = DragEditor::new();
        let mut checker = BoundaryChecker::new();
        let mut region = region();

        drag.begin_drag(Vec2::new(1.0, 1.0), true, true, &mut checker);
        assert!(drag.drag_to(Vec2::new(3.0, 0.0), &mut region));
        assert_eq!(region.center(), Vec2::new(2.0, -1.0));

        // Deltas accumulate from the refreshed sample
        assert!(drag.drag_to(Vec2::new(4.0, 0.0), &mut region));
        assert_eq!(region.center(), Vec2::new(3.0, -1.0));
    }

    #[test]
    fn drag_without_session_is_inert() {
        let mut drag = DragEditor::new();
        let mut region = region();

        assert!(!drag.drag_to(Vec2::new(9.0, 9.0), &mut region));
        assert_eq!(region.center(), Vec2::ZERO);
    }

    #[test]
    fn end_while_paused_leaves_checker_idle() {
        let mut drag = DragEditor::new();
        let mut checker = BoundaryChecker::new();

        drag.begin_drag(Vec2::ZERO, true, true, &mut checker);
        assert!(drag.end_drag(false, 0.5, &mut checker));

        assert!(!drag.is_active());
        assert_eq!(checker.state(), CheckerState::Idle);
    }

    #[test]
    fn end_while_running_rearms_checker() {
        let mut drag = DragEditor::new();
        let mut checker = BoundaryChecker::new();

        drag.begin_drag(Vec2::ZERO, true, true, &mut checker);
        assert!(drag.end_drag(true, 0.5, &mut checker));
        assert_eq!(checker.state(), CheckerState::Scheduled { delay: 0.5 });
    }

    #[test]
    fn end_without_session_reports_nothing() {
        let mut drag = DragEditor::new();
        let mut checker = BoundaryChecker::new();

        assert!(!drag.end_drag(true, 0.5, &mut checker));
        assert_eq!(checker.state(), CheckerState::Idle);
    }

    #[test]
    fn force_end_drops_session_silently() {
        let mut drag = DragEditor::new();
        let mut checker = BoundaryChecker::new();

        drag.begin_drag(Vec2::ZERO, true, true, &mut checker);
        drag.force_end();

        assert!(!drag.is_active());
        assert_eq!(checker.state(), CheckerState::Idle);
    }
}
