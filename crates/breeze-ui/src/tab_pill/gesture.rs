//! Gesture arbitration for the tab selector
//!
//! A pointer session resolves to exactly one of two outcomes: a tap on
//! the slot that was pressed, or a drag that scrubs the indicator. The
//! arbiter is a small state machine fed with raw pointer samples; it
//! owns no geometry beyond the accumulated translation, which keeps it
//! independent of the widget and directly unit-testable.

use egui::Vec2;

/// Touch slop in logical pixels. Below this cumulative translation a
/// session is still a potential tap; at or above it the session becomes
/// a drag and the tap is cancelled for good. 8.0 matches common
/// platform conventions (Android's ViewConfiguration touch slop).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Resolved end of a pointer session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Released before the slop threshold: select the pressed slot
    Tap(usize),
    /// Drag ended or was cancelled: final x translation of the session
    Drag(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Session {
    /// No active pointer
    Idle,
    /// Pointer down, not yet resolved to tap or drag
    Tracking {
        pressed_slot: Option<usize>,
        translation: Vec2,
    },
    /// Slop threshold crossed: this session can only end as a drag
    Dragging { translation: Vec2 },
}

/// State machine resolving pointer sessions into taps or drags
pub struct GestureArbiter {
    session: Session,
}

impl GestureArbiter {
    pub fn new() -> Self {
        Self {
            session: Session::Idle,
        }
    }

    /// True between pointer-down and resolution
    pub fn is_active(&self) -> bool {
        !matches!(self.session, Session::Idle)
    }

    /// True once the session has committed to dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self.session, Session::Dragging { .. })
    }

    /// Slot recorded at pointer-down, while still unresolved. Drives
    /// the pressed-slot visual; gone as soon as the session is a drag.
    pub fn pressed_slot(&self) -> Option<usize> {
        match self.session {
            Session::Tracking { pressed_slot, .. } => pressed_slot,
            _ => None,
        }
    }

    /// Pointer went down. `pressed_slot` is the slot under the touch
    /// point, if any; it is only ever used as the tap target.
    ///
    /// A down while a session is already active is a malformed stream:
    /// the old session is discarded and a fresh one starts.
    pub fn pointer_down(&mut self, pressed_slot: Option<usize>) {
        self.session = Session::Tracking {
            pressed_slot,
            translation: Vec2::ZERO,
        };
    }

    /// Pointer moved by `delta` since the previous sample. Returns the
    /// live x translation while the session is a drag, so the caller
    /// can track the finger frame-exactly; `None` otherwise.
    ///
    /// The slop threshold is tested against the cumulative translation
    /// magnitude, and crossing it is permanent: no later sample can
    /// turn the session back into a tap.
    pub fn pointer_move(&mut self, delta: Vec2) -> Option<f32> {
        match &mut self.session {
            Session::Idle => None,
            Session::Tracking {
                translation,
                ..
            } => {
                *translation += delta;
                if translation.length() >= DRAG_THRESHOLD {
                    let translation = *translation;
                    self.session = Session::Dragging { translation };
                    Some(translation.x)
                } else {
                    None
                }
            }
            Session::Dragging { translation } => {
                *translation += delta;
                Some(translation.x)
            }
        }
    }

    /// Pointer released. Resolves the session.
    pub fn pointer_up(&mut self) -> Option<GestureOutcome> {
        let outcome = match self.session {
            Session::Idle => None,
            Session::Tracking { pressed_slot, .. } => pressed_slot.map(GestureOutcome::Tap),
            Session::Dragging { translation } => Some(GestureOutcome::Drag(translation.x)),
        };
        self.session = Session::Idle;
        outcome
    }

    /// The host interrupted the gesture. An in-flight drag resolves as
    /// if released at the last known translation, so the indicator is
    /// never left untracked between slots. An unresolved press is
    /// discarded without firing a tap.
    pub fn cancel(&mut self) -> Option<GestureOutcome> {
        let outcome = match self.session {
            Session::Dragging { translation } => Some(GestureOutcome::Drag(translation.x)),
            _ => None,
        };
        self.session = Session::Idle;
        outcome
    }
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn short_press_resolves_as_tap() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pointer_down(Some(3));
        arbiter.pointer_move(vec2(3.0, 1.0));
        assert_eq!(arbiter.pointer_up(), Some(GestureOutcome::Tap(3)));
        assert!(!arbiter.is_active());
    }

    #[test]
    fn crossing_threshold_resolves_as_drag() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pointer_down(Some(0));
        assert_eq!(arbiter.pointer_move(vec2(5.0, 0.0)), None);
        assert_eq!(arbiter.pointer_move(vec2(5.0, 0.0)), Some(10.0));
        assert!(arbiter.is_dragging());
        assert_eq!(arbiter.pointer_up(), Some(GestureOutcome::Drag(10.0)));
    }

    #[test]
    fn threshold_uses_translation_magnitude() {
        // Mostly vertical movement still cancels the tap
        let mut arbiter = GestureArbiter::new();
        arbiter.pointer_down(Some(1));
        arbiter.pointer_move(vec2(1.0, 9.0));
        assert!(arbiter.is_dragging());
    }

    #[test]
    fn drag_never_reverts_to_tap() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pointer_down(Some(2));
        arbiter.pointer_move(vec2(12.0, 0.0));
        // Finger returns to the start point before release
        arbiter.pointer_move(vec2(-12.0, 0.0));
        assert_eq!(arbiter.pointer_up(), Some(GestureOutcome::Drag(0.0)));
    }

    #[test]
    fn pressed_slot_is_cleared_by_drag() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pointer_down(Some(4));
        assert_eq!(arbiter.pressed_slot(), Some(4));
        arbiter.pointer_move(vec2(20.0, 0.0));
        assert_eq!(arbiter.pressed_slot(), None);
    }

    #[test]
    fn press_outside_slots_resolves_to_nothing() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pointer_down(None);
        assert_eq!(arbiter.pointer_up(), None);
    }

    #[test]
    fn cancel_mid_drag_acts_like_release() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pointer_down(Some(0));
        arbiter.pointer_move(vec2(40.0, 0.0));
        assert_eq!(arbiter.cancel(), Some(GestureOutcome::Drag(40.0)));
        assert!(!arbiter.is_active());
    }

    #[test]
    fn cancel_before_resolution_discards_the_tap() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pointer_down(Some(2));
        arbiter.pointer_move(vec2(2.0, 0.0));
        assert_eq!(arbiter.cancel(), None);
    }

    #[test]
    fn second_down_discards_stale_session() {
        let mut arbiter = GestureArbiter::new();
        arbiter.pointer_down(Some(1));
        arbiter.pointer_move(vec2(30.0, 0.0));
        // A second down without a release starts over
        arbiter.pointer_down(Some(2));
        assert!(!arbiter.is_dragging());
        assert_eq!(arbiter.pointer_up(), Some(GestureOutcome::Tap(2)));
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut arbiter = GestureArbiter::new();
        assert_eq!(arbiter.pointer_move(vec2(50.0, 0.0)), None);
        assert_eq!(arbiter.pointer_up(), None);
    }
}
