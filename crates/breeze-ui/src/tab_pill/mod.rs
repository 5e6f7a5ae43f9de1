//! Floating tab selector ("the pill")
//!
//! A capsule of fixed-width slots with an animated indicator. Selection
//! can change three ways: a tap on a slot, a drag that scrubs the
//! indicator and snaps to the nearest slot on release, or an external
//! write to the shared [`SelectionStore`]. All three converge on the
//! same commit path and the same slide animation.
//!
//! The widget value owns every piece of motion state. The hosting app
//! allocates one `TabPill` at startup and keeps it for the life of the
//! shell; swapping the displayed module content never touches it, so an
//! in-flight slide survives a content switch. That ownership is the
//! identity guarantee, not an egui memory trick.

mod driver;
mod gesture;
mod indicator;
mod spring;

pub use driver::AnimationConfig;
pub use gesture::{GestureArbiter, GestureOutcome, DRAG_THRESHOLD};
pub use indicator::{IndicatorMotion, PillMetrics};
pub use spring::{Spring, SpringParams, MAX_FRAME_DT};

use breeze_core::{ModuleDescriptor, SelectionStore};
use driver::PillAnimator;
use egui::{Align2, Color32, FontId, Response, Rounding, Sense, Stroke, Ui, Vec2};
use tracing::debug;

/// One selectable slot of the pill
#[derive(Debug, Clone)]
pub struct SlotDescriptor {
    pub label: String,
    pub icon: String,
}

impl From<&ModuleDescriptor> for SlotDescriptor {
    fn from(module: &ModuleDescriptor) -> Self {
        Self {
            label: module.label.clone(),
            icon: module.icon.clone(),
        }
    }
}

/// Pill configuration
#[derive(Debug, Clone)]
pub struct PillConfig {
    pub slot_width: f32,
    pub slot_height: f32,
    /// Margin between the pill edge and the slot track
    pub inset: f32,
    /// Spring timings for slide and chrome feedback
    pub animation: AnimationConfig,
    /// Glyph scale of the slot currently held down
    pub pressed_scale: f32,
}

impl Default for PillConfig {
    fn default() -> Self {
        Self {
            slot_width: 70.0,
            slot_height: 56.0,
            inset: 5.0,
            animation: AnimationConfig::default(),
            pressed_scale: 1.15,
        }
    }
}

/// The floating tab selector widget
pub struct TabPill {
    slots: Vec<SlotDescriptor>,
    config: PillConfig,
    metrics: PillMetrics,
    arbiter: GestureArbiter,
    animator: PillAnimator,
    motion: IndicatorMotion,
    /// Selection index this widget last committed or observed; used to
    /// detect out-of-band writes to the store
    committed: usize,
}

impl TabPill {
    pub fn new(slots: Vec<SlotDescriptor>, config: PillConfig, initial: usize) -> Self {
        let metrics = PillMetrics::new(
            slots.len(),
            config.slot_width,
            config.slot_height,
            config.inset,
        );
        let initial = initial.min(metrics.slot_count - 1);
        let motion = IndicatorMotion::at_slot(&metrics, initial);
        let animator = PillAnimator::new(config.animation, motion.settled_offset);

        Self {
            slots,
            config,
            metrics,
            arbiter: GestureArbiter::new(),
            animator,
            motion,
            committed: initial,
        }
    }

    pub fn metrics(&self) -> &PillMetrics {
        &self.metrics
    }

    /// Show the pill. `store` is read for out-of-band selection changes
    /// and written when a gesture commits.
    pub fn ui(&mut self, ui: &mut Ui, store: &SelectionStore) -> Response {
        self.sync_external(store);

        let (rect, response) = ui.allocate_exact_size(self.metrics.pill_size(), Sense::drag());
        self.handle_input(ui, rect, &response, store);

        let dt = ui.input(|i| i.stable_dt).min(MAX_FRAME_DT);
        if self.animator.tick(dt, &mut self.motion) {
            ui.ctx().request_repaint();
        }

        self.paint(ui, rect);
        response
    }

    /// Re-derive the animation target when the host wrote the store
    /// directly. Fires exactly once per change: `committed` catches up
    /// immediately, so repeated frames do not re-trigger the slide.
    fn sync_external(&mut self, store: &SelectionStore) {
        let selected = store.selected();
        if selected != self.committed {
            debug!(from = self.committed, to = selected, "external selection");
            self.committed = selected;
            self.animator.animate_to(self.metrics.slot_offset(selected));
        }
    }

    /// Translate egui pointer state into arbiter events
    fn handle_input(&mut self, ui: &Ui, rect: egui::Rect, response: &Response, store: &SelectionStore) {
        if response.drag_started() {
            let pressed = response
                .interact_pointer_pos()
                .and_then(|pos| self.metrics.slot_at(rect, pos));
            self.arbiter.pointer_down(pressed);
        }

        if response.dragged() {
            let was_dragging = self.arbiter.is_dragging();
            if let Some(live_delta) = self.arbiter.pointer_move(response.drag_delta()) {
                if !was_dragging {
                    // Threshold crossed this sample: the finger owns the
                    // indicator from here on
                    self.animator.freeze_slide();
                    self.animator.drag_start();
                }
                // Frame-exact tracking, no smoothing
                self.motion.live_drag_delta = live_delta;
            }
        }

        if response.drag_released() {
            if let Some(outcome) = self.arbiter.pointer_up() {
                self.commit(outcome, store);
            }
        } else if self.arbiter.is_active() && !ui.input(|i| i.pointer.any_down()) {
            // The pointer vanished without a release event (interrupted
            // by the host). Treat as a release at the last translation.
            let outcome = self.arbiter.cancel();
            if let Some(outcome) = outcome {
                self.commit(outcome, store);
            }
        }
    }

    /// Single commit path for both input modalities
    fn commit(&mut self, outcome: GestureOutcome, store: &SelectionStore) {
        let target = match outcome {
            GestureOutcome::Tap(slot) => {
                self.animator.pulse();
                slot
            }
            GestureOutcome::Drag(final_delta) => {
                self.animator.drag_end();
                self.metrics
                    .nearest_slot(self.motion.settled_offset + final_delta)
            }
        };

        self.motion.live_drag_delta = 0.0;
        self.committed = store.select(target);
        self.animator
            .animate_to(self.metrics.slot_offset(self.committed));
        debug!(?outcome, committed = self.committed, "gesture commit");
    }

    /// Paint chrome, indicator and slots as sibling elements through
    /// one painter. The indicator is never a parent of the slot row;
    /// both are laid out against the same pill rect.
    fn paint(&self, ui: &Ui, rect: egui::Rect) {
        let painter = ui.painter();
        let rounding = Rounding::same(rect.height() / 2.0);

        // Soft drop shadow, then the capsule body
        for (expand, alpha) in [(6.0, 12), (3.0, 24)] {
            painter.rect_filled(
                rect.expand(expand).translate(Vec2::new(0.0, 2.0)),
                Rounding::same((rect.height() + expand) / 2.0),
                Color32::from_black_alpha(alpha),
            );
        }
        painter.rect_filled(rect, rounding, Color32::from_rgba_unmultiplied(26, 26, 30, 235));
        painter.rect_stroke(rect, rounding, Stroke::new(1.0, Color32::from_gray(55)));

        // Indicator capsule at the clamped visual offset
        let indicator = egui::Rect::from_min_size(
            egui::Pos2::new(
                rect.left() + self.motion.visual_offset(&self.metrics),
                rect.top() + self.metrics.inset,
            ),
            Vec2::new(self.metrics.slot_width, self.metrics.slot_height),
        );
        let scaled =
            egui::Rect::from_center_size(indicator.center(), indicator.size() * self.motion.chrome_scale);
        painter.rect_filled(
            scaled,
            Rounding::same(scaled.height() / 2.0),
            crate::theme::accent_color().linear_multiply(0.85),
        );

        // Slot glyphs over everything
        for (index, slot) in self.slots.iter().enumerate() {
            let slot_rect = self.metrics.slot_rect(rect, index);
            let pressed = self.arbiter.pressed_slot() == Some(index);
            let scale = if pressed { self.config.pressed_scale } else { 1.0 };
            let on_indicator = index == self.committed && !self.arbiter.is_dragging();
            let color = if on_indicator {
                Color32::from_gray(245)
            } else {
                Color32::from_gray(170)
            };

            painter.text(
                slot_rect.center() - Vec2::new(0.0, 9.0),
                Align2::CENTER_CENTER,
                &slot.icon,
                FontId::proportional(16.0 * scale),
                color,
            );
            painter.text(
                slot_rect.center() + Vec2::new(0.0, 13.0),
                Align2::CENTER_CENTER,
                &slot.label,
                FontId::proportional(10.0 * scale),
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pill() -> (TabPill, SelectionStore) {
        let slots = vec![
            SlotDescriptor { label: "Today".into(), icon: "☀".into() },
            SlotDescriptor { label: "Library".into(), icon: "🗀".into() },
            SlotDescriptor { label: "Compose".into(), icon: "✎".into() },
            SlotDescriptor { label: "Activity".into(), icon: "📈".into() },
            SlotDescriptor { label: "Settings".into(), icon: "⚙".into() },
        ];
        let store = SelectionStore::new(slots.len(), 0);
        (TabPill::new(slots, PillConfig::default(), 0), store)
    }

    /// Drive the animator until everything rests
    fn settle(pill: &mut TabPill) {
        let mut frames = 0;
        while pill.animator.tick(1.0 / 120.0, &mut pill.motion) {
            frames += 1;
            assert!(frames < 10_000);
        }
    }

    #[test]
    fn tap_commits_slot_and_animates_to_its_offset() {
        let (mut pill, store) = pill();

        pill.commit(GestureOutcome::Tap(3), &store);
        assert_eq!(store.selected(), 3);
        assert_eq!(pill.animator.slide_target(), 215.0);

        settle(&mut pill);
        assert_eq!(pill.motion.settled_offset, 215.0);
        assert_eq!(pill.motion.live_drag_delta, 0.0);
    }

    #[test]
    fn drag_of_two_slot_widths_resolves_two_slots_over() {
        let (mut pill, store) = pill();

        pill.motion.live_drag_delta = 140.0;
        pill.commit(GestureOutcome::Drag(140.0), &store);

        assert_eq!(store.selected(), 2);
        assert_eq!(pill.motion.live_drag_delta, 0.0);
        assert_eq!(pill.animator.slide_target(), 145.0);
        settle(&mut pill);
        assert_eq!(pill.motion.settled_offset, 145.0);
    }

    #[test]
    fn cancelled_drag_snaps_to_nearest_slot() {
        let (mut pill, store) = pill();

        pill.arbiter.pointer_down(Some(0));
        pill.arbiter.pointer_move(egui::vec2(40.0, 0.0));
        assert!(pill.arbiter.is_dragging());
        pill.motion.live_drag_delta = 40.0;

        let outcome = pill.arbiter.cancel().expect("drag resolves on cancel");
        pill.commit(outcome, &store);

        // 40 px past slot 0 rounds to slot 1
        assert_eq!(store.selected(), 1);
        assert_eq!(pill.motion.live_drag_delta, 0.0);
        assert_eq!(pill.animator.slide_target(), 75.0);
    }

    #[test]
    fn drag_beyond_track_clamps_to_last_slot() {
        let (mut pill, store) = pill();

        pill.commit(GestureOutcome::Drag(10_000.0), &store);
        assert_eq!(store.selected(), 4);
        assert_eq!(pill.animator.slide_target(), 285.0);
    }

    #[test]
    fn external_write_re_derives_the_target_once() {
        let (mut pill, store) = pill();

        store.select(4);
        pill.sync_external(&store);
        assert_eq!(pill.committed, 4);
        assert_eq!(pill.animator.slide_target(), 285.0);

        // Re-syncing the same value changes nothing
        pill.sync_external(&store);
        assert_eq!(pill.animator.slide_target(), 285.0);
    }

    #[test]
    fn commit_survives_out_of_range_outcomes() {
        let (mut pill, store) = pill();
        pill.commit(GestureOutcome::Tap(99), &store);
        assert_eq!(store.selected(), 4);
        assert_eq!(pill.committed, 4);
    }
}
