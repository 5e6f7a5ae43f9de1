//! Indicator geometry and motion state
//!
//! `PillMetrics` is the immutable slot geometry; `IndicatorMotion` is
//! the continuous state the indicator is rendered from. The two are
//! deliberately separate from the discrete selection index: the store
//! knows *which* slot is active, this module knows *where* the capsule
//! currently sits.

use egui::{Pos2, Rect, Vec2};

/// Fixed slot geometry of one pill instantiation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillMetrics {
    pub slot_width: f32,
    pub slot_height: f32,
    /// Margin between the pill edge and the slot track
    pub inset: f32,
    pub slot_count: usize,
}

impl PillMetrics {
    pub fn new(slot_count: usize, slot_width: f32, slot_height: f32, inset: f32) -> Self {
        Self {
            slot_width,
            slot_height,
            inset,
            slot_count: slot_count.max(1),
        }
    }

    /// Indicator offset for a slot, relative to the pill's left edge
    pub fn slot_offset(&self, index: usize) -> f32 {
        index as f32 * self.slot_width + self.inset
    }

    /// Leftmost legal indicator offset
    pub fn min_offset(&self) -> f32 {
        self.inset
    }

    /// Rightmost legal indicator offset
    pub fn max_offset(&self) -> f32 {
        (self.slot_count - 1) as f32 * self.slot_width + self.inset
    }

    /// Clamp a raw offset onto the slot track
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(self.min_offset(), self.max_offset())
    }

    /// Nearest slot for a raw offset, rounding half *up* so a release
    /// exactly between two slots lands deterministically on the higher
    /// index
    pub fn nearest_slot(&self, offset: f32) -> usize {
        let relative = (offset - self.inset) / self.slot_width;
        let index = (relative + 0.5).floor();
        (index.max(0.0) as usize).min(self.slot_count - 1)
    }

    /// Outer size of the pill
    pub fn pill_size(&self) -> Vec2 {
        Vec2::new(
            self.slot_count as f32 * self.slot_width + 2.0 * self.inset,
            self.slot_height + 2.0 * self.inset,
        )
    }

    /// Bounds of slot `index` inside a pill drawn at `pill_rect`
    pub fn slot_rect(&self, pill_rect: Rect, index: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(
                pill_rect.left() + self.slot_offset(index),
                pill_rect.top() + self.inset,
            ),
            Vec2::new(self.slot_width, self.slot_height),
        )
    }

    /// Slot under `pos`, if any, for a pill drawn at `pill_rect`
    pub fn slot_at(&self, pill_rect: Rect, pos: Pos2) -> Option<usize> {
        for index in 0..self.slot_count {
            if self.slot_rect(pill_rect, index).contains(pos) {
                return Some(index);
            }
        }
        None
    }
}

/// Continuous indicator state, owned by the widget for its lifetime
#[derive(Debug, Clone, Copy)]
pub struct IndicatorMotion {
    /// Animated position; converges onto the committed slot's offset
    pub settled_offset: f32,
    /// Ephemeral finger contribution; non-zero only during a drag
    pub live_drag_delta: f32,
    /// Feedback scale of the indicator capsule; rests at 1.0
    pub chrome_scale: f32,
}

impl IndicatorMotion {
    pub fn at_slot(metrics: &PillMetrics, index: usize) -> Self {
        Self {
            settled_offset: metrics.slot_offset(index.min(metrics.slot_count - 1)),
            live_drag_delta: 0.0,
            chrome_scale: 1.0,
        }
    }

    /// Position the capsule is drawn at. Hard-clamped to the track, so
    /// the indicator cannot escape the pill however far the finger
    /// travels.
    pub fn visual_offset(&self, metrics: &PillMetrics) -> f32 {
        metrics.clamp_offset(self.settled_offset + self.live_drag_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> PillMetrics {
        // The canonical five-slot pill: width 70, inset 5
        PillMetrics::new(5, 70.0, 56.0, 5.0)
    }

    #[test]
    fn slot_offsets() {
        let m = metrics();
        assert_eq!(m.slot_offset(0), 5.0);
        assert_eq!(m.slot_offset(3), 215.0);
        assert_eq!(m.min_offset(), 5.0);
        assert_eq!(m.max_offset(), 285.0);
    }

    #[test]
    fn visual_offset_is_clamped_to_track() {
        let m = metrics();
        let mut motion = IndicatorMotion::at_slot(&m, 0);

        motion.live_drag_delta = -500.0;
        assert_eq!(motion.visual_offset(&m), 5.0);

        motion.live_drag_delta = 10_000.0;
        assert_eq!(motion.visual_offset(&m), 285.0);

        motion.live_drag_delta = 70.0;
        assert_eq!(motion.visual_offset(&m), 75.0);
    }

    #[test]
    fn nearest_slot_rounds_to_nearest() {
        let m = metrics();
        assert_eq!(m.nearest_slot(5.0), 0);
        assert_eq!(m.nearest_slot(145.0), 2);
        // 40 px from slot 0 is closer to slot 1 (70 px)
        assert_eq!(m.nearest_slot(45.0), 1);
        assert_eq!(m.nearest_slot(30.0), 0);
    }

    #[test]
    fn nearest_slot_ties_break_upward() {
        let m = metrics();
        // Exactly halfway between slot 0 (5.0) and slot 1 (75.0)
        assert_eq!(m.nearest_slot(40.0), 1);
        // Halfway between slot 3 and slot 4
        assert_eq!(m.nearest_slot(250.0), 4);
    }

    #[test]
    fn nearest_slot_clamps_overshoot() {
        let m = metrics();
        assert_eq!(m.nearest_slot(-200.0), 0);
        assert_eq!(m.nearest_slot(1_000.0), 4);
    }

    #[test]
    fn slot_hit_testing() {
        let m = metrics();
        let pill = Rect::from_min_size(Pos2::new(100.0, 100.0), m.pill_size());
        assert_eq!(m.slot_at(pill, Pos2::new(110.0, 120.0)), Some(0));
        assert_eq!(m.slot_at(pill, Pos2::new(100.0 + 5.0 + 3.5 * 70.0, 120.0)), Some(3));
        // Inside the pill but on the inset margin
        assert_eq!(m.slot_at(pill, Pos2::new(102.0, 102.0)), None);
    }

    #[test]
    fn single_slot_pill_is_degenerate_but_valid() {
        let m = PillMetrics::new(1, 70.0, 56.0, 5.0);
        assert_eq!(m.min_offset(), m.max_offset());
        assert_eq!(m.nearest_slot(9_999.0), 0);
    }
}
