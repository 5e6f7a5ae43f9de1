//! Animation driver for the tab selector
//!
//! Owns the slide spring (indicator position) and the chrome spring
//! (indicator capsule scale) and advances both once per frame. The
//! widget keeps requesting repaints only while `tick` reports motion,
//! so an idle pill costs nothing.

use super::indicator::IndicatorMotion;
use super::spring::{Spring, SpringParams};

/// Spring timing constants, exposed as configuration on the widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Slide spring period in seconds
    pub slide_response: f32,
    /// Slide damping ratio (< 1.0: settles with a slight overshoot)
    pub slide_damping: f32,
    /// Fast spring used for the tap bounce
    pub pulse_response: f32,
    /// Spring used to settle the chrome back to rest
    pub settle_response: f32,
    pub chrome_damping: f32,
    /// Scale the capsule bounces to on tap
    pub pulse_scale: f32,
    /// Scale the capsule holds while a drag is active
    pub drag_scale: f32,
    /// Seconds the tap bounce is held before relaxing
    pub pulse_hold: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            slide_response: 0.33,
            slide_damping: 0.72,
            pulse_response: 0.18,
            settle_response: 0.22,
            chrome_damping: 0.6,
            pulse_scale: 1.05,
            drag_scale: 1.04,
            pulse_hold: 0.13,
        }
    }
}

impl AnimationConfig {
    fn slide_params(&self) -> SpringParams {
        SpringParams::from_response(self.slide_response, self.slide_damping)
    }

    fn pulse_params(&self) -> SpringParams {
        SpringParams::from_response(self.pulse_response, self.chrome_damping).with_rest_delta(5e-4)
    }

    fn settle_params(&self) -> SpringParams {
        SpringParams::from_response(self.settle_response, self.chrome_damping).with_rest_delta(5e-4)
    }
}

/// Drives `IndicatorMotion` between commits
pub struct PillAnimator {
    config: AnimationConfig,
    slide: Spring,
    chrome: Spring,
    /// Countdown until a tap bounce relaxes, in tick time
    pulse_hold: Option<f32>,
}

impl PillAnimator {
    pub fn new(config: AnimationConfig, initial_offset: f32) -> Self {
        let slide = Spring::new(initial_offset, config.slide_params());
        let chrome = Spring::new(1.0, config.settle_params());
        Self {
            config,
            slide,
            chrome,
            pulse_hold: None,
        }
    }

    /// Slide the indicator to a committed offset. Retargets any
    /// in-flight motion; a no-op when already settled on the target.
    pub fn animate_to(&mut self, offset: f32) {
        if self.slide.is_settled() && self.slide.value() == offset {
            return;
        }
        self.slide.set_target(offset);
    }

    /// Target the slide spring is converging to
    pub fn slide_target(&self) -> f32 {
        self.slide.target()
    }

    /// The finger took over: stop the slide where it is so the drag
    /// delta applies on top of a stationary base.
    pub fn freeze_slide(&mut self) {
        self.slide.freeze();
    }

    /// Tap feedback: bounce the capsule up, hold briefly, relax
    pub fn pulse(&mut self) {
        self.chrome.set_params(self.config.pulse_params());
        self.chrome.set_target(self.config.pulse_scale);
        self.pulse_hold = Some(self.config.pulse_hold);
    }

    /// Drag feedback: grow the capsule and hold it for the gesture
    pub fn drag_start(&mut self) {
        self.pulse_hold = None;
        self.chrome.set_params(self.config.settle_params());
        self.chrome.set_target(self.config.drag_scale);
    }

    /// Drag over: relax the capsule back to rest
    pub fn drag_end(&mut self) {
        self.pulse_hold = None;
        self.chrome.set_params(self.config.settle_params());
        self.chrome.set_target(1.0);
    }

    /// Advance one frame and write the results into `motion`.
    /// Returns true while anything is still moving.
    pub fn tick(&mut self, dt: f32, motion: &mut IndicatorMotion) -> bool {
        if let Some(hold) = &mut self.pulse_hold {
            *hold -= dt;
            if *hold <= 0.0 {
                self.pulse_hold = None;
                self.chrome.set_params(self.config.settle_params());
                self.chrome.set_target(1.0);
            }
        }

        let slide_moving = self.slide.tick(dt);
        let chrome_moving = self.chrome.tick(dt);

        motion.settled_offset = self.slide.value();
        motion.chrome_scale = self.chrome.value();

        slide_moving || chrome_moving || self.pulse_hold.is_some()
    }
}
