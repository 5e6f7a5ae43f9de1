//! Spring primitive for the tab selector animations
//!
//! Animation state is UI-only and polled each frame: call `tick(dt)` at
//! the start of the update pass, then read `value()` when painting.
//! There are no callbacks.

use std::f32::consts::TAU;

/// Largest frame delta fed into the integrator. Clamping here keeps a
/// hitching frame from destabilizing the physics.
pub const MAX_FRAME_DT: f32 = 0.05;

/// Spring configuration in response/damping-ratio form
///
/// `response` is the oscillation period in seconds (lower = faster),
/// `damping_ratio` < 1.0 is under-damped (overshoots), 1.0 critically
/// damped. Internally converted to stiffness and a damping coefficient
/// for a unit mass: ω = 2π/response, k = ω², c = 2ζω.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    stiffness: f32,
    damping: f32,
    /// Distance from target below which the spring may snap to rest
    rest_delta: f32,
}

impl SpringParams {
    pub fn from_response(response: f32, damping_ratio: f32) -> Self {
        let omega = TAU / response.max(1e-3);
        Self {
            stiffness: omega * omega,
            damping: 2.0 * damping_ratio * omega,
            rest_delta: 0.05,
        }
    }

    /// Override the rest threshold (small-range springs like scale
    /// factors need a tighter one than pixel offsets)
    pub fn with_rest_delta(mut self, rest_delta: f32) -> Self {
        self.rest_delta = rest_delta;
        self
    }
}

/// Animated f32 value with spring physics
#[derive(Debug, Clone)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    params: SpringParams,
}

impl Spring {
    pub fn new(initial: f32, params: SpringParams) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            params,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Set a new target. Retargeting an in-flight spring keeps the
    /// current velocity, so the motion bends toward the new target
    /// instead of restarting.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Swap spring constants, keeping position and velocity
    pub fn set_params(&mut self, params: SpringParams) {
        self.params = params;
    }

    /// Jump immediately to a value, at rest
    pub fn jump_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Stop where we are: the current position becomes the target.
    /// Used when a drag takes over and the finger owns the position.
    pub fn freeze(&mut self) {
        self.target = self.value;
        self.velocity = 0.0;
    }

    /// True when the spring sits exactly on its target with no motion
    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by one frame. Returns true while still in motion.
    ///
    /// Semi-implicit Euler: stable for our stiffness range given the
    /// dt clamp. Once within the rest window the value snaps exactly
    /// onto the target so callers can compare with `==`.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.is_settled() {
            return false;
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let force =
            self.params.stiffness * (self.target - self.value) - self.params.damping * self.velocity;
        self.velocity += force * dt;
        self.value += self.velocity * dt;

        let resting = (self.target - self.value).abs() < self.params.rest_delta
            && self.velocity.abs() < self.params.rest_delta * 20.0;
        if resting {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide_params() -> SpringParams {
        SpringParams::from_response(0.33, 0.72)
    }

    /// Run at a fixed 120 Hz until the spring rests
    fn settle(spring: &mut Spring) -> usize {
        let mut frames = 0;
        while spring.tick(1.0 / 120.0) {
            frames += 1;
            assert!(frames < 10_000, "spring failed to settle");
        }
        frames
    }

    #[test]
    fn converges_exactly_onto_target() {
        let mut spring = Spring::new(5.0, slide_params());
        spring.set_target(215.0);
        settle(&mut spring);
        assert_eq!(spring.value(), 215.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn settled_tick_is_a_no_op() {
        let mut spring = Spring::new(145.0, slide_params());
        assert!(!spring.tick(1.0 / 60.0));
        assert_eq!(spring.value(), 145.0);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let mut spring = Spring::new(0.0, slide_params());
        spring.set_target(70.0);
        let mut max_seen = 0.0f32;
        while spring.tick(1.0 / 120.0) {
            max_seen = max_seen.max(spring.value());
        }
        assert!(max_seen > 70.0, "damping ratio 0.72 should overshoot");
        assert_eq!(spring.value(), 70.0);
    }

    #[test]
    fn retarget_keeps_velocity() {
        let mut spring = Spring::new(0.0, slide_params());
        spring.set_target(140.0);
        for _ in 0..6 {
            spring.tick(1.0 / 120.0);
        }
        let moving = spring.value();
        assert!(moving > 0.0);

        // Interrupting with a new target must not restart from rest
        spring.set_target(70.0);
        assert!(spring.value() == moving);
        settle(&mut spring);
        assert_eq!(spring.value(), 70.0);
    }

    #[test]
    fn freeze_stops_in_place() {
        let mut spring = Spring::new(0.0, slide_params());
        spring.set_target(140.0);
        for _ in 0..6 {
            spring.tick(1.0 / 120.0);
        }
        let here = spring.value();
        spring.freeze();
        assert!(spring.is_settled());
        assert_eq!(spring.value(), here);
        assert!(!spring.tick(1.0 / 60.0));
    }

    #[test]
    fn huge_frame_delta_is_clamped() {
        let mut spring = Spring::new(0.0, slide_params());
        spring.set_target(70.0);
        // A 2 second hitch must not explode the integration
        spring.tick(2.0);
        assert!(spring.value().is_finite());
        assert!(spring.value().abs() < 500.0);
        settle(&mut spring);
        assert_eq!(spring.value(), 70.0);
    }
}
