//! Damped spring for the tab indicator.
//!
//! A mass–spring–damper integrated with fixed sub-steps:
//!
//! ```text
//!   a = (-stiffness * (x - target) - damping * v) / mass
//! ```
//!
//! Retargeting only moves `target`; position and velocity carry over, so a
//! transition interrupted mid-flight continues from where the indicator is.

/// Largest integration step. Frame deltas are split into steps of at most
/// this size so the integrator stays stable at low frame rates.
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Physical parameters of the spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
    /// Distance to target below which the spring may come to rest
    pub rest_displacement: f32,
    /// Speed below which the spring may come to rest
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 120.0,
            damping: 15.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }
}

impl SpringConfig {
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass.max(f32::EPSILON);
        self
    }

    /// Damping ratio ζ. 1.0 is critical, below 1.0 overshoots slightly.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Spring state: one animated scalar.
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// A spring resting at `position`.
    pub fn at_rest(position: f32, config: SpringConfig) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
            target: position,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Point the spring at a new target, keeping position and velocity.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `position` and stop.
    pub fn snap_to(&mut self, position: f32) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
    }

    /// Scale position, velocity and target together (viewport resize).
    pub fn rescale(&mut self, factor: f32) {
        self.position *= factor;
        self.velocity *= factor;
        self.target *= factor;
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() <= self.config.rest_displacement
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advance by `dt` seconds. Returns `true` while still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }

        let SpringConfig {
            mass,
            stiffness,
            damping,
            ..
        } = self.config;

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.position - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            // Semi-implicit Euler: velocity first, then position with the new velocity
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run_until_settled(spring: &mut Spring, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if !spring.step(FRAME) {
                return frame;
            }
        }
        max_frames
    }

    #[test]
    fn test_rest_spring_does_not_move() {
        let mut spring = Spring::at_rest(120.0, SpringConfig::default());
        assert!(spring.is_settled());
        assert!(!spring.step(FRAME));
        assert!((spring.position() - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_converges_to_target() {
        let mut spring = Spring::at_rest(0.0, SpringConfig::default());
        spring.retarget(60.0);
        let frames = run_until_settled(&mut spring, 600);
        assert!(frames < 600, "spring never settled");
        assert_eq!(spring.position(), 60.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_default_params_are_a_damped_oscillator() {
        let cfg = SpringConfig::default();
        let zeta = cfg.damping_ratio();
        assert!(zeta > 0.5 && zeta < 1.0, "unexpected damping ratio {}", zeta);
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut spring = Spring::at_rest(0.0, SpringConfig::default());
        spring.retarget(60.0);
        for _ in 0..5 {
            spring.step(FRAME);
        }
        let pos = spring.position();
        let vel = spring.velocity();
        assert!(vel > 0.0);

        spring.retarget(120.0);
        assert_eq!(spring.position(), pos);
        assert_eq!(spring.velocity(), vel);

        spring.step(FRAME);
        assert!(spring.position() > pos);
    }

    #[test]
    fn test_large_dt_is_stable() {
        let mut spring = Spring::at_rest(0.0, SpringConfig::default());
        spring.retarget(300.0);
        // One huge frame (app was suspended) must not blow up
        spring.step(2.0);
        assert!(spring.position().is_finite());
        assert!((spring.position() - 300.0).abs() < 300.0);
    }

    #[test]
    fn test_rescale() {
        let mut spring = Spring::at_rest(60.0, SpringConfig::default());
        spring.rescale(0.5);
        assert!((spring.position() - 30.0).abs() < 1e-6);
        assert!((spring.target() - 30.0).abs() < 1e-6);
    }
}
