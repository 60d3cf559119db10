//! Cosmetic spring that eases the drawn gear toward its accumulated rotation.
//!
//! Only the rendered angle goes through here. Gesture and scroll state never
//! read from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Integration sub-step, roughly one 60Hz frame.
const TIMESTEP_SECS: f64 = 0.016;
/// Longer gaps (background tab, debugger pause) are treated as this long.
const MAX_FRAME_SECS: f64 = 0.1;
const REST_VELOCITY: f64 = 0.01;
const REST_DISPLACEMENT: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SpringConfigError {
    #[error("spring stiffness must be a positive finite number")]
    NonPositiveStiffness,
    #[error("spring damping must be a non-negative finite number")]
    NegativeDamping,
    #[error("spring mass must be a positive finite number")]
    NonPositiveMass,
    #[error("spring is too stiff to integrate at a 16ms step")]
    Unstable,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpringConfig")]
pub struct SpringConfig {
    pub stiffness: f64,
    /// Damping coefficient (force per unit velocity), not a ratio.
    pub damping: f64,
    pub mass: f64,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawSpringConfig {
    stiffness: f64,
    damping: f64,
    mass: f64,
}

impl Default for RawSpringConfig {
    fn default() -> Self {
        let d = SpringConfig::default();
        Self {
            stiffness: d.stiffness,
            damping: d.damping,
            mass: d.mass,
        }
    }
}

impl TryFrom<RawSpringConfig> for SpringConfig {
    type Error = SpringConfigError;

    fn try_from(raw: RawSpringConfig) -> Result<Self, Self::Error> {
        SpringConfig::new(raw.stiffness, raw.damping, raw.mass)
    }
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self, SpringConfigError> {
        if !(stiffness > 0.0) || !stiffness.is_finite() {
            return Err(SpringConfigError::NonPositiveStiffness);
        }
        if !(damping >= 0.0) || !damping.is_finite() {
            return Err(SpringConfigError::NegativeDamping);
        }
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(SpringConfigError::NonPositiveMass);
        }
        // Jury condition for semi-implicit Euler at a fixed step:
        // k*h^2/m + 2*c*h/m < 4. With no damping this is sqrt(k/m)*h < 2.
        let h = TIMESTEP_SECS;
        if stiffness * h * h / mass + 2.0 * damping * h / mass >= 4.0 {
            return Err(SpringConfigError::Unstable);
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
        })
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 50.0,
            damping: 20.0,
            mass: 1.0,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct RotationSpring {
    position: f64,
    velocity: f64,
}

impl RotationSpring {
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_at_rest(&self, target: f64) -> bool {
        self.velocity.abs() < REST_VELOCITY && (target - self.position).abs() < REST_DISPLACEMENT
    }

    /// Advances the spring by `dt_secs` toward `target` and returns the new
    /// drawn angle.
    pub fn step(&mut self, target: f64, dt_secs: f64, config: &SpringConfig) -> f64 {
        if self.is_at_rest(target) {
            self.position = target;
            self.velocity = 0.0;
            return self.position;
        }
        let mass = config.mass;
        let mut remaining = dt_secs.clamp(0.0, MAX_FRAME_SECS);
        // semi-implicit Euler: velocity first, then position with the new velocity
        while remaining > 0.0 {
            let h = remaining.min(TIMESTEP_SECS);
            let displacement = self.position - target;
            let force = -config.stiffness * displacement - config.damping * self.velocity;
            self.velocity += force / mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest(target) {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut RotationSpring, target: f64, frames: usize) {
        let cfg = SpringConfig::default();
        for _ in 0..frames {
            spring.step(target, TIMESTEP_SECS, &cfg);
        }
    }

    #[test]
    fn settles_on_target() {
        let mut s = RotationSpring::default();
        run(&mut s, 270.0, 600);
        assert_eq!(s.position(), 270.0);
        assert!(s.is_at_rest(270.0));
    }

    #[test]
    fn moves_toward_target_without_jumping() {
        let mut s = RotationSpring::default();
        let first = s.step(90.0, TIMESTEP_SECS, &SpringConfig::default());
        assert!(first > 0.0 && first < 90.0);
    }

    #[test]
    fn default_spring_does_not_overshoot() {
        let mut s = RotationSpring::default();
        let cfg = SpringConfig::default();
        for _ in 0..600 {
            let p = s.step(100.0, TIMESTEP_SECS, &cfg);
            assert!(p <= 100.0 + 1e-9, "overshot to {p}");
        }
    }

    #[test]
    fn huge_frame_gap_is_capped() {
        let mut a = RotationSpring::default();
        let mut b = RotationSpring::default();
        let cfg = SpringConfig::default();
        a.step(180.0, 30.0, &cfg);
        b.step(180.0, MAX_FRAME_SECS, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn settled_spring_needs_no_more_frames() {
        let mut s = RotationSpring::default();
        run(&mut s, 45.0, 600);
        assert!(s.is_at_rest(45.0));
        // a new target wakes it again
        assert!(!s.is_at_rest(46.0));
    }

    #[test]
    fn unstable_or_energy_adding_springs_are_rejected() {
        assert_eq!(
            SpringConfig::new(20_000.0, 20.0, 1.0),
            Err(SpringConfigError::Unstable)
        );
        assert_eq!(
            SpringConfig::new(50.0, -5.0, 1.0),
            Err(SpringConfigError::NegativeDamping)
        );
        assert_eq!(
            SpringConfig::new(0.0, 20.0, 1.0),
            Err(SpringConfigError::NonPositiveStiffness)
        );
        assert_eq!(
            SpringConfig::new(50.0, 20.0, 0.0),
            Err(SpringConfigError::NonPositiveMass)
        );
        assert_eq!(
            SpringConfig::new(f64::INFINITY, 20.0, 1.0),
            Err(SpringConfigError::NonPositiveStiffness)
        );
    }

    #[test]
    fn accepted_springs_stay_bounded() {
        // stiff but inside the stable region
        let cfg = SpringConfig::new(10_000.0, 0.0, 1.0).expect("stable");
        let mut s = RotationSpring::default();
        for _ in 0..300 {
            let p = s.step(90.0, TIMESTEP_SECS, &cfg);
            assert!(p.is_finite() && p.abs() < 1_000.0, "diverged to {p}");
        }
    }

    #[test]
    fn default_config_is_valid() {
        let d = SpringConfig::default();
        assert_eq!(SpringConfig::new(d.stiffness, d.damping, d.mass), Ok(d));
    }

    #[test]
    fn at_rest_step_is_stable() {
        let mut s = RotationSpring::default();
        assert_eq!(s.step(0.0, TIMESTEP_SECS, &SpringConfig::default()), 0.0);
    }
}
