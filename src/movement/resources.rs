//! Movement domain: tuning resources and physics profiles.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::surface::GripAngles;

/// A bundle of physics parameters swapped in as a whole on state entry.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PhysicsProfile {
    /// Vertical acceleration toward `fall_speed`.
    pub gravity: f32,
    /// Terminal downward speed.
    pub fall_speed: f32,
    /// Horizontal acceleration toward `speed`.
    pub acceleration: f32,
    /// Maximum horizontal speed.
    pub speed: f32,
    /// Friction coefficient of the body's material.
    pub friction: f32,
}

/// Which of the configured profiles is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfileKind {
    Grounded,
    #[default]
    JumpStandard,
    JumpGetup,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhysicsProfiles {
    pub grounded: PhysicsProfile,
    pub jump_standard: PhysicsProfile,
    pub jump_getup: PhysicsProfile,
}

impl Default for PhysicsProfiles {
    fn default() -> Self {
        Self {
            grounded: PhysicsProfile {
                gravity: 60.0,
                fall_speed: 20.0,
                acceleration: 60.0,
                speed: 8.0,
                friction: 0.0,
            },
            jump_standard: PhysicsProfile {
                gravity: 45.0,
                fall_speed: 18.0,
                acceleration: 40.0,
                speed: 8.0,
                friction: 0.0,
            },
            jump_getup: PhysicsProfile {
                gravity: 45.0,
                fall_speed: 18.0,
                acceleration: 20.0,
                speed: 6.0,
                friction: 0.0,
            },
        }
    }
}

impl PhysicsProfiles {
    pub fn get(&self, kind: ProfileKind) -> PhysicsProfile {
        match kind {
            ProfileKind::Grounded => self.grounded,
            ProfileKind::JumpStandard => self.jump_standard,
            ProfileKind::JumpGetup => self.jump_getup,
        }
    }
}

/// Piecewise-linear curve of `(time, value)` keys, clamped at both ends.
/// Keys are kept sorted by time, including when loaded from config.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(from = "CurveKeys")]
pub struct AccelerationCurve {
    pub keys: Vec<(f32, f32)>,
}

/// On-disk form of [`AccelerationCurve`], in whatever order the file lists.
#[derive(Deserialize)]
struct CurveKeys {
    keys: Vec<(f32, f32)>,
}

impl From<CurveKeys> for AccelerationCurve {
    fn from(raw: CurveKeys) -> Self {
        Self::new(raw.keys)
    }
}

impl AccelerationCurve {
    pub fn new(keys: impl Into<Vec<(f32, f32)>>) -> Self {
        let mut keys = keys.into();
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    /// Sample the curve. An empty curve evaluates to 1 so it never zeroes
    /// acceleration.
    pub fn evaluate(&self, time: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 1.0;
        };

        if time <= first.0 {
            return first.1;
        }
        if time >= last.0 {
            return last.1;
        }

        for window in self.keys.windows(2) {
            let (t0, v0) = window[0];
            let (t1, v1) = window[1];
            if time <= t1 {
                let span = t1 - t0;
                if span <= f32::EPSILON {
                    return v1;
                }
                return v0 + (v1 - v0) * (time - t0) / span;
            }
        }

        last.1
    }
}

/// Geometry of the multi-ray wall probe.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct WallSweep {
    /// Vertical offset of the probe's center from the body position.
    pub vertical_offset: f32,
    /// Half-height covered by the rays.
    pub span: f32,
    /// Ray length, measured from the body position.
    pub length: f32,
    /// Number of rays.
    pub passes: u32,
}

impl Default for WallSweep {
    fn default() -> Self {
        Self {
            vertical_offset: 0.0,
            span: 0.5,
            length: 0.6,
            passes: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SlopeTuning {
    pub grips: GripAngles,
    /// Scales the downhill acceleration applied while standing on a slope.
    pub slope_factor: f32,
}

impl Default for SlopeTuning {
    fn default() -> Self {
        Self {
            grips: GripAngles::default(),
            slope_factor: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SlideTuning {
    /// Surface-projected speed at or below which a slide ends in a getup.
    pub stand_threshold: f32,
    /// Time after a slide starts before a jump can cancel it.
    pub jump_wait_time: f32,
}

impl Default for SlideTuning {
    fn default() -> Self {
        Self {
            stand_threshold: 0.15,
            jump_wait_time: 0.5,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovementTuning {
    pub jump_force: f32,
    /// Gravity is suspended for this long after a jump starts.
    pub jump_extend_time: f32,
    /// Airborne time tolerated while sliding before switching to a fall.
    pub slide_to_fall_delay: f32,
    pub coyote_time: f32,
    /// Fraction of upward velocity removed when a jump is cut short.
    pub jump_cap_velocity_ratio: f32,
    pub wall_jump_force: f32,
    pub wall_friction: f32,
    pub wall_slide_speed: f32,
    /// How long input must pull away from a wall before letting go.
    pub wall_detach_delay: f32,
    pub wall_jump_acceleration_curve: AccelerationCurve,
    pub wall_sweep: WallSweep,
    /// Minimum alignment between input and a wall normal to count as toward/away.
    pub toward_dot_threshold: f32,
    pub profiles: PhysicsProfiles,
    pub slopes: SlopeTuning,
    pub slide: SlideTuning,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            jump_force: 12.0,
            jump_extend_time: 0.12,
            slide_to_fall_delay: 0.1,
            coyote_time: 0.1,
            jump_cap_velocity_ratio: 0.5,
            wall_jump_force: 14.0,
            wall_friction: 30.0,
            wall_slide_speed: 3.0,
            wall_detach_delay: 0.2,
            wall_jump_acceleration_curve: AccelerationCurve::new([(0.0, 0.1), (0.35, 1.0)]),
            wall_sweep: WallSweep::default(),
            toward_dot_threshold: 0.5,
            profiles: PhysicsProfiles::default(),
            slopes: SlopeTuning::default(),
            slide: SlideTuning::default(),
        }
    }
}
