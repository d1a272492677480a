//! States domain: everything a state may touch during one tick, plus the motor
//! operations built on top of it.

use bevy::prelude::*;

use crate::combat::AttackVolumes;
use crate::input::{InputBuffer, MovementAxes};
use crate::movement::{CharacterBody, Facing, Motor, MovementTuning, ProfileKind, WallSweep};
use crate::sprites::SpriteAnimator;
use crate::states::StateKind;
use crate::surface::SurfaceContacts;

/// Squared magnitude under which input or velocity counts as none.
const NEGLIGIBLE_SQ: f32 = 0.01;

/// Time at the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Clock {
    /// Seconds since startup.
    pub now: f32,
    /// Length of this tick.
    pub dt: f32,
}

impl Clock {
    pub fn new(now: f32, dt: f32) -> Self {
        Self { now, dt }
    }

    /// Strictly more than `duration` has passed since `since`.
    pub fn elapsed(&self, since: f32, duration: f32) -> bool {
        self.now - since > duration
    }
}

pub struct CharacterContext<'a> {
    pub body: &'a mut dyn CharacterBody,
    pub surface: &'a SurfaceContacts,
    pub input: &'a mut InputBuffer,
    pub axes: &'a MovementAxes,
    pub sprite: &'a mut SpriteAnimator,
    pub attacks: &'a mut AttackVolumes,
    pub motor: &'a mut Motor,
    pub tuning: &'a MovementTuning,
    pub clock: Clock,
    /// Kind of the state that preceded the current one.
    pub previous: Option<StateKind>,
}

impl CharacterContext<'_> {
    pub fn elapsed(&self, since: f32, duration: f32) -> bool {
        self.clock.elapsed(since, duration)
    }

    /// Swap in one of the configured profiles, material included.
    pub fn set_physics_profile(&mut self, kind: ProfileKind) {
        let profile = self.tuning.profiles.get(kind);
        self.motor.profile_kind = kind;
        self.motor.physics = profile;
        self.body.set_physics_profile(&profile);
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity()
    }

    /// Airborne and moving down.
    pub fn falling(&self) -> bool {
        self.surface.airborne() && self.body.velocity().y < 0.0
    }

    /// Horizontal input laid along the current surface.
    pub fn surface_aligned_x_input(&self) -> Vec2 {
        self.surface.align(self.axes.movement_horizontal)
    }

    pub fn surface_projected_velocity(&self) -> Vec2 {
        self.surface.project(self.body.velocity())
    }

    /// Launch along `direction`, cancelling any downward velocity first.
    pub fn jump(&mut self, direction: Vec2, force: f32) {
        let anti_gravity = (-self.body.velocity().y).max(0.0) * Vec2::Y;
        self.body.apply_impulse(direction * force + anti_gravity);
    }

    /// Shave a fraction off upward velocity. No-op while falling.
    pub fn cap_jump_if_rising(&mut self) {
        if self.falling() {
            return;
        }

        let velocity_y = self.body.velocity().y;
        self.body
            .apply_impulse(Vec2::NEG_Y * velocity_y * self.tuning.jump_cap_velocity_ratio);
    }

    /// Accelerate along the surface toward `speed` in the input direction,
    /// adding slope pull.
    pub fn move_along_surface(&mut self, speed: f32, acceleration: f32) {
        let input = self.surface_aligned_x_input();
        let velocity = self.surface_projected_velocity();

        let delta = input * speed - velocity;
        let movement = delta.clamp_length_max(acceleration * self.clock.dt);
        let slope = self.slope_acceleration();

        self.body.apply_impulse(movement + slope);
    }

    /// [`move_along_surface`](Self::move_along_surface) with the active profile.
    pub fn move_with_profile(&mut self) {
        let physics = self.motor.physics;
        self.move_along_surface(physics.speed, physics.acceleration);
    }

    /// Pull vertical velocity toward terminal fall speed.
    pub fn apply_gravity(&mut self) {
        let physics = self.motor.physics;
        let desired = Vec2::NEG_Y * physics.fall_speed;
        let delta = desired - Vec2::new(0.0, self.body.velocity().y);

        let force = delta.clamp_length_max(physics.gravity * self.clock.dt);
        self.body.apply_impulse(force);
    }

    /// Slow a wall slide toward the slide speed while pressing into the wall.
    pub fn apply_wall_friction(&mut self) {
        let desired = Vec2::NEG_Y * self.tuning.wall_slide_speed;
        let wall_magnetism = -self.surface.wall_normal();
        let delta = desired + wall_magnetism - Vec2::new(0.0, self.body.velocity().y);

        let force = delta.clamp_length_max(self.tuning.wall_friction * self.clock.dt);
        self.body.apply_impulse(force);
    }

    /// Turn around only when input and surface velocity agree.
    pub fn determine_facing(&mut self) {
        let input = self.surface_aligned_x_input();
        let velocity = self.surface_projected_velocity();

        if velocity.length_squared() < NEGLIGIBLE_SQ || input.length_squared() < NEGLIGIBLE_SQ {
            return;
        }

        if input.normalize().dot(velocity.normalize()) <= 0.0 {
            return;
        }

        self.motor.facing = Facing::from_direction(velocity);
        self.sprite.face_towards(self.motor.facing.to_vec2());
    }

    pub fn determine_facing_on_wall(&mut self) {
        if !self.surface.contacting_wall() {
            return;
        }

        self.sprite.face_towards(self.surface.wall_normal());
    }

    pub fn sweep_for_wall(&self, direction: Vec2) -> bool {
        sweep_for_wall(&*self.body, &self.tuning.wall_sweep, direction)
    }

    /// `v` points into the wall we are touching.
    pub fn toward_wall(&self, v: Vec2) -> bool {
        self.wall_alignment(v)
            .is_some_and(|align| align < -self.tuning.toward_dot_threshold)
    }

    /// `v` points out of the wall we are touching.
    pub fn away_from_wall(&self, v: Vec2) -> bool {
        self.wall_alignment(v)
            .is_some_and(|align| align > self.tuning.toward_dot_threshold)
    }

    fn wall_alignment(&self, v: Vec2) -> Option<f32> {
        if !self.surface.contacting_wall() || v.length_squared() <= NEGLIGIBLE_SQ {
            return None;
        }
        Some(v.normalize().dot(self.surface.wall_normal()))
    }

    /// Downhill pull proportional to how steep the slope is relative to its
    /// grip angle.
    fn slope_acceleration(&self) -> Vec2 {
        let on_slope = !self.surface.airborne() && self.surface.surface_angle() > 0.0;
        let threshold = self.surface.slope_angle_threshold();
        if !on_slope || threshold <= 0.0 {
            return Vec2::ZERO;
        }

        let normal = self.surface.surface_normal().extend(0.0);
        let sideways = Vec3::NEG_Y.cross(normal);
        let downhill = normal.cross(sideways).truncate();

        let steepness = self.surface.surface_angle() / threshold;
        downhill * self.tuning.slopes.slope_factor * steepness * self.clock.dt
    }
}

/// Cast `passes` parallel rays along `direction`, spread over the sweep span.
/// True only if every ray hits a surface that allows wall sliding.
pub fn sweep_for_wall(body: &dyn CharacterBody, sweep: &WallSweep, direction: Vec2) -> bool {
    let offset = body.position() + Vec2::Y * sweep.vertical_offset;
    let span = Vec2::Y * sweep.span;
    let step = Vec2::NEG_Y * (sweep.span * 2.0 / sweep.passes.max(1) as f32);

    (0..sweep.passes).all(|pass| {
        let origin = offset + span + step * pass as f32;
        body.cast_ray(origin, direction, sweep.length)
            .is_some_and(|hit| !hit.surface.disallow_wall_slide)
    })
}

