//! States domain: ordinary jumps and wall jumps.

use bevy::prelude::*;

use crate::input::InputAction;
use crate::movement::{AccelerationCurve, ProfileKind};
use crate::states::context::sweep_for_wall;
use crate::states::{AttackState, CharacterContext, CharacterState, FallSlideState, FallState};

const CLIP_JUMP: &str = "Jump";
const CLIP_WALL_JUMP: &str = "WallJump";

/// Fixed launch used by wall jumps instead of surface normal and jump force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub direction: Vec2,
    pub force: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JumpState {
    launch: Option<Launch>,
    acceleration_curve: Option<AccelerationCurve>,
    start_time: f32,
}

impl JumpState {
    /// A jump off the current surface. Releasing jump early cuts it short.
    pub fn new() -> Self {
        Self::default()
    }

    /// A jump with a fixed launch. Cannot be cut short.
    pub fn wall_jump(direction: Vec2, force: f32) -> Self {
        Self {
            launch: Some(Launch { direction, force }),
            ..Self::default()
        }
    }

    pub fn with_acceleration_curve(mut self, curve: AccelerationCurve) -> Self {
        self.acceleration_curve = Some(curve);
        self
    }

    pub fn is_wall_jump(&self) -> bool {
        self.launch.is_some()
    }

    pub fn launch(&self) -> Option<Launch> {
        self.launch
    }

    fn cappable(&self) -> bool {
        self.launch.is_none()
    }

    pub(super) fn enter(&mut self, ctx: &mut CharacterContext) {
        ctx.sprite.set_animation(if self.is_wall_jump() {
            CLIP_WALL_JUMP
        } else {
            CLIP_JUMP
        });
        self.start_time = ctx.clock.now;
        ctx.set_physics_profile(ProfileKind::JumpStandard);

        let (direction, force) = match self.launch {
            Some(launch) => (launch.direction, launch.force),
            None => (ctx.surface.surface_normal(), ctx.tuning.jump_force),
        };
        ctx.jump(direction, force);
    }

    pub(super) fn execute(&mut self, ctx: &mut CharacterContext) -> Option<CharacterState> {
        ctx.determine_facing();

        match &self.acceleration_curve {
            Some(curve) => {
                let physics = ctx.motor.physics;
                let scale = curve.evaluate(ctx.clock.now - self.start_time);
                ctx.move_along_surface(physics.speed, physics.acceleration * scale);
            }
            None => ctx.move_with_profile(),
        }

        // Gravity stays off inside the extend window.
        let outside_extend_window = ctx.elapsed(self.start_time, ctx.tuning.jump_extend_time);
        if outside_extend_window {
            ctx.apply_gravity();
        }

        let mut pending = ctx.input.pending();
        while let Some(event) = pending.next() {
            match event.action() {
                InputAction::AttackPressed => return Some(AttackState::default().into()),
                InputAction::JumpReleased if self.cappable() && !outside_extend_window => {
                    ctx.cap_jump_if_rising();
                    return Some(self.fall_state().into());
                }
                InputAction::JumpPressed => {
                    let sweep = &ctx.tuning.wall_sweep;
                    if sweep_for_wall(&*ctx.body, sweep, Vec2::X) {
                        return Some(wall_jump(ctx, Vec2::NEG_X));
                    }
                    if sweep_for_wall(&*ctx.body, sweep, Vec2::NEG_X) {
                        return Some(wall_jump(ctx, Vec2::X));
                    }
                    pending.release(event);
                }
                _ => pending.release(event),
            }
        }

        if ctx.falling() {
            return Some(self.fall_state().into());
        }

        if ctx.surface.unstable() {
            return Some(FallSlideState::default().into());
        }

        None
    }

    pub(super) fn exit(&mut self, _ctx: &mut CharacterContext) {}

    /// Fall that keeps this jump's acceleration curve running from the same
    /// start time.
    fn fall_state(&self) -> FallState {
        match &self.acceleration_curve {
            Some(curve) => {
                FallState::new().with_acceleration_curve(curve.clone(), self.start_time)
            }
            None => FallState::new(),
        }
    }
}

/// Kick off a wall toward `direction`: wall-jump animation, face the kick,
/// trim upward velocity, then a fixed launch along `up + direction`.
pub fn wall_jump(ctx: &mut CharacterContext, direction: Vec2) -> CharacterState {
    ctx.sprite.set_animation(CLIP_WALL_JUMP);
    ctx.sprite.face_towards(direction);
    ctx.cap_jump_if_rising();

    let launch = (Vec2::Y + direction).normalize_or(Vec2::Y);
    debug!("Wall jump toward {:?}", launch);

    JumpState::wall_jump(launch, ctx.tuning.wall_jump_force)
        .with_acceleration_curve(ctx.tuning.wall_jump_acceleration_curve.clone())
        .into()
}
