//! States domain: recovering from a slide, by standing or by jumping.

use crate::movement::ProfileKind;
use crate::states::{CharacterContext, CharacterState, FallSlideState, FallState, RunState};

const CLIP_GETUP: &str = "Getup";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetupStandState {
    start_time: f32,
    duration: f32,
}

impl GetupStandState {
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub(super) fn enter(&mut self, ctx: &mut CharacterContext) {
        self.start_time = ctx.clock.now;
        ctx.sprite.set_animation(CLIP_GETUP);
        self.duration = ctx.sprite.clip_length(CLIP_GETUP).unwrap_or_default();
        ctx.set_physics_profile(ProfileKind::Grounded);
    }

    pub(super) fn execute(&mut self, ctx: &mut CharacterContext) -> Option<CharacterState> {
        ctx.apply_gravity();
        ctx.sprite.align_with(ctx.surface.surface_normal());

        if ctx.falling() {
            return Some(FallState::new().into());
        }

        if ctx.surface.unstable() {
            return Some(FallSlideState::default().into());
        }

        if ctx.elapsed(self.start_time, self.duration) {
            ctx.sprite.set_animation("Stand");
            return Some(RunState.into());
        }

        None
    }

    pub(super) fn exit(&mut self, ctx: &mut CharacterContext) {
        ctx.sprite.reset_alignment();
    }
}

/// Jumping out of a slide. Only lands back in a slide when moving down, so
/// the launch can clear the slope it started on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetupJumpState;

impl GetupJumpState {
    pub(super) fn enter(&mut self, ctx: &mut CharacterContext) {
        ctx.set_physics_profile(ProfileKind::JumpGetup);
        ctx.jump(ctx.surface.surface_normal(), ctx.tuning.jump_force);
        ctx.sprite.set_animation("Jump");
    }

    pub(super) fn execute(&mut self, ctx: &mut CharacterContext) -> Option<CharacterState> {
        ctx.move_with_profile();
        ctx.apply_gravity();

        if ctx.falling() {
            ctx.set_physics_profile(ProfileKind::JumpGetup);
            return Some(FallState::new().into());
        }

        if ctx.surface.unstable() && ctx.velocity().y < 0.0 {
            return Some(FallSlideState::default().into());
        }

        None
    }

    pub(super) fn exit(&mut self, _ctx: &mut CharacterContext) {}
}
