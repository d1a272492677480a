//! States domain: sliding down ground too steep to stand on.

use bevy::prelude::*;

use crate::input::InputAction;
use crate::movement::ProfileKind;
use crate::states::{CharacterContext, CharacterState, FallState, GetupJumpState, GetupStandState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallSlideState {
    start_time: f32,
    time_of_last_ground: f32,
}

impl FallSlideState {
    pub(super) fn enter(&mut self, ctx: &mut CharacterContext) {
        self.start_time = ctx.clock.now;
        self.time_of_last_ground = ctx.clock.now;
        ctx.sprite.set_animation("Slide");
        ctx.set_physics_profile(ProfileKind::Grounded);
    }

    pub(super) fn execute(&mut self, ctx: &mut CharacterContext) -> Option<CharacterState> {
        ctx.apply_gravity();

        if ctx.surface.contacting_surface() {
            ctx.sprite.align_with(ctx.surface.surface_normal());
            self.time_of_last_ground = ctx.clock.now;
        }

        // Stand up once we stop moving relative to the ground.
        let speed = ctx.surface_projected_velocity().length();
        trace!("Sliding at {:.3} m/s", speed);
        if speed <= ctx.tuning.slide.stand_threshold && ctx.surface.grounded() {
            return Some(GetupStandState::default().into());
        }

        if ctx.elapsed(self.start_time, ctx.tuning.slide.jump_wait_time) {
            let mut pending = ctx.input.pending();
            while let Some(event) = pending.next() {
                if event.action() == InputAction::JumpPressed {
                    return Some(GetupJumpState.into());
                }
                pending.release(event);
            }
        }

        // A short grace period keeps steep bumpy ground from flickering
        // between slide and fall.
        if ctx.surface.airborne()
            && ctx.elapsed(self.time_of_last_ground, ctx.tuning.slide_to_fall_delay)
        {
            return Some(FallState::new().into());
        }

        None
    }

    pub(super) fn exit(&mut self, _ctx: &mut CharacterContext) {}
}
