//! States domain: grounded locomotion.

use bevy::prelude::*;

use crate::input::InputAction;
use crate::movement::ProfileKind;
use crate::sprites::{CLIP_RUN, LocomotionParams};
use crate::states::{
    AttackState, CharacterContext, CharacterState, FallSlideState, FallState, JumpState,
};

const CLIP_RUN_DIFFICULT: &str = "RunDifficult";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunState;

impl RunState {
    pub(super) fn enter(&mut self, ctx: &mut CharacterContext) {
        ctx.set_physics_profile(ProfileKind::Grounded);
    }

    pub(super) fn execute(&mut self, ctx: &mut CharacterContext) -> Option<CharacterState> {
        ctx.move_with_profile();
        ctx.apply_gravity();
        ctx.determine_facing();
        ctx.sprite.align_with(ctx.surface.surface_normal());

        if ctx.surface.airborne() {
            return Some(FallState::new().into());
        }

        if ctx.surface.unstable() {
            if ctx.sprite.is_playing(CLIP_RUN) {
                ctx.sprite.set_animation(CLIP_RUN_DIFFICULT);
                ctx.sprite.set_speed(1.0);
            }

            let velocity = ctx.surface_projected_velocity();
            let input = ctx.axes.movement_horizontal;

            // Slip when the slope beats our grip and we either let go of the
            // stick or are being dragged against it.
            let above_threshold =
                ctx.surface.surface_angle() > ctx.surface.slope_angle_threshold();
            let no_input = input.length() <= 0.01;
            let moving_backwards =
                velocity.normalize_or_zero().dot(input.normalize_or_zero()) < 0.0;

            if above_threshold && (no_input || moving_backwards) {
                return Some(FallSlideState::default().into());
            }
        } else {
            let velocity = ctx.surface_projected_velocity();
            let input = ctx.surface_aligned_x_input();
            let moving_intentionally =
                input.length_squared() > 0.01 && velocity.length_squared() > 0.01;

            if ctx.sprite.is_playing(CLIP_RUN_DIFFICULT) {
                ctx.sprite.set_animation(CLIP_RUN);
            }

            let pushing = ctx.toward_wall(input);
            ctx.sprite.set_params(LocomotionParams {
                moving_intentionally,
                pushing,
            });

            // Scale the run cycle with how fast we actually move along input.
            if ctx.sprite.is_playing(CLIP_RUN) {
                let aligned = velocity.normalize_or_zero().dot(input) > 0.0;
                let speed = if aligned { velocity.length() } else { 0.0 };
                ctx.sprite.set_speed(speed.clamp(0.0, 1.0));
            } else {
                ctx.sprite.set_speed(1.0);
            }
        }

        let mut pending = ctx.input.pending();
        while let Some(event) = pending.next() {
            match event.action() {
                InputAction::JumpPressed => {
                    debug!("Run: jump");
                    return Some(JumpState::new().into());
                }
                InputAction::AttackPressed => return Some(AttackState::default().into()),
                _ => pending.release(event),
            }
        }

        None
    }

    pub(super) fn exit(&mut self, ctx: &mut CharacterContext) {
        ctx.sprite.set_speed(1.0);
        ctx.sprite.reset_alignment();
    }
}
