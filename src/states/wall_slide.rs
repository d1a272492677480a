//! States domain: sliding down a wall.

use crate::input::InputAction;
use crate::states::{
    CharacterContext, CharacterState, FallSlideState, FallState, RunState, wall_jump,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallSlideState {
    /// How long input has been held away from the wall without a break.
    detach_hold_time: f32,
}

impl WallSlideState {
    pub fn detach_hold_time(&self) -> f32 {
        self.detach_hold_time
    }

    pub(super) fn enter(&mut self, ctx: &mut CharacterContext) {
        ctx.sprite.set_animation("WallSlide");
        ctx.sprite.reset_alignment();
    }

    pub(super) fn execute(&mut self, ctx: &mut CharacterContext) -> Option<CharacterState> {
        ctx.apply_gravity();
        ctx.apply_wall_friction();
        ctx.determine_facing_on_wall();

        if !ctx.surface.contacting_wall() || !ctx.sweep_for_wall(-ctx.surface.wall_normal()) {
            return Some(FallState::new().into());
        }

        if ctx.surface.grounded() {
            ctx.sprite.set_animation("LandStationary");
            return Some(RunState.into());
        }

        if ctx.surface.unstable() {
            return Some(FallSlideState::default().into());
        }

        let mut pending = ctx.input.pending();
        while let Some(event) = pending.next() {
            if event.action() == InputAction::JumpPressed {
                let normal = ctx.surface.wall_normal();
                return Some(wall_jump(ctx, normal));
            }
            pending.release(event);
        }

        // Detaching takes a sustained pull so a late jump press still lands
        // as a wall jump.
        let input = ctx.surface_aligned_x_input();
        if ctx.away_from_wall(input) {
            self.detach_hold_time += ctx.clock.dt;
        } else {
            self.detach_hold_time = 0.0;
        }

        if self.detach_hold_time > ctx.tuning.wall_detach_delay {
            return Some(FallState::new().into());
        }

        None
    }

    pub(super) fn exit(&mut self, _ctx: &mut CharacterContext) {}
}
