//! States domain: airborne descent, coyote jumps, and catching walls.

use bevy::prelude::*;

use crate::input::InputAction;
use crate::movement::AccelerationCurve;
use crate::states::context::sweep_for_wall;
use crate::states::{
    AttackState, CharacterContext, CharacterState, FallSlideState, JumpState, RunState, StateKind,
    WallSlideState, wall_jump,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FallState {
    start_time: f32,
    /// Curve inherited from a jump, keyed on time since `curve_start`.
    acceleration_curve: Option<AccelerationCurve>,
    curve_start: f32,
}

impl FallState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_acceleration_curve(mut self, curve: AccelerationCurve, at_time: f32) -> Self {
        self.acceleration_curve = Some(curve);
        self.curve_start = at_time;
        self
    }

    /// Time the inherited curve is keyed from.
    pub fn curve_start(&self) -> f32 {
        self.curve_start
    }

    pub fn acceleration_curve(&self) -> Option<&AccelerationCurve> {
        self.acceleration_curve.as_ref()
    }

    pub(super) fn enter(&mut self, ctx: &mut CharacterContext) {
        self.start_time = ctx.clock.now;
        ctx.sprite.set_animation("Fall");
    }

    pub(super) fn execute(&mut self, ctx: &mut CharacterContext) -> Option<CharacterState> {
        ctx.apply_gravity();
        ctx.determine_facing();

        match &self.acceleration_curve {
            Some(curve) => {
                let physics = ctx.motor.physics;
                let scale = curve.evaluate(ctx.clock.now - self.curve_start);
                ctx.move_along_surface(physics.speed, physics.acceleration * scale);
            }
            None => ctx.move_with_profile(),
        }

        let coyote = ctx.previous == Some(StateKind::Run)
            && !ctx.elapsed(self.start_time, ctx.tuning.coyote_time);

        let mut pending = ctx.input.pending();
        while let Some(event) = pending.next() {
            match event.action() {
                InputAction::AttackPressed => return Some(AttackState::default().into()),
                InputAction::JumpPressed => {
                    let sweep = &ctx.tuning.wall_sweep;
                    if sweep_for_wall(&*ctx.body, sweep, Vec2::X) {
                        return Some(wall_jump(ctx, Vec2::NEG_X));
                    }
                    if sweep_for_wall(&*ctx.body, sweep, Vec2::NEG_X) {
                        return Some(wall_jump(ctx, Vec2::X));
                    }
                    if coyote {
                        debug!("Coyote jump");
                        return Some(JumpState::new().into());
                    }
                    pending.release(event);
                }
                _ => pending.release(event),
            }
        }

        if ctx.surface.grounded() {
            let moving = ctx.surface_projected_velocity().length_squared() > 0.01;
            ctx.sprite
                .set_animation(if moving { "LandMoving" } else { "LandStationary" });
            return Some(RunState.into());
        }

        if ctx.surface.contacting_wall() {
            let input = ctx.surface_aligned_x_input();
            if !ctx.away_from_wall(input) && ctx.sweep_for_wall(-ctx.surface.wall_normal()) {
                return Some(WallSlideState::default().into());
            }
        }

        if ctx.surface.unstable() {
            return Some(FallSlideState::default().into());
        }

        None
    }

    pub(super) fn exit(&mut self, _ctx: &mut CharacterContext) {}
}
