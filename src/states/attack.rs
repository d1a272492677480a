//! States domain: a directional attack.

use bevy::prelude::*;

use crate::combat::CardinalDirection;
use crate::states::{CharacterContext, CharacterState, FallState, RunState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttackState {
    direction: Option<CardinalDirection>,
    start_time: f32,
    duration: f32,
}

impl AttackState {
    /// Direction chosen on entry. `None` if the attack was aborted.
    pub fn direction(&self) -> Option<CardinalDirection> {
        self.direction
    }

    pub(super) fn enter(&mut self, ctx: &mut CharacterContext) {
        // Without meaningful input, attack the way we face.
        let mut aim = ctx.axes.movement;
        if aim.length_squared() < 0.01 {
            aim = ctx.motor.facing.to_vec2();
        }

        let Some(direction) = CardinalDirection::from_vector(aim) else {
            warn!("Unusable attack direction: {:?}", aim);
            return;
        };

        let mut clip = direction.clip().to_string();
        if ctx.surface.airborne() {
            clip.push_str("Air");
        } else if direction == CardinalDirection::Down {
            // No down attacks from the ground
            return;
        }

        ctx.attacks.activate(direction);
        ctx.sprite.set_animation(&clip);
        self.direction = Some(direction);
        self.duration = ctx.sprite.clip_length(&clip).unwrap_or_default();
        self.start_time = ctx.clock.now;
        debug!("Attack {:?} ({})", direction, clip);
    }

    pub(super) fn execute(&mut self, ctx: &mut CharacterContext) -> Option<CharacterState> {
        ctx.apply_gravity();

        if ctx.elapsed(self.start_time, self.duration) {
            return Some(if ctx.surface.grounded() {
                RunState.into()
            } else {
                FallState::new().into()
            });
        }

        None
    }

    pub(super) fn exit(&mut self, ctx: &mut CharacterContext) {
        ctx.attacks.deactivate();
        ctx.sprite
            .set_animation(if ctx.surface.grounded() { "Run" } else { "Fall" });
    }
}
