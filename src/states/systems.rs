//! States domain: the per-tick driver.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::AttackVolumes;
use crate::input::{InputBuffer, MovementAxes};
use crate::movement::{AvianBody, Motor, MovementTuning, Player, TerrainProbe};
use crate::sprites::SpriteAnimator;
use crate::states::{
    CharacterContext, CharacterMachine, CharacterStateChanged, Clock, Transition,
};
use crate::surface::SurfaceContacts;

type CharacterQueryData = (
    Entity,
    &'static Position,
    &'static mut LinearVelocity,
    &'static mut Friction,
    &'static SurfaceContacts,
    &'static mut SpriteAnimator,
    &'static mut AttackVolumes,
    &'static mut Motor,
    &'static mut CharacterMachine,
);

/// Step every player's state machine once. Runs between contact priming and
/// release.
#[allow(clippy::too_many_arguments)]
pub(crate) fn tick_character(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    axes: Res<MovementAxes>,
    mut input: ResMut<InputBuffer>,
    probe: TerrainProbe,
    mut changes: MessageWriter<CharacterStateChanged>,
    mut query: Query<CharacterQueryData, With<Player>>,
) {
    let clock = Clock::new(time.elapsed_secs(), time.delta_secs());

    for (
        entity,
        position,
        mut velocity,
        mut friction,
        surface,
        mut sprite,
        mut attacks,
        mut motor,
        mut machine,
    ) in &mut query
    {
        let mut body = AvianBody {
            position: position.0,
            velocity: &mut velocity,
            friction: &mut friction,
            probe: &probe,
        };

        let mut ctx = CharacterContext {
            body: &mut body,
            surface,
            input: &mut input,
            axes: &axes,
            sprite: &mut sprite,
            attacks: &mut attacks,
            motor: &mut motor,
            tuning: &tuning,
            clock,
            previous: machine.previous_kind(),
        };

        if machine.current().is_none() {
            let started = machine.start(&mut ctx);
            report(&mut changes, entity, started);
        }

        if let Some(transition) = machine.tick(&mut ctx) {
            report(&mut changes, entity, transition);
        }
    }
}

fn report(
    changes: &mut MessageWriter<CharacterStateChanged>,
    entity: Entity,
    transition: Transition,
) {
    match transition.from {
        Some(from) => debug!("{:?}: {} -> {}", entity, from, transition.to),
        None => debug!("{:?}: started in {}", entity, transition.to),
    }

    changes.write(CharacterStateChanged {
        entity,
        from: transition.from,
        to: transition.to,
    });
}
