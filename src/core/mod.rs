//! Core domain: the fixed-tick pipeline and the camera.
//!
//! Every fixed tick runs, in order: contact reporting and priming, input
//! priming, the character state machine, attack volume sync, and contact
//! release. Physics steps afterwards in `FixedPostUpdate`.

mod systems;

use bevy::prelude::*;

use crate::combat;
use crate::input;
use crate::states;
use crate::surface;

/// Orthographic pixels per world meter.
pub const PIXELS_PER_METER: f32 = 48.0;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CharacterSet {
    /// Contacts and input are aggregated for the tick.
    Sense,
    /// The state machine runs.
    Act,
    /// Per-tick aggregates are cleared.
    Release,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (CharacterSet::Sense, CharacterSet::Act, CharacterSet::Release).chain(),
        )
        .add_systems(
            FixedUpdate,
            (
                surface::systems::report_contacts,
                surface::systems::prime_contacts,
                input::systems::prime_input_buffer,
            )
                .chain()
                .in_set(CharacterSet::Sense),
        )
        .add_systems(
            FixedUpdate,
            (
                states::systems::tick_character,
                combat::systems::sync_attack_volumes,
            )
                .chain()
                .in_set(CharacterSet::Act),
        )
        .add_systems(
            FixedUpdate,
            surface::systems::release_contacts.in_set(CharacterSet::Release),
        )
        .add_systems(Startup, systems::setup_camera);
    }
}
