//! Combat domain: directional attack volumes and knockback hitboxes.

mod attacks;
mod components;
pub(crate) mod systems;

pub use attacks::CardinalDirection;
pub use components::{AttackTuning, AttackVolume, AttackVolumes, knockback_impulse};

use bevy::prelude::*;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackTuning>()
            .add_systems(Update, systems::apply_attack_knockback);
    }
}
