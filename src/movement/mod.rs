//! Movement domain: the player body, its tuning, and the physics contract.

mod body;
pub(crate) mod bootstrap;
mod components;
mod resources;

pub use body::{AvianBody, CharacterBody, SurfaceHit, TerrainProbe};
pub use components::{Facing, Motor, Player, PlayerSprite};
pub use resources::{
    AccelerationCurve, MovementTuning, PhysicsProfile, PhysicsProfiles, ProfileKind,
    SlideTuning, SlopeTuning, WallSweep,
};

use bevy::prelude::*;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            // Config and manifest load during Startup; spawn once both are in.
            .add_systems(PostStartup, bootstrap::spawn_player);
    }
}
