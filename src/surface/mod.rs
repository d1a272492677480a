//! Surface domain: surface metadata and per-tick contact classification.

mod components;
mod contacts;
pub(crate) mod systems;
#[cfg(test)]
mod tests;

pub use components::{GameLayer, Grip, GripAngles, Surface};
pub use contacts::{
    CEIL_THRESHOLD, FLOOR_THRESHOLD, SurfaceContacts, project_on_plane,
    project_on_plane_rescaled,
};

use bevy::prelude::*;

pub struct SurfacePlugin;

impl Plugin for SurfacePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Surface>()
            .register_type::<Grip>()
            .register_type::<GripAngles>();
    }
}
