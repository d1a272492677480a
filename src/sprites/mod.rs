//! Sprites domain: the character's animation sink.
//!
//! This module handles:
//! - Loading the clip manifest from JSON
//! - Clip playback, follow-ups and locomotion resolution
//! - Mirroring facing and surface alignment onto the sprite

mod animation;
mod manifest;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::{
    AnimationError, CLIP_PUSH, CLIP_RUN, CLIP_STAND, ClipDef, LocomotionParams, SpriteAnimator,
};
pub use manifest::{AnimationManifest, MANIFEST_PATH, ManifestError};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationManifest>()
            .add_systems(Startup, manifest::load_animation_manifest)
            .add_systems(
                Update,
                (
                    animation::advance_animations,
                    animation::sync_sprite_visuals,
                )
                    .chain(),
            );
    }
}
