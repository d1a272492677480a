//! Movement domain: player markers and motor state.

use bevy::prelude::*;

use crate::movement::{PhysicsProfile, PhysicsProfiles, ProfileKind};

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the child entity carrying the player's visible sprite.
#[derive(Component, Debug)]
pub struct PlayerSprite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn to_vec2(self) -> Vec2 {
        match self {
            Facing::Right => Vec2::X,
            Facing::Left => Vec2::NEG_X,
        }
    }

    /// Left if `direction` points left of vertical, right otherwise.
    pub fn from_direction(direction: Vec2) -> Self {
        if direction.dot(Vec2::X) < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

/// The movement parameters currently driving the body.
#[derive(Component, Debug, Clone)]
pub struct Motor {
    pub profile_kind: ProfileKind,
    pub physics: PhysicsProfile,
    pub facing: Facing,
}

impl Motor {
    pub fn new(profiles: &PhysicsProfiles) -> Self {
        let profile_kind = ProfileKind::default();
        Self {
            profile_kind,
            physics: profiles.get(profile_kind),
            facing: Facing::default(),
        }
    }
}
