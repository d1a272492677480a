//! Surface domain: per-collider surface metadata and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Static level geometry (floors, slopes, walls)
    Terrain,
    /// Player character
    Player,
    /// Loose dynamic bodies that attacks can knock around
    Prop,
    /// Player attack volumes
    PlayerHitbox,
}

/// How steep a surface may get before the character starts sliding off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum Grip {
    #[default]
    Default,
    Slippery,
    Grippy,
    InstantSlide,
}

/// Maximum standable slope (degrees) for each grip class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct GripAngles {
    pub default: f32,
    pub slippery: f32,
    pub grippy: f32,
}

impl Default for GripAngles {
    fn default() -> Self {
        Self {
            default: 30.0,
            slippery: 20.0,
            grippy: 45.0,
        }
    }
}

impl GripAngles {
    /// The slope angle (degrees) at which a surface of this grip stops being standable.
    pub fn fall_angle(&self, grip: Grip) -> f32 {
        match grip {
            Grip::Default => self.default,
            Grip::Slippery => self.slippery,
            Grip::Grippy => self.grippy,
            Grip::InstantSlide => 90.0,
        }
    }
}

/// Surface metadata attached to a collider. Colliders without one behave like
/// `Surface::default()`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct Surface {
    pub grip: Grip,
    /// The character never registers ground or wall contact with this collider.
    pub ignore_contacts: bool,
    /// Wall sweeps fail against this collider.
    pub disallow_wall_slide: bool,
}

impl Surface {
    pub fn with_grip(grip: Grip) -> Self {
        Self {
            grip,
            ..default()
        }
    }
}
