//! Combat domain: attack volume components and tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::CardinalDirection;

/// Which of the owner's attack volumes is live.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackVolumes {
    active: Option<CardinalDirection>,
}

impl AttackVolumes {
    pub fn activate(&mut self, direction: CardinalDirection) {
        self.active = Some(direction);
    }

    pub fn deactivate(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<CardinalDirection> {
        self.active
    }

    pub fn is_active(&self, direction: CardinalDirection) -> bool {
        self.active == Some(direction)
    }
}

/// One directional hitbox. Knocks each body back at most once per activation.
#[derive(Component, Debug)]
pub struct AttackVolume {
    pub owner: Entity,
    pub direction: CardinalDirection,
    pub hit_force: f32,
    pub hit_entities: Vec<Entity>,
}

impl AttackVolume {
    pub fn new(owner: Entity, direction: CardinalDirection, hit_force: f32) -> Self {
        Self {
            owner,
            direction,
            hit_force,
            hit_entities: Vec::new(),
        }
    }

    /// Record a hit on `target`. False for the owner and for anything already
    /// hit during this activation.
    pub fn register_hit(&mut self, target: Entity) -> bool {
        if target == self.owner || self.hit_entities.contains(&target) {
            return false;
        }
        self.hit_entities.push(target);
        true
    }

    pub fn reset_hits(&mut self) {
        self.hit_entities.clear();
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AttackTuning {
    /// Impulse magnitude applied to struck bodies.
    pub hit_force: f32,
    /// Distance from the owner's center to each volume's center.
    pub reach: f32,
    /// Extent of a volume along its attack direction.
    pub length: f32,
    /// Extent of a volume across its attack direction.
    pub width: f32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            hit_force: 6.0,
            reach: 0.75,
            length: 0.7,
            width: 1.0,
        }
    }
}

/// Impulse pushing `target` away from `owner`. Coincident positions push
/// along `fallback`.
pub fn knockback_impulse(owner: Vec2, target: Vec2, force: f32, fallback: Vec2) -> Vec2 {
    let direction = (target - owner).try_normalize().unwrap_or(fallback);
    direction * force
}
