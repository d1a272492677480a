//! Combat domain: attack directions and their clip names.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    Up,
    Down,
    Left,
    Right,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::Up,
        CardinalDirection::Down,
        CardinalDirection::Left,
        CardinalDirection::Right,
    ];

    /// Snap a vector to its dominant axis. Ties go horizontal. Zero and
    /// non-finite vectors have no direction.
    pub fn from_vector(v: Vec2) -> Option<Self> {
        if !v.is_finite() || v == Vec2::ZERO {
            return None;
        }

        let direction = if v.x.abs() >= v.y.abs() {
            if v.x < 0.0 {
                CardinalDirection::Left
            } else {
                CardinalDirection::Right
            }
        } else if v.y < 0.0 {
            CardinalDirection::Down
        } else {
            CardinalDirection::Up
        };

        Some(direction)
    }

    pub fn to_vec2(self) -> Vec2 {
        match self {
            CardinalDirection::Up => Vec2::Y,
            CardinalDirection::Down => Vec2::NEG_Y,
            CardinalDirection::Left => Vec2::NEG_X,
            CardinalDirection::Right => Vec2::X,
        }
    }

    /// Get the offset vector for volume placement
    pub fn to_offset(self, distance: f32) -> Vec2 {
        self.to_vec2() * distance
    }

    /// Get volume dimensions (width, height) - elongated in attack direction
    pub fn hitbox_size(self, length: f32, width: f32) -> Vec2 {
        match self {
            CardinalDirection::Up | CardinalDirection::Down => Vec2::new(width, length),
            CardinalDirection::Left | CardinalDirection::Right => Vec2::new(length, width),
        }
    }

    /// Grounded clip for an attack this way. Air variants append `Air`.
    pub fn clip(self) -> &'static str {
        match self {
            CardinalDirection::Up => "AttackUp",
            CardinalDirection::Down => "AttackDown",
            CardinalDirection::Left | CardinalDirection::Right => "AttackSide",
        }
    }
}
